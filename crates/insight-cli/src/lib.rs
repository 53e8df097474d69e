//! Library surface of the CLI crate; the binary wires these together.

pub mod logging;
