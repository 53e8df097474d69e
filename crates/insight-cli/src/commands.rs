use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result, bail};
use tracing::info;

use insight_chart::select_charts;
use insight_core::{Sample, Session};
use insight_profile::{profile, summarize};
use insight_report::{render_summary, to_delimited, to_json_records};
use insight_view::{FilterSpec, ViewFilter, apply_view};

use crate::cli::IngestArgs;
use crate::summary::print_samples;
use crate::types::IngestReport;

pub fn run_ingest(args: &IngestArgs) -> Result<IngestReport> {
    let mut session = Session::new();
    let source = match (&args.input, &args.sample) {
        (_, Some(name)) => {
            let sample = Sample::from_name(name).with_context(|| {
                format!("unknown sample {name:?}; run `insight samples` to list them")
            })?;
            session.load_sample(sample)?;
            sample.name().to_string()
        }
        (Some(path), None) => {
            let bytes =
                fs::read(path).with_context(|| format!("read input: {}", path.display()))?;
            session.load_bytes(&bytes)?;
            path.display().to_string()
        }
        (None, None) => bail!("an input file or --sample is required"),
    };
    let format = session.format().context("format recorded after load")?;
    let dataset = session.dataset().context("dataset present after load")?.clone();

    let view_filter = build_view(args)?;
    let view = apply_view(&dataset, &view_filter)?;
    info!(
        total = dataset.row_count(),
        shown = view.row_count(),
        "view applied"
    );

    if let Some(path) = &args.export_csv {
        let text = to_delimited(&view)?;
        fs::write(path, text).with_context(|| format!("write csv: {}", path.display()))?;
    }
    if let Some(path) = &args.export_json {
        let text = to_json_records(&view)?;
        fs::write(path, text).with_context(|| format!("write json: {}", path.display()))?;
    }
    if let Some(path) = &args.export_summary {
        let text = render_summary(&view);
        fs::write(path, text).with_context(|| format!("write summary: {}", path.display()))?;
    }

    Ok(IngestReport {
        source,
        format,
        profiles: profile(&dataset),
        summary: summarize(&dataset),
        charts: if args.no_charts {
            Vec::new()
        } else {
            select_charts(&dataset)
        },
        total_rows: dataset.row_count(),
        view,
        preview_rows: args.rows,
    })
}

pub fn run_samples() {
    print_samples(&Sample::all());
}

/// Build the view from `--filter`, `--range`, `--sort`, and `--limit`.
fn build_view(args: &IngestArgs) -> Result<ViewFilter> {
    let mut filters = Vec::new();
    for spec in &args.filter {
        filters.push(parse_filter_arg(spec)?);
    }
    for spec in &args.range {
        filters.push(parse_range_arg(spec)?);
    }
    Ok(ViewFilter {
        filters,
        sort_by: args.sort.clone(),
        row_cap: args.limit,
    })
}

/// `COLUMN=V1,V2,...` into a membership filter.
fn parse_filter_arg(spec: &str) -> Result<FilterSpec> {
    let Some((column, list)) = spec.split_once('=') else {
        bail!("invalid --filter {spec:?}: expected COLUMN=V1,V2,...");
    };
    let values: BTreeSet<String> = list
        .split(',')
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        bail!("invalid --filter {spec:?}: no values given");
    }
    Ok(FilterSpec::Members {
        column: column.trim().to_string(),
        values,
    })
}

/// `COLUMN=MIN..MAX` into an inclusive range filter.
fn parse_range_arg(spec: &str) -> Result<FilterSpec> {
    let Some((column, bounds)) = spec.split_once('=') else {
        bail!("invalid --range {spec:?}: expected COLUMN=MIN..MAX");
    };
    let Some((min, max)) = bounds.split_once("..") else {
        bail!("invalid --range {spec:?}: expected COLUMN=MIN..MAX");
    };
    let min: f64 = min
        .trim()
        .parse()
        .with_context(|| format!("invalid --range {spec:?}: bad lower bound"))?;
    let max: f64 = max
        .trim()
        .parse()
        .with_context(|| format!("invalid --range {spec:?}: bad upper bound"))?;
    if min > max {
        bail!("invalid --range {spec:?}: lower bound exceeds upper bound");
    }
    Ok(FilterSpec::Range {
        column: column.trim().to_string(),
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_arg_parses_members() {
        let spec = parse_filter_arg("region=North, South").expect("parse");
        match spec {
            FilterSpec::Members { column, values } => {
                assert_eq!(column, "region");
                assert!(values.contains("North"));
                assert!(values.contains("South"));
            }
            other => panic!("expected members filter, got {other:?}"),
        }
    }

    #[test]
    fn filter_arg_rejects_missing_equals() {
        assert!(parse_filter_arg("region").is_err());
        assert!(parse_filter_arg("region=").is_err());
    }

    #[test]
    fn range_arg_parses_inclusive_bounds() {
        let spec = parse_range_arg("price=10..19.99").expect("parse");
        match spec {
            FilterSpec::Range { column, min, max } => {
                assert_eq!(column, "price");
                assert_eq!(min, 10.0);
                assert_eq!(max, 19.99);
            }
            other => panic!("expected range filter, got {other:?}"),
        }
    }

    #[test]
    fn range_arg_rejects_inverted_bounds() {
        assert!(parse_range_arg("price=20..10").is_err());
        assert!(parse_range_arg("price=ten..20").is_err());
        assert!(parse_range_arg("price=10").is_err());
    }
}
