use anyhow::{Context, Result};
use dispatch_core::PipelineContext;
use dispatch_model::{DispatchColumns, PipelineOptions, Report, SourceEncoding};
use tracing::info_span;

use dispatch_cli::summary::{counts_lines, months_table, render_json, render_plain, report_table};

use crate::cli::{EncodingArg, ReportFormatArg, SummarizeArgs};

pub fn run_months() -> Result<()> {
    println!("{}", months_table());
    Ok(())
}

pub fn run_summarize(args: &SummarizeArgs) -> Result<Report> {
    let span = info_span!("summarize", source = %args.source.display());
    let _guard = span.enter();

    let context = PipelineContext::new().with_options(options_from_args(args));
    let report = context
        .run(&args.source)
        .with_context(|| format!("process {}", args.source.display()))?;

    match args.format {
        ReportFormatArg::Table => {
            for line in counts_lines(&report) {
                println!("{line}");
            }
            println!("{}", report_table(&report));
        }
        ReportFormatArg::Plain => println!("{}", render_plain(&report)),
        ReportFormatArg::Json => {
            println!("{}", render_json(&report).context("serialize report")?);
        }
    }
    Ok(report)
}

fn options_from_args(args: &SummarizeArgs) -> PipelineOptions {
    let mut columns = DispatchColumns::default();
    if let Some(name) = &args.month_column {
        columns = columns.with_month(name);
    }
    if let Some(name) = &args.request_time_column {
        columns = columns.with_request_time(name);
    }
    if let Some(name) = &args.intervention_time_column {
        columns = columns.with_intervention_time(name);
    }
    if let Some(name) = &args.year_column {
        columns = columns.with_year(name);
    }
    PipelineOptions::default()
        .with_delimiter(args.delimiter)
        .with_encoding(match args.encoding {
            EncodingArg::Utf8 => SourceEncoding::Utf8,
            EncodingArg::Latin1 => SourceEncoding::Latin1,
        })
        .with_columns(columns)
}
