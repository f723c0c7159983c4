use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use sales_core::{
    Dataset, InputFormat, OutputFormat, SummaryOutput, process_json_reader, process_path,
    process_reader,
};
use tracing::{info, info_span};

use sales_cli::render::{dataset_table, summary_table};

use crate::cli::{OutputArg, ProcessArgs, SourceArgs, SummaryArgs};

pub fn run_process(args: &ProcessArgs) -> Result<()> {
    let dataset = load_dataset(&args.source)?;
    match args.output {
        OutputArg::Json => {
            let json = dataset.to_json().context("serialize dataset")?;
            println!("{json}");
        }
        OutputArg::Table => {
            let summary = if args.no_summary || dataset.is_empty() {
                None
            } else {
                Some(dataset.summary().context("summarize dataset")?)
            };
            println!("{}", dataset_table(&dataset, summary.as_ref()));
        }
    }
    Ok(())
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let dataset = load_dataset(&args.source)?;
    let format = OutputFormat::from_name(&args.format);
    match dataset.summary_as(format).context("summarize dataset")? {
        SummaryOutput::Structured(summary) => println!("{}", summary_table(&summary)),
        SummaryOutput::Json(json) => println!("{json}"),
    }
    Ok(())
}

fn load_dataset(source: &SourceArgs) -> Result<Dataset> {
    let format = source.input_format();
    let options = source.processing_options();
    let span = info_span!(
        "process",
        path = %source.path.display(),
        format = ?format
    );
    let _guard = span.enter();
    let start = Instant::now();

    let dataset = if source.is_stdin() {
        let stdin = io::stdin().lock();
        let processed = match format {
            InputFormat::Csv => process_reader(stdin, &options),
            InputFormat::Json => process_json_reader(stdin, &options),
        };
        processed.context("process standard input")?
    } else {
        process_path(&source.path, format, &options)
            .with_context(|| format!("process {}", source.path.display()))?
    };

    info!(
        rows = dataset.len(),
        duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "processed source"
    );
    Ok(dataset)
}
