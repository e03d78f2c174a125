use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use perfindex_cli::{pipeline, render};
use serde::Serialize;

mod logging;
mod opts;

use opts::{Command, Format, Opts};

fn main() -> Result<()> {
    let opts = Opts::parse();
    logging::init(opts.verbosity)?;

    let config = opts.pipeline_config();
    config.validate()?;

    let dataset = perfindex_datasets::load_dataset(&opts.dataset)
        .with_context(|| format!("failed to load dataset `{}`", opts.dataset.display()))?;
    tracing::info!(
        path = %opts.dataset.display(),
        students = dataset.nsamples(),
        "loaded dataset"
    );

    let output = match &opts.subcommand {
        Command::Predict(predict) => {
            let report = pipeline::run_prediction(&dataset, &predict.to_factors(), &config)
                .context("prediction failed")?;
            format(opts.format, &report, |report| report.to_string())?
        }
        Command::Batch(batch) => {
            let queries = perfindex_datasets::load_queries(&batch.queries)
                .with_context(|| format!("failed to load queries `{}`", batch.queries.display()))?;
            let entries = pipeline::run_batch(&dataset, &queries, &config)?;
            format(opts.format, &entries, |entries| render::BatchTable(entries).to_string())?
        }
        Command::Correlation => {
            let report = pipeline::correlation_table(&dataset).context("correlation failed")?;
            format(opts.format, &report, |report| report.to_string())?
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn format<T: Serialize + ?Sized>(
    format: Format,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        Format::Text => Ok(text(value)),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            Ok(json)
        }
    }
}
