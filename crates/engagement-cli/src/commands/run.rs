//! Run command - load, enrich and export a user export.

use colored::Colorize;
use engagement::{
    EnrichmentResult, ExportOutcome, LoadOutcome, Pipeline, PipelineConfig, PipelineReport,
};

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = cli.json;
    let verbose = cli.verbose;
    let config = build_config(cli)?;

    if verbose {
        println!(
            "{} {} -> {} (reference date {})",
            "Enriching".cyan().bold(),
            config.input.display().to_string().white(),
            config.output.display().to_string().white(),
            config.enrich.reference_date
        );
    }

    let report = Pipeline::with_config(config).run()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        print_load(&report.load);
        print_enrichment(&report.enrichment);
        print_export(&report.export);
        if let Some(ref outcome) = report.invalid_report {
            print_invalid_report(outcome);
        }
    }

    Ok(())
}

/// Layer configuration: defaults, then the config file, then flags.
fn build_config(cli: Cli) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
    let mut config = match cli.config {
        Some(ref path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(input) = cli.input {
        config = config.with_input(input);
    }
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }
    if let Some(path) = cli.invalid_report {
        config = config.with_invalid_report(path);
    }
    if let Some(delimiter) = cli.delimiter {
        config = config.with_delimiter(delimiter);
    }
    if let Some(date) = cli.reference_date {
        let enrich = config.enrich.clone().with_reference_date(date);
        config = config.with_enrich(enrich);
    }

    Ok(config)
}

fn print_load(load: &LoadOutcome) {
    match load {
        LoadOutcome::Loaded { records, .. } => println!(
            "{} loaded data of {} users.",
            "Successfully".green().bold(),
            records.len().to_string().white().bold()
        ),
        LoadOutcome::NotFound { path } => println!(
            "{} The file '{}' was not found.",
            "Error:".red().bold(),
            path.display()
        ),
    }
}

fn print_enrichment(result: &EnrichmentResult) {
    if result.processed() == 0 {
        return;
    }

    let summary = result.summary();
    if result.invalid.is_empty() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
}

fn print_export(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::NothingToExport => {
            println!("{} No data to export.", "Warning:".yellow().bold())
        }
        ExportOutcome::Written { path, count } => println!(
            "{} exported {} records to {}",
            "Successfully".green().bold(),
            count.to_string().white().bold(),
            path.display().to_string().cyan()
        ),
        ExportOutcome::Failed { error, .. } => println!(
            "{} writing to file: {}",
            "Error".red().bold(),
            error
        ),
    }
}

fn print_invalid_report(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Written { path, count } => println!(
            "Wrote {} invalid entries to {}",
            count.to_string().white().bold(),
            path.display().to_string().cyan()
        ),
        ExportOutcome::Failed { error, .. } => println!(
            "{} writing invalid-entry report: {}",
            "Error".red().bold(),
            error
        ),
        ExportOutcome::NothingToExport => {}
    }
}

fn report_json(report: &PipelineReport) -> serde_json::Value {
    serde_json::json!({
        "input": report.load.path(),
        "input_found": !report.load.is_not_found(),
        "loaded": report.load.record_count(),
        "enriched": report.enrichment.enriched.len(),
        "rejected": report.enrichment.rejected,
        "invalid": report.enrichment.invalid,
        "export": export_json(&report.export),
        "invalid_report": report.invalid_report.as_ref().map(export_json),
    })
}

fn export_json(outcome: &ExportOutcome) -> serde_json::Value {
    match outcome {
        ExportOutcome::NothingToExport => serde_json::json!({ "status": "nothing_to_export" }),
        ExportOutcome::Written { path, count } => {
            serde_json::json!({ "status": "written", "path": path, "count": count })
        }
        ExportOutcome::Failed { path, error } => {
            serde_json::json!({ "status": "failed", "path": path, "error": error.to_string() })
        }
    }
}
