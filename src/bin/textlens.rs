//! Command-line front end.
//!
//! Usage: textlens <file> [entities simplify summary themes sentiment]
//!
//! With no section names, every section runs. Accepts .txt, .pdf, and
//! .docx input.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use textlens::pipeline::{AnalysisRequest, DocumentAnalyzer};
use textlens::{ingest, LanguageModel};

fn main() -> ExitCode {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .map_err(|e| eprintln!("logger init failed: {e}"))
        .ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => bail!("usage: textlens <file> [entities simplify summary themes sentiment]"),
    };
    let request = parse_sections(args)?;

    let model = LanguageModel::load().context("language model unavailable")?;
    let text = ingest::extract_text(&path)
        .with_context(|| format!("cannot ingest '{}'", path.display()))?;

    let report = DocumentAnalyzer::new(&model).analyze(&text, &request);

    println!("== Preview ==\n{}\n", report.preview);
    if let Some(entities) = &report.entities {
        println!("== Entities ==");
        print_bucket("Persons", &entities.persons);
        print_bucket("Locations", &entities.locations);
        print_bucket("Dates", &entities.dates);
        print_bucket("Organizations", &entities.organizations);
        println!();
    }
    if let Some(simplified) = &report.simplified {
        println!("== Simplified ==\n{simplified}\n");
    }
    if let Some(summary) = &report.summary {
        println!("== Summary ==\n{summary}\n");
    }
    if let Some(themes) = &report.themes {
        println!("== Themes ==\n{}\n", themes.join(", "));
    }
    if let Some(sentiment) = &report.sentiment {
        println!("== Sentiment ==");
        for record in sentiment {
            println!("[{}] ({:+.3}) {}", record.polarity, record.compound, record.sentence);
        }
        println!();
    }

    Ok(())
}

fn parse_sections(args: impl Iterator<Item = String>) -> Result<AnalysisRequest> {
    let mut request = AnalysisRequest::none();
    let mut any = false;
    for arg in args {
        any = true;
        match arg.as_str() {
            "entities" => request.entities = true,
            "simplify" => request.simplify = true,
            "summary" => request.summary = true,
            "themes" => request.themes = true,
            "sentiment" => request.sentiment = true,
            other => bail!(
                "unknown section '{other}' (expected entities, simplify, summary, themes, sentiment)"
            ),
        }
    }
    Ok(if any { request } else { AnalysisRequest::all() })
}

fn print_bucket(label: &str, bucket: &std::collections::BTreeSet<String>) {
    if bucket.is_empty() {
        println!("{label}: (none)");
    } else {
        println!(
            "{label}: {}",
            bucket.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }
}
