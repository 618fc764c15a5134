//! draft-check binary
//!
//! Decodes a JSON document as one of the draft service entities, prints the
//! normalised JSON, and reports validation problems for the entities that
//! have cross-field checks.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use draft_domain::{
    decode, is_valid, validate_agreement, validate_article, validate_new_article,
    validate_updated_article, Agreement, Article, EntityKind, NewArticle, UpdatedArticle,
    ValidationConfig, ValidationError,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "draft-check", about = "Decode and validate draft service JSON")]
struct Args {
    /// Entity to decode as (e.g. article, new-article, updated-article, agreement)
    #[arg(required_unless_present = "list")]
    entity: Option<String>,

    /// JSON file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Validation config (TOML or JSON); defaults to the user config dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print compact instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// List entity names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        for kind in EntityKind::ALL {
            println!("{}", kind);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let kind: EntityKind = match args.entity.as_deref() {
        Some(name) => name.parse()?,
        None => return Ok(ExitCode::FAILURE),
    };

    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = match &args.config {
        Some(path) => ValidationConfig::load(path)?,
        None => ValidationConfig::load_or_default()?,
    };

    let normalized = match kind.normalize(&input) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.compact {
        println!("{}", serde_json::to_string(&normalized)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&normalized)?);
    }

    let report = validation_report(kind, &input, &config)?;
    for problem in &report {
        tracing::warn!("{}", problem);
    }
    tracing::info!(entity = kind.name(), problems = report.len(), "checked");

    if is_valid(&report) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Run the cross-field checks for entities that have them
fn validation_report(
    kind: EntityKind,
    input: &str,
    config: &ValidationConfig,
) -> Result<Vec<ValidationError>, Box<dyn std::error::Error>> {
    let report = match kind {
        EntityKind::Article => validate_article(&decode::<Article>(input)?, config),
        EntityKind::NewArticle => validate_new_article(&decode::<NewArticle>(input)?, config),
        EntityKind::UpdatedArticle => {
            validate_updated_article(&decode::<UpdatedArticle>(input)?, config)
        }
        EntityKind::Agreement => validate_agreement(&decode::<Agreement>(input)?),
        _ => Vec::new(),
    };
    Ok(report)
}
