mod cli;

use filmtag::{
    config::{self, OutputFormatKind},
    report,
    scanner::{self, MediaIdentifier, WalkOptions},
};
use filmtag_parser::AssetKind;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "filmtag=debug,filmtag_parser=trace".to_string()
        } else {
            "filmtag=info,filmtag_parser=warn".to_string()
        }
    });

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan { names, dir, format } => {
            scan_names(&names, dir, format, cli.config.as_deref())
        }
        Commands::Walk {
            path,
            depth,
            format,
        } => walk(&path, depth, format, cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Languages { labels } => languages(&labels, cli.config.as_deref()),
        Commands::Version => {
            println!("filmtag {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn scan_names(
    names: &[String],
    dir: bool,
    format: Option<OutputFormatKind>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let scanner = config::build_scanner(&config)?;
    let format = format.unwrap_or(config.output.format);
    let kind = AssetKind::from_is_dir(dir);

    let records = names
        .iter()
        .map(|name| {
            tracing::debug!("Scanning {:?} as {:?}", name, kind);
            report::render(&scanner.scan(name, kind), format)
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", report::join(&records, format));
    Ok(())
}

fn walk(
    root: &Path,
    depth: Option<usize>,
    format: Option<OutputFormatKind>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let identifier = MediaIdentifier::new(config::build_scanner(&config)?);
    let format = format.unwrap_or(config.output.format);

    let options = WalkOptions { max_depth: depth };
    let entries = scanner::walk_directory(root, &options, &identifier)?;

    if entries.is_empty() {
        tracing::warn!("No entries found below {:?}", root);
        return Ok(());
    }

    let records = entries
        .iter()
        .map(|entry| report::render_entry(entry, scanner::relative_path(root, &entry.path), format))
        .collect::<Result<Vec<_>>>()?;

    println!("{}", report::join(&records, format));
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;
    let scanner = config::build_scanner(&config)?;

    println!("Configuration is valid");
    println!("  Skip keywords: {}", config.scanner.skip_keywords.len());
    println!(
        "  Language detection: {}",
        if scanner.language_detection() {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("  Output format: {:?}", config.output.format);

    Ok(())
}

fn languages(labels: &[String], config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let scanner = config::build_scanner(&config)?;

    for label in labels {
        match scanner.catalog().determine_language(label) {
            Some(language) => println!("{}: {}", label, language),
            None => println!("{}: unknown", label),
        }
    }

    Ok(())
}
