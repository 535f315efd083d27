//! enumlab CLI - runs the closed value set lesson pages.
//!
//! With no arguments, prints every page's lines in statement order.
//!
//! Modes:
//! - `--page <name>`: run only the named pages (repeatable)
//! - `--coverage`: audit every matching function for exhaustiveness
//! - `--list`: list every set with its variants and raw values
//! - `--lookup <SET> <RAW>`: find a variant by raw value

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use enumlab_core::{
    audit_all, catalog, init_structured_logging, load_config, load_config_file, log_error,
    log_info, log_warn, lookup_raw, print_catalog_json, print_catalog_plain, print_coverage_json,
    print_coverage_plain, print_lookup_json, print_lookup_plain, print_pages_json,
    print_pages_plain, run_pages, EnumlabConfig, OutputFormat, Page,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Closed value sets and exhaustive matching, page by page")]
pub struct Cli {
    /// Page to run (control-flow, raw-values); repeat for several
    #[arg(long = "page", value_name = "PAGE")]
    pages: Vec<String>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Audit every matching function for exhaustiveness
    #[arg(long)]
    coverage: bool,

    /// List every closed set with its variants and raw values
    #[arg(long)]
    list: bool,

    /// Look up a variant by raw value, e.g. --lookup Month 3
    #[arg(long, num_args = 2, value_names = ["SET", "RAW"])]
    lookup: Option<Vec<String>>,

    /// Read configuration from this file instead of ./enumlab.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Loads the explicit config file, or ./enumlab.toml when present.
fn resolve_config(cli: &Cli) -> Result<EnumlabConfig> {
    if let Some(path) = &cli.config {
        log_info(&format!("using config {}", path.display()));
        return load_config_file(path);
    }

    let found = load_config(Path::new("."))?;
    Ok(found.unwrap_or_default())
}

/// Pages from the command line win over the config file.
fn resolve_pages(cli: &Cli, config: &EnumlabConfig) -> Result<Vec<Page>> {
    if cli.pages.is_empty() {
        return Ok(config.pages());
    }

    cli.pages
        .iter()
        .map(|name| Page::parse(name).map_err(|e| anyhow!(e)))
        .collect()
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let json = cli.json || config.format() == OutputFormat::Json;

    if let Some(args) = &cli.lookup {
        let (set, raw) = match args.as_slice() {
            [set, raw] => (set.as_str(), raw.as_str()),
            _ => return Err(anyhow!("--lookup takes exactly SET and RAW")),
        };
        let found = lookup_raw(set, raw)
            .with_context(|| format!("Lookup of '{}' in {} failed", raw, set))?;
        if found.is_none() {
            log_warn(&format!("no variant of {} has raw value {}", set, raw));
        }
        if json {
            print_lookup_json(set, raw, found);
        } else {
            print_lookup_plain(set, raw, found);
        }
        return Ok(());
    }

    if cli.list {
        let sets = catalog();
        if json {
            print_catalog_json(&sets);
        } else {
            print_catalog_plain(&sets);
        }
        return Ok(());
    }

    if cli.coverage {
        let reports = audit_all().context("Coverage audit failed")?;
        if json {
            print_coverage_json(&reports);
        } else {
            print_coverage_plain(&reports);
        }
        return Ok(());
    }

    let pages = resolve_pages(cli, &config)?;
    let outputs = run_pages(&pages);
    if json {
        print_pages_json(&outputs);
    } else {
        print_pages_plain(&outputs);
    }

    Ok(())
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] enumlab internal error: {}", info);
    }));

    // JSON logs to stderr, filtered by RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();

    run(&cli).inspect_err(|e| log_error(&format!("{:#}", e)))
}
