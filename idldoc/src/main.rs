//! idldoc — query the docstrings of compiled IDL metadata.
//!
//! Two modes:
//!
//! - **index mode** (default): `idldoc build/classes vendor/` merges every
//!   resource under `META-INF/idldoc/thrift` of each root
//! - **resource mode**: `idldoc -r META-INF/idldoc/thrift/ThriftTest.json`
//!   extracts one resource on its own

mod render;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use idldoc::{Config, DocIndex, SearchPathLoader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "idldoc",
    about = "Look up documentation extracted from IDL compiler JSON metadata"
)]
struct Cli {
    /// Search-path roots, earlier roots shadow later ones. Defaults to ".".
    roots: Vec<PathBuf>,

    /// Extract a single resource (path relative to the roots) instead of
    /// aggregating everything
    #[arg(short = 'r', long)]
    resource: Option<String>,

    /// Print only the docstring of this qualified name. Can be repeated.
    #[arg(short = 'k', long)]
    key: Vec<String>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Directory, relative to each root, holding the metadata resources
    #[arg(long, default_value = idldoc::config::DEFAULT_RESOURCE_DIR)]
    resource_dir: String,

    /// Namespace scope to prefer when a document declares several.
    /// Can be specified multiple times; defaults to java, then *.
    #[arg(long)]
    namespace_scope: Vec<String>,

    /// Per-resource size limit in bytes
    #[arg(long, default_value_t = idldoc::config::DEFAULT_MAX_RESOURCE_BYTES)]
    max_bytes: u64,

    /// Exit with an error if any resource failed to load
    #[arg(long)]
    strict: bool,

    /// Debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config {
            resource_dir: self.resource_dir.clone(),
            max_resource_bytes: self.max_bytes,
            ..Config::default()
        };
        if !self.namespace_scope.is_empty() {
            config.namespace_scopes = self.namespace_scope.clone();
        }
        config
    }

    fn roots(&self) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.roots.clone()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = cli.config();
    let loader = SearchPathLoader::new(cli.roots(), &config);

    let (index, failures) = match cli.resource.as_deref() {
        Some(resource) => {
            let map = idldoc::doc_strings_of(&loader, resource, &config)
                .with_context(|| format!("failed to load {}", resource))?;
            (DocIndex::from(map), Vec::new())
        }
        None => {
            let agg = idldoc::all_doc_strings(&loader, &config)
                .context("failed to build documentation index")?;
            (agg.index, agg.failures)
        }
    };

    if cli.key.is_empty() {
        let renderer = render::create_renderer(&cli.format)?;
        print!("{}", renderer.render(&index, &failures)?);
    } else {
        print_keys(&index, &cli.key)?;
    }

    if cli.strict && !failures.is_empty() {
        anyhow::bail!("{} resource(s) failed to load", failures.len());
    }
    Ok(())
}

/// Print the docstring of each requested key, one per line.
fn print_keys(index: &DocIndex, keys: &[String]) -> Result<()> {
    let mut missing = 0;
    for key in keys {
        match index.get(key) {
            Some(doc) => println!("{}", doc),
            None => {
                log::warn!("no documentation for {}", key);
                missing += 1;
            }
        }
    }
    if missing > 0 {
        anyhow::bail!("{} key(s) not documented", missing);
    }
    Ok(())
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
