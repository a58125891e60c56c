//! Engine configuration
//!
//! Both binaries take the same catalog/verbosity options; the catalog path
//! can also come from the environment.

use clap::Args;
use std::path::PathBuf;

/// Environment variable consulted when `--catalog` is not given.
pub const CATALOG_ENV: &str = "DHPRIMER_CATALOG";

/// Command-line options shared by the binaries
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// JSON module catalog to use instead of the built-in content
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Catalog file; `None` means the built-in catalog
    pub catalog_path: Option<PathBuf>,
    pub verbose: u8,
}

impl EngineConfig {
    /// Resolves CLI options, falling back to `DHPRIMER_CATALOG` for the catalog.
    pub fn from_args(args: &EngineArgs) -> Self {
        let env_catalog = std::env::var_os(CATALOG_ENV).map(PathBuf::from);
        Self::resolve(args, env_catalog)
    }

    fn resolve(args: &EngineArgs, env_catalog: Option<PathBuf>) -> Self {
        Self {
            catalog_path: args.catalog.clone().or(env_catalog),
            verbose: args.verbose,
        }
    }

    /// Get the log filter string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
