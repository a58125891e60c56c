// Drives the generator over stdin/stdout for a UI host.
// The request/reply format lives in `pathway_core::protocol`.
use anyhow::Result;
use clap::Parser;
use pathway_core::config::{EngineArgs, EngineConfig};
use pathway_core::logging::init_logging;
use pathway_core::protocol::{respond, Response};
use pathway_core::PathwayEngine;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "pathway_pipe", version)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::from_args(&cli.engine);
    init_logging(&config);

    let engine = match &config.catalog_path {
        Some(path) => PathwayEngine::from_file_or_default(path),
        None => PathwayEngine::new(),
    };
    info!("Pathway pipe ready with {} catalog modules", engine.catalog().len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let input = line?;
        debug!("<- {:?}", input);
        match respond(&engine, &input) {
            Response::Reply(reply) => {
                debug!("-> {:?}", reply);
                writeln!(stdout, "{}", reply)?;
                stdout.flush()?;
            }
            Response::Skip => {}
            Response::Exit => break,
        }
    }
    info!("Pathway pipe shutting down");
    Ok(())
}
