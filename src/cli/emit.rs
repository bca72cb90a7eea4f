//! Emit command implementation.
//!
//! Builds the renderer payload and writes it as JSON to stdout or a file.

use crate::cli::args::EmitArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::payload::RendererPayload;
use anyhow::Result;
use std::fs;
use std::io::Write;

/// Execute emit command
pub fn run_emit(args: &EmitArgs, config: &SiteConfig) -> Result<()> {
    let payload = RendererPayload::from_config(config);
    let json = payload.to_json(args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json)?;
            log!("emit"; "wrote {} bytes to {}", json.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
