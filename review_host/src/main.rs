//! # Detection Review Host
//!
//! Main entry point for the review host.

use clap::Parser;
use review_host::{
    load_script, probe_image, HostConfig, HostRuntime, HostRuntimeConfig, HostRuntimeError,
    InputScript,
};
use services_record_io::DetectionRecord;
use std::io;
use std::path::PathBuf;
use std::process;

/// Review and correct text detections on an image
#[derive(Debug, Parser)]
#[command(name = "review_host", version, about)]
struct Cli {
    /// Image the detections were made on
    image: PathBuf,

    /// Detection record (JSON)
    record: PathBuf,

    /// Input script; stdin is read once it runs out
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Host configuration file (JSON)
    #[arg(short, long, env = "REVIEW_HOST_CONFIG")]
    config: Option<PathBuf>,

    /// Stop after this many steps (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_steps: usize,

    /// Print the console frame on every step
    #[arg(long)]
    print_frames: bool,

    /// Do not read stdin after the script
    #[arg(long)]
    no_stdin: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), HostRuntimeError> {
    let host = match &cli.config {
        Some(path) => HostConfig::from_path(path)?,
        None => HostConfig::default(),
    };

    let script = match &cli.script {
        Some(path) => load_script(path)?,
        None => InputScript::new(),
    };

    let record = DetectionRecord::from_path(&cli.record)?;
    let image = probe_image(&cli.image, &host);

    let config = HostRuntimeConfig {
        host,
        max_steps: cli.max_steps,
        print_frames: cli.print_frames,
    };
    let mut runtime = HostRuntime::new(config, record, image, script)?;
    if !cli.no_stdin {
        runtime = runtime.with_interactive(Box::new(io::stdin().lock()));
    }

    runtime.run()?;
    let record = runtime.finish();
    log::debug!("edited record: {}", record.to_json_string()?);
    Ok(())
}
