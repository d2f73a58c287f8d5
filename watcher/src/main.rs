//! deploywatch - Entry Point
//!
//! Shows a cloud deployment and the state of each of its operations.

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use deploywatch::app::options::WatchOptions;
use deploywatch::app::run::{render, watch_once};
use deploywatch::args::{CliArgs, USAGE};
use deploywatch::cli::runner::ProcessRunner;
use deploywatch::filesys::file::File;
use deploywatch::logs::{init_logging, LogOptions};
use deploywatch::storage::layout::StorageLayout;
use deploywatch::storage::settings::Settings;
use deploywatch::utils::version_info;

use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse(env::args().skip(1)).context("Invalid arguments")?;

    if args.flag("help") {
        println!("{}", USAGE);
        return Ok(());
    }

    if args.flag("version") {
        println!("{}", serde_json::to_string_pretty(&version_info())?);
        return Ok(());
    }

    // Retrieve the settings file
    let layout = StorageLayout::default();
    let settings_file = args
        .settings_path()
        .map(File::new)
        .unwrap_or_else(|| layout.settings_file());
    let settings = Settings::load(&settings_file).await?;

    // Initialize logging
    let log_options = LogOptions {
        log_level: args.log_level()?.unwrap_or(settings.log_level.clone()),
        log_dir: settings.log_dir.clone(),
        json_format: settings.json_logs,
    };
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let target = args.target().context(USAGE)?;
    let mut options = WatchOptions::from_settings(target, &settings);
    if let Some(output) = args.output()? {
        options.output = output;
    }
    if args.flag("no-color") {
        options.render.colorize = false;
    }
    if args.flag("no-outputs") {
        options.render.show_outputs = false;
    }
    debug!("Watching with options: {:?}", options);

    let report = watch_once(&ProcessRunner, &options).await.with_context(|| {
        format!(
            "Unable to watch deployment {} in {}",
            options.target.deployment_name, options.target.resource_group
        )
    })?;

    println!("{}", render(&report, &options)?);
    Ok(())
}
