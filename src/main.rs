// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Command Dispatch
//!   Build | Ios | Android | Show | Check | Options | Version
//! ```
//!
//! A failed build-info resolution ends the process here, with the
//! diagnostic from `BuddybuildError::diagnostic`.

use std::process::ExitCode;

use buddybuild_rs::cli::global::GlobalOptions;
use buddybuild_rs::cli::{self, Command};
use buddybuild_rs::cmd::config::run_options_command;
use buddybuild_rs::cmd::show::{Record, run_check_command, run_show_command};
use buddybuild_rs::config::Settings;
use buddybuild_rs::config::loader::SettingsLoader;
use buddybuild_rs::core::env::current_env;
use buddybuild_rs::error::BuddybuildError;
use buddybuild_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = match build_settings_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();
    let settings = match loader.build() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&settings)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &settings, &loaded_files)
}

fn build_log_config(settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.log.level)
        .with_file_level(settings.log.file_level.unwrap_or(settings.log.level))
        .maybe_with_log_file(settings.log.file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli, settings: &Settings, loaded_files: &[String]) -> ExitCode {
    let options = settings.load_options();
    let mut stdout = std::io::stdout().lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(settings, loaded_files);
            Ok(())
        }
        Some(Command::Build(args)) => {
            run_show_command(Record::Build, args, &current_env(), &options, &mut stdout)
        }
        Some(Command::Ios(args)) => {
            run_show_command(Record::Ios, args, &current_env(), &options, &mut stdout)
        }
        Some(Command::Android(args)) => {
            run_show_command(Record::Android, args, &current_env(), &options, &mut stdout)
        }
        Some(Command::Show(args)) => {
            run_show_command(Record::All, args, &current_env(), &options, &mut stdout)
        }
        Some(Command::Check) => run_check_command(&current_env(), &options),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<BuddybuildError>() {
                Some(err @ BuddybuildError::BuildInfo(_)) => {
                    tracing::error!(error = %err, "build info unavailable");
                    eprintln!("{}", err.diagnostic());
                }
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn build_settings_loader(global: &GlobalOptions) -> buddybuild_rs::error::Result<SettingsLoader> {
    let mut loader = SettingsLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("buddybuild.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("BUDDYBUILD_RS");
    for (key, value) in global.to_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}
