//! CLI Adapter.

mod output;

use std::io::{ErrorKind, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::{Confirm, Error as DialoguerError};

use crate::app::{api, config, telemetry};
use crate::domain::{AppConfig, AppError, EditResult};

#[derive(Parser)]
#[command(name = "hardenkit")]
#[command(version)]
#[command(
    about = "Apply Linux hardening settings with backups and diffs",
    long_about = None
)]
struct Cli {
    /// Config file (default: $HARDENKIT_CONFIG, then /etc/hardenkit/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Operate on files under this directory instead of the configured root
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the minimum password length (8-32)
    MinLength { length: u32 },
    /// Set how many previous passwords are remembered (0-24)
    Remember { count: u32 },
    /// Remove nullok from the PAM auth stack
    DisableNull,
    /// Turn address space layout randomisation on or off
    Aslr { state: Toggle },
    /// Turn TCP SYN cookies on or off
    SynCookies { state: Toggle },
    /// Apply every setting in the [profile] config section
    Apply {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let json = cli.json;

    let result = load(cli.config.as_deref(), cli.root)
        .and_then(|config| execute(&config, cli.command, json));

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            output::print_error(&e, json);
            std::process::exit(1);
        }
    }
}

fn load(explicit: Option<&Path>, root: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = config::load_config(explicit)?;
    if let Some(root) = root {
        config.system.root = root;
        config.validate()?;
    }
    telemetry::initialise(&config.logging)?;
    Ok(config)
}

fn execute(config: &AppConfig, command: Commands, json: bool) -> Result<i32, AppError> {
    match command {
        Commands::MinLength { length } => {
            finish_edit(config, api::set_min_password_length_with(config, length)?, json)
        }
        Commands::Remember { count } => {
            finish_edit(config, api::set_password_remember_with(config, count)?, json)
        }
        Commands::DisableNull => {
            finish_edit(config, api::disable_null_passwords_with(config)?, json)
        }
        Commands::Aslr { state } => {
            finish_edit(config, api::set_aslr_with(config, state.enabled())?, json)
        }
        Commands::SynCookies { state } => {
            finish_edit(config, api::set_syn_cookies_with(config, state.enabled())?, json)
        }
        Commands::Apply { yes } => run_apply(config, yes, json),
    }
}

fn finish_edit(config: &AppConfig, result: EditResult, json: bool) -> Result<i32, AppError> {
    let reload =
        (result.file() == api::sysctl_conf_path(config)).then(|| api::reload_sysctl_with(config));
    output::print_edit(&result, reload.as_ref(), json)?;
    Ok(0)
}

fn run_apply(config: &AppConfig, yes: bool, json: bool) -> Result<i32, AppError> {
    let settings = config.profile.settings()?;
    if settings.is_empty() {
        output::print_notice("Profile is empty; nothing to apply", json)?;
        return Ok(0);
    }

    if !yes {
        let summary: Vec<String> = settings.iter().map(ToString::to_string).collect();
        let prompt =
            format!("Apply {} under {}?", summary.join(", "), config.system.root.display());
        if !confirm(&prompt)? {
            output::print_notice("Aborted; no files changed", json)?;
            return Ok(0);
        }
    }

    let log = api::apply_profile_with(config)?;
    let reload = log
        .applied_to(&api::sysctl_conf_path(config))
        .then(|| api::reload_sysctl_with(config));
    output::print_log(&log, reload.as_ref(), json)?;

    Ok(if log.all_succeeded() { 0 } else { 1 })
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        return Err(AppError::config_error(
            "apply needs confirmation; pass --yes when not running interactively",
        ));
    }

    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => Ok(answer),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
    }
}
