use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slate_cli::commands::{activity, assign, clear, fill, new, set, show};
use slate_cli::{ActivityAction, Cli, Commands, Config};

/// Resolve the plan file path: CLI flag first, then configuration.
fn plan_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.plan {
        return Ok(path.clone());
    }
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config.plan_path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let path = plan_path(&cli)?;
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Commands::New {
            slots,
            start_time,
            slot_duration,
            force,
        } => {
            let args = new::NewArgs {
                slots: *slots,
                start_time: start_time.as_deref(),
                slot_duration: *slot_duration,
                force: *force,
            };
            new::run(&mut stdout, &path, &args)?;
        }
        Commands::Show { groups, times } => {
            show::run(&mut stdout, &path, *groups, *times)?;
        }
        Commands::Assign {
            activity,
            from,
            to,
            color,
        } => {
            assign::run(&mut stdout, &path, activity, *from, *to, color.as_deref())?;
        }
        Commands::Clear { from, to } => {
            clear::run(&mut stdout, &path, *from, *to)?;
        }
        Commands::Fill { from, to } => {
            fill::run(&mut stdout, &path, *from, *to)?;
        }
        Commands::Activity { action } => match action {
            ActivityAction::Add { name, color } => {
                activity::add(&mut stdout, &path, name, color)?;
            }
            ActivityAction::Rename { from, to, color } => {
                activity::rename(&mut stdout, &path, from, to, color.as_deref())?;
            }
            ActivityAction::Remove { name } => {
                activity::remove(&mut stdout, &path, name)?;
            }
            ActivityAction::List => {
                activity::list(&mut stdout, &path)?;
            }
        },
        Commands::Resize { slots } => {
            set::resize(&mut stdout, &path, *slots)?;
        }
        Commands::SetStartTime { time } => {
            set::start_time(&mut stdout, &path, time)?;
        }
        Commands::SetSlotDuration { minutes } => {
            set::slot_duration(&mut stdout, &path, *minutes)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
