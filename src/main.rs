//! Bonustrack CLI - Track users through bonus workflows

use bonustrack::cli::{BonusAction, Cli, Commands};
use bonustrack::errors::to_exit_code;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> bonustrack::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => bonustrack::cli::commands::init::run(cwd, force).await,
        Some(Commands::States { filter, json }) => {
            bonustrack::cli::commands::states::run(cwd, filter, json).await
        }
        Some(Commands::Parse { raw, strict }) => {
            bonustrack::cli::commands::parse::run(cwd, &raw, strict).await
        }
        Some(Commands::Progress { state, workflow }) => {
            bonustrack::cli::commands::progress::run(cwd, &state, workflow.as_deref()).await
        }
        Some(Commands::Next { state, workflow }) => {
            bonustrack::cli::commands::next::run(cwd, &state, workflow.as_deref()).await
        }
        Some(Commands::Bonus { action }) => match action {
            BonusAction::Add {
                id,
                title,
                workflow,
                points,
                description,
            } => {
                bonustrack::cli::commands::bonus::add(
                    cwd,
                    &id,
                    &title,
                    workflow.as_deref(),
                    points,
                    description,
                )
                .await
            }
            BonusAction::List { json } => bonustrack::cli::commands::bonus::list(cwd, json).await,
            BonusAction::Show { id, json } => {
                bonustrack::cli::commands::bonus::show(cwd, &id, json).await
            }
        },
        Some(Commands::Status {
            bonus_id,
            user_id,
            json,
        }) => bonustrack::cli::commands::status::run(cwd, &bonus_id, &user_id, json).await,
        Some(Commands::Set {
            bonus_id,
            user_id,
            state,
            force,
            notes,
        }) => {
            bonustrack::cli::commands::set::run(cwd, &bonus_id, &user_id, &state, force, notes)
                .await
        }
        Some(Commands::Submissions { bonus_id, json }) => {
            bonustrack::cli::commands::submissions::run(cwd, &bonus_id, json).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
