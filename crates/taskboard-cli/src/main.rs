mod cli;
mod context;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let ctx = CliContext::new(cli.api_url, cli.token);

    match cli.command {
        Commands::Login { email, password } => {
            handlers::auth::login(&ctx, email, password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            handlers::auth::register(&ctx, name, email, password).await?;
        }
        Commands::Team(team_cmd) => {
            handlers::team::handle(&ctx, team_cmd.action).await?;
        }
        Commands::Project(project_cmd) => {
            handlers::project::handle(&ctx, project_cmd.action).await?;
        }
        Commands::Task(task_cmd) => {
            handlers::task::handle(&ctx, task_cmd.action).await?;
        }
        Commands::Comment(comment_cmd) => {
            handlers::comment::handle(&ctx, comment_cmd.action).await?;
        }
    }

    Ok(())
}
