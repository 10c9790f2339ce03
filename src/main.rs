use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tugas::app::AppContext;
use tugas::cli::{commands, Cli, Commands, HomeworkAction, TaskAction};
use tugas::config::Config;
use tugas::domain::{Homework, HomeworkDraft, Task};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config, cli.db)?;

    match cli.command {
        Commands::Task { action } => match action {
            TaskAction::Add { title } => commands::add_task(&ctx, &title).await?,
            TaskAction::List(args) => commands::list::<Task>(&ctx, args).await?,
            TaskAction::Edit { id, title } => commands::edit_task(&ctx, &id, &title).await?,
            TaskAction::Toggle { id } => commands::toggle::<Task>(&ctx, &id).await?,
            TaskAction::Remove { id } => commands::remove::<Task>(&ctx, &id).await?,
        },
        Commands::Homework { action } => match action {
            HomeworkAction::Add {
                subject,
                title,
                deadline,
            } => {
                commands::add_homework(&ctx, HomeworkDraft::new(subject, title, deadline)).await?
            }
            HomeworkAction::List(args) => commands::list::<Homework>(&ctx, args).await?,
            HomeworkAction::Edit {
                id,
                subject,
                title,
                deadline,
            } => commands::edit_homework(&ctx, &id, subject, title, deadline).await?,
            HomeworkAction::Toggle { id } => commands::toggle::<Homework>(&ctx, &id).await?,
            HomeworkAction::Remove { id } => commands::remove::<Homework>(&ctx, &id).await?,
        },
        Commands::Status => commands::status(&ctx).await?,
    }

    Ok(())
}
