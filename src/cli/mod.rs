pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tugas")]
#[command(about = "Personal task and homework tracker", long_about = None)]
pub struct Cli {
    /// Data location (database file, or directory for the file backend)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file to use instead of ~/.config/tugas/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the personal task list
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Manage the homework list
    Homework {
        #[command(subcommand)]
        action: HomeworkAction,
    },
    /// Show item counts and where data is stored
    Status,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// What needs doing
        title: String,
    },
    /// List tasks
    List(ListArgs),
    /// Change a task's title
    Edit {
        /// Task id
        id: String,
        /// New title
        title: String,
    },
    /// Mark a task done, or pending again
    Toggle {
        /// Task id
        id: String,
    },
    /// Delete a task
    Remove {
        /// Task id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum HomeworkAction {
    /// Add a homework entry
    Add {
        #[arg(short, long)]
        subject: String,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        deadline: String,
    },
    /// List homework
    List(ListArgs),
    /// Change fields of a homework entry; omitted fields keep their value
    Edit {
        /// Homework id
        id: String,
        #[arg(short, long)]
        subject: Option<String>,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// Mark homework done, or pending again
    Toggle {
        /// Homework id
        id: String,
    },
    /// Delete a homework entry
    Remove {
        /// Homework id
        id: String,
    },
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ListArgs {
    /// Only show pending items
    #[arg(long, conflicts_with = "completed")]
    pub pending: bool,

    /// Only show completed items
    #[arg(long)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_homework_add() {
        let cli = Cli::try_parse_from([
            "tugas", "homework", "add", "-s", "Math", "-t", "Algebra", "-d", "Monday",
        ])
        .unwrap();
        match cli.command {
            Commands::Homework {
                action: HomeworkAction::Add { subject, title, deadline },
            } => {
                assert_eq!(subject, "Math");
                assert_eq!(title, "Algebra");
                assert_eq!(deadline, "Monday");
            }
            _ => panic!("expected homework add"),
        }
    }

    #[test]
    fn test_list_filters_conflict() {
        assert!(Cli::try_parse_from(["tugas", "task", "list", "--pending", "--completed"]).is_err());
    }

    #[test]
    fn test_global_db_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["tugas", "task", "list", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    }
}
