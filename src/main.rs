use bough::Repository;
use bough::artifacts::core::{PagerWriter, should_page};
use bough::commands::render::{write_log_entry, write_merge_outcome, write_status};
use bough::errors::BoughError;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "BOUGH_LOG";

#[derive(Parser)]
#[command(
    name = "bough",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small local version-control system",
    long_about = "Bough tracks snapshots of a working directory in a content-addressed \
    object store, with a staging index, named branches and three-way merges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Create a repository in the current directory")]
    Init,
    #[command(name = "add", about = "Stage the current content of a file")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes as a new commit",
        long_about = "Creates a child of HEAD from the staged additions and removals, \
        moves the current branch to it and clears the staging index."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or stage its removal and delete it"
    )]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show history from HEAD along first parents")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged changes and working files")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "`checkout -- <file>` restores a file from HEAD, \
        `checkout <commit> -- <file>` restores it from an abbreviated commit id, \
        `checkout <branch>` switches to another branch."
    )]
    Checkout {
        #[arg(help = "Branch name, or commit id when a file follows")]
        target: Option<String>,
        #[arg(last = true, help = "File to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at HEAD")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch and the working directory to a commit"
    )]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout_is_terminal = std::io::stdout().is_terminal();
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli.command, stdout_is_terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(kind = ?error.kind(), "command failed");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, stdout_is_terminal: bool) -> bough::Result<()> {
    let pwd = std::env::current_dir()?;

    if let Commands::Init = command {
        let repository = Repository::new(&pwd)?;
        repository.init()?;
        println!(
            "Initialized empty Bough repository in {}",
            repository.state_path().display()
        );
        return Ok(());
    }

    let repository = Repository::open(&pwd)?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Init => {}
        Commands::Add { file } => {
            repository.stage_file(&file)?;
        }
        Commands::Commit { message } => {
            let commit_id = repository.commit(&message)?;
            let branch = repository.refs().current_branch()?;
            writeln!(stdout, "[{branch} {}] {message}", commit_id.to_short_oid())?;
        }
        Commands::Rm { file } => {
            repository.remove_file(&file)?;
        }
        Commands::Log => {
            drop(stdout);
            page(stdout_is_terminal, |writer| {
                for entry in repository.log_from_head()? {
                    let (oid, commit) = entry?;
                    write_log_entry(writer, &oid, &commit)?;
                }
                Ok(())
            })?;
        }
        Commands::GlobalLog => {
            drop(stdout);
            page(stdout_is_terminal, |writer| {
                for (oid, commit) in repository.log_all()? {
                    write_log_entry(writer, &oid, &commit)?;
                }
                Ok(())
            })?;
        }
        Commands::Find { message } => {
            for oid in repository.find_by_message(&message)? {
                writeln!(stdout, "{oid}")?;
            }
        }
        Commands::Status => {
            write_status(&mut stdout, &repository.status()?)?;
        }
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(&file)?,
            (Some(commit), Some(file)) => repository.checkout_commit_file(&commit, &file)?,
            (Some(branch), None) => repository.checkout_branch(&branch)?,
            (None, None) => {
                return Err(BoughError::UserInput(
                    "Incorrect operands. Usage: checkout [<commit>] -- <file> | checkout <branch>"
                        .to_string(),
                ));
            }
        },
        Commands::Branch { name } => {
            repository.create_branch(&name)?;
        }
        Commands::RmBranch { name } => {
            repository.delete_branch(&name)?;
        }
        Commands::Reset { commit } => {
            repository.reset(&commit)?;
        }
        Commands::Merge { branch } => {
            let outcome = repository.merge(&branch)?;
            write_merge_outcome(&mut stdout, &outcome)?;
        }
    }

    Ok(())
}

/// Run `render` against the pager when stdout is a terminal, stdout otherwise
fn page(
    stdout_is_terminal: bool,
    render: impl FnOnce(&mut dyn Write) -> bough::Result<()>,
) -> bough::Result<()> {
    if should_page(stdout_is_terminal) {
        let pager = minus::Pager::new();
        let mut writer = PagerWriter::new(pager.clone());
        render(&mut writer)?;
        minus::page_all(pager).map_err(anyhow::Error::from)?;
    } else {
        render(&mut std::io::stdout().lock())?;
    }

    Ok(())
}
