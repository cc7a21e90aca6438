use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use twig::areas::repository::Repository;
use twig::artifacts::core::clock::Clock;
use twig::artifacts::objects::object::ObjectBox;

/// Environment variable holding the log filter, e.g. `TWIG_LOG=twig=debug`
const LOG_ENV: &str = "TWIG_LOG";

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small local version control system",
    long_about = "twig records snapshots of a project directory, organizes them into \
    branches and merges them back together. It works on a single machine for a \
    single user: there are no remotes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "PATH",
        help = "Run as if twig was started in <PATH>"
    )]
    directory: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_name = "FILTER",
        help = "Log filter used when TWIG_LOG is unset (e.g. debug)"
    )]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .twig directory, the root commit and the master branch."
    )]
    Init,
    #[command(name = "add", about = "Stage the content of files for the next commit")]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, and stop tracking it",
        long_about = "This command unstages a file. If the current commit tracks the file, \
        it is staged for removal and deleted from the working directory."
    )]
    Rm {
        #[arg(index = 1)]
        path: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the first-parent history of HEAD")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of the commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged changes and working copy changes")]
    Status,
    #[command(name = "branch", about = "Create, delete or list branches")]
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "With a branch name, this command switches the working copy to that branch. \
        With `-- <file>`, it restores the file from HEAD, or from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or the commit to restore a file from")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<PathBuf>,
    },
    #[command(name = "reset", about = "Check out a commit and move the current branch to it")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge the given branch into the current one")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the id of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object id to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command hashes a file as a blob and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum BranchAction {
    #[command(about = "Create a branch at HEAD, or at the given revision")]
    Create {
        #[arg(index = 1)]
        name: String,
        #[arg(index = 2)]
        start: Option<String>,
    },
    #[command(about = "Delete a branch pointer")]
    Delete {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "List branches")]
    List,
}

fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let root = match &cli.directory {
        Some(directory) => directory.clone(),
        None => std::env::current_dir()?,
    };
    let repository = Repository::new(&root)?.with_clock(Clock::from_env());

    match &cli.command {
        Commands::Init => {
            repository.init()?;
            println!(
                "Initialized empty twig repository in {}",
                repository.repository_path().display()
            );
        }
        Commands::Add { paths } => repository.add(paths)?,
        Commands::Rm { path } => repository.rm(path)?,
        Commands::Commit { message } => println!("{}", repository.commit(message)?),
        Commands::Log => {
            for entry in repository.log()? {
                println!("{entry}");
            }
        }
        Commands::GlobalLog => {
            for entry in repository.global_log()? {
                println!("{entry}");
            }
        }
        Commands::Find { message } => {
            for oid in repository.find(message)? {
                println!("{oid}");
            }
        }
        Commands::Status => println!("{}", repository.status()?),
        Commands::Branch { action } => match action {
            BranchAction::Create { name, start } => {
                repository.create_branch(name, start.as_deref())?;
            }
            BranchAction::Delete { name } => {
                let oid = repository.delete_branch(name)?;
                println!("Deleted branch {name} (was {}).", oid.to_short_oid());
            }
            BranchAction::List => println!("{}", repository.list_branches()?),
        },
        Commands::Checkout { target, file } => match (target, file) {
            (revision, Some(file)) => repository.checkout_file(revision.as_deref(), file)?,
            (Some(branch), None) => {
                let branch = repository.checkout_branch(branch)?;
                eprintln!("Switched to branch '{branch}'");
            }
            (None, None) => anyhow::bail!("checkout needs a branch name or `-- <file>`"),
        },
        Commands::Reset { commit } => {
            let oid = repository.reset(commit)?;
            eprintln!("HEAD is now at {}", oid.to_short_oid());
        }
        Commands::Merge { branch } => println!("{}", repository.merge(branch)?),
        Commands::CatFile { sha } => match repository.cat_file(sha)? {
            ObjectBox::Blob(blob) => std::io::stdout().write_all(blob.content())?,
            commit => println!("{}", commit.display()),
        },
        Commands::HashObject { write, file } => {
            println!("{}", repository.hash_object(file, *write)?)
        }
    }

    Ok(())
}
