use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sysutils::{AccessMask, Error};

/// Command-line surface over the sysutils library.
#[derive(Parser)]
#[command(name = "sysutils", version, about = "Small filesystem utilities: access checks, cwd, safe temp files, removal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check access permissions on a path; exits 0 when granted.
    Check {
        path: String,
        /// Capabilities to probe, a string over "rwx".
        #[arg(short, long, default_value = "r")]
        mode: String,
    },
    /// Print the current working directory.
    Cwd,
    /// Create a uniquely named empty temporary file and print its path.
    Mktemp {
        /// Directory to create the file in; defaults to the current
        /// working directory. Must already exist.
        dir: Option<String>,
    },
    /// Remove a file, or a directory if it is empty.
    Rm { path: String },
    /// Join two path components with a single separator.
    Join { first: String, last: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        // A malformed request is a defect in the invocation, not in the
        // environment; give it a distinct exit code so scripts can tell.
        Err(err) if err.is_request_error() => {
            eprintln!("sysutils: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("sysutils: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Check { path, mode } => {
            let mask: AccessMask = mode.parse()?;
            sysutils::check_access(&path, mask)?;
        }
        Command::Cwd => {
            println!("{}", sysutils::current_dir()?.display());
        }
        Command::Mktemp { dir } => {
            let path = match dir {
                Some(dir) => sysutils::create_temp_file_in(dir)?,
                None => sysutils::create_temp_file()?,
            };
            println!("{}", path.display());
        }
        Command::Rm { path } => {
            sysutils::remove_path(&path)?;
        }
        Command::Join { first, last } => {
            println!("{}", sysutils::path_join(&first, &last)?);
        }
    }
    Ok(())
}
