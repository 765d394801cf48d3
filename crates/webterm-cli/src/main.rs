//! webterm CLI
//!
//! Interactive shell over an in-memory filesystem, plus one-shot
//! subcommands for scripted runs and completion queries.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use webterm_cli::{Session, init_tracing, print_suggestions, run_lines, run_repl};

#[derive(Parser)]
#[command(name = "webterm", version, about = "In-memory shell interpreter")]
struct Cli {
    /// Tracing filter (e.g. "debug" or "webterm=trace"); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session (default)
    Repl,
    /// Run command lines in order and exit with the last exit code
    Run {
        #[arg(required = true, value_name = "LINE")]
        lines: Vec<String>,
    },
    /// Print completion suggestions for a partial line
    Suggest {
        #[arg(value_name = "PARTIAL")]
        partial: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<ExitCode> {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(cli.log_level.as_deref()) {
        eprintln!("webterm: invalid --log-level: {err}");
        return Ok(ExitCode::from(2));
    }

    let mut session = Session::new();
    let mut stdout = io::stdout().lock();

    let code = match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let stdin = io::stdin().lock();
            run_repl(&mut session, stdin, &mut stdout).await?
        }
        Command::Run { lines } => run_lines(&mut session, &lines, cli.json, &mut stdout).await?,
        Command::Suggest { partial } => {
            print_suggestions(&session, &partial, cli.json, &mut stdout)?;
            webterm::ExitCode::Success
        }
    };

    Ok(ExitCode::from(code.code()))
}
