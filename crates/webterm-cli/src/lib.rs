//! Terminal host for the webterm interpreter.
//!
//! A [`Session`] owns the filesystem, the dispatcher and a bounded history
//! of executed lines. [`run_repl`] drives it from a line-oriented reader,
//! [`run_lines`] and [`print_suggestions`] back the one-shot subcommands.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use webterm::config::{MAX_SESSION_HISTORY, PROMPT_SYMBOL};
use webterm::utils::format::{format_duration, format_ms, format_timestamp};
use webterm::{
    Dispatcher, ExecutionResult, ExitCode, Suggestion, VirtualFileSystem, inline_help, suggest,
};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Default filter when neither `--log-level` nor `RUST_LOG` is given.
const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// Logging
// ============================================================================

/// Install a stderr `tracing` subscriber.
///
/// An explicit `level` wins over `RUST_LOG` and must parse as a filter.
pub fn init_tracing(level: Option<&str>) -> Result<(), ParseError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .compact()
        .try_init();
    Ok(())
}

// ============================================================================
// Session
// ============================================================================

/// One line as shown in the session history.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
    pub timestamp: DateTime<Local>,
    pub exit_code: ExitCode,
    pub duration: Duration,
}

/// What a non-blank line produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub result: ExecutionResult,
    /// The command asked the host to clear the screen.
    pub cleared: bool,
}

/// Interpreter state for one terminal.
#[derive(Debug)]
pub struct Session {
    fs: VirtualFileSystem,
    dispatcher: Dispatcher,
    history: VecDeque<HistoryEntry>,
    capacity: usize,
    last_exit: ExitCode,
}

impl Session {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SESSION_HISTORY)
    }

    /// Session keeping at most `capacity` history entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            fs: VirtualFileSystem::new(),
            dispatcher: Dispatcher::default(),
            history: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            last_exit: ExitCode::Success,
        }
    }

    pub fn fs(&self) -> &VirtualFileSystem {
        &self.fs
    }

    /// History entries, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Exit code of the most recent entry.
    pub fn last_exit(&self) -> ExitCode {
        self.last_exit
    }

    pub fn prompt(&self) -> String {
        format!("{} {PROMPT_SYMBOL} ", self.fs.cwd())
    }

    /// Run one line and record it.
    ///
    /// Blank lines record nothing. A clear-screen request empties the
    /// history before the clearing line itself is recorded.
    pub async fn execute(&mut self, line: &str) -> Option<Outcome> {
        let mut cleared = false;
        let result = self
            .dispatcher
            .execute(line, &mut self.fs, &mut || cleared = true)
            .await?;

        if cleared {
            debug!(dropped = self.history.len(), "history cleared");
            self.history.clear();
        }
        self.record(line, &result);

        Some(Outcome { result, cleared })
    }

    /// Record a cancelled line with exit code 130.
    ///
    /// Returns `None` and records nothing when `pending` is blank.
    pub fn interrupt(&mut self, pending: &str) -> Option<&HistoryEntry> {
        if pending.trim().is_empty() {
            return None;
        }
        self.record(pending, &ExecutionResult::interrupted());
        self.history.back()
    }

    pub fn suggest(&self, partial: &str) -> Vec<Suggestion> {
        suggest(partial, &self.fs, self.dispatcher.registry())
    }

    pub fn hint(&self, partial: &str) -> String {
        inline_help(partial, self.dispatcher.registry())
    }

    fn record(&mut self, line: &str, result: &ExecutionResult) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry {
            command: line.to_string(),
            output: result.output.clone(),
            timestamp: Local::now(),
            exit_code: result.exit_code,
            duration: result.duration,
        });
        self.last_exit = result.exit_code;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Drivers
// ============================================================================

/// Interactive loop over `input` until end of input or `:quit`.
///
/// Returns the exit code of the last recorded line.
pub async fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> io::Result<ExitCode> {
    info!("session started");
    let mut buf = String::new();

    loop {
        write!(out, "{}", session.prompt())?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = buf.trim_end_matches(['\n', '\r']);

        match MetaInput::parse(line) {
            Some(MetaInput::Quit) => break,
            Some(MetaInput::Suggest(partial)) => {
                write_suggestions(&session.suggest(partial), out)?;
            }
            Some(MetaInput::Hint(partial)) => writeln!(out, "{}", session.hint(partial))?,
            Some(MetaInput::History) => write_history(session, out)?,
            None => {
                if let Some(outcome) = session.execute(line).await {
                    write_outcome(&outcome, out)?;
                }
            }
        }
    }

    info!(entries = session.history().len(), "session ended");
    Ok(session.last_exit())
}

/// Run `lines` in order on the session.
///
/// Prints each result as text, or as one JSON object per line with `json`.
pub async fn run_lines<W: Write>(
    session: &mut Session,
    lines: &[String],
    json: bool,
    out: &mut W,
) -> io::Result<ExitCode> {
    for line in lines {
        let Some(outcome) = session.execute(line).await else {
            continue;
        };
        if json {
            serde_json::to_writer(&mut *out, &outcome.result)?;
            writeln!(out)?;
        } else {
            write_output(&outcome.result.output, out)?;
        }
    }
    Ok(session.last_exit())
}

/// Print suggestions for `partial`, as text or a JSON array.
pub fn print_suggestions<W: Write>(
    session: &Session,
    partial: &str,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    let suggestions = session.suggest(partial);
    if json {
        serde_json::to_writer(&mut *out, &suggestions)?;
        writeln!(out)
    } else {
        write_suggestions(&suggestions, out)
    }
}

// ============================================================================
// Meta inputs
// ============================================================================

/// REPL-only inputs that never reach the dispatcher.
#[derive(Debug, PartialEq, Eq)]
enum MetaInput<'a> {
    Suggest(&'a str),
    Hint(&'a str),
    History,
    Quit,
}

impl<'a> MetaInput<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let rest = line.strip_prefix(':')?;
        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, arg),
            None => (rest, ""),
        };

        match name {
            "suggest" => Some(Self::Suggest(arg)),
            "hint" => Some(Self::Hint(arg)),
            "history" => Some(Self::History),
            "quit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

fn write_outcome<W: Write>(outcome: &Outcome, out: &mut W) -> io::Result<()> {
    if outcome.cleared {
        write!(out, "{CLEAR_SEQUENCE}")?;
    }
    write_output(&outcome.result.output, out)?;
    writeln!(out, "{}", status_line(&outcome.result))
}

/// Write command output, ending it with exactly the newline it lacks.
fn write_output<W: Write>(text: &str, out: &mut W) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    write!(out, "{text}")?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

fn status_line(result: &ExecutionResult) -> String {
    format!(
        "[exit {} | {}]",
        result.exit_code.code(),
        format_duration(result.duration)
    )
}

fn write_suggestions<W: Write>(suggestions: &[Suggestion], out: &mut W) -> io::Result<()> {
    for s in suggestions {
        match &s.hint {
            Some(hint) => writeln!(out, "{:<24} {hint}", s.label)?,
            None => writeln!(out, "{}", s.label)?,
        }
    }
    Ok(())
}

fn write_history<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    for (i, entry) in session.history().enumerate() {
        writeln!(
            out,
            "{:>4}  {}  [{}]  {:>9}  {}",
            i + 1,
            format_timestamp(&entry.timestamp),
            entry.exit_code.code(),
            format_ms(entry.duration, 2),
            entry.command
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_execute_records_history() {
        let mut session = Session::new();
        let outcome = session.execute("pwd").await.unwrap();
        assert_eq!(outcome.result.output, "/home/dev");
        assert!(!outcome.cleared);

        let entries: Vec<_> = session.history().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].command, "pwd");
        assert_eq!(entries[0].output, "/home/dev");
        assert_eq!(entries[0].exit_code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_blank_line_records_nothing() {
        let mut session = Session::new();
        assert!(session.execute("   ").await.is_none());
        assert_eq!(session.history().len(), 0);
    }

    #[tokio::test]
    async fn test_clear_empties_history() {
        let mut session = Session::new();
        session.execute("pwd").await;
        session.execute("ls").await;

        let outcome = session.execute("clear").await.unwrap();
        assert!(outcome.cleared);
        let commands: Vec<_> = session.history().map(|e| e.command.as_str()).collect();
        assert_eq!(commands, vec!["clear"]);
    }

    #[tokio::test]
    async fn test_history_drops_oldest() {
        let mut session = Session::with_capacity(2);
        session.execute("echo a").await;
        session.execute("echo b").await;
        session.execute("echo c").await;

        let outputs: Vec<_> = session.history().map(|e| e.output.as_str()).collect();
        assert_eq!(outputs, vec!["b\n", "c\n"]);
    }

    #[tokio::test]
    async fn test_last_exit_tracks_latest_line() {
        let mut session = Session::new();
        session.execute("bogus").await;
        assert_eq!(session.last_exit(), ExitCode::Failure);
        session.execute("pwd").await;
        assert_eq!(session.last_exit(), ExitCode::Success);
    }

    #[test]
    fn test_interrupt() {
        let mut session = Session::new();
        assert!(session.interrupt("  ").is_none());

        let entry = session.interrupt("cat notes").unwrap();
        assert_eq!(entry.command, "cat notes");
        assert_eq!(entry.output, "");
        assert_eq!(entry.exit_code.code(), 130);
        assert_eq!(session.last_exit(), ExitCode::Interrupted);
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        assert!(init_tracing(Some("webterm=loud")).is_err());
    }

    #[tokio::test]
    async fn test_repl_history_lists_entries() {
        let mut session = Session::new();
        session.interrupt("cat no");
        let input: &[u8] = b"pwd\n:history\n";
        let mut out = Vec::new();

        run_repl(&mut session, input, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  [130]  "));
        assert!(text.contains(" ms  cat no\n"));
        assert!(text.contains(" ms  pwd\n"));
    }

    #[test]
    fn test_meta_input_parse() {
        assert_eq!(
            MetaInput::parse(":suggest cat "),
            Some(MetaInput::Suggest("cat "))
        );
        assert_eq!(MetaInput::parse(":hint"), Some(MetaInput::Hint("")));
        assert_eq!(MetaInput::parse(":history"), Some(MetaInput::History));
        assert_eq!(MetaInput::parse(":q"), Some(MetaInput::Quit));
        assert_eq!(MetaInput::parse(":nope"), None);
        assert_eq!(MetaInput::parse("ls"), None);
    }

    #[tokio::test]
    async fn test_repl_runs_until_eof() {
        let mut session = Session::new();
        let input: &[u8] = b"cd projects\npwd\n:hint cat \nbogus\n";
        let mut out = Vec::new();

        let code = run_repl(&mut session, input, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(code, ExitCode::Failure);
        assert!(text.contains("/home/dev $ "));
        assert!(text.contains("/home/dev/projects $ "));
        assert!(text.contains("/home/dev/projects\n[exit 0 | "));
        assert!(text.contains("cat <file>\n"));
        assert!(text.contains("bogus: command not found\n[exit 1 | "));
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn test_repl_quit_stops_reading() {
        let mut session = Session::new();
        let input: &[u8] = b":quit\npwd\n";
        let mut out = Vec::new();

        run_repl(&mut session, input, &mut out).await.unwrap();
        assert_eq!(session.history().len(), 0);
    }

    #[tokio::test]
    async fn test_repl_clear_writes_escape() {
        let mut session = Session::new();
        let input: &[u8] = b"clear\n";
        let mut out = Vec::new();

        run_repl(&mut session, input, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains(CLEAR_SEQUENCE));
    }

    #[tokio::test]
    async fn test_run_lines_text_and_exit() {
        let mut session = Session::new();
        let mut out = Vec::new();

        let code = run_lines(
            &mut session,
            &lines(&["cd projects", "pwd", "cat nope"]),
            false,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(code, ExitCode::Failure);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/home/dev/projects\ncat: nope: No such file\n"
        );
    }

    #[tokio::test]
    async fn test_run_lines_json() {
        let mut session = Session::new();
        let mut out = Vec::new();

        run_lines(&mut session, &lines(&["echo hi"]), true, &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["output"], "hi\n");
        assert_eq!(value["exitCode"], 0);
    }

    #[test]
    fn test_print_suggestions_json() {
        let session = Session::new();
        let mut out = Vec::new();

        print_suggestions(&session, "ec", true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["kind"], "command");
        assert_eq!(value[0]["label"], "echo");
    }

    #[test]
    fn test_print_suggestions_text() {
        let session = Session::new();
        let mut out = Vec::new();

        print_suggestions(&session, "ls -", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("-l"));
        assert!(text.trim_end().ends_with("option"));
    }
}
