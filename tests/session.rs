//! End-to-end behavior of the interpreter through its public surface.

use webterm::{
    Dispatcher, ExecutionResult, ExitCode, SuggestionKind, VirtualFileSystem, apply_suggestion,
    inline_help, suggest, tokenize,
};

async fn exec(
    dispatcher: &Dispatcher,
    fs: &mut VirtualFileSystem,
    line: &str,
) -> ExecutionResult {
    dispatcher
        .execute(line, fs, &mut || {})
        .await
        .expect("line is not blank")
}

#[test]
fn test_tokenize_quotes_and_escapes() {
    assert_eq!(tokenize(r#"echo "a b" c\ d"#), vec!["echo", "a b", "c d"]);
}

#[test]
fn test_resolve_path_stops_at_root() {
    let fs = VirtualFileSystem::new();
    assert_eq!(fs.resolve_path(Some("../../..")), "/");
}

#[tokio::test]
async fn test_ls_long_reports_content_length() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    let readme_len = fs.read_file(Some("readme.txt")).unwrap().chars().count();

    let result = exec(&dispatcher, &mut fs, "ls -l").await;
    assert_eq!(result.exit_code, ExitCode::Success);
    let line = result
        .output
        .lines()
        .find(|l| l.ends_with("  readme.txt"))
        .expect("readme.txt listed");
    assert!(line.starts_with("-rwxr-xr-x  dev  dev"));
    assert!(line.contains(&format!("  {readme_len}  ")));
}

#[tokio::test]
async fn test_cd_then_pwd() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();

    let cd = exec(&dispatcher, &mut fs, "cd projects/web-terminal").await;
    assert_eq!((cd.output.as_str(), cd.exit_code), ("", ExitCode::Success));

    let pwd = exec(&dispatcher, &mut fs, "pwd").await;
    assert_eq!(pwd.output, "/home/dev/projects/web-terminal");
}

#[tokio::test]
async fn test_unknown_command() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    let result = exec(&dispatcher, &mut fs, "bogus").await;
    assert_eq!(result.output, "bogus: command not found");
    assert_eq!(result.exit_code.code(), 1);
}

#[tokio::test]
async fn test_cat_missing_file() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    let result = exec(&dispatcher, &mut fs, "cat missing.txt").await;
    assert_eq!(result.output, "cat: missing.txt: No such file");
    assert_eq!(result.exit_code, ExitCode::Failure);
}

#[tokio::test]
async fn test_invalid_regex_is_handler_failure() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    let result = exec(&dispatcher, &mut fs, "grep [ notes.md").await;
    assert!(result.output.starts_with("Error: Invalid regular expression"));
    assert_eq!(result.exit_code, ExitCode::Failure);
}

#[tokio::test]
async fn test_clear_calls_host() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    let mut cleared = false;

    let result = dispatcher
        .execute("clear", &mut fs, &mut || cleared = true)
        .await
        .unwrap();
    assert_eq!(result.output, "");
    assert!(cleared);
}

#[tokio::test]
async fn test_suggestions_follow_cwd() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    exec(&dispatcher, &mut fs, "cd projects").await;

    let labels: Vec<_> = suggest("cd ", &fs, dispatcher.registry())
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, vec!["web-terminal/"]);
}

#[test]
fn test_suggest_commands_and_files() {
    let dispatcher = Dispatcher::default();
    let fs = VirtualFileSystem::new();

    let commands = suggest("gr", &fs, dispatcher.registry());
    assert!(
        commands
            .iter()
            .any(|s| s.kind == SuggestionKind::Command && s.label == "grep")
    );
    assert!(commands.iter().all(|s| s.label.starts_with("gr")));

    let files = suggest("cat re", &fs, dispatcher.registry());
    assert!(
        files
            .iter()
            .any(|s| s.kind == SuggestionKind::File && s.label == "readme.txt")
    );

    assert_eq!(files, suggest("cat re", &fs, dispatcher.registry()));
}

#[test]
fn test_accepting_a_suggestion_moves_to_arguments() {
    let dispatcher = Dispatcher::default();
    let fs = VirtualFileSystem::new();

    let line = apply_suggestion("ca", "cat");
    assert_eq!(line, "cat ");
    assert_eq!(inline_help(&line, dispatcher.registry()), "cat <file>");

    let next = suggest(&line, &fs, dispatcher.registry());
    assert!(next.iter().all(|s| s.kind != SuggestionKind::Command));
}

#[test]
fn test_suggestion_json_shape() {
    let dispatcher = Dispatcher::default();
    let fs = VirtualFileSystem::new();
    let suggestions = suggest("cat re", &fs, dispatcher.registry());

    let json = serde_json::to_value(&suggestions).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "kind": "file", "label": "readme.txt", "hint": "file" }])
    );
}

#[tokio::test]
async fn test_execution_result_json_shape() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    let result = exec(&dispatcher, &mut fs, "pwd").await;

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["output"], "/home/dev");
    assert_eq!(json["exitCode"], 0);
    assert!(json["durationMs"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_unknown_help_topics_are_plain_output() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();

    for (line, expected) in [
        ("help nope", "No such command: nope"),
        ("man nope", "No manual entry for nope"),
        ("man", "What manual page do you want?"),
    ] {
        let result = exec(&dispatcher, &mut fs, line).await;
        assert_eq!(result.output, expected);
        assert_eq!(result.exit_code, ExitCode::Success);
    }
}

#[tokio::test]
async fn test_cd_empty_argument_returns_home() {
    let dispatcher = Dispatcher::default();
    let mut fs = VirtualFileSystem::new();
    exec(&dispatcher, &mut fs, "cd projects").await;

    let cd = exec(&dispatcher, &mut fs, r#"cd """#).await;
    assert_eq!(cd.exit_code, ExitCode::Success);
    assert_eq!(fs.cwd(), "/home/dev");
}
