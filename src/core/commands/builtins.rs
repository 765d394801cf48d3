//! Built-in command handlers.
//!
//! Each handler reads the filesystem and arguments from its
//! `CommandContext` and returns text. Missing paths and wrong node types
//! are reported as `CommandOutput::failure`; only invalid input the
//! handler cannot describe itself (a bad regex) surfaces as an error.

use regex::RegexBuilder;

use crate::config::layout::LS_SIZE_WIDTH;
use crate::config::{DISPLAY_GROUP, DISPLAY_PERMISSIONS, DISPLAY_USER, HOME_DIR};
use crate::models::FsNode;
use crate::utils::format::now_str;

use super::{
    CommandArg, CommandContext, CommandDef, CommandOption, CommandOutput, Handler, HandlerResult,
    format_help, format_listing, format_man,
};

const GREP_USAGE: &str = "usage: grep [-i] <pattern> <file>";

const TOPIC_ARG: &[CommandArg] = &[CommandArg::optional("command")];
const TEXT_ARGS: &[CommandArg] = &[CommandArg::variadic("text")];
const PATH_ARG: &[CommandArg] = &[CommandArg::optional("path")];
const FILE_ARG: &[CommandArg] = &[CommandArg::required("file")];
const GREP_ARGS: &[CommandArg] = &[
    CommandArg::required("pattern"),
    CommandArg::required("file"),
];
const MAN_ARG: &[CommandArg] = &[CommandArg::required("command")];

/// Built-in command table, in listing order.
pub fn commands() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "help",
            description: "Show help for commands",
            usage: Some("help [command]"),
            options: &[],
            args: TOPIC_ARG,
            handler: Handler::Sync(help),
        },
        CommandDef {
            name: "clear",
            description: "Clear the screen",
            usage: Some("clear"),
            options: &[],
            args: &[],
            handler: Handler::Sync(clear),
        },
        CommandDef {
            name: "echo",
            description: "Print arguments",
            usage: Some("echo [args...]"),
            options: &[CommandOption {
                flag: "-n",
                desc: "no trailing newline",
            }],
            args: TEXT_ARGS,
            handler: Handler::Sync(echo),
        },
        CommandDef {
            name: "date",
            description: "Print current date & time",
            usage: Some("date"),
            options: &[],
            args: &[],
            handler: Handler::Sync(date),
        },
        CommandDef {
            name: "pwd",
            description: "Print working directory",
            usage: Some("pwd"),
            options: &[],
            args: &[],
            handler: Handler::Sync(pwd),
        },
        CommandDef {
            name: "ls",
            description: "List directory contents",
            usage: Some("ls [path]"),
            options: &[CommandOption {
                flag: "-l",
                desc: "long format",
            }],
            args: PATH_ARG,
            handler: Handler::Sync(ls),
        },
        CommandDef {
            name: "cd",
            description: "Change directory",
            usage: Some("cd [path]"),
            options: &[],
            args: PATH_ARG,
            handler: Handler::Sync(cd),
        },
        CommandDef {
            name: "cat",
            description: "Concatenate and print files",
            usage: Some("cat <file>"),
            options: &[],
            args: FILE_ARG,
            handler: Handler::Sync(cat),
        },
        CommandDef {
            name: "grep",
            description: "Search for PATTERN in files (demo)",
            usage: Some("grep <pattern> <file>"),
            options: &[CommandOption {
                flag: "-i",
                desc: "ignore case",
            }],
            args: GREP_ARGS,
            handler: Handler::Sync(grep),
        },
        CommandDef {
            name: "man",
            description: "Show detailed help (demo)",
            usage: Some("man <command>"),
            options: &[],
            args: MAN_ARG,
            handler: Handler::Sync(man),
        },
    ]
}

fn help(ctx: &mut CommandContext<'_>) -> HandlerResult {
    let Some(name) = ctx.args().first() else {
        return Ok(CommandOutput::success(format_listing(ctx.registry)));
    };

    Ok(match ctx.registry.by_name(name) {
        Some(def) => CommandOutput::success(format_help(def)),
        None => CommandOutput::success(format!("No such command: {name}")),
    })
}

fn man(ctx: &mut CommandContext<'_>) -> HandlerResult {
    let Some(name) = ctx.args().first() else {
        return Ok(CommandOutput::success("What manual page do you want?"));
    };

    Ok(match ctx.registry.by_name(name) {
        Some(def) => CommandOutput::success(format_man(def)),
        None => CommandOutput::success(format!("No manual entry for {name}")),
    })
}

fn clear(ctx: &mut CommandContext<'_>) -> HandlerResult {
    ctx.clear_screen();
    Ok(CommandOutput::empty())
}

fn echo(ctx: &mut CommandContext<'_>) -> HandlerResult {
    let words: Vec<&str> = ctx
        .args()
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "-n")
        .collect();

    let mut text = words.join(" ");
    if !ctx.has_flag("-n") {
        text.push('\n');
    }
    Ok(CommandOutput::success(text))
}

fn date(_: &mut CommandContext<'_>) -> HandlerResult {
    Ok(CommandOutput::success(now_str()))
}

fn pwd(ctx: &mut CommandContext<'_>) -> HandlerResult {
    Ok(CommandOutput::success(ctx.fs.cwd()))
}

fn ls(ctx: &mut CommandContext<'_>) -> HandlerResult {
    let long = ctx.has_flag("-l");
    let target = ctx
        .args()
        .iter()
        .map(String::as_str)
        .find(|arg| *arg != "-l");

    let Ok((node, full)) = ctx.fs.get_node(target) else {
        return Ok(CommandOutput::failure(format!(
            "ls: cannot access '{}': No such file or directory",
            target.unwrap_or_default()
        )));
    };

    let children = match node {
        FsNode::File { .. } => {
            return Ok(CommandOutput::success(target.map_or(full, str::to_string)));
        }
        FsNode::Dir { children } => children,
    };

    let lines: Vec<String> = if long {
        children
            .iter()
            .map(|(name, child)| {
                format!(
                    "{}{DISPLAY_PERMISSIONS}  {DISPLAY_USER}  {DISPLAY_GROUP}  {:>width$}  {name}",
                    child.kind().type_char(),
                    child.size(),
                    width = LS_SIZE_WIDTH
                )
            })
            .collect()
    } else {
        children.keys().cloned().collect()
    };

    let separator = if long { "\n" } else { "  " };
    Ok(CommandOutput::success(lines.join(separator)))
}

fn cd(ctx: &mut CommandContext<'_>) -> HandlerResult {
    let target = ctx
        .args()
        .first()
        .map(String::as_str)
        .filter(|arg| !arg.is_empty())
        .unwrap_or(HOME_DIR);

    Ok(match ctx.fs.change_dir(target) {
        Ok(_) => CommandOutput::empty(),
        Err(_) => CommandOutput::failure(format!("cd: no such directory: {target}")),
    })
}

fn cat(ctx: &mut CommandContext<'_>) -> HandlerResult {
    let Some(file) = ctx.args().first() else {
        return Ok(CommandOutput::failure("cat: missing file operand"));
    };

    Ok(match ctx.fs.read_file(Some(file.as_str())) {
        Ok(content) => CommandOutput::success(content),
        Err(_) => CommandOutput::failure(format!("cat: {file}: No such file")),
    })
}

fn grep(ctx: &mut CommandContext<'_>) -> HandlerResult {
    let ignore_case = ctx.has_flag("-i");
    let mut operands = ctx.args().iter().filter(|arg| !arg.starts_with('-'));
    let (Some(pattern), Some(file)) = (operands.next(), operands.next()) else {
        return Ok(CommandOutput::failure(GREP_USAGE));
    };

    let Ok(content) = ctx.fs.read_file(Some(file.as_str())) else {
        return Ok(CommandOutput::failure(format!(
            "grep: {file}: No such file"
        )));
    };

    let re = RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()?;
    let matches: Vec<&str> = content
        .split('\n')
        .filter(|line| re.is_match(line))
        .collect();
    Ok(CommandOutput::success(matches.join("\n")))
}

// =============================================================================
// Tests
// =============================================================================
