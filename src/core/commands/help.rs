//! Help and manual page rendering.

use crate::config::layout::{HELP_NAME_WIDTH, MAN_INDENT, OPTION_FLAG_WIDTH};

use super::{CommandDef, CommandRegistry};

fn format_options(def: &CommandDef) -> Option<String> {
    if def.options.is_empty() {
        return None;
    }

    let lines: Vec<String> = def
        .options
        .iter()
        .map(|opt| format!("  {:<width$} {}", opt.flag, opt.desc, width = OPTION_FLAG_WIDTH))
        .collect();
    Some(lines.join("\n"))
}

/// Listing printed by a bare `help`.
pub fn format_listing(registry: &CommandRegistry) -> String {
    let lines: Vec<String> = registry
        .all()
        .iter()
        .map(|def| {
            format!(
                "  {:<width$} {}",
                def.name,
                def.description,
                width = HELP_NAME_WIDTH
            )
        })
        .collect();

    format!(
        "Available commands:\n{}\n\nType 'help <command>' for details.",
        lines.join("\n")
    )
}

/// Detailed block printed by `help <command>`.
pub fn format_help(def: &CommandDef) -> String {
    let mut out = format!(
        "{} - {}\nUsage: {}",
        def.name,
        def.description,
        def.synopsis()
    );
    if let Some(options) = format_options(def) {
        out.push_str("\n\nOptions:\n");
        out.push_str(&options);
    }
    out
}

/// Manual page printed by `man <command>`.
pub fn format_man(def: &CommandDef) -> String {
    let mut sections = vec![
        format!("NAME\n{MAN_INDENT}{} - {}", def.name, def.description),
        format!("SYNOPSIS\n{MAN_INDENT}{}", def.synopsis()),
    ];
    if let Some(options) = format_options(def) {
        sections.push(format!("OPTIONS\n{options}"));
    }

    let mut description = format!("DESCRIPTION\n{MAN_INDENT}{}.", def.description);
    for arg in def.args {
        let kind = match (arg.optional, arg.variadic) {
            (_, true) => "zero or more values",
            (true, false) => "optional",
            (false, false) => "required",
        };
        description.push_str(&format!("\n{MAN_INDENT}{}: {kind}", arg.name));
    }
    sections.push(description);

    sections.join("\n\n")
}
