//! Immutable command table.

use std::collections::HashSet;

use crate::core::error::RegistryError;

use super::{CommandDef, builtins};

/// Lookup table of command definitions, in registration order.
#[derive(Clone, Debug)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
}

impl CommandRegistry {
    /// Build a registry, rejecting duplicate names.
    pub fn new(commands: Vec<CommandDef>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for def in &commands {
            if !seen.insert(def.name) {
                return Err(RegistryError::DuplicateName(def.name.to_string()));
            }
        }
        Ok(Self { commands })
    }

    /// Registry holding the built-in commands.
    pub fn builtin() -> Self {
        Self {
            commands: builtins::commands(),
        }
    }

    /// Find a command by exact name.
    pub fn by_name(&self, name: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|def| def.name == name)
    }

    /// All definitions, in registration order.
    pub fn all(&self) -> &[CommandDef] {
        &self.commands
    }

    /// All command names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|def| def.name).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = CommandRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec!["help", "clear", "echo", "date", "pwd", "ls", "cd", "cat", "grep", "man"]
        );
    }

    #[test]
    fn test_builtin_names_are_unique() {
        assert!(CommandRegistry::new(builtins::commands()).is_ok());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut defs = builtins::commands();
        defs.push(defs[0].clone());
        assert_eq!(
            CommandRegistry::new(defs).unwrap_err(),
            RegistryError::DuplicateName("help".into())
        );
    }

    #[test]
    fn test_by_name_is_exact() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.by_name("grep").map(|d| d.name), Some("grep"));
        assert!(registry.by_name("gre").is_none());
        assert!(registry.by_name("GREP").is_none());
    }
}
