//! Terminal-facing data types consumed by the prompt UI.

use serde::Serialize;

use super::NodeKind;

/// What a suggestion completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Command name (first token)
    Command,
    /// Declared option of the current command
    Flag,
    /// Directory path
    Dir,
    /// File path
    File,
}

impl From<NodeKind> for SuggestionKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Dir => Self::Dir,
            NodeKind::File => Self::File,
        }
    }
}

/// A single autocomplete candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Suggestion {
    pub fn new(kind: SuggestionKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            hint: None,
        }
    }

    /// Attach a hint shown next to the label.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
