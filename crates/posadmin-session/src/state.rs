//! Selection and dirty state as one explicit value object.

use std::fmt;

/// The action a form is currently performing. Any mode is reachable from
/// any other via an explicit user action; the form is long-lived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMode {
    Add,
    Edit,
    Delete,
    Search,
    Copy,
}

impl ActionMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Search => "Search",
            Self::Copy => "Copy",
        }
    }

    /// Modes that operate on an existing record and therefore need a
    /// selection before they can be entered.
    pub fn needs_selection(&self) -> bool {
        matches!(self, Self::Edit | Self::Delete | Self::Search | Self::Copy)
    }
}

impl fmt::Display for ActionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the form session stands: current action, the single selected
/// record (if any), and whether the working form has unsaved changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub action: ActionMode,
    pub selected: Option<usize>,
    pub dirty: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            action: ActionMode::Add,
            selected: None,
            dirty: false,
        }
    }

    /// Back to the initial state: Add mode, nothing selected, clean form.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn invalidate_selection(&mut self) {
        self.selected = None;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
