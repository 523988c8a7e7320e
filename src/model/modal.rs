//! Modal stack for overlays
//!
//! Every dialog (confirmations, text prompts, the two-field forms) is a
//! `Modal` variant carrying its own input buffers, pushed onto a stack so
//! only the top overlay receives input.

/// Which field of a two-field form currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    First,
    Second,
}

impl FormFocus {
    pub fn toggle(self) -> FormFocus {
        match self {
            FormFocus::First => FormFocus::Second,
            FormFocus::Second => FormFocus::First,
        }
    }
}

/// Which amount of a budget line is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Estimated,
    Actual,
}

impl AmountField {
    pub fn label(&self) -> &'static str {
        match self {
            AmountField::Estimated => "Estimated",
            AmountField::Actual => "Actual",
        }
    }
}

/// Which format a path prompt imports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    StateJson,
    RosterCsv,
}

/// A modal overlay on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Reset-to-sample-data confirmation dialog
    ResetConfirm,
    /// Keyboard shortcut reference
    Help { scroll_offset: usize },
    /// Quick-entry prompt for a new task
    TaskEntry { input: String },
    /// Event date prompt (YYYY-MM-DD, blank clears)
    EventDate { input: String },
    /// Two-field form for a new roster entry
    RosterForm {
        name: String,
        role: String,
        focus: FormFocus,
    },
    /// Two-field form for a new budget line
    BudgetForm {
        item: String,
        estimate: String,
        focus: FormFocus,
    },
    /// Edit one amount of an existing budget line
    AmountEdit {
        id: String,
        field: AmountField,
        input: String,
    },
    /// File path prompt for JSON or roster CSV import
    ImportPath { kind: ImportKind, input: String },
}

/// A stack of modal overlays; only the top one receives input
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Help { scroll_offset: 0 });

        assert_eq!(stack.pop(), Some(Modal::Help { scroll_offset: 0 }));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_input_buffer_edited_through_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::TaskEntry {
            input: String::new(),
        });

        if let Some(Modal::TaskEntry { input }) = stack.top_mut() {
            input.push('a');
            input.push('b');
        }

        assert_eq!(
            stack.top(),
            Some(&Modal::TaskEntry {
                input: "ab".to_string()
            })
        );
    }
}
