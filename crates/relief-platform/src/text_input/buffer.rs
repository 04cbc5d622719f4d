use crate::keys::KeyAction;

use super::types::{EditMode, EditOutcome};

/// The editable text buffer and its placeholder state machine.
#[derive(Debug, Clone)]
pub struct TextInput {
    text: String,
    mode: EditMode,
}

impl TextInput {
    /// Start in `Placeholder` mode showing `placeholder`.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            text: placeholder.into(),
            mode: EditMode::Placeholder,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Apply one key action.
    ///
    /// The first action of any kind clears the placeholder before it is
    /// applied. `DeleteBackward` on an empty buffer is a no-op.
    pub fn apply(&mut self, action: &KeyAction) -> EditOutcome {
        let entered_editing = self.mode == EditMode::Placeholder;
        if entered_editing {
            self.mode = EditMode::Editing;
            self.text.clear();
        }

        let edited = match action {
            KeyAction::Append(s) => {
                self.text.push_str(s);
                true
            }
            KeyAction::DeleteBackward => {
                self.text.pop();
                true
            }
            KeyAction::Ignore => false,
        };

        EditOutcome {
            entered_editing,
            changed: entered_editing || edited,
        }
    }
}
