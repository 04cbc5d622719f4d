//! Text buffer edited by key presses.
//!
//! [`TextInput`] starts out showing a placeholder phrase. The first key press
//! of any kind discards the placeholder for good; after that the buffer
//! holds exactly what the user typed.

mod buffer;
mod types;

pub use buffer::TextInput;
pub use types::{EditMode, EditOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyAction;

    fn append(s: &str) -> KeyAction {
        KeyAction::Append(s.to_string())
    }

    #[test]
    fn starts_with_placeholder() {
        let input = TextInput::new("This is Three.js");
        assert_eq!(input.text(), "This is Three.js");
        assert_eq!(input.mode(), EditMode::Placeholder);
    }

    #[test]
    fn typing_hi_replaces_placeholder() {
        let mut input = TextInput::new("This is Three.js");
        let first = input.apply(&append("h"));
        assert!(first.entered_editing);
        assert!(first.changed);
        let second = input.apply(&append("i"));
        assert!(!second.entered_editing);
        assert_eq!(input.text(), "hi");
        assert_eq!(input.mode(), EditMode::Editing);
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut input = TextInput::new("placeholder");
        input.apply(&append("a"));
        input.apply(&append("b"));
        input.apply(&KeyAction::DeleteBackward);
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn backspace_as_first_event_gives_empty_editing_buffer() {
        let mut input = TextInput::new("This is Three.js");
        let outcome = input.apply(&KeyAction::DeleteBackward);
        assert!(outcome.entered_editing);
        assert_eq!(input.text(), "");
        assert_eq!(input.mode(), EditMode::Editing);
    }

    #[test]
    fn backspace_on_empty_buffer_stays_empty() {
        let mut input = TextInput::new("");
        for _ in 0..5 {
            input.apply(&KeyAction::DeleteBackward);
        }
        assert_eq!(input.text(), "");
    }

    #[test]
    fn ignored_key_in_placeholder_still_clears() {
        let mut input = TextInput::new("This is Three.js");
        let outcome = input.apply(&KeyAction::Ignore);
        assert!(outcome.changed);
        assert_eq!(input.text(), "");
        // A second ignored key changes nothing.
        let outcome = input.apply(&KeyAction::Ignore);
        assert_eq!(outcome, EditOutcome::default());
    }

    /// Deterministic key sequences: mostly characters, with backspaces
    /// mixed in (including runs longer than the buffer).
    fn key_sequences() -> Vec<Vec<KeyAction>> {
        const KEYS: [&str; 8] = ["a", "Z", " ", "3", "\n", "é", "ß", "?"];
        let mut state: u32 = 0x2545_f491;
        let mut next = move || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            state >> 16
        };
        (0..64)
            .map(|_| {
                let len = next() % 40;
                (0..len)
                    .map(|_| match next() % 10 {
                        0..=2 => KeyAction::DeleteBackward,
                        n => append(KEYS[n as usize % KEYS.len()]),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn buffer_is_concatenation_of_typed_keys() {
        let keys = ["R", "u", "s", "t", " ", "3", "D", "\n", "é"];
        let mut input = TextInput::new("This is Three.js");
        for k in keys {
            input.apply(&append(k));
        }
        assert_eq!(input.text(), keys.concat());
    }

    #[test]
    fn buffer_matches_typed_keys_with_backspaces() {
        for actions in key_sequences() {
            let mut input = TextInput::new("This is Three.js");
            let mut expected: Vec<char> = Vec::new();
            for action in &actions {
                input.apply(action);
                match action {
                    KeyAction::Append(s) => expected.extend(s.chars()),
                    KeyAction::DeleteBackward => {
                        expected.pop();
                    }
                    KeyAction::Ignore => {}
                }
            }
            let expected: String = expected.into_iter().collect();
            if actions.is_empty() {
                assert_eq!(input.text(), "This is Three.js");
            } else {
                assert_eq!(input.text(), expected, "keys: {actions:?}");
                assert_eq!(input.mode(), EditMode::Editing);
            }
        }
    }

    #[test]
    fn backspace_removes_whole_multibyte_character() {
        let mut input = TextInput::new("");
        input.apply(&append("aé"));
        input.apply(&KeyAction::DeleteBackward);
        assert_eq!(input.text(), "a");
    }
}
