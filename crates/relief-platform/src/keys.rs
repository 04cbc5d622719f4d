//! Key dispatch table: maps a key press to one logical text-editing action.
//!
//! Key names follow winit's `Key` debug representation for named keys
//! (`"Backspace"`, `"Enter"`, `"Shift"`) and the produced character for
//! character keys. `text` is the text the key press would insert, if any.

/// The logical action a key press maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Append text to the buffer.
    Append(String),
    /// Remove the last character.
    DeleteBackward,
    /// Not a text-editing key.
    Ignore,
}

/// Modifier key state bundled for passing to key classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

/// Classify a key press.
///
/// Shortcuts (ctrl/super held) never insert text. Enter inserts a line
/// break; any other key inserts its text if that text is printable.
pub fn classify_key(key_name: &str, text: Option<&str>, mods: Modifiers) -> KeyAction {
    match key_name {
        "Backspace" => return KeyAction::DeleteBackward,
        "Enter" if !mods.ctrl && !mods.super_key => return KeyAction::Append("\n".into()),
        _ => {}
    }

    if mods.ctrl || mods.super_key {
        return KeyAction::Ignore;
    }

    match text {
        Some(t) if !t.is_empty() && !t.chars().any(char::is_control) => {
            KeyAction::Append(t.to_string())
        }
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Modifiers {
        Modifiers::default()
    }

    #[test]
    fn character_key_appends_its_text() {
        assert_eq!(
            classify_key("h", Some("h"), plain()),
            KeyAction::Append("h".into())
        );
    }

    #[test]
    fn shifted_character_uses_produced_text() {
        let mods = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        assert_eq!(
            classify_key("H", Some("H"), mods),
            KeyAction::Append("H".into())
        );
    }

    #[test]
    fn space_appends() {
        assert_eq!(
            classify_key("Space", Some(" "), plain()),
            KeyAction::Append(" ".into())
        );
    }

    #[test]
    fn backspace_deletes_even_with_modifiers() {
        assert_eq!(classify_key("Backspace", None, plain()), KeyAction::DeleteBackward);
        let mods = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert_eq!(classify_key("Backspace", Some("\u{8}"), mods), KeyAction::DeleteBackward);
    }

    #[test]
    fn enter_inserts_line_break() {
        assert_eq!(
            classify_key("Enter", Some("\r"), plain()),
            KeyAction::Append("\n".into())
        );
    }

    #[test]
    fn modifier_only_keys_ignored() {
        assert_eq!(classify_key("Shift", None, plain()), KeyAction::Ignore);
        assert_eq!(classify_key("Control", None, plain()), KeyAction::Ignore);
    }

    #[test]
    fn shortcuts_do_not_insert() {
        let mods = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert_eq!(classify_key("c", Some("c"), mods), KeyAction::Ignore);
        let mods = Modifiers {
            super_key: true,
            ..Modifiers::default()
        };
        assert_eq!(classify_key("v", Some("v"), mods), KeyAction::Ignore);
    }

    #[test]
    fn control_characters_ignored() {
        assert_eq!(classify_key("Tab", Some("\t"), plain()), KeyAction::Ignore);
        assert_eq!(classify_key("Escape", Some("\u{1b}"), plain()), KeyAction::Ignore);
    }

    #[test]
    fn non_ascii_text_appends() {
        assert_eq!(
            classify_key("é", Some("é"), plain()),
            KeyAction::Append("é".into())
        );
    }
}
