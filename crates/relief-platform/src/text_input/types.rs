/// Whether the buffer still holds the placeholder text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Showing the placeholder; no user edits yet.
    Placeholder,
    /// The user has pressed a key. There is no way back to `Placeholder`.
    Editing,
}

/// What applying one key action did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOutcome {
    /// This action moved the buffer from `Placeholder` to `Editing`.
    pub entered_editing: bool,
    /// The displayed text must be rebuilt.
    pub changed: bool,
}
