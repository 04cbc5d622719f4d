pub mod crash_report;
pub mod debounce;
pub mod keys;
pub mod paths;
pub mod text_input;

pub use debounce::Debouncer;
pub use keys::{classify_key, KeyAction, Modifiers};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs};
pub use text_input::{EditMode, EditOutcome, TextInput};
