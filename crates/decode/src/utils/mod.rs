mod format;

// re-export
pub use format::{format, RawValue};
