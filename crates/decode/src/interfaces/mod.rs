mod args;
mod result;

// re-export
pub use args::{DecodeArgs, DecodeArgsBuilder};
pub use result::{DecodedParameter, DecodedRecord};
