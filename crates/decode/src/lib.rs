//! Decodes transaction call data and event logs against a registry of contract ABIs.
//!
//! A [`Registry`] is loaded once from the configured ABI files and then shared read-only.
//! Every decode goes through the same three steps: the selector (or topic hash) is resolved to a
//! method (or event) by searching the descriptors in load order, the remaining bytes are
//! ABI-decoded against the member's parameter types, and each value is formatted for display.
//!
//! ```
//! use lexeth_decoder::{InterfaceDescriptor, Registry};
//!
//! let registry = Registry::new().with_descriptor(
//!     InterfaceDescriptor::from_json(
//!         "Pausable",
//!         r#"[{"type":"function","name":"pause","inputs":[],"outputs":[],"stateMutability":"nonpayable"}]"#,
//!     )
//!     .expect("valid abi"),
//! );
//!
//! let record = registry.decode_transaction(&[0x84, 0x56, 0xcb, 0x59]);
//! assert_eq!(record.method_signature, "pause()");
//! assert!(record.error.is_none());
//! ```

pub mod error;

mod core;
mod interfaces;
mod registry;
mod utils;

// re-export the public interface
pub use crate::core::{
    decode,
    payload::{decode_event_fields, decode_method_inputs, EventFields},
    resolve::{resolve_event, resolve_method, Resolved},
};
pub use error::Error;
pub use interfaces::{DecodeArgs, DecodeArgsBuilder, DecodedParameter, DecodedRecord};
pub use registry::{load_descriptors, InterfaceDescriptor, Member, Registry};
pub use utils::{format, RawValue};
