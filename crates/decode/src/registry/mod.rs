//! Interface descriptors and the ordered registry they are loaded into.

mod loader;

pub use loader::load_descriptors;

use std::path::Path;

use alloy::primitives::{Selector, B256};
use alloy_dyn_abi::{DynSolType, Specifier};
use alloy_json_abi::{Event, Function, JsonAbi};
use hashbrown::HashMap;
use lexeth_common::utils::{hex::ToLowerHex, io::file::read_file};
use tracing::{debug, warn};

use crate::error::Error;

/// A parsed contract interface: a human name plus the methods and events of its ABI.
///
/// Selector and topic-hash indices are built once at construction. Anonymous events carry no
/// topic hash and are therefore never indexed.
#[derive(Debug, Clone)]
pub struct InterfaceDescriptor {
    name: String,
    abi: JsonAbi,
    methods: Vec<Function>,
    events: Vec<Event>,
    by_selector: HashMap<Selector, usize>,
    by_topic: HashMap<B256, usize>,
}

impl InterfaceDescriptor {
    /// Builds a descriptor from an already parsed [`JsonAbi`].
    pub fn new(name: impl Into<String>, abi: JsonAbi) -> Self {
        let methods = abi.functions().cloned().collect::<Vec<_>>();
        let events = abi.events().cloned().collect::<Vec<_>>();

        let mut by_selector = HashMap::with_capacity(methods.len());
        for (i, function) in methods.iter().enumerate() {
            by_selector.entry(function.selector()).or_insert(i);
        }

        let mut by_topic = HashMap::with_capacity(events.len());
        for (i, event) in events.iter().enumerate().filter(|(_, event)| !event.anonymous) {
            by_topic.entry(event.selector()).or_insert(i);
        }

        Self { name: name.into(), abi, methods, events, by_selector, by_topic }
    }

    /// Parses a descriptor from contract ABI JSON text.
    ///
    /// ```
    /// use lexeth_decoder::InterfaceDescriptor;
    ///
    /// let descriptor = InterfaceDescriptor::from_json(
    ///     "Token",
    ///     r#"[{"type":"function","name":"totalSupply","inputs":[],"outputs":[],"stateMutability":"view"}]"#,
    /// )
    /// .expect("valid abi");
    /// assert_eq!(descriptor.methods().len(), 1);
    /// ```
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, Error> {
        let name = name.into();
        let abi: JsonAbi = serde_json::from_str(json)
            .map_err(|source| Error::DescriptorParse { name: name.clone(), source })?;
        validate_types(&name, &abi)?;
        Ok(Self::new(name, abi))
    }

    /// Reads and parses the descriptor file at `path`.
    pub fn from_file(name: impl Into<String>, path: &Path) -> Result<Self, Error> {
        let json = read_file(path)
            .map_err(|cause| Error::DescriptorRead { path: path.to_path_buf(), cause })?;
        Self::from_json(name, &json)
    }

    /// The human name this descriptor was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying parsed ABI.
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// All methods of this descriptor.
    pub fn methods(&self) -> &[Function] {
        &self.methods
    }

    /// All events of this descriptor, anonymous ones included.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up the method whose selector is `selector`.
    pub fn method_by_selector(&self, selector: &Selector) -> Option<&Function> {
        self.by_selector.get(selector).and_then(|i| self.methods.get(*i))
    }

    /// Looks up the non-anonymous event whose topic hash is `topic`.
    pub fn event_by_topic(&self, topic: &B256) -> Option<&Event> {
        self.by_topic.get(topic).and_then(|i| self.events.get(*i))
    }
}

/// Every method and event parameter type must resolve to a decodable type.
fn validate_types(name: &str, abi: &JsonAbi) -> Result<(), Error> {
    let invalid = |member: &str, ty: &str, e: alloy_dyn_abi::Error| Error::DescriptorInvalid {
        name: name.to_string(),
        reason: format!("{member}: type '{ty}': {e}"),
    };

    for function in abi.functions() {
        for param in function.inputs.iter().chain(&function.outputs) {
            Specifier::<DynSolType>::resolve(param)
                .map_err(|e| invalid(&function.name, &param.ty, e))?;
        }
    }
    for event in abi.events() {
        for param in &event.inputs {
            Specifier::<DynSolType>::resolve(param)
                .map_err(|e| invalid(&event.name, &param.ty, e))?;
        }
    }

    Ok(())
}

/// A member of an interface descriptor: either a callable method or an emittable event.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    /// A method, identified by its 4-byte selector.
    Method(&'a Function),
    /// An event, identified by its 32-byte topic hash.
    Event(&'a Event),
}

impl Member<'_> {
    /// The member's name. For example, `transfer`.
    pub fn name(&self) -> &str {
        match self {
            Member::Method(function) => &function.name,
            Member::Event(event) => &event.name,
        }
    }

    /// The canonical signature. For example, `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        match self {
            Member::Method(function) => function.signature(),
            Member::Event(event) => event.signature(),
        }
    }

    /// The selector (methods) or topic hash (events) as `0x`-prefixed lowercase hex.
    pub fn selector_hex(&self) -> String {
        match self {
            Member::Method(function) => function.selector().to_lower_hex(),
            Member::Event(event) => event.selector().to_lower_hex(),
        }
    }
}

/// The descriptor registry: an ordered sequence of descriptors, consulted in insertion order.
///
/// Selector and topic collisions across descriptors are not an error; resolution returns the
/// first match in this order. A registry is built once and only read afterwards, so a shared
/// reference can be used from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    descriptors: Vec<InterfaceDescriptor>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from descriptors, in iteration order.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = InterfaceDescriptor>) -> Self {
        descriptors.into_iter().fold(Self::new(), Self::with_descriptor)
    }

    /// Appends a descriptor. A descriptor with an already registered name replaces the earlier
    /// one in place, keeping its position.
    pub fn with_descriptor(mut self, descriptor: InterfaceDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    fn insert(&mut self, descriptor: InterfaceDescriptor) {
        match self.descriptors.iter_mut().find(|d| d.name == descriptor.name) {
            Some(existing) => {
                warn!("descriptor '{}' registered twice, replacing the earlier one", descriptor.name);
                *existing = descriptor;
            }
            None => {
                debug!(
                    "registered descriptor '{}' ({} methods, {} events)",
                    descriptor.name,
                    descriptor.methods.len(),
                    descriptor.events.len()
                );
                self.descriptors.push(descriptor);
            }
        }
    }

    /// Iterates over the descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &InterfaceDescriptor> {
        self.descriptors.iter()
    }

    /// Returns the descriptor registered under `name`.
    pub fn get(&self, name: &str) -> Option<&InterfaceDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// The number of loaded descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no descriptor is loaded.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
