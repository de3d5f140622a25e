use alloy::primitives::{Selector, B256};
use alloy_json_abi::{Event, Function};
use lexeth_common::utils::hex::ToLowerHex;
use tracing::trace;

use crate::{
    error::Error,
    registry::{InterfaceDescriptor, Member, Registry},
};

/// A matched member together with the descriptor it was found in.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a, T> {
    /// The matched method or event.
    pub member: &'a T,
    /// The descriptor that declared it.
    pub descriptor: &'a InterfaceDescriptor,
}

impl<'a> Resolved<'a, Function> {
    /// The match as a [`Member`].
    pub fn as_member(&self) -> Member<'a> {
        Member::Method(self.member)
    }
}

impl<'a> Resolved<'a, Event> {
    /// The match as a [`Member`].
    pub fn as_member(&self) -> Member<'a> {
        Member::Event(self.member)
    }
}

/// Finds the method whose selector matches the first 4 bytes of `data`.
///
/// Descriptors are searched in registry order and the first hit wins.
pub fn resolve_method<'a>(
    registry: &'a Registry,
    data: &[u8],
) -> Result<Resolved<'a, Function>, Error> {
    let selector = data
        .first_chunk::<4>()
        .map(|bytes| Selector::from(*bytes))
        .ok_or(Error::PayloadTooShort(data.len()))?;

    registry
        .iter()
        .find_map(|descriptor| {
            descriptor.method_by_selector(&selector).map(|member| Resolved { member, descriptor })
        })
        .inspect(|resolved| {
            trace!(
                "resolved selector {} to {}.{}",
                selector.to_lower_hex(),
                resolved.descriptor.name(),
                resolved.member.name
            )
        })
        .ok_or_else(|| Error::MemberNotFound(format!("method {}", selector.to_lower_hex())))
}

/// Finds the event whose topic hash equals `topics[0]`.
///
/// Descriptors are searched in registry order and the first hit wins.
pub fn resolve_event<'a>(
    registry: &'a Registry,
    topics: &[B256],
) -> Result<Resolved<'a, Event>, Error> {
    let topic = topics.first().ok_or(Error::NoTopics)?;

    registry
        .iter()
        .find_map(|descriptor| {
            descriptor.event_by_topic(topic).map(|member| Resolved { member, descriptor })
        })
        .inspect(|resolved| {
            trace!(
                "resolved topic {} to {}.{}",
                topic.to_lower_hex(),
                resolved.descriptor.name(),
                resolved.member.name
            )
        })
        .ok_or_else(|| Error::MemberNotFound(format!("event {}", topic.to_lower_hex())))
}
