//! Function selectors and event topics.
//!
//! The selector of a function is the first four bytes of
//! `keccak256("name(type1,type2,...)")`; the topic of a non-anonymous event
//! is the full 32-byte hash of its signature.

use abikit_core::{Event, Function};
use tiny_keccak::{Hasher, Keccak};

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// 4-byte selector of a function.
pub fn selector(function: &Function) -> [u8; 4] {
    let hash = keccak256(function.signature().as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// topics[0] of an event; `None` for anonymous events, which carry no
/// signature topic.
pub fn topic(event: &Event) -> Option<[u8; 32]> {
    if event.anonymous {
        return None;
    }
    Some(keccak256(event.signature().as_bytes()))
}

/// `0x`-prefixed lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
