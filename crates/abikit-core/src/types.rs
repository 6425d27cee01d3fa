//! Canonical ABI parameter types.
//!
//! Every parameter type is exactly one of static (fixed encoded size) or
//! dynamic (size depends on the value). The split is encoded in the type
//! itself so consumers never have to re-derive it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of one ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// A fully resolved, nesting-aware ABI parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Static(StaticType),
    Dynamic(DynamicType),
}

/// Types whose encoding has a fixed size independent of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticType {
    /// 20-byte account address
    Address,
    /// Unsigned integer. Width in bits.
    Uint(u16),
    /// Signed integer. Width in bits.
    Int(u16),
    Bool,
    /// Fixed-length byte array (bytes1 .. bytes32). Length in bytes.
    Bytes(u8),
    /// Address followed by a 4-byte selector (24 bytes)
    Function,
    /// `T[N]` where `T` is static
    Array { elem: Box<StaticType>, len: usize },
    /// Tuple whose components are all static
    Tuple(Vec<StaticType>),
}

/// Types whose encoding size depends on the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicType {
    /// Variable-length byte array
    Bytes,
    /// UTF-8 string
    String,
    /// `T[]`, element may be static or dynamic
    Array(Box<ParameterType>),
    /// `T[N]` where `T` is dynamic
    FixedArray { elem: Box<DynamicType>, len: usize },
    /// Tuple with at least one dynamic component
    Tuple(Vec<ParameterType>),
}

impl ParameterType {
    pub fn is_static(&self) -> bool {
        matches!(self, ParameterType::Static(_))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, ParameterType::Dynamic(_))
    }

    /// Size in bytes of this type's slot in the head of an encoded tuple.
    /// Dynamic types occupy a single offset word. `None` when the size
    /// does not fit in a `usize`.
    pub fn head_size(&self) -> Option<usize> {
        match self {
            ParameterType::Static(s) => s.words()?.checked_mul(WORD_SIZE),
            ParameterType::Dynamic(_) => Some(WORD_SIZE),
        }
    }

    /// Checks widths and lengths against the ABI limits:
    /// integer widths in 8..=256 and divisible by 8, fixed bytes in 1..=32,
    /// array lengths non-zero, head size representable.
    pub fn is_valid(&self) -> bool {
        match self {
            ParameterType::Static(s) => s.is_valid(),
            ParameterType::Dynamic(d) => d.is_valid(),
        }
    }

    /// Build a tuple type, static iff every component is static.
    pub fn tuple(components: Vec<ParameterType>) -> ParameterType {
        if components.iter().all(ParameterType::is_static) {
            let statics = components
                .into_iter()
                .filter_map(|c| match c {
                    ParameterType::Static(s) => Some(s),
                    ParameterType::Dynamic(_) => None,
                })
                .collect();
            ParameterType::Static(StaticType::Tuple(statics))
        } else {
            ParameterType::Dynamic(DynamicType::Tuple(components))
        }
    }
}

impl StaticType {
    /// Number of 32-byte words this type occupies when encoded, or `None`
    /// on overflow.
    pub fn words(&self) -> Option<usize> {
        match self {
            StaticType::Array { elem, len } => elem.words()?.checked_mul(*len),
            StaticType::Tuple(components) => components
                .iter()
                .try_fold(0usize, |acc, c| acc.checked_add(c.words()?)),
            _ => Some(1),
        }
    }

    fn is_valid(&self) -> bool {
        self.fields_valid() && self.words().and_then(|w| w.checked_mul(WORD_SIZE)).is_some()
    }

    fn fields_valid(&self) -> bool {
        match self {
            StaticType::Uint(bits) | StaticType::Int(bits) => valid_int_width(*bits),
            StaticType::Bytes(len) => (1..=32).contains(len),
            StaticType::Array { elem, len } => *len > 0 && elem.fields_valid(),
            StaticType::Tuple(components) => components.iter().all(StaticType::fields_valid),
            StaticType::Address | StaticType::Bool | StaticType::Function => true,
        }
    }
}

impl DynamicType {
    fn is_valid(&self) -> bool {
        match self {
            DynamicType::Bytes | DynamicType::String => true,
            DynamicType::Array(elem) => elem.is_valid(),
            DynamicType::FixedArray { elem, len } => *len > 0 && elem.is_valid(),
            DynamicType::Tuple(components) => components.iter().all(ParameterType::is_valid),
        }
    }
}

fn valid_int_width(bits: u16) -> bool {
    (8..=256).contains(&bits) && bits % 8 == 0
}

impl From<StaticType> for ParameterType {
    fn from(s: StaticType) -> Self {
        ParameterType::Static(s)
    }
}

impl From<DynamicType> for ParameterType {
    fn from(d: DynamicType) -> Self {
        ParameterType::Dynamic(d)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterType::Static(s) => write!(f, "{s}"),
            ParameterType::Dynamic(d) => write!(f, "{d}"),
        }
    }
}

impl fmt::Display for StaticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticType::Address => write!(f, "address"),
            StaticType::Uint(bits) => write!(f, "uint{bits}"),
            StaticType::Int(bits) => write!(f, "int{bits}"),
            StaticType::Bool => write!(f, "bool"),
            StaticType::Bytes(n) => write!(f, "bytes{n}"),
            StaticType::Function => write!(f, "function"),
            StaticType::Array { elem, len } => write!(f, "{elem}[{len}]"),
            StaticType::Tuple(components) => write_tuple(f, components),
        }
    }
}

impl fmt::Display for DynamicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicType::Bytes => write!(f, "bytes"),
            DynamicType::String => write!(f, "string"),
            DynamicType::Array(elem) => write!(f, "{elem}[]"),
            DynamicType::FixedArray { elem, len } => write!(f, "{elem}[{len}]"),
            DynamicType::Tuple(components) => write_tuple(f, components),
        }
    }
}

fn write_tuple<T: fmt::Display>(f: &mut fmt::Formatter<'_>, components: &[T]) -> fmt::Result {
    let parts: Vec<_> = components.iter().map(|c| c.to_string()).collect();
    write!(f, "({})", parts.join(","))
}
