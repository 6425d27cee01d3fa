//! Raw ABI JSON records, as emitted by the Solidity compiler.
//!
//! These are deliberately loose: every field the standard schema treats as
//! optional is an `Option` here, and validation happens when a record is
//! mapped into an [`AbiElement`](crate::element::AbiElement).

use serde::{Deserialize, Serialize};

/// One entry of an ABI JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiRecord {
    /// `function` | `constructor` | `fallback` | `event`; absent means `function`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<ParamDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<ParamDescriptor>>,
    /// `pure` | `view` | `nonpayable` | `payable`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
    /// Legacy flag, superseded by `stateMutability`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payable: Option<bool>,
    /// Legacy flag, superseded by `stateMutability`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    /// Events only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
}

/// A single input or output parameter of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type string, e.g. `"uint256[]"`. Required; a missing value is
    /// reported against the parameter's position when mapped.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Event inputs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    /// Component descriptors for `tuple` types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ParamDescriptor>>,
}

impl ParamDescriptor {
    /// Convenience constructor for a named parameter.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: Some(ty.into()),
            ..Self::default()
        }
    }
}
