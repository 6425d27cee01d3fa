//! Typed ABI elements — the parsed form of an [`AbiRecord`](crate::record::AbiRecord).

use crate::types::ParameterType;
use serde::{Deserialize, Serialize};

/// A named, typed function or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Empty when the ABI leaves the parameter unnamed
    pub name: String,
    pub ty: ParameterType,
}

/// An event input. Indexed inputs are carried in topics rather than data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParameter {
    pub name: String,
    pub ty: ParameterType,
    pub indexed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub inputs: Vec<Parameter>,
    pub outputs: Vec<Parameter>,
    /// Does not modify state (`view` / `pure` or legacy `constant`)
    pub constant: bool,
    pub payable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    pub inputs: Vec<Parameter>,
    pub payable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    pub constant: bool,
    pub payable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub inputs: Vec<EventParameter>,
    pub anonymous: bool,
}

/// One parsed entry of a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AbiElement {
    Function(Function),
    Constructor(Constructor),
    Fallback(Fallback),
    Event(Event),
}

impl AbiElement {
    /// The record kind tag this element was parsed from.
    pub fn kind(&self) -> &'static str {
        match self {
            AbiElement::Function(_) => "function",
            AbiElement::Constructor(_) => "constructor",
            AbiElement::Fallback(_) => "fallback",
            AbiElement::Event(_) => "event",
        }
    }

    /// Name of a function or event; `None` for constructors and fallbacks.
    pub fn name(&self) -> Option<&str> {
        match self {
            AbiElement::Function(f) => Some(&f.name),
            AbiElement::Event(e) => Some(&e.name),
            AbiElement::Constructor(_) | AbiElement::Fallback(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            AbiElement::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            AbiElement::Event(e) => Some(e),
            _ => None,
        }
    }
}

impl Function {
    /// Canonical signature, e.g. `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        signature(&self.name, self.inputs.iter().map(|p| &p.ty))
    }
}

impl Event {
    /// Canonical signature, e.g. `Transfer(address,address,uint256)`.
    pub fn signature(&self) -> String {
        signature(&self.name, self.inputs.iter().map(|p| &p.ty))
    }

    pub fn indexed_inputs(&self) -> impl Iterator<Item = &EventParameter> {
        self.inputs.iter().filter(|p| p.indexed)
    }

    pub fn data_inputs(&self) -> impl Iterator<Item = &EventParameter> {
        self.inputs.iter().filter(|p| !p.indexed)
    }
}

fn signature<'a>(name: &str, types: impl Iterator<Item = &'a ParameterType>) -> String {
    let parts: Vec<String> = types.map(|t| t.to_string()).collect();
    format!("{name}({})", parts.join(","))
}
