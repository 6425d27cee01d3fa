//! Record-to-element mapping.
//!
//! Dispatches on the record's `type` tag (absent means `function`) and runs
//! every parameter through the type canonicalizer. Any failure aborts the
//! record; there is no partial result.

use abikit_core::{
    AbiElement, AbiError, AbiRecord, Constructor, Event, EventParameter, Fallback, Function,
    ParamDescriptor, Parameter, ParameterType,
};
use tracing::trace;

use crate::mutability::{resolve_constant, resolve_payable};
use crate::type_string::parse_parameter_type;

pub const FUNCTION: &str = "function";
pub const CONSTRUCTOR: &str = "constructor";
pub const FALLBACK: &str = "fallback";
pub const EVENT: &str = "event";

/// Convert one raw ABI record into a typed element.
pub fn map_record(record: &AbiRecord) -> Result<AbiElement, AbiError> {
    let kind = record.kind.as_deref().unwrap_or(FUNCTION);
    let mutability = record.state_mutability.as_deref();

    let element = match kind {
        FUNCTION => {
            let name = required_name(record, FUNCTION)?;
            let inputs = map_parameters(&record.inputs, |index, reason| {
                AbiError::FunctionInputInvalid { index, reason }
            })?;
            let outputs = match &record.outputs {
                Some(outputs) => map_parameters(outputs, |index, reason| {
                    AbiError::FunctionOutputInvalid { index, reason }
                })?,
                None => Vec::new(),
            };
            AbiElement::Function(Function {
                name,
                inputs,
                outputs,
                constant: resolve_constant(mutability, record.constant),
                payable: resolve_payable(mutability, record.payable),
            })
        }
        CONSTRUCTOR => {
            let inputs = map_parameters(&record.inputs, |index, reason| {
                AbiError::FunctionInputInvalid { index, reason }
            })?;
            AbiElement::Constructor(Constructor {
                inputs,
                payable: resolve_payable(mutability, record.payable),
            })
        }
        FALLBACK => AbiElement::Fallback(Fallback {
            constant: resolve_constant(mutability, record.constant),
            payable: resolve_payable(mutability, record.payable),
        }),
        EVENT => {
            let name = required_name(record, EVENT)?;
            let inputs = record
                .inputs
                .iter()
                .enumerate()
                .map(|(index, desc)| {
                    let ty = descriptor_type(desc, index, |index, reason| {
                        AbiError::EventInputInvalid { index, reason }
                    })?;
                    Ok(EventParameter {
                        name: desc.name.clone().unwrap_or_default(),
                        ty,
                        indexed: desc.indexed.unwrap_or(false),
                    })
                })
                .collect::<Result<Vec<_>, AbiError>>()?;
            AbiElement::Event(Event {
                name,
                inputs,
                anonymous: record.anonymous.unwrap_or(false),
            })
        }
        other => {
            return Err(AbiError::ElementTypeInvalid {
                kind: other.to_string(),
            })
        }
    };

    trace!(kind, name = element.name().unwrap_or(""), "mapped ABI record");
    Ok(element)
}

fn required_name(record: &AbiRecord, kind: &str) -> Result<String, AbiError> {
    match record.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AbiError::ElementNameInvalid {
            kind: kind.to_string(),
        }),
    }
}

fn map_parameters(
    descriptors: &[ParamDescriptor],
    missing: fn(usize, String) -> AbiError,
) -> Result<Vec<Parameter>, AbiError> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, desc)| {
            Ok(Parameter {
                name: desc.name.clone().unwrap_or_default(),
                ty: descriptor_type(desc, index, missing)?,
            })
        })
        .collect()
}

/// Canonicalize a descriptor's type. A descriptor without a `type` string
/// is reported against its position via `missing`.
fn descriptor_type(
    desc: &ParamDescriptor,
    index: usize,
    missing: fn(usize, String) -> AbiError,
) -> Result<ParameterType, AbiError> {
    let ty = desc
        .ty
        .as_deref()
        .ok_or_else(|| missing(index, "missing 'type'".into()))?;
    parse_parameter_type(ty, desc.components.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abikit_core::{DynamicType, StaticType};

    fn record(json: &str) -> AbiRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn erc20_transfer_function() {
        let rec = record(
            r#"{"type":"function","name":"transfer","inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[{"name":"","type":"bool"}],"constant":false}"#,
        );
        let AbiElement::Function(f) = map_record(&rec).unwrap() else {
            panic!("expected function");
        };
        assert_eq!(f.name, "transfer");
        assert_eq!(f.inputs.len(), 2);
        assert_eq!(f.inputs[0].name, "to");
        assert_eq!(f.inputs[0].ty, ParameterType::from(StaticType::Address));
        assert_eq!(f.inputs[1].ty, ParameterType::from(StaticType::Uint(256)));
        assert_eq!(f.outputs.len(), 1);
        assert_eq!(f.outputs[0].ty, ParameterType::from(StaticType::Bool));
        assert!(!f.constant);
        assert!(!f.payable);
    }

    #[test]
    fn erc20_transfer_event() {
        let rec = record(
            r#"{"type":"event","name":"Transfer","inputs":[{"name":"from","type":"address","indexed":true},{"name":"to","type":"address","indexed":true},{"name":"value","type":"uint256","indexed":false}],"anonymous":false}"#,
        );
        let AbiElement::Event(e) = map_record(&rec).unwrap() else {
            panic!("expected event");
        };
        assert_eq!(e.name, "Transfer");
        let flags: Vec<bool> = e.inputs.iter().map(|p| p.indexed).collect();
        assert_eq!(flags, vec![true, true, false]);
        let names: Vec<&str> = e.inputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["from", "to", "value"]);
        assert!(!e.anonymous);
    }

    #[test]
    fn missing_kind_defaults_to_function() {
        let rec = record(r#"{"name":"totalSupply","inputs":[],"outputs":[{"type":"uint256"}],"stateMutability":"view"}"#);
        let el = map_record(&rec).unwrap();
        let f = el.as_function().unwrap();
        assert!(f.constant);
        assert!(!f.payable);
        assert_eq!(f.outputs[0].name, "");
    }

    #[test]
    fn event_flags_default_false() {
        let rec = record(r#"{"type":"event","name":"Ping","inputs":[{"name":"x","type":"bytes"}]}"#);
        let AbiElement::Event(e) = map_record(&rec).unwrap() else {
            panic!("expected event");
        };
        assert!(!e.inputs[0].indexed);
        assert_eq!(e.inputs[0].ty, ParameterType::from(DynamicType::Bytes));
        assert!(!e.anonymous);
    }

    #[test]
    fn payable_constructor() {
        let rec = record(r#"{"type":"constructor","inputs":[{"name":"owner","type":"address"}],"stateMutability":"payable"}"#);
        let AbiElement::Constructor(c) = map_record(&rec).unwrap() else {
            panic!("expected constructor");
        };
        assert!(c.payable);
        assert_eq!(c.inputs.len(), 1);
    }

    #[test]
    fn legacy_payable_fallback() {
        let rec = record(r#"{"type":"fallback","payable":true,"constant":false}"#);
        assert_eq!(
            map_record(&rec).unwrap(),
            AbiElement::Fallback(Fallback { constant: false, payable: true })
        );
    }

    #[test]
    fn unknown_kind_rejected() {
        let rec = record(r#"{"type":"receive","stateMutability":"payable"}"#);
        assert!(matches!(
            map_record(&rec),
            Err(AbiError::ElementTypeInvalid { kind }) if kind == "receive"
        ));
    }

    #[test]
    fn bad_parameter_aborts_record() {
        let rec = record(r#"{"type":"function","name":"f","inputs":[{"name":"a","type":"uint256"},{"name":"b","type":"uint256[][]"}]}"#);
        assert!(matches!(
            map_record(&rec),
            Err(AbiError::ParameterTypeInvalid { .. })
        ));
    }

    #[test]
    fn missing_names_rejected() {
        let rec = record(r#"{"type":"function","inputs":[]}"#);
        assert!(matches!(map_record(&rec), Err(AbiError::ElementNameInvalid { .. })));
        let rec = record(r#"{"type":"event","name":"","inputs":[]}"#);
        assert!(matches!(map_record(&rec), Err(AbiError::ElementNameInvalid { .. })));
    }

    #[test]
    fn missing_parameter_type_reports_position() {
        let rec = record(r#"{"type":"function","name":"f","inputs":[{"name":"a","type":"bool"},{"name":"b"}]}"#);
        assert!(matches!(
            map_record(&rec),
            Err(AbiError::FunctionInputInvalid { index: 1, .. })
        ));
        let rec = record(r#"{"type":"function","name":"f","inputs":[],"outputs":[{"name":"r"}]}"#);
        assert!(matches!(
            map_record(&rec),
            Err(AbiError::FunctionOutputInvalid { index: 0, .. })
        ));
        let rec = record(r#"{"type":"event","name":"E","inputs":[{"name":"x","indexed":true}]}"#);
        assert!(matches!(
            map_record(&rec),
            Err(AbiError::EventInputInvalid { index: 0, .. })
        ));
    }

    #[test]
    fn tuple_parameter() {
        let rec = record(
            r#"{"type":"function","name":"fill","inputs":[{"name":"order","type":"tuple","components":[{"name":"maker","type":"address"},{"name":"data","type":"bytes"}]}],"stateMutability":"nonpayable"}"#,
        );
        let el = map_record(&rec).unwrap();
        let f = el.as_function().unwrap();
        assert!(f.inputs[0].ty.is_dynamic());
        assert_eq!(f.signature(), "fill((address,bytes))");
    }
}
