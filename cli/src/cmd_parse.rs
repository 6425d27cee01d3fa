//! `abikit parse-type` and `abikit parse-abi`.

use abikit_core::{AbiElement, EventParameter, Parameter};
use abikit_parser::{parse_type_string, signature, ContractAbi};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run_type(ty: &str, as_json: bool) -> Result<()> {
    let parsed = parse_type_string(ty).with_context(|| format!("parse type '{ty}'"))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("✓ '{ty}' parsed successfully");
        println!("  Canonical: {parsed}");
        println!("  Encoding:  {}", if parsed.is_static() { "static" } else { "dynamic" });
        match parsed.head_size() {
            Some(bytes) => println!("  Head size: {bytes} bytes"),
            None => println!("  Head size: overflow"),
        }
    }
    Ok(())
}

pub fn run_abi(file: &Path, as_json: bool) -> Result<()> {
    let abi = ContractAbi::from_file(file)
        .with_context(|| format!("parse ABI file '{}'", file.display()))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&abi)?);
        return Ok(());
    }

    println!("✓ {} ({} elements)", file.display(), abi.len());
    for element in abi.elements() {
        println!("  {}", describe(element));
    }
    Ok(())
}

fn describe(element: &AbiElement) -> String {
    match element {
        AbiElement::Function(f) => {
            let outputs = params(&f.outputs);
            format!(
                "function {}({}) -> ({}){}  selector={}",
                f.name,
                params(&f.inputs),
                outputs,
                flags(f.constant, f.payable),
                signature::to_hex(&signature::selector(f)),
            )
        }
        AbiElement::Constructor(c) => {
            format!("constructor({}){}", params(&c.inputs), flags(false, c.payable))
        }
        AbiElement::Fallback(f) => format!("fallback{}", flags(f.constant, f.payable)),
        AbiElement::Event(e) => {
            let inputs: Vec<String> = e.inputs.iter().map(event_param).collect();
            let topic = signature::topic(e)
                .map(|t| signature::to_hex(&t))
                .unwrap_or_else(|| "anonymous".into());
            format!("event {}({})  topic={}", e.name, inputs.join(", "), topic)
        }
    }
}

fn params(params: &[Parameter]) -> String {
    params
        .iter()
        .map(|p| {
            if p.name.is_empty() {
                p.ty.to_string()
            } else {
                format!("{} {}", p.ty, p.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn event_param(p: &EventParameter) -> String {
    let indexed = if p.indexed { " indexed" } else { "" };
    format!("{}{} {}", p.ty, indexed, p.name).trim_end().to_string()
}

fn flags(constant: bool, payable: bool) -> String {
    let mut out = String::new();
    if constant {
        out.push_str(" [constant]");
    }
    if payable {
        out.push_str(" [payable]");
    }
    out
}
