//! Golden fixture integration tests.
//!
//! Each test loads a real-world shaped ABI document from `fixtures/abi/`
//! and checks the parsed element model.

use abikit_core::{AbiElement, AbiError, DynamicType, ParameterType, StaticType};
use abikit_parser::{batch, signature, ContractAbi};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/abi");
    p.push(name);
    p
}

fn load(name: &str) -> Result<ContractAbi, AbiError> {
    ContractAbi::from_file(&fixture_path(name))
}

fn input_types(abi: &ContractAbi, function: &str) -> Vec<ParameterType> {
    abi.function(function)
        .unwrap_or_else(|| panic!("function '{function}' missing"))
        .inputs
        .iter()
        .map(|p| p.ty.clone())
        .collect()
}

// ─── ERC-20 ───────────────────────────────────────────────────────────────────

#[test]
fn erc20_golden() {
    let abi = load("erc20.json").expect("erc20.json should parse");

    assert_eq!(abi.len(), 12);
    assert_eq!(abi.functions().count(), 9);
    assert_eq!(abi.events().count(), 2);

    let name = abi.function("name").unwrap();
    assert!(name.constant);
    assert_eq!(name.outputs[0].ty, ParameterType::from(DynamicType::String));

    let decimals = abi.function("decimals").unwrap();
    assert_eq!(decimals.outputs[0].ty, ParameterType::from(StaticType::Uint(8)));

    let transfer = abi.function("transfer").unwrap();
    assert!(!transfer.constant);
    assert!(!transfer.payable);
    assert_eq!(hex::encode(signature::selector(transfer)), "a9059cbb");

    let fallback = abi.fallback().expect("fallback present");
    assert!(fallback.payable);
    assert!(!fallback.constant);

    let approval = abi.event("Approval").unwrap();
    assert_eq!(
        signature::to_hex(&signature::topic(approval).unwrap()),
        "0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"
    );
    assert_eq!(approval.indexed_inputs().count(), 2);
}

#[test]
fn erc20_element_order_preserved() {
    let abi = load("erc20.json").unwrap();
    let kinds: Vec<&str> = abi.elements().iter().map(AbiElement::kind).collect();
    assert_eq!(kinds.first(), Some(&"function"));
    assert_eq!(kinds[9], "fallback");
    assert_eq!(kinds[10], "event");
    assert_eq!(abi.elements()[11].name(), Some("Transfer"));
}

// ─── Legacy flags ─────────────────────────────────────────────────────────────

#[test]
fn legacy_flags_golden() {
    let abi = load("legacy-flags.json").unwrap();

    let buy = abi.function("buyTokens").expect("untagged record is a function");
    assert!(buy.payable);
    assert!(!buy.constant);
    assert!(buy.outputs.is_empty());

    let rate = abi.function("rate").unwrap();
    assert!(rate.constant);
    assert_eq!(rate.outputs[0].ty, ParameterType::from(StaticType::Uint(256)));

    let ctor = abi.constructor().unwrap();
    assert!(ctor.payable);
    assert_eq!(ctor.inputs.len(), 2);

    assert!(!abi.fallback().unwrap().payable);
}

// ─── Nested arrays and tuples ─────────────────────────────────────────────────

#[test]
fn router_arrays() {
    let abi = load("nested-types.json").unwrap();
    let swap = abi.function("swapExactTokensForTokens").unwrap();
    assert_eq!(
        swap.inputs[2].ty,
        ParameterType::from(DynamicType::Array(Box::new(StaticType::Address.into())))
    );
    assert_eq!(swap.outputs[0].ty.to_string(), "uint256[]");
    assert_eq!(
        swap.signature(),
        "swapExactTokensForTokens(uint256,uint256,address[],address,uint256)"
    );
    assert_eq!(hex::encode(signature::selector(swap)), "38ed1739");
}

#[test]
fn grid_dimensions() {
    let abi = load("nested-types.json").unwrap();
    let types = input_types(&abi, "grid");

    let row = StaticType::Array { elem: Box::new(StaticType::Uint(8)), len: 3 };
    assert_eq!(types[0], ParameterType::from(StaticType::Array { elem: Box::new(row), len: 3 }));
    assert_eq!(types[0].head_size(), Some(9 * 32));

    let block = StaticType::Array { elem: Box::new(StaticType::Bytes(32)), len: 4 };
    assert_eq!(types[1], ParameterType::from(DynamicType::Array(Box::new(block.into()))));

    assert_eq!(
        types[2],
        ParameterType::from(DynamicType::FixedArray { elem: Box::new(DynamicType::String), len: 2 })
    );

    let page = DynamicType::Array(Box::new(StaticType::Uint(256).into()));
    assert_eq!(
        types[3],
        ParameterType::from(DynamicType::FixedArray { elem: Box::new(page), len: 2 })
    );

    assert!(abi.function("grid").unwrap().constant);
}

#[test]
fn tuple_array_input() {
    let abi = load("nested-types.json").unwrap();
    let fill = abi.function("fillOrders").unwrap();
    assert!(fill.payable);
    assert!(fill.inputs[0].ty.is_dynamic());
    assert_eq!(fill.signature(), "fillOrders((address,uint256,bytes)[])");
}

#[test]
fn anonymous_event_has_no_topic() {
    let abi = load("nested-types.json").unwrap();
    let batch = abi.event("Batch").unwrap();
    assert!(batch.anonymous);
    assert!(signature::topic(batch).is_none());
    assert_eq!(batch.data_inputs().count(), 2);
}

// ─── Failures ─────────────────────────────────────────────────────────────────

#[test]
fn nested_dynamic_array_rejects_document() {
    let err = load("invalid-nested-dynamic.json").unwrap_err();
    assert!(matches!(err, AbiError::ParameterTypeInvalid { .. }), "{err}");
}

#[test]
fn unknown_element_kind_rejects_document() {
    let err = load("invalid-element-type.json").unwrap_err();
    assert!(matches!(err, AbiError::ElementTypeInvalid { ref kind } if kind == "receive"));
}

#[test]
fn batch_over_fixtures() {
    let names = [
        "erc20.json",
        "legacy-flags.json",
        "nested-types.json",
        "invalid-nested-dynamic.json",
        "invalid-element-type.json",
    ];
    let docs: Vec<String> = names
        .iter()
        .map(|n| std::fs::read_to_string(fixture_path(n)).expect("fixture not found"))
        .collect();

    let result = batch::parse_documents(&docs);
    assert_eq!(result.parsed.len(), 3);
    let failed: Vec<usize> = result.errors.iter().map(|(i, _)| *i).collect();
    assert_eq!(failed, vec![3, 4]);
}
