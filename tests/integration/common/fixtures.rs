use adapt_core::ContractAdapter;
use adapt_types::abi::{Abi, AbiDialect};
use lazy_static::lazy_static;
use serde_json::json;

lazy_static! {
    /// A Cairo 0 ABI exercising the legacy forms: pointer arrays with their
    /// `_len` companions, sized structs, tuples, named tuples.
    pub static ref CAIRO_0_ABI: Abi = Abi::try_from(json!([
        {
            "type": "struct",
            "name": "Point",
            "size": 2,
            "members": [
                { "name": "x", "offset": 0, "type": "felt" },
                { "name": "y", "offset": 1, "type": "felt" }
            ]
        },
        {
            "type": "struct",
            "name": "Line",
            "size": 4,
            "members": [
                { "name": "start", "offset": 0, "type": "Point" },
                { "name": "end", "offset": 2, "type": "Point" }
            ]
        },
        {
            "type": "struct",
            "name": "Vector",
            "size": 2,
            "members": [
                { "name": "data_len", "offset": 0, "type": "felt" },
                { "name": "data", "offset": 1, "type": "felt*" }
            ]
        },
        {
            "type": "constructor",
            "name": "constructor",
            "inputs": [{ "name": "initial_balance", "type": "felt" }],
            "outputs": []
        },
        {
            "type": "function",
            "name": "identity",
            "inputs": [
                { "name": "a", "type": "felt" },
                { "name": "b", "type": "felt" }
            ],
            "outputs": [
                { "name": "a", "type": "felt" },
                { "name": "b", "type": "felt" }
            ]
        },
        {
            "type": "function",
            "name": "sum_array",
            "inputs": [
                { "name": "a_len", "type": "felt" },
                { "name": "a", "type": "felt*" }
            ],
            "outputs": [{ "name": "res", "type": "felt" }]
        },
        {
            "type": "function",
            "name": "echo_array",
            "inputs": [
                { "name": "items_len", "type": "felt" },
                { "name": "items", "type": "felt*" }
            ],
            "outputs": [
                { "name": "items_len", "type": "felt" },
                { "name": "items", "type": "felt*" }
            ]
        },
        {
            "type": "function",
            "name": "echo_points",
            "inputs": [
                { "name": "points_len", "type": "felt" },
                { "name": "points", "type": "Point*" }
            ],
            "outputs": [
                { "name": "points_len", "type": "felt" },
                { "name": "points", "type": "Point*" }
            ]
        },
        {
            "type": "function",
            "name": "echo_line",
            "inputs": [{ "name": "line", "type": "Line" }],
            "outputs": [{ "name": "line", "type": "Line" }]
        },
        {
            "type": "function",
            "name": "echo_vector",
            "inputs": [{ "name": "v", "type": "Vector" }],
            "outputs": [{ "name": "v", "type": "Vector" }]
        },
        {
            "type": "function",
            "name": "echo_nested_tuple",
            "inputs": [{ "name": "pair", "type": "(felt, (felt, felt))" }],
            "outputs": [{ "name": "pair", "type": "(felt, (felt, felt))" }]
        },
        {
            "type": "function",
            "name": "echo_named_tuple",
            "inputs": [{ "name": "pt", "type": "(x: felt, y: felt)" }],
            "outputs": [{ "name": "pt", "type": "(x: felt, y: felt)" }]
        },
        {
            "type": "function",
            "name": "use_missing_type",
            "inputs": [{ "name": "m", "type": "Missing" }],
            "outputs": [{ "name": "m", "type": "Missing" }]
        },
        {
            "type": "event",
            "name": "points_changed",
            "keys": [],
            "data": [
                { "name": "pt", "type": "Point" },
                { "name": "amount", "type": "felt" }
            ]
        }
    ]))
    .unwrap();

    /// A Cairo 1 ABI exercising the modern forms: `Array::<T>`, `u256`,
    /// `bool`, interface nesting.
    pub static ref CAIRO_1_ABI: Abi = Abi::try_from(json!([
        {
            "type": "impl",
            "name": "ContractImpl",
            "interface_name": "contract::IContract"
        },
        {
            "type": "struct",
            "name": "contract::Point",
            "members": [
                { "name": "x", "type": "core::felt252" },
                { "name": "y", "type": "core::felt252" }
            ]
        },
        {
            "type": "interface",
            "name": "contract::IContract",
            "items": [
                {
                    "type": "function",
                    "name": "sum",
                    "inputs": [
                        { "name": "values", "type": "core::array::Array::<core::integer::u32>" }
                    ],
                    "outputs": [{ "type": "core::integer::u32" }],
                    "state_mutability": "view"
                },
                {
                    "type": "function",
                    "name": "echo_points",
                    "inputs": [
                        { "name": "points", "type": "core::array::Array::<contract::Point>" }
                    ],
                    "outputs": [
                        { "name": "points", "type": "core::array::Array::<contract::Point>" }
                    ],
                    "state_mutability": "view"
                },
                {
                    "type": "function",
                    "name": "echo_supply",
                    "inputs": [{ "name": "amount", "type": "core::integer::u256" }],
                    "outputs": [{ "name": "amount", "type": "core::integer::u256" }],
                    "state_mutability": "view"
                },
                {
                    "type": "function",
                    "name": "toggle",
                    "inputs": [{ "name": "flag", "type": "core::bool" }],
                    "outputs": [{ "name": "flag", "type": "core::bool" }],
                    "state_mutability": "external"
                }
            ]
        },
        {
            "type": "event",
            "name": "contract::contract::PointChanged",
            "inputs": [{ "name": "new_point", "type": "contract::Point" }]
        }
    ]))
    .unwrap();
}

pub fn cairo_0_adapter() -> ContractAdapter {
    ContractAdapter::new(CAIRO_0_ABI.clone(), AbiDialect::Cairo0)
}

pub fn cairo_1_adapter() -> ContractAdapter {
    ContractAdapter::new(CAIRO_1_ABI.clone(), AbiDialect::Cairo1)
}
