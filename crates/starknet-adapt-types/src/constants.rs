/// The only numeric type of Cairo 0 ABIs.
pub const FELT_TYPE: &str = "felt";

/// Scalar types carried as a single felt on the wire. Classification is an
/// exact, case-sensitive match against this set, never a substring test.
pub const NUMERIC_TYPES: [&str; 10] = [
    FELT_TYPE,
    "core::felt252",
    "core::integer::u8",
    "core::integer::u16",
    "core::integer::u32",
    "core::integer::u64",
    "core::integer::u128",
    "core::integer::usize",
    "core::starknet::class_hash::ClassHash",
    "core::starknet::contract_address::ContractAddress",
];

pub const BOOL_TYPE: &str = "core::bool";

/// Carried as two consecutive felts: low 128 bits, then high 128 bits.
pub const U256_TYPE: &str = "core::integer::u256";

pub const ARRAY_TYPE_PREFIX: &str = "core::array::Array::<";
pub const ARRAY_TYPE_SUFFIX: &str = ">";

/// Suffix of Cairo 0 pointer-array types, e.g. `felt*`.
pub const LEGACY_ARRAY_SUFFIX: &str = "*";

/// Name suffix of the implicit length parameter preceding a Cairo 0 array.
pub const LEN_SUFFIX: &str = "_len";

pub const NAMED_TUPLE_DELIMITER: &str = ": ";
pub const MEMBER_DELIMITER: &str = ", ";

/// Key under which an unnamed return value is stored.
pub const DEFAULT_OUTPUT_NAME: &str = "response";
