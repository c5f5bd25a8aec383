use crate::constants::{
    ARRAY_TYPE_PREFIX, ARRAY_TYPE_SUFFIX, BOOL_TYPE, LEGACY_ARRAY_SUFFIX, MEMBER_DELIMITER,
    NAMED_TUPLE_DELIMITER, NUMERIC_TYPES, U256_TYPE,
};

/// Classification of an ABI type-name string. Syntactic forms overlap, so
/// [`CairoType::classify`] checks the categories in this exact order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CairoType<'a> {
    /// Single-felt scalar: `felt`, the sized integers, addresses, class hashes.
    Scalar,
    /// `core::bool`.
    Bool,
    /// `core::integer::u256`, two felts on the wire (low, then high).
    U256,
    /// Cairo 0 pointer array; holds the element type (`felt*` -> `felt`).
    LegacyArray(&'a str),
    /// Cairo 1 `Array::<T>`; holds the element type.
    Array(&'a str),
    /// Tuple; holds the content between the outer parentheses.
    Tuple(&'a str),
    /// A single `name: type` pair, as found inside named tuples.
    NamedMember { name: &'a str, member_type: &'a str },
    /// Anything else: a struct name to be resolved against the ABI.
    Struct(&'a str),
}

impl<'a> CairoType<'a> {
    pub fn classify(type_name: &'a str) -> Self {
        if NUMERIC_TYPES.contains(&type_name) {
            CairoType::Scalar
        } else if type_name == BOOL_TYPE {
            CairoType::Bool
        } else if type_name == U256_TYPE {
            CairoType::U256
        } else if let Some(element_type) = type_name.strip_suffix(LEGACY_ARRAY_SUFFIX) {
            CairoType::LegacyArray(element_type)
        } else if let Some(element_type) = type_name
            .strip_prefix(ARRAY_TYPE_PREFIX)
            .and_then(|rest| rest.strip_suffix(ARRAY_TYPE_SUFFIX))
        {
            CairoType::Array(element_type)
        } else if let Some(content) =
            type_name.strip_prefix('(').and_then(|rest| rest.strip_suffix(')'))
        {
            CairoType::Tuple(content)
        } else if let Some((name, member_type)) = split_named_member(type_name) {
            CairoType::NamedMember { name, member_type }
        } else {
            CairoType::Struct(type_name)
        }
    }
}

/// Splits `name: type` at the first `": "` that is not nested inside
/// parentheses. Returns `None` if there is no such delimiter.
pub fn split_named_member(type_name: &str) -> Option<(&str, &str)> {
    let mut depth = 0_usize;
    for (position, byte) in type_name.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && type_name[position..].starts_with(NAMED_TUPLE_DELIMITER) => {
                return Some((
                    &type_name[..position],
                    &type_name[position + NAMED_TUPLE_DELIMITER.len()..],
                ));
            }
            _ => {}
        }
    }
    None
}

/// `true` if the tuple members are `name: type` pairs, judged by the first
/// member. ABI tuples are either fully named or fully positional.
pub fn members_are_named(member_types: &[&str]) -> bool {
    member_types
        .first()
        .is_some_and(|first| matches!(CairoType::classify(first), CairoType::NamedMember { .. }))
}

/// Splits tuple content into member types, cutting only at `", "` delimiters
/// outside of nested parentheses, at any nesting depth. The content of
/// `"(felt, (felt, felt))"` splits into `["felt", "(felt, felt)"]`.
pub fn split_tuple_members(content: &str) -> Vec<&str> {
    let mut members = Vec::new();
    if content.is_empty() {
        return members;
    }

    let bytes = content.as_bytes();
    let mut depth = 0_usize;
    let mut member_start = 0_usize;
    let mut position = 0_usize;
    while position < bytes.len() {
        match bytes[position] {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 && content[position..].starts_with(MEMBER_DELIMITER) => {
                members.push(&content[member_start..position]);
                position += MEMBER_DELIMITER.len();
                member_start = position;
                continue;
            }
            _ => {}
        }
        position += 1;
    }
    members.push(&content[member_start..]);
    members
}
