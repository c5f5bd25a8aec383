use adapt_types::abi::{Abi, AbiDialect, StructMember, TypedParameter};
use adapt_types::cairo_type::{
    members_are_named, split_named_member, split_tuple_members, CairoType,
};
use adapt_types::constants::LEN_SUFFIX;
use adapt_types::error::ConversionError;
use adapt_types::felt::{parse_big_int, split_u256, to_field_element};
use adapt_types::value::CairoValue;
use num_bigint::{BigInt, BigUint};
use tracing::trace;

use crate::error::{AdaptResult, Error};

/// Adapts the structured `args` of `function_name` to the flat sequence of
/// decimal-string felts the wire expects, walking `input_specs` in order.
///
/// `args` must supply exactly one value per user-facing parameter. With
/// [`AbiDialect::Cairo0`], the implicit `_len` parameter preceding an array
/// is never supplied by the caller: the computed element count is emitted in
/// its place.
pub fn adapt_input(
    function_name: &str,
    args: &CairoValue,
    input_specs: &[TypedParameter],
    abi: &Abi,
    dialect: AbiDialect,
) -> AdaptResult<Vec<String>> {
    let arg_map =
        args.as_object().ok_or_else(|| Error::NotAnObject { label: function_name.into() })?;

    let expected = expected_argument_count(input_specs, dialect);
    if arg_map.len() != expected {
        return Err(Error::ArgumentCountMismatch {
            label: function_name.into(),
            expected,
            actual: arg_map.len(),
        });
    }

    let mut adapted = Vec::new();
    for (position, spec) in input_specs.iter().enumerate() {
        let param_name = spec.name.as_deref().ok_or_else(|| {
            Error::TypesError(
                ConversionError::InvalidInternalStructure(format!(
                    "Unnamed input parameter of {function_name}"
                ))
                .into(),
            )
        })?;

        if dialect.is_legacy() {
            if let Some(array_name) = length_holder_target(param_name, &spec.r#type) {
                // Implicit length parameter: nothing is emitted here. The
                // element count lands at this position when the array right
                // after it is processed.
                let next = input_specs
                    .get(position + 1)
                    .and_then(|next| Some((next.name.as_deref()?, next.r#type.as_str())));
                validate_length_holder(next, param_name, array_name)?;
                if !arg_map.contains_key(array_name) {
                    return Err(Error::MissingArgument {
                        label: format!("{function_name}.{array_name}"),
                    });
                }
                continue;
            }
        }

        let label = format!("{function_name}.{param_name}");
        let value = arg_map
            .get(param_name)
            .ok_or_else(|| Error::MissingArgument { label: label.clone() })?;
        adapt_value(&label, value, &spec.r#type, abi, dialect, &mut adapted)?;
    }

    trace!("Adapted input of {function_name} into {} felts", adapted.len());
    Ok(adapted)
}

/// Adapts one value of any recognized type, appending its felts to the
/// call-local accumulator. Composite types recurse member by member, in
/// declared order.
fn adapt_value(
    label: &str,
    value: &CairoValue,
    type_name: &str,
    abi: &Abi,
    dialect: AbiDialect,
    adapted: &mut Vec<String>,
) -> AdaptResult<()> {
    match CairoType::classify(type_name) {
        CairoType::Scalar => {
            let number = scalar_value(value).ok_or_else(|| Error::InvalidScalarValue {
                label: label.into(),
                expected_type: type_name.into(),
                value: value.to_string(),
            })?;
            adapted.push(to_field_element(&number));
        }
        CairoType::Bool => {
            let flag = match value {
                CairoValue::Bool(flag) => BigInt::from(*flag as u8),
                CairoValue::Number(number)
                    if *number == BigInt::from(0_u8) || *number == BigInt::from(1_u8) =>
                {
                    number.clone()
                }
                _ => return Err(Error::InvalidBooleanValue { value: value.to_string() }),
            };
            adapted.push(to_field_element(&flag));
        }
        CairoType::U256 => {
            let (low, high) = adapt_u256(value)?;
            adapted.push(low);
            adapted.push(high);
        }
        CairoType::LegacyArray(element_type) | CairoType::Array(element_type) => {
            let elements = value.as_array().ok_or_else(|| Error::NotAnArray {
                label: label.into(),
                expected_type: type_name.into(),
            })?;
            adapted.push(elements.len().to_string());
            for (index, element) in elements.iter().enumerate() {
                adapt_value(
                    &format!("{label}[{index}]"),
                    element,
                    element_type,
                    abi,
                    dialect,
                    adapted,
                )?;
            }
        }
        CairoType::Tuple(content) => adapt_tuple(label, value, content, abi, dialect, adapted)?,
        CairoType::NamedMember { member_type, .. } => {
            adapt_value(label, value, member_type, abi, dialect, adapted)?;
        }
        CairoType::Struct(struct_name) => {
            adapt_struct(label, value, struct_name, abi, dialect, adapted)?;
        }
    }
    Ok(())
}

fn adapt_tuple(
    label: &str,
    value: &CairoValue,
    content: &str,
    abi: &Abi,
    dialect: AbiDialect,
    adapted: &mut Vec<String>,
) -> AdaptResult<()> {
    let member_types = split_tuple_members(content);

    if members_are_named(&member_types) {
        let entries =
            value.as_object().ok_or_else(|| Error::NotAnObject { label: label.into() })?;
        if entries.len() != member_types.len() {
            return Err(Error::ArgumentCountMismatch {
                label: label.into(),
                expected: member_types.len(),
                actual: entries.len(),
            });
        }
        for member in &member_types {
            let (member_name, member_type) = split_named_member(member).ok_or_else(|| {
                Error::TypesError(
                    ConversionError::InvalidInternalStructure(format!(
                        "Expected a named tuple member, got: {member}"
                    ))
                    .into(),
                )
            })?;
            let member_label = format!("{label}.{member_name}");
            let member_value = entries
                .get(member_name)
                .ok_or_else(|| Error::MissingArgument { label: member_label.clone() })?;
            adapt_value(&member_label, member_value, member_type, abi, dialect, adapted)?;
        }
    } else {
        let elements = value.as_array().ok_or_else(|| Error::NotAnArray {
            label: label.into(),
            expected_type: format!("({content})"),
        })?;
        if elements.len() != member_types.len() {
            return Err(Error::ArgumentCountMismatch {
                label: label.into(),
                expected: member_types.len(),
                actual: elements.len(),
            });
        }
        for (index, (member_type, element)) in member_types.iter().zip(elements).enumerate() {
            adapt_value(&format!("{label}[{index}]"), element, member_type, abi, dialect, adapted)?;
        }
    }
    Ok(())
}

fn adapt_struct(
    label: &str,
    value: &CairoValue,
    struct_name: &str,
    abi: &Abi,
    dialect: AbiDialect,
    adapted: &mut Vec<String>,
) -> AdaptResult<()> {
    let struct_entry = abi
        .get_struct(struct_name)
        .ok_or_else(|| Error::UnknownStructType { type_name: struct_name.into() })?;
    let entries = value.as_object().ok_or_else(|| Error::NotAnObject { label: label.into() })?;

    let expected = expected_member_count(&struct_entry.members, dialect);
    if entries.len() != expected {
        return Err(Error::ArgumentCountMismatch {
            label: label.into(),
            expected,
            actual: entries.len(),
        });
    }

    for (position, member) in struct_entry.members.iter().enumerate() {
        if dialect.is_legacy() {
            if let Some(array_name) = length_holder_target(&member.name, &member.r#type) {
                let next = struct_entry
                    .members
                    .get(position + 1)
                    .map(|next| (next.name.as_str(), next.r#type.as_str()));
                validate_length_holder(next, &member.name, array_name)?;
                if !entries.contains_key(array_name) {
                    return Err(Error::MissingArgument {
                        label: format!("{label}.{array_name}"),
                    });
                }
                continue;
            }
        }

        let member_label = format!("{label}.{}", member.name);
        let member_value = entries
            .get(&member.name)
            .ok_or_else(|| Error::MissingArgument { label: member_label.clone() })?;
        adapt_value(&member_label, member_value, &member.r#type, abi, dialect, adapted)?;
    }
    Ok(())
}

fn scalar_value(value: &CairoValue) -> Option<BigInt> {
    match value {
        CairoValue::Number(number) => Some(number.clone()),
        CairoValue::Text(text) => parse_big_int(text).ok(),
        _ => None,
    }
}

fn adapt_u256(value: &CairoValue) -> AdaptResult<(String, String)> {
    let invalid = || Error::InvalidU256Value { value: value.to_string() };
    let number = value.as_number().ok_or_else(invalid)?;
    let unsigned: BigUint = number.to_biguint().ok_or_else(invalid)?;
    let (low, high) = split_u256(&unsigned).map_err(|_| invalid())?;
    Ok((to_field_element(&BigInt::from(low)), to_field_element(&BigInt::from(high))))
}

/// If `name`/`type_name` describe the implicit length holder of a legacy
/// array, returns the name of that array.
fn length_holder_target<'a>(name: &'a str, type_name: &str) -> Option<&'a str> {
    if !matches!(CairoType::classify(type_name), CairoType::Scalar) {
        return None;
    }
    name.strip_suffix(LEN_SUFFIX).filter(|array_name| !array_name.is_empty())
}

/// The length holder must be immediately followed by its array.
fn validate_length_holder(
    next: Option<(&str, &str)>,
    len_name: &str,
    array_name: &str,
) -> AdaptResult<()> {
    let adjacent = next.is_some_and(|(next_name, next_type)| {
        next_name == array_name
            && matches!(CairoType::classify(next_type), CairoType::LegacyArray(_))
    });
    if adjacent {
        Ok(())
    } else {
        Err(Error::MalformedLegacyArrayLength {
            len_name: len_name.into(),
            array_name: array_name.into(),
        })
    }
}

fn expected_argument_count(input_specs: &[TypedParameter], dialect: AbiDialect) -> usize {
    if !dialect.is_legacy() {
        return input_specs.len();
    }
    input_specs
        .iter()
        .filter(|spec| {
            spec.name
                .as_deref()
                .and_then(|name| length_holder_target(name, &spec.r#type))
                .is_none()
        })
        .count()
}

fn expected_member_count(members: &[StructMember], dialect: AbiDialect) -> usize {
    if !dialect.is_legacy() {
        return members.len();
    }
    members
        .iter()
        .filter(|member| length_holder_target(&member.name, &member.r#type).is_none())
        .count()
}
