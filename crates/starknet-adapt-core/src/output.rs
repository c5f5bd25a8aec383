use adapt_types::abi::{Abi, TypedParameter};
use adapt_types::cairo_type::{
    members_are_named, split_named_member, split_tuple_members, CairoType,
};
use adapt_types::constants::{DEFAULT_OUTPUT_NAME, LEN_SUFFIX};
use adapt_types::error::ConversionError;
use adapt_types::felt::{join_u256, parse_big_int};
use adapt_types::value::CairoValue;
use indexmap::IndexMap;
use num_bigint::BigInt;
use tracing::trace;

use crate::error::{AdaptResult, Error};

/// Adapts the raw, space-delimited response of a function call back to a
/// structured object, walking `output_specs` in order with a cursor over the
/// parsed values.
///
/// A legacy (`T*`) array expects the output entry right before it to be its
/// `_len` holder; the holder's already-decoded value supplies the element
/// count and stays in the result. Modern arrays read their count inline.
/// Unnamed return values are stored under `"response"`.
pub fn adapt_output(
    raw_result: &str,
    output_specs: &[TypedParameter],
    abi: &Abi,
) -> AdaptResult<CairoValue> {
    let raw_values = tokenize(raw_result)?;
    let mut cursor = 0_usize;
    let mut adapted: IndexMap<String, CairoValue> = IndexMap::new();
    let mut last_spec: Option<&TypedParameter> = None;

    for spec in output_specs {
        let name = spec.name.as_deref().unwrap_or(DEFAULT_OUTPUT_NAME);
        let value = match CairoType::classify(&spec.r#type) {
            CairoType::LegacyArray(element_type) => {
                let len_name = format!("{name}{LEN_SUFFIX}");
                let holder_precedes = last_spec.is_some_and(|prev| {
                    prev.name.as_deref() == Some(len_name.as_str())
                        && matches!(CairoType::classify(&prev.r#type), CairoType::Scalar)
                });
                let count_value =
                    adapted.get(&len_name).and_then(CairoValue::as_number).cloned();
                let count = match (holder_precedes, count_value) {
                    (true, Some(number)) => element_count(&number)?,
                    _ => {
                        return Err(Error::MalformedLegacyArrayLength {
                            len_name,
                            array_name: name.into(),
                        });
                    }
                };
                ensure_remaining(&raw_values, cursor, count)?;
                let mut elements = Vec::with_capacity(count);
                for _ in 0..count {
                    elements.push(generate_value(&raw_values, &mut cursor, element_type, abi)?);
                }
                CairoValue::Array(elements)
            }
            _ => generate_value(&raw_values, &mut cursor, &spec.r#type, abi)?,
        };
        adapted.insert(name.to_string(), value);
        last_spec = Some(spec);
    }

    if cursor < raw_values.len() {
        trace!("{} unconsumed raw response values", raw_values.len() - cursor);
    }
    Ok(CairoValue::Object(adapted))
}

/// Reconstructs one value of `type_name` from the raw sequence, advancing
/// the cursor by however many elements the value consumed. Composite types
/// recurse member by member, in declared order.
fn generate_value(
    raw_values: &[BigInt],
    cursor: &mut usize,
    type_name: &str,
    abi: &Abi,
) -> AdaptResult<CairoValue> {
    match CairoType::classify(type_name) {
        CairoType::Scalar => Ok(CairoValue::Number(next_value(raw_values, cursor)?)),
        CairoType::Bool => {
            let raw = next_value(raw_values, cursor)?;
            if raw == BigInt::from(0_u8) {
                Ok(CairoValue::Bool(false))
            } else if raw == BigInt::from(1_u8) {
                Ok(CairoValue::Bool(true))
            } else {
                Err(Error::InvalidBooleanValue { value: raw.to_string() })
            }
        }
        CairoType::U256 => {
            let low = next_value(raw_values, cursor)?;
            let high = next_value(raw_values, cursor)?;
            let invalid =
                || Error::InvalidU256Value { value: format!("low: {low}, high: {high}") };
            let joined = match (low.to_biguint(), high.to_biguint()) {
                (Some(low_unsigned), Some(high_unsigned)) => {
                    join_u256(&low_unsigned, &high_unsigned).map_err(|_| invalid())?
                }
                _ => return Err(invalid()),
            };
            Ok(CairoValue::Number(BigInt::from(joined)))
        }
        CairoType::Array(element_type) => {
            let count = element_count(&next_value(raw_values, cursor)?)?;
            ensure_remaining(raw_values, *cursor, count)?;
            let mut elements = Vec::with_capacity(count);
            for _ in 0..count {
                elements.push(generate_value(raw_values, cursor, element_type, abi)?);
            }
            Ok(CairoValue::Array(elements))
        }
        // no count reaches the wire for a pointer array nested in a
        // composite type, so there is nothing valid to decode
        CairoType::LegacyArray(_) => {
            Err(Error::NestedLegacyArray { type_name: type_name.into() })
        }
        CairoType::Tuple(content) => {
            let member_types = split_tuple_members(content);
            if members_are_named(&member_types) {
                let mut entries = IndexMap::with_capacity(member_types.len());
                for member in &member_types {
                    let (member_name, member_type) =
                        split_named_member(member).ok_or_else(|| {
                            Error::TypesError(
                                ConversionError::InvalidInternalStructure(format!(
                                    "Expected a named tuple member, got: {member}"
                                ))
                                .into(),
                            )
                        })?;
                    entries.insert(
                        member_name.to_string(),
                        generate_value(raw_values, cursor, member_type, abi)?,
                    );
                }
                Ok(CairoValue::Object(entries))
            } else {
                let mut elements = Vec::with_capacity(member_types.len());
                for member_type in &member_types {
                    elements.push(generate_value(raw_values, cursor, member_type, abi)?);
                }
                Ok(CairoValue::Array(elements))
            }
        }
        CairoType::NamedMember { member_type, .. } => {
            generate_value(raw_values, cursor, member_type, abi)
        }
        CairoType::Struct(struct_name) => {
            let struct_entry = abi
                .get_struct(struct_name)
                .ok_or_else(|| Error::UnknownStructType { type_name: struct_name.into() })?;
            let mut entries = IndexMap::with_capacity(struct_entry.members.len());
            for member in &struct_entry.members {
                entries.insert(
                    member.name.clone(),
                    generate_value(raw_values, cursor, &member.r#type, abi)?,
                );
            }
            Ok(CairoValue::Object(entries))
        }
    }
}

fn tokenize(raw_result: &str) -> AdaptResult<Vec<BigInt>> {
    raw_result
        .split_whitespace()
        .map(|token| {
            parse_big_int(token).map_err(|_| Error::UnparseableRawResponse {
                reason: format!("Expected a number, got: {token}"),
            })
        })
        .collect()
}

fn next_value(raw_values: &[BigInt], cursor: &mut usize) -> AdaptResult<BigInt> {
    let value = raw_values.get(*cursor).ok_or_else(|| Error::UnparseableRawResponse {
        reason: format!("Response ended at position {cursor}, more values expected"),
    })?;
    *cursor += 1;
    Ok(value.clone())
}

fn element_count(number: &BigInt) -> AdaptResult<usize> {
    let unsigned = number.to_biguint().ok_or_else(|| Error::UnparseableRawResponse {
        reason: format!("Negative array length: {number}"),
    })?;
    if unsigned.bits() > u64::from(usize::BITS) {
        return Err(Error::UnparseableRawResponse {
            reason: format!("Array length too large: {number}"),
        });
    }
    Ok(unsigned.to_u64_digits().first().copied().unwrap_or(0) as usize)
}

fn ensure_remaining(raw_values: &[BigInt], cursor: usize, count: usize) -> AdaptResult<()> {
    let remaining = raw_values.len().saturating_sub(cursor);
    if count > remaining {
        return Err(Error::UnparseableRawResponse {
            reason: format!("Array declares {count} elements, only {remaining} values remain"),
        });
    }
    Ok(())
}
