use thiserror::Error;

/// Everything that can go wrong while adapting values to or from the wire.
/// Any failure aborts the whole adapt call; a wrongly adapted argument is a
/// correctness hazard, not a transient fault, so there is no recovery path.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Types error: {0}")]
    TypesError(#[from] adapt_types::error::Error),
    #[error("{label}: expected {expected} arguments, got {actual}")]
    ArgumentCountMismatch { label: String, expected: usize, actual: usize },
    #[error("No value supplied for {label}")]
    MissingArgument { label: String },
    #[error("{label}: expected an object of named values")]
    NotAnObject { label: String },
    #[error("{label}: expected a value of type {expected_type}, got: {value}")]
    InvalidScalarValue { label: String, expected_type: String, value: String },
    #[error("Expected a boolean or a number equal to 0 or 1, got: {value}")]
    InvalidBooleanValue { value: String },
    #[error("Expected a u256 number in range [0, 2^256), got: {value}")]
    InvalidU256Value { value: String },
    #[error("{label}: expected an array of type {expected_type}")]
    NotAnArray { label: String, expected_type: String },
    #[error("Array length argument {len_name} must appear right before {array_name}")]
    MalformedLegacyArrayLength { len_name: String, array_name: String },
    #[error("Cannot adapt a pointer array nested in a composite type: {type_name}")]
    NestedLegacyArray { type_name: String },
    #[error("Type {type_name} not present in ABI")]
    UnknownStructType { type_name: String },
    #[error("{kind} '{name}' doesn't exist in the ABI")]
    MissingEntry { kind: String, name: String },
    #[error("Cannot parse raw response: {reason}")]
    UnparseableRawResponse { reason: String },
}

pub type AdaptResult<T, E = Error> = Result<T, E>;
