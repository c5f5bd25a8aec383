use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Conversion error: {0}")]
    ConversionError(#[from] ConversionError),
    #[error(transparent)]
    JsonError(#[from] JsonError),
    #[error("Duplicate ABI entry name: {name}")]
    DuplicateAbiEntryName { name: String },
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid internal structure: {0}")]
    InvalidInternalStructure(String),
    #[error("Value is out of range: {0}")]
    OutOfRangeError(String),
}

#[derive(Error, Debug)]
pub enum JsonError {
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Error: {msg}")]
    Custom { msg: String },
}

pub type AdaptResult<T, E = Error> = Result<T, E>;
