use adapt_types::abi::{Abi, AbiDialect, FunctionAbiEntry};
use adapt_types::value::CairoValue;
use serde::Serialize;

use crate::error::{AdaptResult, Error};
use crate::input::adapt_input;
use crate::output::adapt_output;

/// An event decoded against its ABI specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedEvent {
    pub name: String,
    pub data: CairoValue,
}

/// Adapts inputs and outputs of one contract's functions. Owns the parsed
/// [`Abi`] and the dialect it was compiled with; constructed explicitly and
/// passed around, never cached globally.
#[derive(Debug, Clone)]
pub struct ContractAdapter {
    abi: Abi,
    dialect: AbiDialect,
}

impl ContractAdapter {
    pub fn new(abi: Abi, dialect: AbiDialect) -> Self {
        Self { abi, dialect }
    }

    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    pub fn dialect(&self) -> AbiDialect {
        self.dialect
    }

    /// Adapts structured `args` to the unstructured array expected by the
    /// wire, e.g. as transaction calldata.
    pub fn adapt_input(
        &self,
        function_name: &str,
        args: &CairoValue,
    ) -> AdaptResult<Vec<String>> {
        let function = self.function(function_name)?;
        adapt_input(function_name, args, &function.inputs, &self.abi, self.dialect)
    }

    /// Adapts an unstructured `raw_result`, the space-separated response of
    /// a call to `function_name`, to a structured object.
    pub fn adapt_output(&self, function_name: &str, raw_result: &str) -> AdaptResult<CairoValue> {
        let function = self.function(function_name)?;
        adapt_output(raw_result, &function.outputs, &self.abi)
    }

    /// Decodes the raw data felts of an event through its specification.
    /// Events are resolved by name; the populated parameter list (`data` for
    /// Cairo 0, `inputs` for Cairo 1) drives the decoding.
    pub fn decode_event(&self, event_name: &str, raw_data: &str) -> AdaptResult<DecodedEvent> {
        let event = self.abi.get_event(event_name).ok_or_else(|| Error::MissingEntry {
            kind: "Event".into(),
            name: event_name.into(),
        })?;
        let data = adapt_output(raw_data, event.parameters(), &self.abi)?;
        Ok(DecodedEvent { name: event_name.into(), data })
    }

    fn function(&self, function_name: &str) -> AdaptResult<&FunctionAbiEntry> {
        self.abi.get_function(function_name).ok_or_else(|| Error::MissingEntry {
            kind: "Function".into(),
            name: function_name.into(),
        })
    }
}
