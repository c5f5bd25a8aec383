use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::{AdaptResult, Error, JsonError};

/// Dialect of the ABI a contract was compiled with. Only the input adapter
/// cares: Cairo 0 arrays come with an implicit `_len` companion parameter,
/// Cairo 1 arrays carry their length inline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub enum AbiDialect {
    Cairo0,
    Cairo1,
}

impl AbiDialect {
    pub fn is_legacy(&self) -> bool {
        matches!(self, AbiDialect::Cairo0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize, Serialize, Default)]
pub enum AbiEntryType {
    #[serde(rename = "constructor")]
    Constructor,
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "function")]
    #[default]
    Function,
    #[serde(rename = "interface")]
    Interface,
    #[serde(rename = "l1_handler")]
    L1Handler,
    #[serde(rename = "struct")]
    Struct,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AbiEntry {
    /// An event abi entry.
    Event(EventAbiEntry),
    /// A function, constructor or l1_handler abi entry.
    Function(FunctionAbiEntry),
    /// An interface abi entry, a nesting container of further entries.
    Interface(InterfaceAbiEntry),
    /// A struct abi entry.
    Struct(StructAbiEntry),
}

impl AbiEntry {
    pub fn name(&self) -> &str {
        match self {
            AbiEntry::Event(entry) => &entry.name,
            AbiEntry::Function(entry) => &entry.name,
            AbiEntry::Interface(entry) => &entry.name,
            AbiEntry::Struct(entry) => &entry.name,
        }
    }
}

/// A function input or output. Outputs may be unnamed.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct TypedParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub r#type: String,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct FunctionAbiEntry {
    pub name: String,
    pub r#type: AbiEntryType,
    pub inputs: Vec<TypedParameter>,
    #[serde(default)]
    pub outputs: Vec<TypedParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "stateMutability", alias = "state_mutability")]
    pub state_mutability: Option<String>,
}

/// A struct abi entry. Member order defines the wire layout.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct StructAbiEntry {
    pub name: String,
    pub r#type: AbiEntryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    pub members: Vec<StructMember>,
}

/// A struct member for [StructAbiEntry].
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct StructMember {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    pub r#type: String,
}

/// An event abi entry. Cairo 0 lists its parameters under `data`, Cairo 1
/// under `inputs`.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct EventAbiEntry {
    pub name: String,
    pub r#type: AbiEntryType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<TypedParameter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<TypedParameter>>,
}

impl EventAbiEntry {
    /// The parameter list of the populated dialect field.
    pub fn parameters(&self) -> &[TypedParameter] {
        self.data.as_deref().or(self.inputs.as_deref()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct InterfaceAbiEntry {
    pub name: String,
    pub r#type: AbiEntryType,
    pub items: Vec<AbiEntry>,
}

impl<'de> Deserialize<'de> for AbiEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_value = serde_json::Value::deserialize(deserializer)?;
        let entry_type = match raw_value.get("type") {
            Some(tag) => serde_json::from_value::<AbiEntryType>(tag.clone()).map_err(|_| {
                serde::de::Error::custom(format!("Unsupported ABI entry type: {tag}"))
            })?,
            None => {
                return Err(serde::de::Error::custom(format!(
                    "ABI entry has no type: {raw_value}"
                )));
            }
        };

        match entry_type {
            AbiEntryType::Constructor | AbiEntryType::Function | AbiEntryType::L1Handler => {
                let entry = serde_json::from_value(raw_value).map_err(|e| {
                    serde::de::Error::custom(format!("Invalid function ABI entry: {e}"))
                })?;
                Ok(AbiEntry::Function(entry))
            }
            AbiEntryType::Struct => {
                let entry = serde_json::from_value(raw_value).map_err(|e| {
                    serde::de::Error::custom(format!("Invalid struct ABI entry: {e}"))
                })?;
                Ok(AbiEntry::Struct(entry))
            }
            AbiEntryType::Event => {
                let entry = serde_json::from_value(raw_value).map_err(|e| {
                    serde::de::Error::custom(format!("Invalid event ABI entry: {e}"))
                })?;
                Ok(AbiEntry::Event(entry))
            }
            AbiEntryType::Interface => {
                let entry = serde_json::from_value(raw_value).map_err(|e| {
                    serde::de::Error::custom(format!("Invalid interface ABI entry: {e}"))
                })?;
                Ok(AbiEntry::Interface(entry))
            }
        }
    }
}

/// Lookup-by-name view of a contract's ABI. Built once from the artifact's
/// JSON array and read-only afterwards; `interface` entries are flattened
/// into the top level, entry kinds unknown to the adapters are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abi {
    entries: IndexMap<String, AbiEntry>,
}

impl Abi {
    pub fn get(&self, name: &str) -> Option<&AbiEntry> {
        self.entries.get(name)
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionAbiEntry> {
        match self.entries.get(name) {
            Some(AbiEntry::Function(entry)) => Some(entry),
            _ => None,
        }
    }

    pub fn get_struct(&self, name: &str) -> Option<&StructAbiEntry> {
        match self.entries.get(name) {
            Some(AbiEntry::Struct(entry)) => Some(entry),
            _ => None,
        }
    }

    pub fn get_event(&self, name: &str) -> Option<&EventAbiEntry> {
        match self.entries.get(name) {
            Some(AbiEntry::Event(entry)) => Some(entry),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AbiEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_raw_entries(raw_entries: Vec<serde_json::Value>) -> AdaptResult<Self> {
        let mut abi = Abi::default();
        for raw_entry in raw_entries {
            let tag = raw_entry.get("type").cloned().unwrap_or_default();
            if serde_json::from_value::<AbiEntryType>(tag.clone()).is_err() {
                trace!("Dropping ABI entry of unrecognized type {tag}");
                continue;
            }
            let entry = serde_json::from_value::<AbiEntry>(raw_entry)
                .map_err(|e| Error::JsonError(JsonError::SerdeJsonError(e)))?;
            abi.insert_entry(entry)?;
        }
        Ok(abi)
    }

    /// Flattens interfaces recursively; a name collision is an error here,
    /// at construction, rather than an ambiguity at call time.
    fn insert_entry(&mut self, entry: AbiEntry) -> AdaptResult<()> {
        if let AbiEntry::Interface(interface) = entry {
            for item in interface.items {
                self.insert_entry(item)?;
            }
            return Ok(());
        }

        let name = entry.name().to_string();
        if self.entries.insert(name.clone(), entry).is_some() {
            return Err(Error::DuplicateAbiEntryName { name });
        }
        Ok(())
    }
}

impl TryFrom<serde_json::Value> for Abi {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> AdaptResult<Self> {
        let raw_entries = serde_json::from_value(value)
            .map_err(|e| Error::JsonError(JsonError::SerdeJsonError(e)))?;
        Self::from_raw_entries(raw_entries)
    }
}

impl std::str::FromStr for Abi {
    type Err = Error;

    fn from_str(raw_abi: &str) -> AdaptResult<Self> {
        let raw_entries = serde_json::from_str(raw_abi)
            .map_err(|e| Error::JsonError(JsonError::SerdeJsonError(e)))?;
        Self::from_raw_entries(raw_entries)
    }
}

impl<'de> Deserialize<'de> for Abi {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
        Self::from_raw_entries(raw_entries).map_err(serde::de::Error::custom)
    }
}

/// Serializes as the flat entry array; interface nesting is not restored.
impl Serialize for Abi {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.entries.values())
    }
}
