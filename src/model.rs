// src/model.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::Error;

/// A dataset payload in array-of-arrays form with a parallel header list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationTable {
    /// Column names, in the positional order of every row.
    pub headers: Vec<String>,
    /// Each data row, one value per header.
    pub data: Vec<Vec<Value>>,
}

impl ObservationTable {
    /// Parse a fetched dataset payload. `locator` is only used in the error.
    pub fn from_value(locator: &str, value: Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(|e| Error::InvalidPayload {
            locator: locator.to_string(),
            reason: e.to_string(),
        })
    }

    /// Position of `column` within the headers.
    pub fn column_index(&self, column: &str) -> Result<usize, Error> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))
    }
}

/// Code → metadata mapping, e.g. `{"sp": {"name_en": "São Paulo", ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable(HashMap<String, Value>);

impl LookupTable {
    /// Parse a fetched metadata payload, which must be a JSON object.
    pub fn from_value(locator: &str, value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(Error::InvalidPayload {
                locator: locator.to_string(),
                reason: format!("expected an object of metadata records, got {}", kind(&other)),
            }),
        }
    }

    /// Localized display name for `code`, if both the record and its
    /// `name_<locale>` string exist.
    pub fn name(&self, code: &str, locale: &str) -> Option<&str> {
        self.0
            .get(code)?
            .get(format!("name_{}", locale))?
            .as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One observation row keyed by column name, with display names joined in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrichedRecord(Map<String, Value>);

impl EnrichedRecord {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn contains_key(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(column.into(), value.into());
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl FromIterator<(String, Value)> for EnrichedRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
