//! OpenAPI-subset schemas understood by the hosted model.
//!
//! Used both for function declaration parameters and for structured-output
//! response schemas.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema data type. Upper-case on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    /// String value
    String,
    /// Floating point number
    Number,
    /// Integer
    Integer,
    /// Boolean
    Boolean,
    /// Array of `items`
    Array,
    /// Object with `properties`
    #[default]
    Object,
}

/// A schema node.
///
/// # Examples
///
/// ```
/// use vermeer_interface::Schema;
///
/// let schema = Schema::object(
///     [("period", Schema::string("Reporting period"))],
///     ["period"],
/// );
/// let json = serde_json::to_value(&schema).unwrap();
///
/// assert_eq!(json["type"], "OBJECT");
/// assert_eq!(json["properties"]["period"]["type"], "STRING");
/// assert_eq!(json["required"][0], "period");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Data type
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Human-readable description, read by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Object properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    /// Required object properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Array element schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Allowed string values
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Minimum array length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    /// Maximum array length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

impl Schema {
    /// String schema with a description.
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            schema_type: SchemaType::String,
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// String schema restricted to `values`.
    pub fn string_enum(
        description: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            enum_values: values.into_iter().map(Into::into).collect(),
            ..Self::string(description)
        }
    }

    /// Array of `items`.
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: SchemaType::Array,
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// Object with the given properties and required names.
    pub fn object<K, R>(
        properties: impl IntoIterator<Item = (K, Schema)>,
        required: impl IntoIterator<Item = R>,
    ) -> Self
    where
        K: Into<String>,
        R: Into<String>,
    {
        Self {
            schema_type: SchemaType::Object,
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            required: required.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Bound the array length.
    pub fn with_item_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_items = Some(min);
        self.max_items = Some(max);
        self
    }
}
