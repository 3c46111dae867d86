//! # Listing Field Set
//!
//! The fixed 13-key schema returned by the text extractor, and the tolerant
//! decoder that builds it from whatever JSON the model produced.

use crate::errors::ListingError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The keys of a `ListingFieldSet`, in serialization order.
pub const FIELD_KEYS: [&str; 13] = [
    "product_name",
    "color",
    "meesho_price",
    "product_mrp",
    "only_wrong_return_price",
    "inventory",
    "supplier_gst_percent",
    "hsn_code",
    "product_weight_in_gms",
    "supplier_product_id",
    "category",
    "brand",
    "description",
];

/// Structured listing fields for one product.
///
/// Every field is always present. Values the model left out, or returned in a
/// shape that has no sensible string form, are empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFieldSet {
    pub product_name: String,
    pub color: String,
    pub meesho_price: String,
    pub product_mrp: String,
    pub only_wrong_return_price: String,
    pub inventory: String,
    pub supplier_gst_percent: String,
    pub hsn_code: String,
    pub product_weight_in_gms: String,
    pub supplier_product_id: String,
    pub category: String,
    pub brand: String,
    pub description: String,
}

impl ListingFieldSet {
    /// Builds the field set from a parsed completion.
    ///
    /// Fails only when the value is not a JSON object. Extra keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ListingError> {
        let object = value.as_object().ok_or_else(|| {
            ListingError::AiResponseFormat(
                "AI returned unexpected format: expected a JSON object".to_string(),
            )
        })?;
        Ok(Self::from_object(object))
    }

    /// Builds the field set from a JSON object, defaulting every missing key.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let field = |key: &str| object.get(key).map(coerce_to_string).unwrap_or_default();
        Self {
            product_name: field("product_name"),
            color: field("color"),
            meesho_price: field("meesho_price"),
            product_mrp: field("product_mrp"),
            only_wrong_return_price: field("only_wrong_return_price"),
            inventory: field("inventory"),
            supplier_gst_percent: field("supplier_gst_percent"),
            hsn_code: field("hsn_code"),
            product_weight_in_gms: field("product_weight_in_gms"),
            supplier_product_id: field("supplier_product_id"),
            category: field("category"),
            brand: field("brand"),
            description: field("description"),
        }
    }

    /// Looks a field up by its key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "product_name" => &self.product_name,
            "color" => &self.color,
            "meesho_price" => &self.meesho_price,
            "product_mrp" => &self.product_mrp,
            "only_wrong_return_price" => &self.only_wrong_return_price,
            "inventory" => &self.inventory,
            "supplier_gst_percent" => &self.supplier_gst_percent,
            "hsn_code" => &self.hsn_code,
            "product_weight_in_gms" => &self.product_weight_in_gms,
            "supplier_product_id" => &self.supplier_product_id,
            "category" => &self.category,
            "brand" => &self.brand,
            "description" => &self.description,
            _ => return None,
        };
        Some(value.as_str())
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerces a JSON value to its trimmed string form.
///
/// Scalars map to their text, arrays of scalars are joined with `", "`, and
/// `null`, objects and nested arrays become the empty string.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items.iter().map(scalar_to_string).collect();
            parts
                .map(|p| {
                    p.into_iter()
                        .filter(|s| !s.is_empty())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default()
        }
        other => scalar_to_string(other).unwrap_or_default(),
    }
}
