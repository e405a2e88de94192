use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::ImageOption;

use super::{CatalogError, Result};

/// On-disk shape of one option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionRecord {
    pub id: i64,
    pub name: String,
    pub image: String,
}

impl From<&ImageOption> for OptionRecord {
    fn from(option: &ImageOption) -> Self {
        Self {
            id: option.id,
            name: option.name.clone(),
            image: option.image_path.to_string_lossy().into_owned(),
        }
    }
}

/// Parses an options document, coercing loosely typed fields.
///
/// The whole document is rejected on the first bad element.
pub fn parse_options(raw: &str) -> Result<Vec<ImageOption>> {
    let document: Value = serde_json::from_str(raw)?;
    let items = match document {
        Value::Array(items) => items,
        other => return Err(CatalogError::NotAnArray(kind(&other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(fields) = item else {
                return Err(CatalogError::Malformed {
                    index,
                    field: "(element)",
                    reason: format!("must be an object, found {}", kind(item)),
                });
            };
            let id = coerce_id(index, fields.get("id"))?;
            let name = coerce_text(index, "name", fields.get("name"))?;
            let image = coerce_text(index, "image", fields.get("image"))?;
            Ok(ImageOption::new(id, name, image))
        })
        .collect()
}

fn coerce_id(index: usize, value: Option<&Value>) -> Result<i64> {
    let malformed = |reason: String| CatalogError::Malformed {
        index,
        field: "id",
        reason,
    };
    match value {
        None | Some(Value::Null) => Err(malformed("is missing".to_string())),
        Some(Value::Number(number)) => {
            if let Some(id) = number.as_i64() {
                Ok(id)
            } else {
                number
                    .as_f64()
                    .filter(|id| id.is_finite() && id.abs() < i64::MAX as f64)
                    .map(|id| id.trunc() as i64)
                    .ok_or_else(|| malformed(format!("{number} is not an integer")))
            }
        }
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed(format!("{text:?} is not an integer"))),
        Some(other) => Err(malformed(format!("cannot be a {}", kind(other)))),
    }
}

fn coerce_text(index: usize, field: &'static str, value: Option<&Value>) -> Result<String> {
    match value {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(Value::Bool(flag)) => Ok(flag.to_string()),
        None | Some(Value::Null) => Err(CatalogError::Malformed {
            index,
            field,
            reason: "is missing".to_string(),
        }),
        Some(other) => Err(CatalogError::Malformed {
            index,
            field,
            reason: format!("cannot be a {}", kind(other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
