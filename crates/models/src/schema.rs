//! Schema registry.
//!
//! Each resource declares its writable fields as a static, ordered list of
//! [`FieldSpec`]s. The repository interprets these generically: a JSON body
//! is checked field by field and converted into store values, so no entity
//! needs hand-written validation or deserialization code.

use sea_orm::Value;
use serde_json::{Map, Value as Json};
use validator::ValidateEmail;

use crate::errors::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text (`VARCHAR`/`TEXT`).
    Text,
    /// 64-bit integer; accepts JSON integers or strings holding one.
    Integer,
    /// Foreign key to another record's 32-bit id.
    Reference,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Any,
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key in the JSON body and in serialized records.
    pub key: &'static str,
    /// Store column name.
    pub column: &'static str,
    pub kind: FieldKind,
    /// Required fields reject null and, for text, blank strings.
    pub required: bool,
    pub format: Format,
    /// Applied on create when the key is absent.
    pub default: Option<&'static str>,
}

impl FieldSpec {
    const fn new(key: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self { key, column, kind, required: false, format: Format::Any, default: None }
    }

    pub const fn text(key: &'static str, column: &'static str) -> Self {
        Self::new(key, column, FieldKind::Text)
    }

    pub const fn integer(key: &'static str, column: &'static str) -> Self {
        Self::new(key, column, FieldKind::Integer)
    }

    pub const fn reference(key: &'static str, column: &'static str) -> Self {
        Self::new(key, column, FieldKind::Reference)
    }

    pub const fn boolean(key: &'static str, column: &'static str) -> Self {
        Self::new(key, column, FieldKind::Boolean)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn email(mut self) -> Self {
        self.format = Format::Email;
        self
    }

    pub const fn default_text(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Check one raw JSON value against this field and convert it to a store value.
    pub fn coerce(&self, raw: &Json) -> Result<Value, String> {
        if raw.is_null() {
            return if self.required {
                Err(format!("{} cannot be null", self.key))
            } else {
                Ok(self.null_value())
            };
        }
        match self.kind {
            FieldKind::Text => {
                let s = raw.as_str().ok_or_else(|| format!("{} must be a string", self.key))?;
                if self.required && s.trim().is_empty() {
                    return Err(format!("{} cannot be empty", self.key));
                }
                if self.format == Format::Email && !s.validate_email() {
                    return Err(format!("{} must be a valid email address", self.key));
                }
                Ok(Value::from(s.to_owned()))
            }
            FieldKind::Integer => as_integer(raw)
                .map(Value::from)
                .ok_or_else(|| format!("{} must be an integer", self.key)),
            FieldKind::Reference => as_integer(raw)
                .and_then(|n| i32::try_from(n).ok())
                .map(Value::from)
                .ok_or_else(|| format!("{} must be an integer id", self.key)),
            FieldKind::Boolean => as_bool(raw)
                .map(Value::from)
                .ok_or_else(|| format!("{} must be a boolean", self.key)),
        }
    }

    /// The store value used when this field is explicitly cleared.
    pub fn null_value(&self) -> Value {
        match self.kind {
            FieldKind::Text => Value::String(None),
            FieldKind::Integer => Value::BigInt(None),
            FieldKind::Reference => Value::Int(None),
            FieldKind::Boolean => Value::Bool(None),
        }
    }
}

fn as_integer(raw: &Json) -> Option<i64> {
    match raw {
        Json::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64).map(|f| f as i64)),
        Json::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_bool(raw: &Json) -> Option<bool> {
    match raw {
        Json::Bool(b) => Some(*b),
        Json::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Validate a record against `schema`.
///
/// Absent required keys count as null. Returns the converted value of every
/// key present in `record`; keys not declared in the schema are ignored.
/// All violations are reported together, one per line.
pub fn validate(
    schema: &'static [FieldSpec],
    record: &Map<String, Json>,
) -> Result<Vec<(&'static FieldSpec, Value)>, ModelError> {
    let mut values = Vec::with_capacity(schema.len());
    let mut violations = Vec::new();
    for spec in schema {
        let outcome = match record.get(spec.key) {
            Some(raw) => spec.coerce(raw).map(Some),
            None if spec.required => Err(format!("{} cannot be null", spec.key)),
            None => Ok(None),
        };
        match outcome {
            Ok(Some(v)) => values.push((spec, v)),
            Ok(None) => {}
            Err(msg) => violations.push(format!("Validation error: {msg}")),
        }
    }
    if violations.is_empty() {
        Ok(values)
    } else {
        Err(ModelError::Validation(violations.join(",\n")))
    }
}

/// Interpret a request body as a field map.
pub fn as_record(body: &Json) -> Result<&Map<String, Json>, ModelError> {
    body.as_object()
        .ok_or_else(|| ModelError::Validation("Validation error: body must be a JSON object".into()))
}
