//! Declarative payload schemas
//!
//! Each payload shape is described by a static list of [`FieldSpec`]s that a
//! single [`Schema::validate`] routine interprets. Validation works on raw JSON
//! so that "field missing" and "field is null" stay distinguishable; the
//! validated object is then deserialized into a typed payload whose nullable
//! fields are [`Nullable`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{CliError, Result, Violation};

/// Numeric bound on an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Strictly greater than zero
    Positive,
    /// Zero or greater
    NonNegative,
}

impl Bound {
    fn check(self, n: f64) -> Option<String> {
        match self {
            Self::Positive if n <= 0.0 => Some("must be greater than 0".to_string()),
            Self::NonNegative if n < 0.0 => Some("must be greater than or equal to 0".to_string()),
            _ => None,
        }
    }
}

/// What a field must contain
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    String,
    /// Absolute URL string
    Url,
    Integer(Bound),
    /// Any finite number
    Number(Bound),
    /// String-keyed mapping of arbitrary values
    Object,
    /// One of a closed set of strings
    Enum(&'static [&'static str]),
}

/// One field of a schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub nullable: bool,
}

impl FieldSpec {
    /// Optional field that rejects explicit null
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
        }
    }

    /// Optional field that accepts explicit null
    pub const fn nullable(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
        }
    }

    /// Required, non-null field
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
        }
    }

    fn check(&self, value: &Value) -> Option<String> {
        if value.is_null() {
            return (!self.nullable).then(|| "must not be null".to_string());
        }
        match self.kind {
            FieldKind::String => (!value.is_string()).then(|| "expected a string".to_string()),
            FieldKind::Url => match value.as_str() {
                None => Some("expected a string".to_string()),
                Some(s) => url::Url::parse(s)
                    .err()
                    .map(|e| format!("invalid url '{s}': {e}")),
            },
            FieldKind::Integer(bound) => {
                let Some(n) = value.as_f64() else {
                    return Some("expected a number".to_string());
                };
                if let Some(message) = bound.check(n) {
                    return Some(message);
                }
                (!value.is_i64() && !value.is_u64()).then(|| "expected an integer".to_string())
            }
            FieldKind::Number(bound) => match value.as_f64() {
                Some(n) => bound.check(n),
                None => Some("expected a number".to_string()),
            },
            FieldKind::Object => (!value.is_object()).then(|| "expected an object".to_string()),
            FieldKind::Enum(allowed) => match value.as_str() {
                Some(s) if allowed.contains(&s) => None,
                _ => Some(format!("expected one of: {}", allowed.join(", "))),
            },
        }
    }
}

/// A named set of field specs
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Validate `candidate` and return an object holding only the declared
    /// fields. Absent fields stay absent and explicit nulls stay null.
    pub fn validate(&self, candidate: &Value) -> Result<Map<String, Value>> {
        let Some(object) = candidate.as_object() else {
            return Err(CliError::schema(
                self.name,
                vec![Violation::new("(root)", "expected an object")],
            ));
        };

        let mut violations = Vec::new();
        let mut validated = Map::new();

        for field in self.fields {
            match object.get(field.name) {
                None if field.required => violations.push(Violation::new(field.name, "is required")),
                None => {}
                Some(value) => match field.check(value) {
                    Some(message) => violations.push(Violation::new(field.name, message)),
                    None => {
                        validated.insert(field.name.to_string(), value.clone());
                    }
                },
            }
        }

        if violations.is_empty() {
            Ok(validated)
        } else {
            Err(CliError::schema(self.name, violations))
        }
    }
}

/// A payload type bound to the schema that guards it
pub trait Validated: DeserializeOwned {
    const SCHEMA: &'static Schema;

    /// Check `candidate` against [`Self::SCHEMA`] and build the typed value.
    fn validate(candidate: &Value) -> Result<Self> {
        let validated = Self::SCHEMA.validate(candidate)?;
        serde_json::from_value(Value::Object(validated)).map_err(|e| {
            CliError::schema(Self::SCHEMA.name, vec![Violation::new("(root)", e.to_string())])
        })
    }
}

/// Three-state value of a nullable optional field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    /// Field was not given; left out of any payload
    Absent,
    /// Field was given as an explicit null; sent as null
    Null,
    Present(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Present(v) => serializer.serialize_some(v),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    /// Only called when the key exists; missing keys come from `#[serde(default)]`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|v| v.map_or(Self::Null, Self::Present))
    }
}
