//! Provider-neutral description of schema-constrained output.
//!
//! Inference endpoints each have their own way of expressing "respond with a
//! JSON array of objects shaped like this". [`ResponseSchema`] captures that
//! shape once, independent of any vendor type system; transports render it
//! into their wire format (see [`to_json_schema`](ResponseSchema::to_json_schema))
//! and callers re-validate the parsed response with
//! [`validate`](ResponseSchema::validate), since not every provider enforces
//! the constraint reliably.
//!
//! The only supported top-level shape is an array of objects -- that is the
//! contract of every gateway operation.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ClientError, Result};

/// The type of a single object field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// Any JSON number.
    Number,
    /// A JSON number with no fractional part.
    Integer,
    /// A JSON boolean.
    Boolean,
    /// A JSON array of strings.
    StringArray,
}

impl FieldKind {
    fn json_schema_type(self) -> Value {
        match self {
            FieldKind::String => json!({"type": "string"}),
            FieldKind::Number => json!({"type": "number"}),
            FieldKind::Integer => json!({"type": "integer"}),
            FieldKind::Boolean => json!({"type": "boolean"}),
            FieldKind::StringArray => json!({"type": "array", "items": {"type": "string"}}),
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    fn label(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::StringArray => "array of strings",
        }
    }
}

/// One named, typed field of the response objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in the JSON objects.
    pub name: String,

    /// Expected type.
    pub kind: FieldKind,

    /// Whether the field must be present in every item. Defaults to true.
    pub required: bool,

    /// Optional description forwarded to the endpoint as a generation hint.
    #[serde(default)]
    pub description: Option<String>,

    /// For string fields, an optional closed set of allowed values.
    #[serde(default)]
    pub allowed: Option<Vec<String>>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            description: None,
            allowed: None,
        }
    }

    /// A required string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// A required number field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// A required integer field.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// A required boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// A required array-of-strings field.
    pub fn string_array(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::StringArray)
    }

    /// Mark this field as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach a description hint for the generator.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict a string field to a closed set of values.
    pub fn one_of(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Shape of the expected response: a JSON array of objects with these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSchema {
    /// The fields of each object in the array.
    pub fields: Vec<FieldSpec>,
}

impl ResponseSchema {
    /// Create a schema from its field specs.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Render the schema as a JSON-Schema value suitable for the OpenAI
    /// `response_format.json_schema.schema` slot.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut prop = field.kind.json_schema_type();
            if let Some(ref description) = field.description {
                prop["description"] = json!(description);
            }
            if let Some(ref allowed) = field.allowed {
                prop["enum"] = json!(allowed);
            }
            properties.insert(field.name.clone(), prop);
            if field.required {
                required.push(field.name.clone());
            }
        }

        json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": Value::Object(properties),
                "required": required,
            }
        })
    }

    /// Validate a parsed response value against the schema.
    ///
    /// Checks that the value is an array of objects, that every required
    /// field is present and non-null, that declared fields have the declared
    /// type, and that closed-set string fields hold an allowed value. Extra
    /// fields are tolerated.
    pub fn validate(&self, value: &Value) -> Result<()> {
        let items = value
            .as_array()
            .ok_or_else(|| ClientError::SchemaViolation("expected a JSON array".into()))?;

        for (idx, item) in items.iter().enumerate() {
            let obj = item.as_object().ok_or_else(|| {
                ClientError::SchemaViolation(format!("item {idx}: expected an object"))
            })?;

            for field in &self.fields {
                match obj.get(&field.name) {
                    None | Some(Value::Null) if field.required => {
                        return Err(ClientError::SchemaViolation(format!(
                            "item {idx}: missing required field '{}'",
                            field.name
                        )));
                    }
                    None | Some(Value::Null) => {}
                    Some(v) => {
                        if !field.kind.matches(v) {
                            return Err(ClientError::SchemaViolation(format!(
                                "item {idx}: field '{}' is not a {}",
                                field.name,
                                field.kind.label()
                            )));
                        }
                        if let (Some(allowed), Some(s)) = (&field.allowed, v.as_str())
                            && !allowed.iter().any(|a| a == s)
                        {
                            return Err(ClientError::SchemaViolation(format!(
                                "item {idx}: field '{}' has disallowed value '{s}'",
                                field.name
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
