//! Per-form field schemas.
//!
//! Each form declares the fields it needs and, for each field, the profile
//! facts that can fill it (first present wins) and a default. Built-in
//! schemas all use the six canonical fields; form-specific layouts are
//! supplied through configuration.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use smartdispute_core::{FormId, ProfileField};
use tracing::warn;

use crate::TriageError;

/// One field on a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as the form template expects it.
    pub name: String,
    /// Profile facts to try, in order.
    pub sources: Vec<ProfileField>,
    /// Value used when no source is present.
    #[serde(default)]
    pub default: String,
}

impl FieldSpec {
    pub fn new(name: &str, sources: &[ProfileField], default: &str) -> Self {
        Self {
            name: name.to_string(),
            sources: sources.to_vec(),
            default: default.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    pub form: FormId,
    pub fields: Vec<FieldSpec>,
}

#[derive(Deserialize)]
struct RawFormSchema {
    form: FormId,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Validate a schema: at least one field, unique non-blank names, and at
    /// least one source per field.
    pub fn new(form: FormId, fields: Vec<FieldSpec>) -> Result<Self, TriageError> {
        let invalid = |reason: String| TriageError::InvalidSchema { form, reason };

        if fields.is_empty() {
            return Err(invalid("schema has no fields".into()));
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(invalid("blank field name".into()));
            }
            if !seen.insert(field.name.clone()) {
                return Err(invalid(format!("duplicate field {:?}", field.name)));
            }
            if field.sources.is_empty() {
                return Err(invalid(format!("field {:?} has no sources", field.name)));
            }
        }
        Ok(Self { form, fields })
    }

    /// The six canonical fields used when a form has no specific layout.
    pub fn canonical(form: FormId) -> Self {
        use ProfileField::*;

        let fields = vec![
            FieldSpec::new("full_name", &[Name], "Your Name"),
            FieldSpec::new("address", &[Address], "123 Main St"),
            FieldSpec::new("issue_summary", &[Summary, Message], ""),
            FieldSpec::new("date", &[Date], ""),
            FieldSpec::new("opponent", &[Opponent], ""),
            FieldSpec::new("requested_remedy", &[Remedy], "Compensation or action"),
        ];
        Self { form, fields }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

impl<'de> Deserialize<'de> for FormSchema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFormSchema::deserialize(deserializer)?;
        FormSchema::new(raw.form, raw.fields).map_err(serde::de::Error::custom)
    }
}

/// Schemas keyed by form.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<FormId, FormSchema>,
}

impl SchemaRegistry {
    /// An empty registry: every lookup falls back to the canonical layout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Canonical layout registered for every known form.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for form in FormId::ALL {
            registry.insert(FormSchema::canonical(form));
        }
        registry
    }

    /// Add or replace the schema for `schema.form`.
    pub fn insert(&mut self, schema: FormSchema) -> Option<FormSchema> {
        self.schemas.insert(schema.form, schema)
    }

    pub fn get(&self, form: FormId) -> Option<&FormSchema> {
        self.schemas.get(&form)
    }

    /// Schema for `form`, falling back to the canonical layout.
    pub fn schema_for(&self, form: FormId) -> Cow<'_, FormSchema> {
        match self.schemas.get(&form) {
            Some(schema) => Cow::Borrowed(schema),
            None => {
                warn!(form = form.code(), "no schema registered, using canonical fields");
                Cow::Owned(FormSchema::canonical(form))
            }
        }
    }
}
