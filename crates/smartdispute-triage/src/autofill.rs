//! Resolve a form's fields from a user profile.
//!
//! Missing profile facts never fail: each field falls back through its
//! sources and then to its schema default.

use smartdispute_core::{FieldMap, FormId, UserProfile};
use tracing::debug;

use crate::schema::{FieldSpec, FormSchema, SchemaRegistry};

/// Autofill `form` from `profile` using the built-in schemas.
pub fn autofill(form: FormId, profile: &UserProfile) -> FieldMap {
    autofill_with(&SchemaRegistry::builtin(), form, profile)
}

/// Autofill `form` using the schema registered in `schemas`.
pub fn autofill_with(schemas: &SchemaRegistry, form: FormId, profile: &UserProfile) -> FieldMap {
    let schema = schemas.schema_for(form);
    let fields = fill_schema(&schema, profile);
    debug!(
        form = form.code(),
        fields = fields.len(),
        defaulted = defaulted_fields(&schema, profile).len(),
        "form autofilled"
    );
    fields
}

/// Resolve every field in `schema`.
pub fn fill_schema(schema: &FormSchema, profile: &UserProfile) -> FieldMap {
    schema
        .fields
        .iter()
        .map(|spec| (spec.name.clone(), resolve(spec, profile).to_string()))
        .collect()
}

/// Fields that no profile fact could fill, in schema order.
///
/// Useful for prompting the user before rendering.
pub fn defaulted_fields<'a>(schema: &'a FormSchema, profile: &UserProfile) -> Vec<&'a str> {
    schema
        .fields
        .iter()
        .filter(|spec| source_value(spec, profile).is_none())
        .map(|spec| spec.name.as_str())
        .collect()
}

fn resolve<'a>(spec: &'a FieldSpec, profile: &'a UserProfile) -> &'a str {
    source_value(spec, profile).unwrap_or(spec.default.as_str())
}

fn source_value<'a>(spec: &FieldSpec, profile: &'a UserProfile) -> Option<&'a str> {
    spec.sources.iter().find_map(|field| profile.get(*field))
}
