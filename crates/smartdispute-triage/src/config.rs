//! JSON configuration overriding the built-in rules, form table and schemas.
//!
//! ```json
//! {
//!   "rules": [
//!     {"predicate": {"any_keyword": ["mould", "repairs"]}, "category": "maintenance_dispute"},
//!     {"predicate": "always", "category": "general_housing_issue"}
//!   ],
//!   "forms": [
//!     {"category": "eviction", "primary": "T2", "alternates": ["S2"]}
//!   ],
//!   "schemas": [
//!     {"form": "T6", "fields": [{"name": "tenant_name", "sources": ["name"], "default": "Your Name"}]}
//!   ]
//! }
//! ```
//!
//! Every section is optional. `rules` and `forms` replace the built-ins
//! wholesale and are validated the same way; `schemas` replace only the
//! forms they name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::TriageError;
use crate::recommender::FormTable;
use crate::rules::RuleSet;
use crate::schema::FormSchema;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SMARTDISPUTE_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<FormTable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<FormSchema>,
}

impl TriageConfig {
    pub fn from_json_str(json: &str) -> Result<Self, TriageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, TriageError> {
        if !path.exists() {
            return Err(TriageError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            rules = config.rules.as_ref().map(|r| r.rules().len()),
            forms = config.forms.as_ref().map(|f| f.entries.len()),
            schemas = config.schemas.len(),
            "loaded triage config"
        );
        Ok(config)
    }
}
