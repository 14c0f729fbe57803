//! The three stages wired together: classify → recommend → autofill.

use serde::Serialize;
use smartdispute_core::{FieldMap, FormId, IssueCategory, UserProfile};
use tracing::info;

use crate::TriageError;
use crate::autofill::autofill_with;
use crate::classifier::{Classifier, RuleMatch};
use crate::config::TriageConfig;
use crate::recommender::{FormTable, Recommendation, Recommender};
use crate::rules::RuleSet;
use crate::schema::SchemaRegistry;

/// Result of running a complaint through the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageOutcome {
    pub category: IssueCategory,
    pub matched_keyword: Option<String>,
    pub recommendation: Recommendation,
    /// Autofill of the primary form.
    pub fields: FieldMap,
}

/// Immutable bundle of classifier, recommender and schemas.
///
/// Holds no per-request state; share one instance across threads.
#[derive(Debug, Clone)]
pub struct Triage {
    classifier: Classifier,
    recommender: Recommender,
    schemas: SchemaRegistry,
}

impl Triage {
    pub fn new(classifier: Classifier, recommender: Recommender, schemas: SchemaRegistry) -> Self {
        Self {
            classifier,
            recommender,
            schemas,
        }
    }

    /// Built-in rules, form table and schemas.
    pub fn builtin() -> Self {
        Self::new(
            Classifier::default(),
            Recommender::default(),
            SchemaRegistry::builtin(),
        )
    }

    /// Built-ins with `config` applied on top.
    pub fn from_config(config: &TriageConfig) -> Result<Self, TriageError> {
        let rules = config.rules.clone().unwrap_or_else(RuleSet::builtin);
        let table = config.forms.clone().unwrap_or_else(FormTable::builtin);
        let recommender = Recommender::new(table)?;

        let mut schemas = SchemaRegistry::builtin();
        for schema in &config.schemas {
            schemas.insert(schema.clone());
        }

        Ok(Self::new(Classifier::new(rules), recommender, schemas))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn classify(&self, text: &str) -> RuleMatch {
        self.classifier.explain(text)
    }

    pub fn recommend(&self, category: IssueCategory) -> Result<Recommendation, TriageError> {
        self.recommender.recommend(category)
    }

    pub fn autofill(&self, form: FormId, profile: &UserProfile) -> FieldMap {
        autofill_with(&self.schemas, form, profile)
    }

    /// Classify `text`, recommend a form, and autofill the primary form.
    pub fn run(&self, text: &str, profile: &UserProfile) -> Result<TriageOutcome, TriageError> {
        let hit = self.classify(text);
        let recommendation = self.recommend(hit.category)?;
        let fields = self.autofill(recommendation.primary, profile);

        info!(
            category = hit.category.as_str(),
            form = recommendation.primary.code(),
            fields = fields.len(),
            "triage complete"
        );

        Ok(TriageOutcome {
            category: hit.category,
            matched_keyword: hit.keyword,
            recommendation,
            fields,
        })
    }
}

impl Default for Triage {
    fn default() -> Self {
        Self::builtin()
    }
}
