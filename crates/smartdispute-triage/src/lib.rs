//! Triage pipeline: classify a complaint, recommend a form, autofill its fields.

mod error;
pub use error::TriageError;

pub mod autofill;
pub mod classifier;
pub mod config;
pub mod intake;
pub mod pipeline;
pub mod recommender;
pub mod rules;
pub mod schema;
pub mod timeline;

pub use autofill::autofill;
pub use classifier::{Classifier, RuleMatch, classify};
pub use config::TriageConfig;
pub use intake::{CaseProfile, FormLink, IntakeIssue, Province, UserRole};
pub use pipeline::{Triage, TriageOutcome};
pub use recommender::{FormTable, Recommendation, Recommender, recommend};
pub use rules::{Predicate, Rule, RuleSet};
pub use schema::{FieldSpec, FormSchema, SchemaRegistry};
pub use timeline::{FilingStep, FormAction, case_steps, filing_steps};
