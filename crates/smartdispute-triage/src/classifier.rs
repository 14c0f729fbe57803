//! Keyword-rule classification for tenant complaints.
//!
//! A single generic matcher walks the [`RuleSet`] in priority order and
//! returns the first rule that fires. Classification never fails: the rule
//! set always ends in an unconditional default.

use serde::Serialize;
use smartdispute_core::IssueCategory;
use tracing::debug;

use crate::rules::{Predicate, RuleSet};

/// Which rule fired for a piece of text, and on which keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub category: IssueCategory,
    /// Position of the rule in the rule set.
    pub rule_index: usize,
    /// The keyword that matched, `None` for the default rule.
    pub keyword: Option<String>,
}

/// Rule-based complaint classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleSet,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify complaint text into exactly one category.
    pub fn classify(&self, text: &str) -> IssueCategory {
        self.explain(text).category
    }

    /// Classify and report the rule and keyword responsible.
    pub fn explain(&self, text: &str) -> RuleMatch {
        let normalized = text.to_lowercase();

        for (rule_index, rule) in self.rules.rules().iter().enumerate() {
            let Predicate::AnyKeyword(keywords) = &rule.predicate else {
                break;
            };
            if let Some(keyword) = keywords.iter().find(|k| normalized.contains(k.as_str())) {
                debug!(
                    category = rule.category.as_str(),
                    rule_index,
                    keyword = keyword.as_str(),
                    "complaint classified"
                );
                return RuleMatch {
                    category: rule.category,
                    rule_index,
                    keyword: Some(keyword.clone()),
                };
            }
        }

        // The default rule is always last.
        let category = self.rules.default_category();
        let rule_index = self.rules.rules().len().saturating_sub(1);
        debug!(category = category.as_str(), rule_index, "complaint classified by default rule");
        RuleMatch {
            category,
            rule_index,
            keyword: None,
        }
    }
}

/// Classify with the built-in rules.
pub fn classify(text: &str) -> IssueCategory {
    Classifier::default().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    #[test]
    fn maintenance_keywords() {
        assert_eq!(classify("The landlord refuses to do repairs"), IssueCategory::MaintenanceDispute);
        assert_eq!(classify("MAINTENANCE has been ignored for months"), IssueCategory::MaintenanceDispute);
    }

    #[test]
    fn eviction_keywords() {
        assert_eq!(classify("I got an eviction letter"), IssueCategory::Eviction);
        assert_eq!(classify("They gave me a Notice to leave"), IssueCategory::Eviction);
    }

    #[test]
    fn human_rights_keyword() {
        assert_eq!(
            classify("This is discrimination because of my disability"),
            IssueCategory::HumanRightsComplaint
        );
    }

    #[test]
    fn deposit_keyword() {
        assert_eq!(classify("They kept my Deposit"), IssueCategory::SecurityDepositDispute);
    }

    #[test]
    fn no_keywords_falls_through_to_default() {
        assert_eq!(classify("my neighbor is loud"), IssueCategory::GeneralHousingIssue);
        assert_eq!(classify(""), IssueCategory::GeneralHousingIssue);
    }

    #[test]
    fn maintenance_outranks_eviction() {
        assert_eq!(
            classify("No repairs were made and now I have an eviction notice"),
            IssueCategory::MaintenanceDispute
        );
    }

    #[test]
    fn eviction_outranks_human_rights_and_deposit() {
        assert_eq!(
            classify("eviction after discrimination, and they kept my deposit"),
            IssueCategory::Eviction
        );
        assert_eq!(
            classify("discrimination over my deposit"),
            IssueCategory::HumanRightsComplaint
        );
    }

    #[test]
    fn explain_reports_rule_and_keyword() {
        let clf = Classifier::default();
        let hit = clf.explain("Got a NOTICE yesterday");
        assert_eq!(hit.category, IssueCategory::Eviction);
        assert_eq!(hit.rule_index, 1);
        assert_eq!(hit.keyword.as_deref(), Some("notice"));

        let fallback = clf.explain("loud neighbours");
        assert_eq!(fallback.category, IssueCategory::GeneralHousingIssue);
        assert_eq!(fallback.rule_index, 4);
        assert_eq!(fallback.keyword, None);
    }

    #[test]
    fn custom_rules_respect_order() {
        let rules = RuleSet::new(vec![
            Rule::keywords(&["mould"], IssueCategory::MaintenanceDispute),
            Rule::keywords(&["mould", "deposit"], IssueCategory::SecurityDepositDispute),
            Rule::default_to(IssueCategory::Eviction),
        ])
        .unwrap();
        let clf = Classifier::new(rules);
        assert_eq!(clf.classify("Mould everywhere"), IssueCategory::MaintenanceDispute);
        assert_eq!(clf.classify("deposit"), IssueCategory::SecurityDepositDispute);
        assert_eq!(clf.classify("nothing relevant"), IssueCategory::Eviction);
    }

    #[test]
    fn default_only_rule_set() {
        let rules = RuleSet::new(vec![Rule::default_to(IssueCategory::HumanRightsComplaint)]).unwrap();
        let hit = Classifier::new(rules).explain("repairs, eviction, deposit");
        assert_eq!(hit.category, IssueCategory::HumanRightsComplaint);
        assert_eq!(hit.rule_index, 0);
        assert_eq!(hit.keyword, None);
    }

    #[test]
    fn classify_is_deterministic() {
        let clf = Classifier::default();
        let text = "Repairs and a deposit";
        assert_eq!(clf.explain(text), clf.explain(text));
    }
}
