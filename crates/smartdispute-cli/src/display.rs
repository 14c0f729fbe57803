//! Plain-text cards for classification, recommendation and autofill output.

use std::fmt::Write;

use smartdispute_core::{FieldMap, FormId, IssueCategory};
use smartdispute_triage::{
    CaseProfile, FilingStep, FormLink, FormSchema, Recommendation, RuleMatch, TriageOutcome,
};

const LABEL_WIDTH: usize = 20;

pub fn render_match(hit: &RuleMatch) -> String {
    let mut out = String::new();
    row(&mut out, "category", hit.category.label());
    row(&mut out, "id", hit.category.as_str());
    row(&mut out, "rule", &hit.rule_index.to_string());
    row(&mut out, "keyword", hit.keyword.as_deref().unwrap_or("(default)"));
    out
}

pub fn render_recommendation(category: IssueCategory, rec: &Recommendation) -> String {
    let mut out = String::new();
    row(&mut out, "category", category.label());
    row(&mut out, "primary", rec.primary.code());
    if !rec.alternates.is_empty() {
        let alternates: Vec<&str> = rec.alternates.iter().map(|f| f.code()).collect();
        row(&mut out, "alternates", &alternates.join(", "));
    }
    out
}

/// Field card for one form. Fields filled from defaults are marked `*`.
pub fn render_field_card(form: FormId, fields: &FieldMap, defaulted: &[&str]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", form.code());
    for (name, value) in fields.iter() {
        let marker = if defaulted.contains(&name) { "*" } else { " " };
        let value = if value.is_empty() { "-" } else { value };
        let _ = writeln!(out, "{marker} {name:<LABEL_WIDTH$} {value}");
    }
    if !defaulted.is_empty() {
        let _ = writeln!(out, "\n* no profile data; default used");
    }
    out
}

pub fn render_outcome(outcome: &TriageOutcome) -> String {
    let mut out = String::new();
    row(&mut out, "category", outcome.category.label());
    row(
        &mut out,
        "keyword",
        outcome.matched_keyword.as_deref().unwrap_or("(default)"),
    );
    row(&mut out, "recommended", &outcome.recommendation.to_string());
    out.push('\n');
    out.push_str(&render_field_card(outcome.recommendation.primary, &outcome.fields, &[]));
    out
}

pub fn render_timeline(form: FormId, steps: &[FilingStep]) -> String {
    format!("Filing steps for {}\n{}", form.code(), render_steps(steps))
}

pub fn render_steps(steps: &[FilingStep]) -> String {
    let mut out = String::new();
    for step in steps {
        let _ = writeln!(out, "  {}. {}", step.step, step.title);
        let _ = writeln!(out, "     {}", step.description);
        if let Some(action) = &step.form_action {
            let _ = writeln!(out, "     -> {}", action.autofill_url);
        }
    }
    out
}

pub fn render_intake(profile: &CaseProfile, reply: &str, link: Option<&FormLink>) -> String {
    let mut out = String::new();
    row(&mut out, "profile", &profile.to_string());
    row(&mut out, "reply", reply);
    if let Some(link) = link {
        row(&mut out, "form", link.form.code());
        row(&mut out, "link", &link.url);
    }
    out
}

pub fn render_forms(schemas: &[FormSchema]) -> String {
    let mut out = String::new();
    for schema in schemas {
        let _ = writeln!(out, "{}", schema.form.code());
        for field in &schema.fields {
            let sources: Vec<&str> = field.sources.iter().map(|s| s.as_str()).collect();
            let _ = writeln!(
                out,
                "  {:<LABEL_WIDTH$} <- {} (default {:?})",
                field.name,
                sources.join(" | "),
                field.default
            );
        }
    }
    out
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$} {value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartdispute_core::UserProfile;
    use smartdispute_triage::{Triage, autofill, case_steps, filing_steps};

    #[test]
    fn field_card_marks_defaults_and_blanks() {
        let fields = autofill(FormId::T6, &UserProfile::new());
        let card = render_field_card(FormId::T6, &fields, &["full_name", "date"]);
        assert!(card.starts_with("=== T6 ===\n"));
        assert!(card.contains("* full_name"));
        assert!(card.contains("* date                 -"));
        assert!(card.contains("  requested_remedy     Compensation or action"));
        assert!(card.ends_with("* no profile data; default used\n"));
    }

    #[test]
    fn outcome_shows_composite_recommendation() {
        let outcome = Triage::builtin()
            .run("eviction notice", &UserProfile::new())
            .unwrap();
        let text = render_outcome(&outcome);
        assert!(text.contains("recommended          T2 or S2"));
        assert!(text.contains("=== T2 ==="));
    }

    #[test]
    fn timeline_lists_autofill_link() {
        let text = render_timeline(FormId::T6, &filing_steps(FormId::T6));
        assert!(text.contains("  1. Prepare Form T6"));
        assert!(text.contains("-> /generate?form=T6&autofill=true"));
        assert!(text.contains("  4. Prepare for Hearing"));
    }

    #[test]
    fn match_reports_default_rule() {
        let hit = Triage::builtin().classify("loud neighbours");
        let text = render_match(&hit);
        assert!(text.contains("General Housing Issue"));
        assert!(text.contains("(default)"));
    }

    #[test]
    fn intake_without_issue_lists_generic_steps() {
        let profile = CaseProfile::new().absorb("I'm in Ontario");
        let text = render_steps(&case_steps(&profile));
        assert_eq!(
            text,
            "  1. Determine your issue\n     Tell us more to recommend a form.\n  2. Find correct court\n     We'll show you where to file.\n"
        );
    }
}
