//! Filing steps for each form, from preparation to hearing.

use serde::Serialize;
use smartdispute_core::FormId;

use crate::intake::CaseProfile;

/// Link from a step to the autofilled form it asks the user to prepare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormAction {
    pub form: FormId,
    pub autofill_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingStep {
    /// 1-based position.
    pub step: usize,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_action: Option<FormAction>,
}

// (title, description) after the first step, per tribunal.
const LTB_STEPS: &[(&str, &str)] = &[
    ("Serve the Landlord", "Deliver a copy to your landlord. Save proof."),
    ("File with LTB", "Submit online or in person. Filing fee applies."),
    ("Prepare for Hearing", "Organize documents and witnesses."),
];

const HRTO_STEPS: &[(&str, &str)] = &[(
    "Gather Evidence",
    "Upload communications, photos, documents.",
)];

// Shown until intake has identified an issue.
const UNDETERMINED_STEPS: &[(&str, &str)] = &[
    ("Determine your issue", "Tell us more to recommend a form."),
    ("Find correct court", "We'll show you where to file."),
];

const FAMILY_COURT_STEPS: &[(&str, &str)] = &[
    ("File in Family Court", "Online or in person."),
    ("Serve the Other Parent", "Serve with proof."),
    ("Attend Conference", "Prepare a parenting plan."),
];

/// Ordered filing steps for `form`. Step 1 always prepares the form itself.
pub fn filing_steps(form: FormId) -> Vec<FilingStep> {
    let (first_title, first_description, rest) = match form {
        FormId::HrtoForm1 => (
            format!("Submit {}", form.code()),
            "This form starts your HRTO application.".to_string(),
            HRTO_STEPS,
        ),
        FormId::Form35_1 => (
            format!("Fill {}", form.code()),
            "We started your parenting affidavit.".to_string(),
            FAMILY_COURT_STEPS,
        ),
        FormId::T6 | FormId::T2 | FormId::S2 | FormId::LtbT1 | FormId::LtbGeneral => (
            format!("Prepare Form {}", form.code()),
            format!("We've pre-filled Form {} based on your complaint.", form.code()),
            LTB_STEPS,
        ),
    };

    let first = FilingStep {
        step: 1,
        title: first_title,
        description: first_description,
        form_action: Some(FormAction {
            form,
            autofill_url: format!(
                "/generate?form={}&autofill=true",
                form_urlencoded::byte_serialize(form.code().as_bytes()).collect::<String>()
            ),
        }),
    };

    std::iter::once(first).chain(plain_steps(rest, 2)).collect()
}

/// Steps for an intake case: the starting form's steps once the issue is
/// known, otherwise generic steps with no form action.
pub fn case_steps(profile: &CaseProfile) -> Vec<FilingStep> {
    match profile.issue {
        Some(issue) => filing_steps(issue.form()),
        None => plain_steps(UNDETERMINED_STEPS, 1).collect(),
    }
}

fn plain_steps(
    steps: &'static [(&'static str, &'static str)],
    first: usize,
) -> impl Iterator<Item = FilingStep> {
    steps.iter().enumerate().map(move |(i, (title, description))| FilingStep {
        step: first + i,
        title: title.to_string(),
        description: description.to_string(),
        form_action: None,
    })
}
