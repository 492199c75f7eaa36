//! Canonical descriptions for form types whose result rows carry no useful
//! free-text description.

const CANONICAL: &[(&str, &str)] = &[
    ("F1A", "STATEMENT OF ORGANIZATION"),
    ("F1N", "STATEMENT OF ORGANIZATION"),
    ("F2A", "STATEMENT OF CANDIDACY"),
    ("F2N", "STATEMENT OF CANDIDACY"),
    ("F5A", "REPORT OF INDEPENDENT EXPENDITURES MADE"),
    ("F5N", "REPORT OF INDEPENDENT EXPENDITURES MADE"),
    ("F1M", "NOTIFICATION OF MULTICANDIDATE STATUS"),
    ("F13", "INAUGURAL COMMITTEE DONATIONS"),
];

/// Look up the canonical description for a form type (exact match).
pub fn canonical_description(form_type: &str) -> Option<&'static str> {
    CANONICAL
        .iter()
        .find(|(code, _)| *code == form_type)
        .map(|(_, desc)| *desc)
}
