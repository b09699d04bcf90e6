//! Mapping of a single answer to its compliance bucket.

use crate::enums::{Bucket, Response};

/// Suffix appended to items answered "not applicable".
pub const NOT_APPLICABLE_SUFFIX: &str = " (N/A)";

/// Suffix appended to items left without an answer.
pub const UNANSWERED_SUFFIX: &str = " (Non renseigné)";

/// An item after classification, with the label as it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub bucket: Bucket,
    pub label: String,
}

/// Classify one checklist item.
///
/// Not-applicable counts as compliant and is only distinguishable by its
/// suffix. Changing this alters compliance statistics; it needs sign-off from
/// the hygiene team first. An unanswered item counts as a failure.
#[must_use]
pub fn classify(item: &str, response: Response) -> Classified {
    match response {
        Response::Yes => Classified {
            bucket: Bucket::Compliant,
            label: item.to_string(),
        },
        Response::NotApplicable => Classified {
            bucket: Bucket::Compliant,
            label: format!("{item}{NOT_APPLICABLE_SUFFIX}"),
        },
        Response::No => Classified {
            bucket: Bucket::NonCompliant,
            label: item.to_string(),
        },
        Response::Unanswered => Classified {
            bucket: Bucket::NonCompliant,
            label: format!("{item}{UNANSWERED_SUFFIX}"),
        },
    }
}
