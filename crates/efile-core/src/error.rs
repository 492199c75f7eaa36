use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A search request whose parameter combination the search form rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQuery {
    #[error("no parameters")]
    NoParameters,

    #[error("committee id exclusive")]
    CommitteeIdExclusive,

    #[error("form type needs companion")]
    FormTypeNeedsCompanion,
}

/// A filing row whose mandatory fields could not be normalised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("filing id is not numeric: {raw:?}")]
    FilingId { raw: String },

    #[error("date filed is missing or not MM/DD/YYYY: {raw:?}")]
    DateFiled { raw: Option<String> },
}

/// What to do with a row that fails normalisation.
///
/// `Abort` yields the error and ends the result sequence. `Skip` logs the
/// error and continues with the next row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    #[default]
    Abort,
    Skip,
}
