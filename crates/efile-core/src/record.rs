//! Raw filing row fields and their normalisation into typed records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::description::canonical_description;
use crate::error::MalformedRecord;
use crate::filing::{FilingFactory, FilingOptions, FilingReference};
use crate::query::DATE_FORMAT;

const FILING_ID_PREFIX: &str = "FEC-";

/// Untyped fields of one filing row, merged with the committee context it
/// appeared under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFilingFields {
    pub committee_name: Option<String>,
    pub committee_id: Option<String>,
    pub form_type: String,
    /// Usually `FEC-<digits>`; the prefix is optional.
    pub filing_id: String,
    /// Empty when the filing has not been amended.
    pub amended_by: String,
    pub period_from: Option<String>,
    pub period_to: Option<String>,
    pub date_filed: Option<String>,
    pub description: String,
}

/// Reporting period covered by a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Period {
    /// `true` when the period does not end before it starts. Not enforced
    /// at construction.
    pub fn is_ordered(&self) -> bool {
        self.to >= self.from
    }
}

/// One normalised search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingRecord {
    committee_name: String,
    committee_id: String,
    filing_id: u64,
    form_type: String,
    period: Option<Period>,
    date_filed: NaiveDate,
    description: String,
    amended_by: String,
    is_amendment: bool,
}

impl FilingRecord {
    /// Empty if the row appeared before any committee marker.
    pub fn committee_name(&self) -> &str {
        &self.committee_name
    }

    /// `C` followed by eight digits, or empty if the row appeared before any
    /// committee marker.
    pub fn committee_id(&self) -> &str {
        &self.committee_id
    }

    pub fn filing_id(&self) -> u64 {
        self.filing_id
    }

    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn date_filed(&self) -> NaiveDate {
        self.date_filed
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Empty when the filing has not been amended.
    pub fn amended_by(&self) -> &str {
        &self.amended_by
    }

    /// Form type ends in `A`.
    pub fn is_amendment(&self) -> bool {
        self.is_amendment
    }

    /// Construction request for the full filing. Performs no I/O.
    pub fn to_filing_reference(&self, options: FilingOptions) -> FilingReference {
        FilingReference {
            filing_id: self.filing_id,
            options,
        }
    }

    /// Build the full filing through `factory`. Each call builds a new one.
    pub fn filing_with<F: FilingFactory>(&self, factory: &F, options: FilingOptions) -> F::Filing {
        factory.create(self.to_filing_reference(options))
    }
}

impl TryFrom<RawFilingFields> for FilingRecord {
    type Error = MalformedRecord;

    fn try_from(raw: RawFilingFields) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

/// Convert raw row fields into a [`FilingRecord`].
///
/// The filing id and date filed are mandatory. The period is dropped
/// entirely unless both bounds are valid dates.
pub fn normalize(raw: RawFilingFields) -> Result<FilingRecord, MalformedRecord> {
    let filing_id = parse_filing_id(&raw.filing_id)?;

    let date_filed = raw
        .date_filed
        .as_deref()
        .and_then(|s| parse_date(s.trim()))
        .ok_or_else(|| MalformedRecord::DateFiled {
            raw: raw.date_filed.clone(),
        })?;

    let period = match (raw.period_from.as_deref(), raw.period_to.as_deref()) {
        (Some(from), Some(to)) => parse_period(from, to),
        _ => None,
    };

    let form_type = raw.form_type.trim().to_string();
    let description = match canonical_description(&form_type) {
        Some(label) => label.to_string(),
        None => raw.description.trim().to_string(),
    };
    let is_amendment = form_type.ends_with('A');

    Ok(FilingRecord {
        committee_name: raw.committee_name.unwrap_or_default().trim().to_string(),
        committee_id: raw.committee_id.unwrap_or_default().trim().to_string(),
        filing_id,
        form_type,
        period,
        date_filed,
        description,
        amended_by: raw.amended_by.trim().to_string(),
        is_amendment,
    })
}

fn parse_filing_id(raw: &str) -> Result<u64, MalformedRecord> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(FILING_ID_PREFIX).unwrap_or(trimmed);
    let malformed = || MalformedRecord::FilingId {
        raw: raw.to_string(),
    };
    // `u64::from_str` would also take a leading `+`.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    digits.parse::<u64>().map_err(|_| malformed())
}

fn parse_period(from: &str, to: &str) -> Option<Period> {
    let (from, to) = (from.trim(), to.trim());
    if !looks_like_date(from) || !looks_like_date(to) {
        return None;
    }
    Some(Period {
        from: parse_date(from)?,
        to: parse_date(to)?,
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Loose `D{1,2}/D{1,2}/YYYY` shape check.
fn looks_like_date(s: &str) -> bool {
    let parts: Vec<&str> = s.split('/').collect();
    let widths = [1..=2, 1..=2, 4..=4];
    parts.len() == 3
        && parts.iter().zip(widths).all(|(part, width)| {
            width.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        })
}
