//! Matchers for the results-table layout.
//!
//! ```text
//! <table ...>
//! <tr><td colspan=7><a href='...'>ACME PAC - C00431171</a></td></tr>
//! <tr><td>F3X</td><td><a href='...'>FEC-998877</a></td><td></td><td>04/01/2013</td>
//!     <td>06/30/2013</td><td>07/15/2013</td><td>JULY QUARTERLY</td></tr>
//! ```
//!
//! Filing row cells, in order: form type, filing id, amended by, period
//! from, period to, date filed, description.

use std::iter;
use std::sync::LazyLock;

use efile_core::RawFilingFields;
use regex::Regex;
use tracing::debug;

use crate::html::text_content;
use crate::scan::Committee;

const TABLE_START: &str = "<table";
const ROW_CELLS: usize = 7;

static COMMITTEE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:<a\b[^>]*>)\s*([^<]*?)\s+-\s+(C\d{8})\s*(?i:</a>)")
        .expect("committee regex is valid")
});

static FILING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FEC-\d+").expect("filing regex is valid"));

static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").expect("cell regex is valid"));

static ROW_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<tr\b").expect("row start regex is valid"));

/// Text after the `<table` marker, if `line` contains one.
pub fn after_table_start(line: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets.
    let at = line.to_ascii_lowercase().find(TABLE_START)?;
    Some(&line[at + TABLE_START.len()..])
}

/// Split `line` before every `<tr`, so each table row is scanned on its own
/// even when the markup puts several rows on one line.
pub fn row_segments(line: &str) -> impl Iterator<Item = &str> + Send + '_ {
    let starts = ROW_START_RE
        .find_iter(line)
        .map(|m| m.start())
        .filter(|&start| start > 0);
    let bounds: Vec<usize> = iter::once(0)
        .chain(starts)
        .chain(iter::once(line.len()))
        .collect();
    (1..bounds.len()).map(move |i| &line[bounds[i - 1]..bounds[i]])
}

/// Committee marker on `line` and the text after it.
pub fn committee(line: &str) -> Option<(Committee, &str)> {
    let caps = COMMITTEE_RE.captures(line)?;
    let end = caps.get(0).map_or(line.len(), |m| m.end());
    let committee = Committee {
        name: text_content(&caps[1]),
        id: caps[2].to_string(),
    };
    Some((committee, &line[end..]))
}

pub fn filing_row(line: &str) -> Option<RawFilingFields> {
    if !FILING_RE.is_match(line) {
        return None;
    }

    let cells: Vec<String> = CELL_RE
        .captures_iter(line)
        .map(|caps| text_content(&caps[1]))
        .collect();
    if cells.len() < ROW_CELLS {
        debug!(cells = cells.len(), "ignoring filing row with too few cells");
        return None;
    }

    let mut cells = cells.into_iter();
    let mut next = || cells.next().unwrap_or_default();
    let non_empty = |s: String| (!s.is_empty()).then_some(s);

    Some(RawFilingFields {
        committee_name: None,
        committee_id: None,
        form_type: next(),
        filing_id: next(),
        amended_by: next(),
        period_from: non_empty(next()),
        period_to: non_empty(next()),
        date_filed: non_empty(next()),
        description: next(),
    })
}
