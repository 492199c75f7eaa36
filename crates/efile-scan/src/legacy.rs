//! Matchers for the older directory-listing layout.
//!
//! ```text
//! <DL>
//! <DT><A HREF='/cgi-bin/com/C00431171'>ACME PAC - C00431171</A>
//! <BR>FEC-998877 Form F3X  - period 04/01/2013-06/30/2013, filed 07/15/2013 - JULY QUARTERLY
//! <DT>...
//! <BR><P>
//! ```
//!
//! Pages from searches with and without a date differ only in what wraps
//! the listing; both keep the `<DT>` entries before the first `<P`.

use std::sync::LazyLock;

use efile_core::RawFilingFields;
use regex::Regex;

use crate::html::text_content;
use crate::scan::Committee;

static REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<DT>(.*?)<P").expect("region regex is valid"));

static COMMITTEE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'>(.*?)\s-\s(C\d{8})").expect("committee regex is valid")
});

static FILING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"FEC-(\d+)\sForm\s(F.*?)\s\s-\s(?:period\s([-/\d]+),\s)?filed\s([/\d]+)(?:\s+-\s(.*?)(?:$|<BR>.*?FEC-(\d+)))?",
    )
    .expect("filing regex is valid")
});

/// Lines of the directory listing, one committee or filing per item.
pub fn region_lines(body: &str) -> impl Iterator<Item = &str> + Send + '_ {
    let region = REGION_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());

    region
        .lines()
        .flat_map(|line| line.split("<DT>"))
        .map(|line| line.strip_prefix("<BR>").unwrap_or(line))
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
    let caps = FILING_RE.captures(line)?;

    let (period_from, period_to) = match caps.get(3).and_then(|p| p.as_str().split_once('-')) {
        Some((from, to)) => (Some(from.to_string()), Some(to.to_string())),
        None => (None, None),
    };

    Some(RawFilingFields {
        committee_name: None,
        committee_id: None,
        form_type: caps[2].to_string(),
        filing_id: format!("FEC-{}", &caps[1]),
        amended_by: caps
            .get(6)
            .map(|m| format!("FEC-{}", m.as_str()))
            .unwrap_or_default(),
        period_from,
        period_to,
        date_filed: Some(caps[4].to_string()),
        description: caps
            .get(5)
            .map(|m| text_content(m.as_str()))
            .unwrap_or_default(),
    })
}
