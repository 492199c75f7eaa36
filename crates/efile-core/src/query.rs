//! Search request → form payload translation and validation.
//!
//! The search form takes eight fixed keys. Every key is always submitted,
//! empty when the corresponding request field is unset, and the combination
//! of non-empty keys must satisfy three rules:
//!
//! 1. at least one key is non-empty;
//! 2. `comid` cannot be combined with any other key;
//! 3. `frmtype` cannot be the only key.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::error::InvalidQuery;

pub const KEY_COMMITTEE_ID: &str = "comid";
pub const KEY_COMMITTEE_NAME: &str = "name";
pub const KEY_STATE: &str = "state";
pub const KEY_PARTY: &str = "party";
pub const KEY_COMMITTEE_TYPE: &str = "type";
pub const KEY_REPORT_TYPE: &str = "rpttype";
pub const KEY_DATE: &str = "date";
pub const KEY_FORM_TYPE: &str = "frmtype";

/// Submission format of the `date` key.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Typed search parameters. Every field is optional on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub committee_id: Option<String>,
    pub committee_name: Option<String>,
    pub state: Option<String>,
    pub party: Option<String>,
    pub committee_type: Option<String>,
    pub report_type: Option<String>,
    pub date: Option<NaiveDate>,
    pub form_type: Option<String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_committee_id(mut self, id: impl Into<String>) -> Self {
        self.committee_id = Some(id.into());
        self
    }

    pub fn with_committee_name(mut self, name: impl Into<String>) -> Self {
        self.committee_name = Some(name.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = Some(party.into());
        self
    }

    pub fn with_committee_type(mut self, committee_type: impl Into<String>) -> Self {
        self.committee_type = Some(committee_type.into());
        self
    }

    pub fn with_report_type(mut self, report_type: impl Into<String>) -> Self {
        self.report_type = Some(report_type.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = Some(form_type.into());
        self
    }

    /// Map and validate this request. See [`build`].
    pub fn build(&self) -> Result<FormPayload, InvalidQuery> {
        build(self)
    }
}

/// A validated form submission: all eight keys, in form order.
///
/// Only obtainable through [`build`], so holding one means the parameter
/// combination is acceptable to the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pairs: [(&'static str, String); 8],
}

impl FormPayload {
    /// The `(key, value)` pairs in submission order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Value for `key`, or `None` if `key` is not one of the form keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys whose value is non-empty, in submission order.
    pub fn non_empty_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| *k)
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (k, v) in &self.pairs {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Map a request onto the form keys and check the combination rules.
pub fn build(request: &SearchRequest) -> Result<FormPayload, InvalidQuery> {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();

    let payload = FormPayload {
        pairs: [
            (KEY_COMMITTEE_ID, text(&request.committee_id)),
            (KEY_COMMITTEE_NAME, text(&request.committee_name)),
            (KEY_STATE, text(&request.state)),
            (KEY_PARTY, text(&request.party)),
            (KEY_COMMITTEE_TYPE, text(&request.committee_type)),
            (KEY_REPORT_TYPE, text(&request.report_type)),
            (
                KEY_DATE,
                request
                    .date
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            (KEY_FORM_TYPE, text(&request.form_type)),
        ],
    };

    if let Err(err) = validate(&payload) {
        debug!(%err, "rejected search request");
        return Err(err);
    }
    Ok(payload)
}

fn validate(payload: &FormPayload) -> Result<(), InvalidQuery> {
    let set: Vec<&str> = payload.non_empty_keys().collect();

    if set.is_empty() {
        return Err(InvalidQuery::NoParameters);
    }
    if set.contains(&KEY_COMMITTEE_ID) && set.len() > 1 {
        return Err(InvalidQuery::CommitteeIdExclusive);
    }
    if set == [KEY_FORM_TYPE] {
        return Err(InvalidQuery::FormTypeNeedsCompanion);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One request per settable field other than committee id and form type.
    fn single_field_requests() -> Vec<SearchRequest> {
        vec![
            SearchRequest::new().with_committee_name("ACME PAC"),
            SearchRequest::new().with_state("CA"),
            SearchRequest::new().with_party("DEM"),
            SearchRequest::new().with_committee_type("Q"),
            SearchRequest::new().with_report_type("M4"),
            SearchRequest::new().with_date(date(2013, 5, 29)),
        ]
    }

    #[test]
    fn empty_request_is_rejected() {
        assert_eq!(SearchRequest::new().build(), Err(InvalidQuery::NoParameters));
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let req = SearchRequest::new().with_committee_id("").with_state("");
        assert_eq!(req.build(), Err(InvalidQuery::NoParameters));
    }

    #[test]
    fn committee_id_alone_is_accepted() {
        let payload = SearchRequest::new()
            .with_committee_id("C00431171")
            .build()
            .unwrap();
        assert_eq!(payload.non_empty_keys().collect::<Vec<_>>(), ["comid"]);
        assert_eq!(payload.get("comid"), Some("C00431171"));
    }

    #[test]
    fn committee_id_with_any_other_field_is_rejected() {
        for req in single_field_requests() {
            let req = req.with_committee_id("C00431171");
            assert_eq!(req.build(), Err(InvalidQuery::CommitteeIdExclusive), "{req:?}");
        }
        let req = SearchRequest::new()
            .with_committee_id("C00431171")
            .with_form_type("F3");
        assert_eq!(req.build(), Err(InvalidQuery::CommitteeIdExclusive));
    }

    #[test]
    fn form_type_alone_is_rejected() {
        let req = SearchRequest::new().with_form_type("F3");
        assert_eq!(req.build(), Err(InvalidQuery::FormTypeNeedsCompanion));
    }

    #[test]
    fn form_type_with_companion_is_accepted() {
        for req in single_field_requests() {
            let req = req.with_form_type("F3");
            assert!(req.build().is_ok(), "{req:?}");
        }
    }

    #[test]
    fn any_single_ordinary_field_is_accepted() {
        for req in single_field_requests() {
            let payload = req.build().unwrap();
            assert_eq!(payload.non_empty_keys().count(), 1);
        }
    }

    #[test]
    fn all_keys_always_present_in_form_order() {
        let payload = SearchRequest::new().with_state("CA").build().unwrap();
        let keys: Vec<&str> = payload.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["comid", "name", "state", "party", "type", "rpttype", "date", "frmtype"]
        );
        assert_eq!(payload.get("name"), Some(""));
        assert_eq!(payload.get("state"), Some("CA"));
        assert_eq!(payload.get("bogus"), None);
    }

    #[test]
    fn date_is_zero_padded_month_day_year() {
        let payload = SearchRequest::new()
            .with_date(date(2013, 4, 2))
            .build()
            .unwrap();
        assert_eq!(payload.get("date"), Some("04/02/2013"));
    }

    #[test]
    fn payload_serializes_as_flat_map() {
        let payload = SearchRequest::new()
            .with_date(date(2013, 5, 29))
            .with_report_type("M4")
            .build()
            .unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["date"], "05/29/2013");
        assert_eq!(json["rpttype"], "M4");
        assert_eq!(json["comid"], "");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
