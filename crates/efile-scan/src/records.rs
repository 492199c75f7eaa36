//! Scan and normalise in one pass.

use efile_core::{FilingRecord, MalformedPolicy, MalformedRecord, normalize};
use tracing::warn;

use crate::scan::{Layout, RawRows, parse};

/// Lazily scan `body` and normalise each row.
///
/// Under [`MalformedPolicy::Abort`] the first row that fails normalisation
/// is yielded as an error and the iterator ends. Under
/// [`MalformedPolicy::Skip`] such rows are logged and dropped.
pub fn records(body: &str, layout: Layout, policy: MalformedPolicy) -> Records<'_> {
    Records {
        rows: parse(body, layout),
        policy,
        done: false,
    }
}

pub struct Records<'a> {
    rows: RawRows<'a>,
    policy: MalformedPolicy,
    done: bool,
}

impl Iterator for Records<'_> {
    type Item = Result<FilingRecord, MalformedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for row in self.rows.by_ref() {
            match normalize(row) {
                Ok(record) => return Some(Ok(record)),
                Err(err) => match self.policy {
                    MalformedPolicy::Abort => {
                        self.done = true;
                        return Some(Err(err));
                    }
                    MalformedPolicy::Skip => {
                        warn!(error = %err, "skipping malformed filing row");
                    }
                },
            }
        }
        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    const TABLE_PAGE: &str = "\
<html><body>
<table class=results>
<tr><td colspan=7><a href='/com/C00431171'>ACME PAC - C00431171</a></td></tr>
<tr><td>F3</td><td><a href='/f/1'>FEC-1</a></td><td></td><td>04/01/2013</td><td>06/30/2013</td><td>07/15/2013</td><td>JULY QUARTERLY</td></tr>
<tr><td>F3</td><td><a href='/f/2'>FEC-2</a></td><td></td><td></td><td></td><td>not filed</td><td>BROKEN</td></tr>
<tr><td>F1A</td><td><a href='/f/3'>FEC-3</a></td><td></td><td></td><td></td><td>08/01/2013</td><td>AMENDED STATEMENT</td></tr>
</table>
</body></html>
";

    #[test]
    fn abort_stops_at_first_malformed_row() {
        let results: Vec<_> = records(TABLE_PAGE, Layout::Table, MalformedPolicy::Abort).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().filing_id(), 1);
        assert!(matches!(results[1], Err(MalformedRecord::DateFiled { .. })));
    }

    #[test]
    fn collecting_under_abort_surfaces_the_error() {
        let collected: Result<Vec<_>, _> =
            records(TABLE_PAGE, Layout::Table, MalformedPolicy::Abort).collect();
        assert!(collected.is_err());
    }

    #[test]
    fn skip_continues_past_malformed_row() {
        init_tracing();
        let results: Vec<_> = records(TABLE_PAGE, Layout::Table, MalformedPolicy::Skip)
            .collect::<Result<_, _>>()
            .unwrap();
        let ids: Vec<u64> = results.iter().map(|r: &FilingRecord| r.filing_id()).collect();
        assert_eq!(ids, [1, 3]);

        let amended = &results[1];
        assert_eq!(amended.description(), "STATEMENT OF ORGANIZATION");
        assert!(amended.is_amendment());
        assert_eq!(amended.committee_id(), "C00431171");
    }

    #[test]
    fn periods_survive_the_pipeline() {
        let first = records(TABLE_PAGE, Layout::Table, MalformedPolicy::Skip)
            .next()
            .unwrap()
            .unwrap();
        let period = first.period().unwrap();
        assert!(period.is_ordered());
        assert_eq!(first.committee_name(), "ACME PAC");
    }

    const LEGACY_PAGE: &str = "\
<HTML><BODY>
<H3>Filings received 05/29/2013</H3>
<DL>
<DT><A HREF='/cgi-bin/com/C00431171'>ACME PAC - C00431171</A>
<BR>FEC-998877 Form F3X  - period 04/01/2013-06/30/2013, filed 05/29/2013 - JULY QUARTERLY
<BR>FEC-998878 Form F1A  - filed 05/29/2013 - CHANGE OF ADDRESS<BR>AMENDED BY FEC-999001
<DT><A HREF='/cgi-bin/com/C00000042'>BETA FUND - C00000042</A>
<BR>FEC-998879 Form F3  - filed 05/29/2013
<BR><P>
<P>Search again</P>
</BODY></HTML>
";

    #[test]
    fn legacy_layout_carries_committee_forward() {
        let results: Vec<FilingRecord> =
            records(LEGACY_PAGE, Layout::Legacy, MalformedPolicy::Abort)
                .collect::<Result<_, _>>()
                .unwrap();
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].committee_id(), "C00431171");
        assert_eq!(results[0].filing_id(), 998877);
        assert_eq!(results[0].form_type(), "F3X");
        assert!(results[0].period().is_some());

        assert_eq!(results[1].committee_name(), "ACME PAC");
        assert_eq!(results[1].description(), "STATEMENT OF ORGANIZATION");
        assert_eq!(results[1].amended_by(), "FEC-999001");

        assert_eq!(results[2].committee_id(), "C00000042");
        assert!(results[2].period().is_none());
    }

    #[test]
    fn layouts_do_not_read_each_other() {
        assert_eq!(records(LEGACY_PAGE, Layout::Table, MalformedPolicy::Abort).count(), 0);
        assert_eq!(records(TABLE_PAGE, Layout::Legacy, MalformedPolicy::Abort).count(), 0);
    }
}
