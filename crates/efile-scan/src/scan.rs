//! Single-pass state machine over a result page.
//!
//! Each line is fed to [`step`] together with the state left by the previous
//! line. The state carries the scan phase and the most recent committee
//! marker, which is merged into every filing row until the next marker.

use efile_core::RawFilingFields;
use serde::{Deserialize, Serialize};

use crate::{legacy, table};

/// Result page layout to scan for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Results table: committee anchors and `FEC-<digits>` rows after a
    /// `<table` marker. Lines are further split at each `<tr`.
    #[default]
    Table,
    /// Older `<DL>`/`<DT>` directory listing with one filing per text line.
    Legacy,
}

impl Layout {
    fn lines<'a>(self, body: &'a str) -> Box<dyn Iterator<Item = &'a str> + Send + 'a> {
        match self {
            Layout::Table => Box::new(body.lines().flat_map(table::row_segments)),
            Layout::Legacy => Box::new(legacy::region_lines(body)),
        }
    }

    fn initial_phase(self) -> Phase {
        match self {
            Layout::Table => Phase::BeforeTable,
            // The legacy region is cut out before scanning starts.
            Layout::Legacy => Phase::InTable,
        }
    }

    /// Committee marker on `line` and the text following it.
    fn committee(self, line: &str) -> Option<(Committee, &str)> {
        match self {
            Layout::Table => table::committee(line),
            Layout::Legacy => legacy::committee(line),
        }
    }

    fn filing_row(self, line: &str) -> Option<RawFilingFields> {
        match self {
            Layout::Table => table::filing_row(line),
            Layout::Legacy => legacy::filing_row(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BeforeTable,
    InTable,
}

/// Committee named by the most recent committee marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committee {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    pub phase: Phase,
    pub committee: Option<Committee>,
}

impl ScanState {
    pub fn new(layout: Layout) -> Self {
        Self {
            phase: layout.initial_phase(),
            committee: None,
        }
    }
}

/// Advance the scan by one line.
///
/// Returns the next state and, if the line is a filing row, the row merged
/// with the current committee. A committee marker and a filing row may share
/// a line; the row is then read from the text after the marker and belongs
/// to the new committee.
pub fn step(
    layout: Layout,
    state: ScanState,
    line: &str,
) -> (ScanState, Option<RawFilingFields>) {
    let ScanState { phase, committee } = state;

    let line = match phase {
        Phase::InTable => line,
        Phase::BeforeTable => match table::after_table_start(line) {
            Some(rest) => rest,
            None => return (ScanState { phase, committee }, None),
        },
    };

    let (committee, line) = match layout.committee(line) {
        Some((next, rest)) => (Some(next), rest),
        None => (committee, line),
    };

    let row = layout.filing_row(line).map(|mut row| {
        if let Some(c) = &committee {
            row.committee_name = Some(c.name.clone());
            row.committee_id = Some(c.id.clone());
        }
        row
    });
    (
        ScanState {
            phase: Phase::InTable,
            committee,
        },
        row,
    )
}

/// Lazily scan `body` for filing rows, in document order.
pub fn parse(body: &str, layout: Layout) -> RawRows<'_> {
    RawRows {
        lines: layout.lines(body),
        layout,
        state: Some(ScanState::new(layout)),
    }
}

/// Iterator over the raw filing rows of one page. Reads lines only as far
/// as the next row.
pub struct RawRows<'a> {
    lines: Box<dyn Iterator<Item = &'a str> + Send + 'a>,
    layout: Layout,
    state: Option<ScanState>,
}

impl RawRows<'_> {
    /// Scan state after the last consumed line.
    pub fn state(&self) -> Option<&ScanState> {
        self.state.as_ref()
    }
}

impl Iterator for RawRows<'_> {
    type Item = RawFilingFields;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let state = self.state.take()?;
            let (next, row) = step(self.layout, state, line);
            self.state = Some(next);
            if row.is_some() {
                return row;
            }
        }
        None
    }
}
