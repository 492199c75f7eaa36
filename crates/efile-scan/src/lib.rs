//! Result page scanning: HTML body → raw filing rows → filing records.
//!
//! Two page layouts are understood. [`Layout::Table`] is the current
//! line-oriented results table; [`Layout::Legacy`] is the older directory
//! listing, supported on a best-effort basis. The caller picks one.

mod html;
mod legacy;
mod records;
mod scan;
mod table;

pub use records::{Records, records};
pub use scan::{Committee, Layout, Phase, RawRows, ScanState, parse, step};
