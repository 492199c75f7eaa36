//! Core types for the FEC electronic filing search: request validation,
//! raw row fields, and normalised filing records.

pub mod description;
mod error;
pub mod filing;
pub mod query;
pub mod record;

pub use description::canonical_description;
pub use error::{InvalidQuery, MalformedPolicy, MalformedRecord};
pub use filing::{FilingFactory, FilingOptions, FilingReference};
pub use query::{FormPayload, SearchRequest, build};
pub use record::{FilingRecord, Period, RawFilingFields, normalize};
