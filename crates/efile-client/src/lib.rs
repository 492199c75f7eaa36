//! Client for the FEC electronic filing search form.
//!
//! ```no_run
//! # async fn run() -> Result<(), efile_client::SearchError> {
//! use efile_client::{SearchClient, SearchConfig};
//! use efile_core::SearchRequest;
//!
//! let client = SearchClient::new(SearchConfig::default())?;
//! let response = client
//!     .search(&SearchRequest::new().with_committee_id("C00431171"))
//!     .await?;
//! for record in response.results()? {
//!     println!("{} {} {}", record.filing_id(), record.form_type(), record.date_filed());
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod search;
mod transport;

pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, SearchConfig};
pub use error::{SearchError, TransportError};
pub use search::{SearchClient, SearchResponse};
pub use transport::{HttpTransport, Transport};
