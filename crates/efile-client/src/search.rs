//! Search client: validate, submit, scan.

use efile_core::{FilingRecord, FormPayload, MalformedPolicy, MalformedRecord, SearchRequest};
use efile_scan::{Layout, RawRows, Records};
use tracing::info;

use crate::config::SearchConfig;
use crate::error::{SearchError, TransportError};
use crate::transport::{HttpTransport, Transport};

/// Client for the electronic filing search form.
pub struct SearchClient<T = HttpTransport> {
    transport: T,
    config: SearchConfig,
}

impl SearchClient<HttpTransport> {
    /// Create a client that talks to `config.endpoint` over HTTPS.
    pub fn new(config: SearchConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> SearchClient<T> {
    pub fn with_transport(transport: T, config: SearchConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Submit an already validated payload and return the raw page.
    pub async fn execute(&self, payload: &FormPayload) -> Result<String, TransportError> {
        self.transport.submit(&self.config.endpoint, payload).await
    }

    /// Validate `request`, submit it, and hold on to the results page.
    ///
    /// Invalid requests fail before anything is sent.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let payload = request.build()?;
        let body = self.execute(&payload).await?;
        Ok(SearchResponse {
            body,
            layout: self.config.layout,
            policy: self.config.on_malformed,
        })
    }
}

/// One results page, scanned on demand.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    body: String,
    layout: Layout,
    policy: MalformedPolicy,
}

impl SearchResponse {
    /// Wrap a page obtained elsewhere.
    pub fn from_body(body: impl Into<String>, layout: Layout, policy: MalformedPolicy) -> Self {
        Self {
            body: body.into(),
            layout,
            policy,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn raw_rows(&self) -> RawRows<'_> {
        efile_scan::parse(&self.body, self.layout)
    }

    /// Lazily normalised records, subject to the configured malformed-row
    /// policy.
    pub fn records(&self) -> Records<'_> {
        efile_scan::records(&self.body, self.layout, self.policy)
    }

    /// All records on the page, in page order.
    pub fn results(&self) -> Result<Vec<FilingRecord>, MalformedRecord> {
        let results: Vec<FilingRecord> = self.records().collect::<Result<_, _>>()?;
        info!(count = results.len(), "parsed search results");
        Ok(results)
    }

    /// Hand each record to `f` as soon as it is parsed.
    pub fn each_result<F>(&self, mut f: F) -> Result<(), MalformedRecord>
    where
        F: FnMut(FilingRecord),
    {
        for record in self.records() {
            f(record?);
        }
        Ok(())
    }
}
