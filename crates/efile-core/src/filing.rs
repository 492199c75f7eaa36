//! References to full filings, handed to an external filing loader.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options passed through untouched to the filing loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingOptions {
    /// Where the loader should store the downloaded filing.
    pub download_dir: Option<PathBuf>,
    /// Loader-specific options this crate does not interpret.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl FilingOptions {
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Everything a loader needs to construct one filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingReference {
    pub filing_id: u64,
    pub options: FilingOptions,
}

/// Capability that turns a [`FilingReference`] into a full filing object.
pub trait FilingFactory {
    type Filing;

    fn create(&self, reference: FilingReference) -> Self::Filing;
}
