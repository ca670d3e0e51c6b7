//! Search limits

use serde::{Deserialize, Serialize};
use ybs_domain::constants::{SEARCH_DEFAULT_CANDIDATE_LIMIT, SEARCH_DEFAULT_LIMIT};

use crate::constants::DEFAULT_SEARCH_MAX_LIMIT;

/// Search limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Result count when the request gives none
    pub default_limit: usize,
    /// Largest result count a request may ask for
    pub max_limit: usize,
    /// Catalog entries scanned per search
    pub candidate_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: SEARCH_DEFAULT_LIMIT,
            max_limit: DEFAULT_SEARCH_MAX_LIMIT,
            candidate_limit: SEARCH_DEFAULT_CANDIDATE_LIMIT,
        }
    }
}
