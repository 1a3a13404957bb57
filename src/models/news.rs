//! News and corporate-calendar inputs supplied by the caller

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One already-fetched news item for an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NewsItem {
    pub fn new(headline: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            summary: summary.into(),
            source: None,
            url: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Upcoming calendar events for an asset, as far as the caller knows them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CorporateEvents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earnings_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ex_dividend_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
}
