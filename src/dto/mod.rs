//! View-model shapes that bridge the services with the templates.
//!
//! Each page module maps backend DTOs into display-ready rows; `labels`
//! holds the lookup tables for enumerated codes and the shared formatting
//! helpers.

pub mod agency;
pub mod auditor;
pub mod labels;
pub mod platform;
pub mod sales;
pub mod tenant_analysis;

use serde::Serialize;

use crate::api::ApiError;

/// One dashboard widget's worth of data. A failed query degrades to an inline
/// error message while the rest of the page stays usable.
#[derive(Debug, Serialize)]
pub struct Widget<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Widget<T> {
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// Absorbs a query result, logging the failure and keeping only the
    /// user-facing message.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(err) => {
                log::error!("widget query failed: {err}");
                Self::failed(err.user_message())
            }
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

/// Case-insensitive substring match over a row's searchable fields. An empty
/// or whitespace-only needle matches everything.
pub fn matches_search(needle: &str, haystacks: &[Option<&str>]) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .flatten()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}
