//! Services orchestrating backend queries into page view-models.
//!
//! Each function is generic over the API traits it needs so tests can swap in
//! mock backends. Queries go through the shared [`QueryCache`]; widget-level
//! failures degrade to inline error panels instead of failing the page.

pub mod agency;
pub mod auditor;
pub mod platform;
pub mod sales;
pub mod tenant_analysis;

use std::time::Duration;

use thiserror::Error;

use crate::api::ApiError;
use crate::domain::types::TypeConstraintError;
use crate::export::ExportError;

/// Refetch interval for dashboard headline widgets.
pub const DASHBOARD_TTL: Duration = Duration::from_secs(30);
/// Refetch interval for management list pages.
pub const LIST_TTL: Duration = Duration::from_secs(120);
/// Refetch interval for slow-moving reference data (plans and the like).
pub const REFERENCE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Form(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<ExportError> for ServiceError {
    fn from(err: ExportError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
