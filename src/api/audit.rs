//! `/audit` endpoints.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{ApiClient, ApiResult, Page, QueryPairs, wire_code};
use crate::domain::log::{LogEntry, LogKind, LogSeverity};
use crate::pagination::PageQuery;

#[derive(Clone, Debug, Default)]
pub struct LogListQuery {
    pub kind: Option<LogKind>,
    pub severity: Option<LogSeverity>,
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub pagination: Option<PageQuery>,
}

impl LogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: LogKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn severity(mut self, severity: LogSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(PageQuery::new(page, per_page));
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.set_opt("kind", self.kind.as_ref().map(wire_code));
        pairs.set_opt("severity", self.severity.as_ref().map(wire_code));
        pairs.set_opt("search", self.search.clone());
        pairs.set_opt("from", self.from);
        pairs.set_opt("to", self.to);
        if let Some(pagination) = self.pagination {
            pagination.apply(&mut pairs);
        }
        pairs
    }
}

#[async_trait]
pub trait AuditApi {
    async fn list_logs(&self, query: LogListQuery) -> ApiResult<Page<LogEntry>>;
}

#[async_trait]
impl AuditApi for ApiClient {
    async fn list_logs(&self, query: LogListQuery) -> ApiResult<Page<LogEntry>> {
        self.get_page("/audit/logs", &query.to_pairs()).await
    }
}
