//! Handlers for the legal auditor pages.

use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::api::ApiClient;
use crate::api::audit::LogListQuery;
use crate::cache::QueryCache;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, parse_filter_code, render_template, service_error_response};
use crate::services::auditor as auditor_service;

#[get("/auditor")]
pub async fn dashboard(
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match auditor_service::load_dashboard(api.get_ref(), cache.get_ref(), &user).await {
        Ok(dashboard) => {
            let mut context = base_context(&user, &flash_messages, "auditor", &server_config);
            context.insert("dashboard", &dashboard);
            render_template(&tera, "auditor/dashboard.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[derive(Deserialize)]
struct AuditTrailQueryParams {
    q: Option<String>,
    kind: Option<String>,
    severity: Option<String>,
    page: Option<usize>,
}

#[get("/auditor/audit-trail")]
pub async fn audit_trail(
    params: web::Query<AuditTrailQueryParams>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut query = LogListQuery::new();
    if let Some(kind) = parse_filter_code(params.kind.as_deref()) {
        query = query.kind(kind);
    }
    if let Some(severity) = parse_filter_code(params.severity.as_deref()) {
        query = query.severity(severity);
    }
    if let Some(q) = params.q.as_ref().map(|q| q.trim()).filter(|q| !q.is_empty()) {
        query = query.search(q);
    }

    match auditor_service::load_audit_trail(
        api.get_ref(),
        cache.get_ref(),
        &user,
        query,
        params.page.unwrap_or(1),
    )
    .await
    {
        Ok(data) => {
            let mut context = base_context(&user, &flash_messages, "audit-trail", &server_config);
            context.insert("trail", &data);
            render_template(&tera, "auditor/audit_trail.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}
