//! HTTP handlers and shared template/redirect helpers.

pub mod agency;
pub mod auditor;
pub mod main;
pub mod platform;
pub mod sales;
pub mod tenant_analysis;

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::services::ServiceError;

pub use crate::models::auth::check_role;
pub use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Maps flash levels to the style classes the templates expect.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

pub fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, to))
        .finish()
}

/// Rejects callers missing the role with a redirect (defaults to `/na`).
pub fn ensure_role(
    user: &AuthenticatedUser,
    role: &str,
    redirect_to: Option<&str>,
) -> Result<(), HttpResponse> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        Err(redirect(redirect_to.unwrap_or("/na")))
    }
}

/// Context shared by every page template: alerts, the signed-in user, the
/// active navigation entry and the auth-service home link.
pub fn base_context(
    user: &AuthenticatedUser,
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    server_config: &ServerConfig,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|message| (message.content(), alert_level_to_str(&message.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("home_url", &server_config.auth_service_url);
    context
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Standard translation of service failures into responses.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => redirect("/na"),
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        err => {
            log::error!("Service call failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Parses an enumerated filter code from a query/form value, treating blank
/// values as "no filter".
pub(crate) fn parse_filter_code<T: serde::de::DeserializeOwned>(raw: Option<&str>) -> Option<T> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agency::AgencyStatus;

    #[test]
    fn blank_filter_codes_mean_no_filter() {
        assert_eq!(parse_filter_code::<AgencyStatus>(None), None);
        assert_eq!(parse_filter_code::<AgencyStatus>(Some("  ")), None);
        assert_eq!(
            parse_filter_code::<AgencyStatus>(Some("suspended")),
            Some(AgencyStatus::Suspended)
        );
    }
}
