//! Handlers for the agency staff pages.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::api::ApiClient;
use crate::cache::QueryCache;
use crate::dto::agency::PropertyFilter;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{
    base_context, parse_filter_code, redirect, render_template, service_error_response,
};
use crate::services::agency as agency_service;

#[get("/agency")]
pub async fn dashboard(
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match agency_service::load_dashboard(api.get_ref(), cache.get_ref(), &user).await {
        Ok(dashboard) => {
            let mut context = base_context(&user, &flash_messages, "agency", &server_config);
            context.insert("dashboard", &dashboard);
            render_template(&tera, "agency/dashboard.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[derive(Deserialize)]
struct PropertiesQueryParams {
    q: Option<String>,
    status: Option<String>,
}

#[get("/agency/properties")]
pub async fn properties(
    params: web::Query<PropertiesQueryParams>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let filter = PropertyFilter {
        search: params
            .q
            .as_ref()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty()),
        status: parse_filter_code(params.status.as_deref()),
    };

    match agency_service::load_properties_page(api.get_ref(), cache.get_ref(), &user, filter).await
    {
        Ok(rows) => {
            let mut context = base_context(&user, &flash_messages, "properties", &server_config);
            context.insert("properties", &rows);
            if let Some(q) = &params.q {
                context.insert("search_query", q);
            }
            render_template(&tera, "agency/properties.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/agency/notifications/{notification_id}/read")]
pub async fn mark_notification_read(
    notification_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    match agency_service::mark_notification_read(
        api.get_ref(),
        cache.get_ref(),
        &user,
        notification_id.into_inner(),
    )
    .await
    {
        Ok(()) => redirect("/agency"),
        Err(err) => {
            if let crate::services::ServiceError::Api(api_err) = &err {
                FlashMessage::error(api_err.user_message()).send();
                return redirect("/agency");
            }
            service_error_response(err)
        }
    }
}
