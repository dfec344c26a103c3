//! Handlers for the platform manager pages.

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use serde::Deserialize;
use tera::Tera;

use crate::api::ApiClient;
use crate::api::audit::LogListQuery;
use crate::cache::QueryCache;
use crate::domain::agency::AgencyStatus;
use crate::domain::types::{AgencyId, UserId};
use crate::dto::platform::{AgencyFilter, UserFilter};
use crate::export::export_filename;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{
    base_context, parse_filter_code, redirect, render_template, service_error_response,
};
use crate::services::platform::{self as platform_service, LogPageFilter};

#[derive(Deserialize)]
struct AgenciesQueryParams {
    q: Option<String>,
    status: Option<String>,
    plan: Option<String>,
    page: Option<usize>,
}

impl AgenciesQueryParams {
    fn filter(&self) -> AgencyFilter {
        AgencyFilter {
            search: self
                .q
                .as_ref()
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            status: parse_filter_code(self.status.as_deref()),
            plan: parse_filter_code(self.plan.as_deref()),
        }
    }
}

#[get("/platform")]
pub async fn dashboard(
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match platform_service::load_dashboard(api.get_ref(), cache.get_ref(), &user).await {
        Ok(dashboard) => {
            let mut context = base_context(&user, &flash_messages, "platform", &server_config);
            context.insert("dashboard", &dashboard);
            context.insert("all_failed", &dashboard.all_failed());
            render_template(&tera, "platform/dashboard.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/platform/agencies")]
pub async fn agencies(
    params: web::Query<AgenciesQueryParams>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    match platform_service::load_agencies_page(
        api.get_ref(),
        cache.get_ref(),
        &user,
        params.filter(),
        page,
    )
    .await
    {
        Ok(data) => {
            let mut context = base_context(&user, &flash_messages, "agencies", &server_config);
            context.insert("agencies", &data);
            render_template(&tera, "platform/agencies.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

/// CSV download of the currently filtered agency set, named
/// `agencies_<date>.csv`.
#[get("/platform/agencies/export")]
pub async fn export_agencies(
    params: web::Query<AgenciesQueryParams>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    match platform_service::export_agencies_csv(
        api.get_ref(),
        cache.get_ref(),
        &user,
        params.filter(),
    )
    .await
    {
        Ok(csv) => {
            let filename = export_filename("agencies", Utc::now().date_naive());
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(csv)
        }
        Err(err) => service_error_response(err),
    }
}

#[derive(Deserialize)]
pub struct AgencyStatusForm {
    status: String,
}

#[post("/platform/agencies/{agency_id}/status")]
pub async fn set_agency_status(
    agency_id: web::Path<i64>,
    web::Form(form): web::Form<AgencyStatusForm>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    let Ok(agency_id) = AgencyId::new(agency_id.into_inner()) else {
        return HttpResponse::BadRequest().finish();
    };
    let Some(status) = parse_filter_code::<AgencyStatus>(Some(&form.status)) else {
        FlashMessage::error("Unknown agency status.").send();
        return redirect("/platform/agencies");
    };

    match platform_service::update_agency_status(
        api.get_ref(),
        cache.get_ref(),
        &user,
        agency_id,
        status,
    )
    .await
    {
        Ok(agency) => {
            FlashMessage::success(format!("Agency {} updated.", agency.name)).send();
            redirect("/platform/agencies")
        }
        Err(err) => service_error_response(err),
    }
}

#[derive(Deserialize)]
struct UsersQueryParams {
    q: Option<String>,
    role: Option<String>,
    status: Option<String>,
}

#[get("/platform/users")]
pub async fn users(
    params: web::Query<UsersQueryParams>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let filter = UserFilter {
        search: params
            .q
            .as_ref()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty()),
        role: parse_filter_code(params.role.as_deref()),
        status: parse_filter_code(params.status.as_deref()),
    };

    match platform_service::load_users_page(api.get_ref(), cache.get_ref(), &user, filter).await {
        Ok(data) => {
            let mut context = base_context(&user, &flash_messages, "users", &server_config);
            context.insert("users", &data);
            render_template(&tera, "platform/users.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/platform/users/{user_id}/suspend")]
pub async fn suspend_user(
    user_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    set_suspended(user_id.into_inner(), true, &user, &api, &cache).await
}

#[post("/platform/users/{user_id}/reactivate")]
pub async fn reactivate_user(
    user_id: web::Path<i64>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    set_suspended(user_id.into_inner(), false, &user, &api, &cache).await
}

async fn set_suspended(
    target: i64,
    suspended: bool,
    user: &AuthenticatedUser,
    api: &web::Data<ApiClient>,
    cache: &web::Data<QueryCache>,
) -> HttpResponse {
    let Ok(target) = UserId::new(target) else {
        return HttpResponse::BadRequest().finish();
    };

    match platform_service::set_user_suspended(
        api.get_ref(),
        cache.get_ref(),
        user,
        target,
        suspended,
    )
    .await
    {
        Ok(updated) => {
            let action = if suspended { "suspended" } else { "reactivated" };
            FlashMessage::success(format!("User {} {action}.", updated.name)).send();
            redirect("/platform/users")
        }
        Err(err) => service_error_response(err),
    }
}

#[derive(Deserialize)]
struct LogsQueryParams {
    q: Option<String>,
    kind: Option<String>,
    severity: Option<String>,
    page: Option<usize>,
}

#[get("/platform/logs")]
pub async fn logs(
    params: web::Query<LogsQueryParams>,
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
    let filter = LogPageFilter {
        query,
        page: params.page.unwrap_or(1),
    };

    match platform_service::load_logs_page(api.get_ref(), cache.get_ref(), &user, filter).await {
        Ok(data) => {
            let mut context = base_context(&user, &flash_messages, "logs", &server_config);
            context.insert("logs", &data);
            render_template(&tera, "platform/logs.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}
