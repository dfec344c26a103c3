//! Handlers for the sales representative pages.

use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::api::ApiClient;
use crate::cache::QueryCache;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template, service_error_response};
use crate::services::sales as sales_service;

#[get("/sales")]
pub async fn dashboard(
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match sales_service::load_dashboard(api.get_ref(), cache.get_ref(), &user).await {
        Ok(dashboard) => {
            let mut context = base_context(&user, &flash_messages, "sales", &server_config);
            context.insert("dashboard", &dashboard);
            render_template(&tera, "sales/dashboard.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}
