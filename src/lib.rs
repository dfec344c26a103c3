#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::middleware::{Compress, Logger};
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::api::ApiClient;
#[cfg(feature = "server")]
use crate::cache::QueryCache;
#[cfg(feature = "server")]
use crate::middleware::RedirectUnauthorized;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;

#[cfg(feature = "client")]
pub mod api;
#[cfg(feature = "client")]
pub mod cache;
#[cfg(feature = "client")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "client")]
pub mod export;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "client")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

pub const ROLE_PLATFORM_MANAGER: &str = "platform_manager";
pub const ROLE_LEGAL_AUDITOR: &str = "legal_auditor";
pub const ROLE_SALES_REP: &str = "sales_rep";
pub const ROLE_AGENCY_STAFF: &str = "agency";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One backend client and one query cache for the whole process; widgets
    // share cached responses across requests until the TTL expires.
    let api_client = ApiClient::new(&server_config.api_base_url, server_config.api_token.clone())
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
    let cache = web::Data::new(QueryCache::new(Duration::from_secs(
        server_config.cache_ttl_secs,
    )));

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(routes::main::not_assigned)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(routes::main::index)
                    .service(routes::main::logout)
                    .service(routes::platform::dashboard)
                    .service(routes::platform::agencies)
                    .service(routes::platform::export_agencies)
                    .service(routes::platform::set_agency_status)
                    .service(routes::platform::users)
                    .service(routes::platform::suspend_user)
                    .service(routes::platform::reactivate_user)
                    .service(routes::platform::logs)
                    .service(routes::auditor::dashboard)
                    .service(routes::auditor::audit_trail)
                    .service(routes::sales::dashboard)
                    .service(routes::agency::dashboard)
                    .service(routes::agency::properties)
                    .service(routes::agency::mark_notification_read)
                    .service(routes::tenant_analysis::analyses)
                    .service(routes::tenant_analysis::submit_analysis)
                    .service(routes::tenant_analysis::show_analysis)
                    .service(routes::tenant_analysis::upload_document)
                    .service(routes::tenant_analysis::download_report),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api_client.clone()))
            .app_data(cache.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
