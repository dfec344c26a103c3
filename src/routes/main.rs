//! Entry routes: role-based landing redirect, the not-assigned page, logout.

use actix_identity::Identity;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, check_role, redirect, render_template};
use crate::{ROLE_AGENCY_STAFF, ROLE_LEGAL_AUDITOR, ROLE_PLATFORM_MANAGER, ROLE_SALES_REP};

/// Sends the signed-in user to the dashboard matching their primary role.
#[get("/")]
pub async fn index(user: AuthenticatedUser) -> impl Responder {
    let destination = if check_role(ROLE_PLATFORM_MANAGER, &user.roles) {
        "/platform"
    } else if check_role(ROLE_LEGAL_AUDITOR, &user.roles) {
        "/auditor"
    } else if check_role(ROLE_SALES_REP, &user.roles) {
        "/sales"
    } else if check_role(ROLE_AGENCY_STAFF, &user.roles) {
        "/agency"
    } else {
        "/na"
    };
    redirect(destination)
}

#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let context = base_context(&user, &flash_messages, "index", &server_config);
    render_template(&tera, "main/not_assigned.html", &context)
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}
