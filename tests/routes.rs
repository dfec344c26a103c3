use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;

use rentora_dashboard::models::auth::AuthenticatedUser;
use rentora_dashboard::routes::{alert_level_to_str, ensure_role, redirect};

fn user_with_roles(roles: &[&str]) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "u-1".into(),
        email: "user@rentora.com".into(),
        name: "User".into(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        agency_id: None,
        exp: 4_102_444_800,
    }
}

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn redirect_uses_see_other() {
    let response = redirect("/platform");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/platform"
    );
}

#[test]
fn ensure_role_accepts_matching_users() {
    let user = user_with_roles(&["platform_manager"]);
    assert!(ensure_role(&user, "platform_manager", None).is_ok());
}

#[test]
fn ensure_role_redirects_others_to_na() {
    let user = user_with_roles(&["agency"]);
    let response = ensure_role(&user, "platform_manager", None).unwrap_err();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/na");
}

#[test]
fn ensure_role_honours_custom_redirect() {
    let user = user_with_roles(&[]);
    let response = ensure_role(&user, "sales_rep", Some("/auth/signin")).unwrap_err();
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/auth/signin"
    );
}
