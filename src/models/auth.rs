//! Authenticated user extracted from the session identity cookie.
//!
//! The auth service issues a JWT carrying the user's roles and optional
//! agency association; the token string is stored via `actix-identity` and
//! decoded here on every extraction.

use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// JWT claims describing the signed-in user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject: stable user identifier.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub agency_id: Option<i64>,
    pub exp: usize,
}

/// Returns true when the role list contains the given role.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|candidate| candidate == role)
}

impl AuthenticatedUser {
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let decoded = decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(decoded.claims)
    }

    pub fn has_role(&self, role: &str) -> bool {
        check_role(role, &self.roles)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = actix_identity::Identity::from_request(req, payload).into_inner();
        let config = req.app_data::<web::Data<ServerConfig>>();

        let user = match (identity, config) {
            (Ok(identity), Some(config)) => identity
                .id()
                .map_err(|err| ErrorUnauthorized(err.to_string()))
                .and_then(|token| {
                    AuthenticatedUser::from_token(&token, &config.secret)
                        .map_err(|err| ErrorUnauthorized(err.to_string()))
                }),
            _ => Err(ErrorUnauthorized("authentication required")),
        };

        ready(user)
    }
}
