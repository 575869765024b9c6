//! Admin capability check at the API boundary.
//!
//! Authentication itself lives in the fronting identity service, which
//! forwards the resolved actor on every request:
//!
//! - `X-Actor-Id`: the acting account's numeric id (required);
//! - `X-Actor-Role`: the account's role string;
//! - `X-Actor-Superuser`: `1`/`true` when the account is a superuser.
//!
//! Admin-gated handlers take an [`AdminActor`] parameter; extraction fails
//! with 401 when no actor is forwarded and 403 when the actor carries
//! neither the `admin` role nor the superuser flag.

use crate::error::ApiError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

const ACTOR_ID_HEADER: &str = "x-actor-id";
const ACTOR_ROLE_HEADER: &str = "x-actor-role";
const ACTOR_SUPERUSER_HEADER: &str = "x-actor-superuser";

/// An authenticated actor that passed the admin check.
#[derive(Clone, Debug)]
pub struct AdminActor {
    pub id: i64,
}

impl FromRequest for AdminActor {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_admin(req))
    }
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

fn extract_admin(req: &HttpRequest) -> Result<AdminActor, ApiError> {
    let id: i64 = header(req, ACTOR_ID_HEADER)
        .and_then(|value| value.parse().ok())
        .ok_or(ApiError::Unauthorized)?;

    let role = header(req, ACTOR_ROLE_HEADER).unwrap_or("");
    let superuser = matches!(
        header(req, ACTOR_SUPERUSER_HEADER),
        Some("1") | Some("true")
    );

    if superuser || role == "admin" {
        Ok(AdminActor { id })
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn missing_actor_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(extract_admin(&req), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn plain_user_is_forbidden() {
        let req = TestRequest::default()
            .insert_header((ACTOR_ID_HEADER, "7"))
            .insert_header((ACTOR_ROLE_HEADER, "student"))
            .to_http_request();
        assert!(matches!(extract_admin(&req), Err(ApiError::Forbidden)));
    }

    #[test]
    fn admin_role_passes() {
        let req = TestRequest::default()
            .insert_header((ACTOR_ID_HEADER, "7"))
            .insert_header((ACTOR_ROLE_HEADER, "admin"))
            .to_http_request();
        let actor = extract_admin(&req).unwrap();
        assert_eq!(actor.id, 7);
    }

    #[test]
    fn superuser_flag_passes_without_role() {
        let req = TestRequest::default()
            .insert_header((ACTOR_ID_HEADER, "3"))
            .insert_header((ACTOR_SUPERUSER_HEADER, "1"))
            .to_http_request();
        assert!(extract_admin(&req).is_ok());
    }
}
