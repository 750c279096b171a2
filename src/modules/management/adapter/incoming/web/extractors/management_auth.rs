use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use tracing::warn;

use crate::modules::management::application::domain::management_token::ManagementToken;
use crate::shared::api::ApiResponse;

/// Caller that presented the management bearer token.
#[derive(Debug, Clone, Copy)]
pub struct ManagementUser;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for ManagementUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(expected) = req.app_data::<web::Data<ManagementToken>>() else {
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(presented) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "Authentication credentials were not provided.",
            ))));
        };

        if expected.verify(presented) {
            ready(Ok(ManagementUser))
        } else {
            warn!(path = %req.path(), "Rejected management token");
            ready(Err(create_api_error(ApiResponse::unauthorized("Invalid token."))))
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
