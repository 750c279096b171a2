// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldErrors;

/// Body used by every read-side failure: `{"detail": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DetailBody {
    #[schema(example = "Personal information not found")]
    pub detail: String,
}

/// Body returned by the public write endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<FieldErrors>,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    /// 201 with `{"success": true, "message": ...}`
    pub fn acknowledged(message: &str) -> HttpResponse {
        HttpResponse::Created().json(SubmissionBody {
            success: true,
            message: message.to_string(),
            errors: None,
        })
    }

    /// 400 with `{"success": false, "message": ..., "errors": {...}}`
    pub fn rejected(message: &str, errors: Option<FieldErrors>) -> HttpResponse {
        HttpResponse::BadRequest().json(SubmissionBody {
            success: false,
            message: message.to_string(),
            errors,
        })
    }

    pub fn error(status: StatusCode, detail: &str) -> HttpResponse {
        HttpResponse::build(status).json(DetailBody {
            detail: detail.to_string(),
        })
    }

    pub fn not_found(detail: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, detail)
    }

    pub fn bad_request(detail: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unauthorized(detail: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, detail)
    }

    pub fn conflict(detail: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, detail)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }
}
