use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::response::{ErrorResponse, FieldError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Product with ID {0} not found.")]
    ProductNotFound(i32),

    #[error("Unprocessable Entity")]
    Validation(Vec<FieldError>),

    /// A body axum refused for transport reasons, e.g. too large or wrong content type.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Field-level failures reported by `validator`, tagged with where the
    /// input came from (`body`, `query`, `path`).
    pub fn invalid(location: &str, errors: &ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldError::new(
                        vec![location.to_string(), field.clone()],
                        msg,
                        err.code.to_string(),
                    )
                })
            })
            .collect();
        details.sort_by(|a, b| a.loc.cmp(&b.loc));
        AppError::Validation(details)
    }

    /// An input that could not be parsed at all.
    pub fn rejected(location: &str, msg: impl Into<String>, kind: &str) -> Self {
        AppError::Validation(vec![FieldError::new(
            vec![location.to_string()],
            msg,
            kind,
        )])
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => {
                AppError::rejected("body", rejection.body_text(), "json_data")
            }
            JsonRejection::JsonSyntaxError(_) => {
                AppError::rejected("body", rejection.body_text(), "json_invalid")
            }
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::rejected("query", rejection.body_text(), "query_invalid")
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::rejected("path", rejection.body_text(), "path_invalid")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ProductNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(self.to_string())),
            )
                .into_response(),
            AppError::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(details)),
            )
                .into_response(),
            AppError::Rejected { status, message } => {
                (status, Json(ErrorResponse::new(message))).into_response()
            }
            AppError::OrmError(ref err) => {
                tracing::error!(error = %err, "database error");
                internal_error()
            }
            AppError::Internal(ref err) => {
                tracing::error!(error = ?err, "unhandled error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal Server Error")),
    )
        .into_response()
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(
            AppError::ProductNotFound(999).to_string(),
            "Product with ID 999 not found."
        );
        let response = AppError::ProductNotFound(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_reports_each_field_with_location() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "price",
            ValidationError::new("greater_than").with_message("must be greater than 0".into()),
        );
        errors.add("name", ValidationError::new("length"));

        let AppError::Validation(details) = AppError::invalid("body", &errors) else {
            panic!("expected validation error");
        };
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].loc, vec!["body", "name"]);
        assert_eq!(details[0].msg, "length");
        assert_eq!(details[1].loc, vec!["body", "price"]);
        assert_eq!(details[1].msg, "must be greater than 0");
        assert_eq!(details[1].kind, "greater_than");
    }

    #[test]
    fn database_errors_are_opaque() {
        let response =
            AppError::OrmError(sea_orm::DbErr::Custom("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
