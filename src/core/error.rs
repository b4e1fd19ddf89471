//! 核心错误处理模块
//!
//! 三类错误：校验失败 422、资源不存在 404、存储失败 500。
//! 所有错误都在 HTTP 边界转成 JSON 响应，存储细节不外泄。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::core::response::MessageResponse;
use crate::infrastructure::store::StorageError;

/// 字段级校验错误
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// 应用错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    /// 单字段校验错误
    pub fn invalid(field: &str, message: &str) -> Self {
        AppError::Validation(vec![FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }])
    }

    pub fn not_found(message: &str) -> Self {
        AppError::NotFound(message.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let errors = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation error".to_string()),
                })
            })
            .collect();

        AppError::Validation(errors)
    }
}

/// 校验错误响应结构
#[derive(Serialize)]
struct ValidationResponse {
    errors: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationResponse { errors }),
            )
                .into_response(),
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(message))).into_response()
            }
            AppError::Storage(err) => {
                error!("storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("An unknown error occurred!")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
    }

    #[test]
    fn test_validation_errors_flatten_per_field() {
        let probe = Probe {
            name: String::new(),
        };
        let err: AppError = probe.validate().unwrap_err().into();

        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert_eq!(errors[0].message, "name must not be empty");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        let res = AppError::invalid("quantity", "bad").into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let res = AppError::not_found("missing").into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = AppError::Storage(StorageError::Unavailable("orders")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
