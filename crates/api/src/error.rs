//! # API 统一错误处理
//!
//! 将下层错误类型统一映射到 HTTP 状态码与 JSON 响应体。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use meigara_core::registry::error::RegistryError;
use thiserror::Error;

use crate::types::ApiErrorResponse;

/// API 层统一错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 请求参数错误 (400)
    #[error("{0}")]
    BadRequest(String),
}

/// 将 `ApiError` 转换为 axum 的 HTTP 响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ApiErrorResponse::from_msg(message))).into_response()
    }
}

/// 越界与负数下标统一返回固定信息 "No symbol found"
impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::OutOfRange { index, len } => {
                tracing::debug!("index {} out of range for {} entries", index, len);
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}
