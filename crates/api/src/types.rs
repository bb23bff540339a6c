//! # DTO (Data Transfer Object) 层
//!
//! 所有 DTO 派生 `utoipa::ToSchema` 或 `IntoParams` 以自动进入 Swagger 文档。

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============================================================
//  请求参数 (query string)
// ============================================================

/// `POST /add` 参数
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddParams {
    /// 待追加的标的代码
    #[param(example = "NIFTY")]
    pub symbol: String,
}

/// `PATCH /update` 参数
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateParams {
    /// 目标位置 (从 0 开始)
    #[param(example = 0)]
    pub index: i64,
    /// 新的标的代码
    #[param(example = "BANKNIFTY")]
    pub symbol: String,
}

/// `DELETE /remove` 参数
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemoveParams {
    /// 目标位置 (从 0 开始)
    #[param(example = 0)]
    pub index: i64,
}

// ============================================================
//  响应体
// ============================================================

/// 操作成功的提示信息
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Symbol NIFTY added successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    #[schema(example = "No symbol found")]
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}
