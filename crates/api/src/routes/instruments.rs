use axum::Json;
use axum::extract::{Query, State};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{AddParams, ApiErrorResponse, MessageResponse, RemoveParams, UpdateParams};

/// 获取全部标的
///
/// 按当前顺序返回列表，下标即后续 update / remove 使用的位置。
#[utoipa::path(
    get,
    path = "/instruments",
    tag = "标的 (Instruments)",
    responses(
        (status = 200, description = "获取成功", body = Vec<String>)
    )
)]
pub async fn get_instruments(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.list().await)
}

/// 追加标的
#[utoipa::path(
    post,
    path = "/add",
    tag = "标的 (Instruments)",
    params(AddParams),
    responses(
        (status = 200, description = "添加成功", body = MessageResponse),
        (status = 400, description = "缺少参数")
    )
)]
pub async fn add_instrument(
    State(state): State<AppState>,
    Query(params): Query<AddParams>,
) -> Json<MessageResponse> {
    let message = format!("Symbol {} added successfully", params.symbol);
    state.registry.add(params.symbol).await;
    Json(MessageResponse::new(message))
}

/// 替换指定位置的标的
#[utoipa::path(
    patch,
    path = "/update",
    tag = "标的 (Instruments)",
    params(UpdateParams),
    responses(
        (status = 200, description = "更新成功", body = MessageResponse),
        (status = 400, description = "下标越界", body = ApiErrorResponse)
    )
)]
pub async fn update_instrument(
    State(state): State<AppState>,
    Query(params): Query<UpdateParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.registry.update(params.index, params.symbol).await?;
    Ok(Json(MessageResponse::new(format!(
        "Symbol at index {} updated successfully",
        params.index
    ))))
}

/// 删除指定位置的标的
///
/// 删除后其后的元素整体前移一位。
#[utoipa::path(
    delete,
    path = "/remove",
    tag = "标的 (Instruments)",
    params(RemoveParams),
    responses(
        (status = 200, description = "删除成功", body = MessageResponse),
        (status = 400, description = "下标越界", body = ApiErrorResponse)
    )
)]
pub async fn remove_instrument(
    State(state): State<AppState>,
    Query(params): Query<RemoveParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.registry.remove(params.index).await?;
    tracing::info!("removed {} from index {}", removed, params.index);
    Ok(Json(MessageResponse::new(format!(
        "Symbol at index {} removed successfully",
        params.index
    ))))
}
