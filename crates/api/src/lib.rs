//! # `meigara-api` - 标的列表 HTTP 服务
//!
//! 使用 `axum` 构建路由，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 将四个 HTTP 动词映射到 `InstrumentRegistry` 的 list / add / update / remove
//! - 将 `RegistryError` 映射为 HTTP 400
//! - 不做鉴权、分页与持久化

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
