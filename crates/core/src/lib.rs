//! # `meigara-core` - 领域模型与端口
//!
//! 三个独立单元共享的实体、错误类型与 trait 契约：
//! - `catalog`: 合约主表 (schema-less 表格) 及其数据源端口
//! - `market`: OHLCV K 线、派生后的 `PriceBar` 及行情提供者端口
//! - `registry`: 内存标的列表的服务契约
//!
//! 具体实现位于 `meigara-feed`、`meigara-registry` 等下游 crate。

pub mod catalog;
pub mod common;
pub mod config;
pub mod market;
pub mod registry;
