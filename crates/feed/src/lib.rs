//! 外部 HTTP 数据源：Yahoo Finance 行情与合约主表下载。

pub mod catalog;
pub mod yahoo;
