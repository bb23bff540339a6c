//! # `meigara-catalog` - 合约主表落盘
//!
//! 下载合约主表 JSON，转换为无 schema 表格，写出 `instruments.csv`，
//! 并提供按代码检索单条记录的能力。

pub mod writer;
pub mod service;
