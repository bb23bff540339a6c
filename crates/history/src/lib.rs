//! # `meigara-history` - 历史行情加工
//!
//! 拉取单个标的的全部日线，取整、标注涨跌颜色、计算 EMA 后写出 `<TICKER>.csv`。

pub mod error;
pub mod indicator;
pub mod normalize;
pub mod service;
pub mod writer;
