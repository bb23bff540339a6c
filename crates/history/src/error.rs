use thiserror::Error;

/// 历史行情落盘错误。行情拉取失败不在此列，由服务层记录后按空结果处理。
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(String),
}
