//! 进程内标的列表的内存实现。

pub mod mem;
