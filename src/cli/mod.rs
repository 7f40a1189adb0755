//! 命令行支持模块
//!
//! 驱动层的结果渲染

mod printer;

pub use printer::{OutputFormat, Printer};
