//! CostGraph - 内存版带权有向图与单源最短代价计算
//!
//! 面向教学/演示规模的小型图，支持：
//! - 以值为键的顶点集合与带权有向边
//! - 按发现顺序推进的松弛扫描
//! - 基于最小优先队列的经典 Dijkstra 变体
//! - CSV 边表装配与表格/JSON 结果输出

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{ShortestPathFinder, ShortestPaths};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
