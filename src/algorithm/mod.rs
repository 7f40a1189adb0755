//! 图算法模块
//!
//! 包含单源最短代价算法

mod shortest_path;

pub use shortest_path::{ShortestPathFinder, ShortestPaths};
