//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("无效的边: {0}")]
    InvalidEdge(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
