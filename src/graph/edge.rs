//! 边定义
//!
//! 不可变的 (目标值, 代价) 对，由源顶点持有

use serde::{Deserialize, Serialize};

/// 有向带权边
///
/// 目标按值存储（值即句柄），边本身不持有目标顶点，
/// 因此任意环状连接都不会形成所有权环
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// 目标顶点的值
    target: T,
    /// 边的代价（非负权重，创建后不可变）
    cost: u64,
}

impl<T> Edge<T> {
    /// 创建新边
    pub(crate) fn new(target: T, cost: u64) -> Self {
        Self { target, cost }
    }

    /// 获取目标顶点的值
    pub fn target(&self) -> &T {
        &self.target
    }

    /// 获取边的代价
    pub fn cost(&self) -> u64 {
        self.cost
    }
}
