//! 顶点定义
//!
//! 持有应用值与出边列表，相等性只由值决定

use super::edge::Edge;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 顶点
///
/// 值在创建后不可变；出边通过 `connect`/`disconnect` 显式增删。
/// 两个顶点的值相等即视为同一节点，与实例身份无关；
/// `connect`/`disconnect`/`adjacent` 一律按值比较目标
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<T> {
    /// 顶点的值
    value: T,
    /// 出边列表（按插入顺序）
    edges: Vec<Edge<T>>,
}

impl<T> Vertex<T> {
    /// 创建无边的新顶点
    pub fn new(value: T) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }

    /// 获取顶点的值
    pub fn value(&self) -> &T {
        &self.value
    }

    /// 获取出度
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// 按插入顺序遍历出边
    pub fn iter_edges(&self) -> impl Iterator<Item = &Edge<T>> {
        self.edges.iter()
    }
}

impl<T: Clone + Eq + fmt::Debug> Vertex<T> {
    /// 添加一条指向 `target` 的有向边
    ///
    /// 当目标与自身值相等（自环）或已存在指向等值目标的边时，
    /// 返回 `InvalidEdge`
    pub fn connect(&mut self, target: &Vertex<T>, cost: u64) -> Result<()> {
        self.connect_to(&target.value, cost)
    }

    /// 按目标值添加一条有向边，约束与 `connect` 相同
    pub fn connect_to(&mut self, target: &T, cost: u64) -> Result<()> {
        if &self.value == target {
            return Err(Error::InvalidEdge(format!(
                "顶点 {:?} 不能连接到自身",
                self.value
            )));
        }
        if self.find_edge(target).is_some() {
            return Err(Error::InvalidEdge(format!(
                "到等值顶点 {:?} 的边已存在",
                target
            )));
        }

        self.edges.push(Edge::new(target.clone(), cost));
        Ok(())
    }

    /// 移除指向 `target`（按值相等）的边
    ///
    /// 没有匹配的边时返回 `EdgeNotFound`
    pub fn disconnect(&mut self, target: &Vertex<T>) -> Result<()> {
        match self.edges.iter().position(|e| e.target() == &target.value) {
            Some(pos) => {
                self.edges.remove(pos);
                Ok(())
            }
            None => Err(Error::EdgeNotFound(format!(
                "到顶点 {:?} 的边不存在",
                target.value
            ))),
        }
    }

    /// 是否存在指向等值顶点的边
    pub fn adjacent(&self, target: &Vertex<T>) -> bool {
        self.find_edge(&target.value).is_some()
    }

    /// 查找指向某个目标值的边
    pub fn find_edge(&self, target: &T) -> Option<&Edge<T>> {
        self.edges.iter().find(|e| e.target() == target)
    }

    /// 获取当前出边列表的独立快照
    pub fn edges(&self) -> Vec<Edge<T>> {
        self.edges.clone()
    }
}

// 相等性与哈希只由值决定，边列表不参与
impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Vertex<T> {}

impl<T: Hash> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_adjacent() {
        let mut a = Vertex::new('A');
        let b = Vertex::new('B');
        let c = Vertex::new('C');

        a.connect(&b, 20).unwrap();

        assert!(a.adjacent(&b));
        assert!(!a.adjacent(&c));
        assert_eq!(a.degree(), 1);
        assert_eq!(a.find_edge(&'B').unwrap().cost(), 20);
    }

    #[test]
    fn test_connect_self_fails() {
        let mut a = Vertex::new('A');
        let other_a = Vertex::new('A');

        // 自环按值判断，与实例无关
        let err = a.connect(&other_a, 7).unwrap_err();
        assert!(matches!(err, Error::InvalidEdge(_)));
        assert_eq!(a.degree(), 0);
    }

    #[test]
    fn test_connect_duplicate_target_fails() {
        let mut a = Vertex::new('A');
        let b = Vertex::new('B');

        a.connect(&b, 20).unwrap();
        let err = a.connect(&Vertex::new('B'), 30).unwrap_err();

        assert!(matches!(err, Error::InvalidEdge(_)));
        assert_eq!(a.degree(), 1);
    }

    #[test]
    fn test_disconnect_roundtrip() {
        let mut a = Vertex::new('A');
        let b = Vertex::new('B');
        let c = Vertex::new('C');

        a.connect(&b, 20).unwrap();
        let before = a.edges();

        // connect 后立即 disconnect，边列表应还原
        a.connect(&c, 30).unwrap();
        a.disconnect(&c).unwrap();

        assert_eq!(a.edges(), before);
    }

    #[test]
    fn test_disconnect_missing_fails() {
        let mut a = Vertex::new('A');
        let b = Vertex::new('B');

        let err = a.disconnect(&b).unwrap_err();
        assert!(matches!(err, Error::EdgeNotFound(_)));
    }

    #[test]
    fn test_edges_snapshot_independent() {
        let mut a = Vertex::new('A');
        a.connect(&Vertex::new('B'), 20).unwrap();

        let mut snapshot = a.edges();
        snapshot.clear();

        assert_eq!(a.degree(), 1);
    }

    #[test]
    fn test_equality_by_value_only() {
        let mut a1 = Vertex::new('A');
        let a2 = Vertex::new('A');
        a1.connect(&Vertex::new('B'), 20).unwrap();

        // 边列表不同不影响相等性
        assert_eq!(a1, a2);
        assert_ne!(a1, Vertex::new('B'));
    }
}
