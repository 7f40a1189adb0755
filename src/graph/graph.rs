//! 图数据结构
//!
//! 以值为键的顶点集合，负责发起单源最短代价计算

use super::vertex::Vertex;
use crate::algorithm::{ShortestPathFinder, ShortestPaths};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// 有向带权图
///
/// 顶点按值唯一（两个值相等的 `Vertex` 视为同一节点），
/// 并保持插入顺序，算法的枚举顺序因此是确定的
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 顶点集合（值 -> 顶点）
    vertices: IndexMap<T, Vertex<T>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }
}

impl<T> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 图是否为空
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 按插入顺序遍历顶点
    pub fn iter_vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Graph<T> {
    /// 从顶点集合创建图
    pub fn from_vertices(vertices: impl IntoIterator<Item = Vertex<T>>) -> Result<Self> {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add(vertex)?;
        }
        Ok(graph)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 已存在等值顶点时返回 `DuplicateVertex`
    pub fn add(&mut self, vertex: Vertex<T>) -> Result<()> {
        if self.vertices.contains_key(vertex.value()) {
            return Err(Error::DuplicateVertex(format!("{:?}", vertex.value())));
        }

        self.vertices.insert(vertex.value().clone(), vertex);
        Ok(())
    }

    /// 按值相等判断顶点是否属于图
    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.contains_value(vertex.value())
    }

    /// 按值判断成员关系
    pub fn contains_value(&self, value: &T) -> bool {
        self.vertices.contains_key(value)
    }

    /// 按值查找顶点
    pub fn vertex(&self, value: &T) -> Option<&Vertex<T>> {
        self.vertices.get(value)
    }

    /// 获取全部顶点的独立快照
    pub fn vertices(&self) -> Vec<Vertex<T>> {
        self.vertices.values().cloned().collect()
    }

    // ==================== 最短代价计算 ====================

    /// 计算从 `source` 到其余每个顶点的最低总代价
    ///
    /// 使用发现序松弛扫描（见 [`ShortestPathFinder`]）；
    /// `source` 不在图中时返回 `VertexNotFound`
    pub fn shortest_paths(&self, source: &T) -> Result<ShortestPaths<T>> {
        ShortestPathFinder::new(self).relaxation_sweep(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_add_and_contains() {
        let mut graph = Graph::new();
        let mut a = Vertex::new('A');
        let b = Vertex::new('B');
        a.connect(&b, 20).unwrap();

        graph.add(a).unwrap();
        graph.add(b).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.contains(&Vertex::new('A')));
        assert!(graph.contains_value(&'B'));
        assert!(!graph.contains_value(&'C'));
        assert_eq!(graph.vertex(&'A').unwrap().degree(), 1);
    }

    #[test]
    fn test_graph_duplicate_add_fails() {
        let mut graph = Graph::new();
        graph.add(Vertex::new('A')).unwrap();

        // 不同实例、相等的值
        let err = graph.add(Vertex::new('A')).unwrap_err();

        assert!(matches!(err, Error::DuplicateVertex(_)));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_graph_from_vertices() {
        let graph =
            Graph::from_vertices([Vertex::new('A'), Vertex::new('B'), Vertex::new('C')]).unwrap();
        assert_eq!(graph.vertex_count(), 3);

        let err = Graph::from_vertices([Vertex::new('A'), Vertex::new('A')]).unwrap_err();
        assert!(matches!(err, Error::DuplicateVertex(_)));
    }

    #[test]
    fn test_vertices_snapshot_independent() {
        let mut graph = Graph::new();
        graph.add(Vertex::new('A')).unwrap();

        let mut snapshot = graph.vertices();
        snapshot.clear();

        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_shortest_paths_missing_source() {
        let graph = Graph::from_vertices([Vertex::new('A')]).unwrap();

        let err = graph.shortest_paths(&'Z').unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(_)));
    }
}
