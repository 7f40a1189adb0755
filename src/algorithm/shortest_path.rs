//! 单源最短代价算法
//!
//! 提供两种实现：按发现顺序推进的松弛扫描，
//! 以及基于最小优先队列的经典 Dijkstra

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use indexmap::IndexMap;
use priority_queue::PriorityQueue;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 单源最短代价结果
///
/// 除源点外的每个图顶点恰好对应一个表项；
/// 不可达用 `None` 表示，不存在数值"无穷大"哨兵
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<T: Eq + Hash> {
    /// 源顶点的值
    source: T,
    /// 目标值 -> 最低总代价（不可达为 `None`），保持图的枚举顺序
    costs: IndexMap<T, Option<u64>>,
}

impl<T: Eq + Hash> ShortestPaths<T> {
    fn new(source: T, costs: IndexMap<T, Option<u64>>) -> Self {
        Self { source, costs }
    }

    /// 获取源顶点的值
    pub fn source(&self) -> &T {
        &self.source
    }

    /// 查询到某个目标的最低总代价，不可达或非图顶点时为 `None`
    pub fn cost(&self, target: &T) -> Option<u64> {
        self.costs.get(target).copied().flatten()
    }

    /// 目标是否可达
    pub fn is_reachable(&self, target: &T) -> bool {
        self.cost(target).is_some()
    }

    /// 表项数量（源点之外的顶点数）
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// 结果是否为空（图中只有源点）
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// 按图的枚举顺序遍历 (目标值, 代价) 表项
    pub fn iter(&self) -> impl Iterator<Item = (&T, Option<u64>)> {
        self.costs.iter().map(|(value, cost)| (value, *cost))
    }
}

/// 最短代价计算器
///
/// 借用图执行只读计算，计算期间不允许结构性修改
pub struct ShortestPathFinder<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T: Clone + Eq + Hash + fmt::Debug> ShortestPathFinder<'a, T> {
    /// 创建计算器
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    /// 发现序松弛扫描
    ///
    /// 工作表从源点的直接邻居播种，按发现顺序增长：
    /// 顶点第一次作为已处理顶点的边目标出现时入表并立即展开一次
    /// （用它当前行的代价松弛它自己的出边目标），之后不再重新展开。
    /// 指回源点的边被跳过。注意这不是按代价优先的经典 Dijkstra，
    /// 在同一轮扫描里经由后处理顶点发现更短路径时结果可能偏大，
    /// 需要全图最优时使用 [`Self::dijkstra`]
    pub fn relaxation_sweep(&self, source: &T) -> Result<ShortestPaths<T>> {
        let source_vertex = self.lookup_source(source)?;

        // 源点之外的全部顶点，按图的插入顺序编号
        let others: Vec<&Vertex<T>> = self
            .graph
            .iter_vertices()
            .filter(|v| v.value() != source)
            .collect();
        let index: HashMap<&T, usize> = others
            .iter()
            .enumerate()
            .map(|(i, v)| (v.value(), i))
            .collect();

        // 代价表只需相邻两行：当前行逐步前滚为下一行的默认值
        let mut row: Vec<Option<u64>> = vec![None; others.len()];

        // 播种：源点的直接出边
        for edge in source_vertex.iter_edges() {
            if let Some(&j) = index.get(edge.target()) {
                row[j] = Some(edge.cost());
                debug!(to = ?edge.target(), cost = edge.cost(), "播种直接邻居");
            }
        }

        let mut processed: Vec<&Vertex<T>> = vec![source_vertex];
        let mut processed_set: HashSet<&T> = HashSet::from([source]);

        let mut i = 0;
        while i < processed.len() {
            let current = processed[i];
            let mut next_row = row.clone();

            for edge in current.iter_edges() {
                // 指向源点或图外值的边没有列号，直接跳过
                let Some(&k) = index.get(edge.target()) else {
                    continue;
                };
                if processed_set.contains(edge.target()) {
                    continue;
                }
                let Some(discovered) = self.graph.vertex(edge.target()) else {
                    continue;
                };

                debug!(vertex = ?discovered.value(), step = i, "发现新顶点");

                // 展开一次：用新发现顶点当前行的代价松弛它的出边目标
                if let Some(base) = row[k] {
                    for onward in discovered.iter_edges() {
                        let Some(&j) = index.get(onward.target()) else {
                            continue;
                        };
                        let total = base.saturating_add(onward.cost());
                        if next_row[j].map_or(true, |best| total < best) {
                            debug!(
                                to = ?onward.target(),
                                via = ?discovered.value(),
                                total,
                                "代价改进"
                            );
                            next_row[j] = Some(total);
                        }
                    }
                }

                processed.push(discovered);
                processed_set.insert(discovered.value());
            }

            row = next_row;
            i += 1;
        }

        let costs = others
            .iter()
            .enumerate()
            .map(|(j, v)| (v.value().clone(), row[j]))
            .collect();
        Ok(ShortestPaths::new(source.clone(), costs))
    }

    /// 经典 Dijkstra（最小优先队列按暂定代价出队）
    ///
    /// 在所有非负权图上都给出最优代价，
    /// 是 [`Self::relaxation_sweep`] 的替代实现，公开契约相同
    pub fn dijkstra(&self, source: &T) -> Result<ShortestPaths<T>> {
        self.lookup_source(source)?;

        let mut dist: HashMap<&T, u64> = HashMap::from([(source, 0)]);
        let mut queue: PriorityQueue<&T, Reverse<u64>> = PriorityQueue::new();
        queue.push(source, Reverse(0));

        while let Some((value, Reverse(base))) = queue.pop() {
            // 非负权重下出队即最终代价
            let Some(vertex) = self.graph.vertex(value) else {
                continue;
            };
            for edge in vertex.iter_edges() {
                if !self.graph.contains_value(edge.target()) {
                    continue;
                }
                let total = base.saturating_add(edge.cost());
                if dist.get(edge.target()).map_or(true, |&best| total < best) {
                    debug!(to = ?edge.target(), via = ?value, total, "代价改进");
                    dist.insert(edge.target(), total);
                    queue.push_increase(edge.target(), Reverse(total));
                }
            }
        }

        let costs = self
            .graph
            .iter_vertices()
            .filter(|v| v.value() != source)
            .map(|v| (v.value().clone(), dist.get(v.value()).copied()))
            .collect();
        Ok(ShortestPaths::new(source.clone(), costs))
    }

    fn lookup_source(&self, source: &T) -> Result<&'a Vertex<T>> {
        self.graph
            .vertex(source)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", source)))
    }
}
