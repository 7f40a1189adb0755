//! 数据导入模块
//!
//! 从 CSV 边表装配图，供命令行驱动层使用

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
}

/// CSV 行格式：src,dst,cost
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    src: String,
    dst: String,
    cost: u64,
}

/// 从 CSV 边表构建图
///
/// 顶点按首次出现的顺序自动创建；`#` 开头的行视为注释。
/// 自环与重复边遵循核心规则，原样返回 `InvalidEdge`
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<(Graph<String>, ImportStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path.as_ref())
        .map_err(|e| Error::ImportError(e.to_string()))?;

    // 先建满所有顶点再连边，保证目标值先于边存在
    let mut vertices: IndexMap<String, Vertex<String>> = IndexMap::new();
    let mut records = Vec::new();

    for (line, record) in reader.deserialize::<EdgeRecord>().enumerate() {
        let record =
            record.map_err(|e| Error::ImportError(format!("第 {} 行: {}", line + 1, e)))?;

        for value in [&record.src, &record.dst] {
            if !vertices.contains_key(value) {
                vertices.insert(value.clone(), Vertex::new(value.clone()));
            }
        }
        records.push(record);
    }

    let stats = ImportStats {
        vertices_imported: vertices.len(),
        edges_imported: records.len(),
    };

    for record in &records {
        let vertex = vertices
            .get_mut(&record.src)
            .ok_or_else(|| Error::ImportError(format!("源顶点缺失: {}", record.src)))?;
        vertex.connect_to(&record.dst, record.cost)?;
        debug!(src = %record.src, dst = %record.dst, cost = record.cost, "导入边");
    }

    let graph = Graph::from_vertices(vertices.into_values())?;
    Ok((graph, stats))
}
