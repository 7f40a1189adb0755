//! 结果打印器
//!
//! 提供表格和 JSON 两种格式的代价表输出

use crate::algorithm::ShortestPaths;
use crate::error::{Error, Result};
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;
use std::fmt::Display;
use std::hash::Hash;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    format: OutputFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 渲染代价表
    pub fn render<T>(&self, paths: &ShortestPaths<T>) -> Result<String>
    where
        T: Eq + Hash + Display + Serialize,
    {
        match self.format {
            OutputFormat::Table => Ok(self.format_table(paths)),
            OutputFormat::Json => serde_json::to_string_pretty(paths)
                .map_err(|e| Error::SerializationError(e.to_string())),
        }
    }

    /// 表格格式
    fn format_table<T>(&self, paths: &ShortestPaths<T>) -> String
    where
        T: Eq + Hash + Display,
    {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["目标", "最低代价"]);

        for (target, cost) in paths.iter() {
            let cost_cell = match cost {
                Some(cost) => Cell::new(&cost.to_string()),
                None => Cell::new(&"不可达".yellow().to_string()),
            };
            table.add_row(Row::new(vec![Cell::new(&target.to_string()), cost_cell]));
        }

        format!(
            "{}\n源点: {}，共 {} 个目标\n",
            table,
            paths.source().to_string().green(),
            paths.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, Vertex};

    fn two_vertex_paths() -> ShortestPaths<char> {
        let mut a = Vertex::new('A');
        let b = Vertex::new('B');
        let c = Vertex::new('C');
        a.connect(&b, 20).unwrap();
        let graph = Graph::from_vertices([a, b, c]).unwrap();
        graph.shortest_paths(&'A').unwrap()
    }

    #[test]
    fn test_table_marks_unreachable() {
        colored::control::set_override(false);
        let output = Printer::default().render(&two_vertex_paths()).unwrap();

        assert!(output.contains("20"));
        assert!(output.contains("不可达"));
    }

    #[test]
    fn test_json_uses_null_for_unreachable() {
        let output = Printer::new(OutputFormat::Json)
            .render(&two_vertex_paths())
            .unwrap();

        assert!(output.contains("\"B\": 20"));
        assert!(output.contains("\"C\": null"));
    }
}
