//! CostGraph 命令行工具
//!
//! 内置演示图与 CSV 边表的单源最短代价计算

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use costgraph::algorithm::ShortestPathFinder;
use costgraph::cli::{OutputFormat, Printer};
use costgraph::graph::{Graph, Vertex};
use costgraph::import;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "costgraph-cli")]
#[command(about = "CostGraph 单源最短代价计算工具", version)]
struct Args {
    /// 输出格式
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// 算法实现
    #[arg(long, global = true, value_enum, default_value_t = Algorithm::Sweep)]
    algorithm: Algorithm,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// 发现序松弛扫描
    Sweep,
    /// 经典 Dijkstra（全图最优）
    Dijkstra,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 运行内置的 8 顶点演示图
    Demo {
        /// 源顶点
        #[arg(short, long, default_value_t = 'A')]
        source: char,
    },
    /// 从 CSV 边表（src,dst,cost）装配图并计算
    Run {
        /// 边表文件
        file: PathBuf,
        /// 源顶点
        #[arg(short, long)]
        source: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let printer = Printer::new(args.format);

    match &args.command {
        Command::Demo { source } => {
            let graph = demo_graph()?;
            report(&graph, source, args.algorithm, &printer)
        }
        Command::Run { file, source } => {
            let (graph, stats) = import::load_edge_list(file)
                .with_context(|| format!("读取边表失败: {}", file.display()))?;
            eprintln!(
                "已装配 {} 个顶点、{} 条边",
                stats.vertices_imported, stats.edges_imported
            );
            report(&graph, source, args.algorithm, &printer)
        }
    }
}

fn report<T>(
    graph: &Graph<T>,
    source: &T,
    algorithm: Algorithm,
    printer: &Printer,
) -> anyhow::Result<()>
where
    T: Clone + Eq + Hash + Debug + Display + Serialize,
{
    let finder = ShortestPathFinder::new(graph);
    let paths = match algorithm {
        Algorithm::Sweep => finder.relaxation_sweep(source)?,
        Algorithm::Dijkstra => finder.dijkstra(source)?,
    };

    println!("{}", printer.render(&paths)?);
    Ok(())
}

/// 内置演示图：A..H 共 8 个顶点、14 条带权边
fn demo_graph() -> costgraph::Result<Graph<char>> {
    let mut a = Vertex::new('A');
    let mut b = Vertex::new('B');
    let mut c = Vertex::new('C');
    let mut d = Vertex::new('D');
    let mut e = Vertex::new('E');
    let mut f = Vertex::new('F');
    let mut g = Vertex::new('G');
    let h = Vertex::new('H');

    a.connect(&b, 20)?;
    a.connect(&d, 80)?;
    a.connect(&g, 90)?;
    b.connect(&f, 10)?;
    c.connect(&d, 10)?;
    c.connect(&f, 50)?;
    c.connect(&h, 20)?;
    d.connect(&c, 10)?;
    d.connect(&h, 20)?;
    e.connect(&b, 50)?;
    e.connect(&g, 30)?;
    f.connect(&c, 10)?;
    f.connect(&d, 40)?;
    g.connect(&a, 20)?;

    Graph::from_vertices([a, b, c, d, e, f, g, h])
}
