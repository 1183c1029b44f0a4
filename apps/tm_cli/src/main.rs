// terramask\apps\tm_cli\src/main.rs

//! TerraMask 命令行界面
//!
//! 把多边形几何栅格化为布尔掩膜的命令行工具。
//!
//! 几何从 JSON 文件读入（`Polygon` / `MultiPolygon` 坐标数组），
//! 掩膜以 ASCII 字符画或 JSON 行数组输出。几何的获取（OSM 查询、
//! 线段拼合）与可视化都在本工具之外完成。

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// TerraMask 多边形栅格化命令行工具
#[derive(Parser)]
#[command(name = "tm_cli")]
#[command(author = "TerraMask Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TerraMask polygon-to-mask rasterizer", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 栅格化几何为布尔掩膜
    Rasterize(commands::rasterize::RasterizeArgs),
    /// 显示几何信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Rasterize(args) => commands::rasterize::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    }
}
