// terramask\apps\tm_cli\src\commands\rasterize.rs

//! 栅格化命令
//!
//! 读入几何文件，构建采样网格，填充布尔掩膜并输出统计。
//! 单部分几何走 R-tree 边索引加速；`--exhaustive` 切换到
//! 逐点兜底基线（只对单环多边形有意义）。

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use tm_geo::{PreparedPolygon, Rect};
use tm_raster::prelude::*;

/// 栅格化参数
#[derive(Args)]
pub struct RasterizeArgs {
    /// 几何文件路径 (JSON: Polygon 或 MultiPolygon 坐标数组)
    #[arg(short, long)]
    pub geometry: PathBuf,

    /// 栅格化范围 "min_x,min_y,max_x,max_y"（默认用几何包围盒）
    #[arg(long)]
    pub bbox: Option<String>,

    /// 栅格宽度（列数）
    #[arg(short = 'W', long, default_value = "256")]
    pub width: usize,

    /// 栅格高度（行数）
    #[arg(short = 'H', long, default_value = "256")]
    pub height: usize,

    /// 强制并行填充
    #[arg(long)]
    pub parallel: bool,

    /// 使用逐点兜底基线（只支持单环多边形）
    #[arg(long)]
    pub exhaustive: bool,

    /// 输出文件（省略时只打印统计）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出格式 (ascii, json)
    #[arg(long, default_value = "ascii")]
    pub format: String,
}

/// 执行栅格化命令
pub fn execute(args: RasterizeArgs) -> Result<()> {
    let multi = super::load_geometry(&args.geometry)?;
    info!(
        "几何: {} 个部分, {} 个顶点",
        multi.parts().len(),
        multi.vertex_count()
    );

    let rect = match &args.bbox {
        Some(raw) => parse_bbox(raw)?,
        None => *multi.bbox(),
    };
    let grid = GridAxes::from_rect(&rect, args.width, args.height).context("构建采样网格失败")?;
    info!("网格: {}x{} = {} 单元", grid.nx(), grid.ny(), grid.cell_count());

    let config = FillConfig::builder()
        .strategy(if args.parallel {
            FillStrategy::Parallel
        } else {
            FillStrategy::Auto
        })
        .build();

    let start = Instant::now();
    let mask = if args.exhaustive {
        let parts = multi.parts();
        if parts.len() != 1 || !parts[0].holes().is_empty() {
            bail!("--exhaustive 只支持单环多边形");
        }
        outline_mask(parts[0].exterior().vertices(), &grid)?
    } else if multi.parts().len() == 1 {
        let prepared = PreparedPolygon::new(multi.parts()[0].clone());
        info!("边索引: {} 条边", prepared.edge_count());
        region_mask_with(&prepared, &grid, &config)
    } else {
        region_mask_with(&multi, &grid, &config)
    };
    let elapsed = start.elapsed();

    info!("填充完成: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    info!(
        "true 单元: {} / {} ({:.2}%)",
        count_true(&mask),
        mask.len(),
        fill_fraction(&mask) * 100.0
    );

    if let Some(path) = &args.output {
        match args.format.as_str() {
            "ascii" => std::fs::write(path, to_ascii(&mask))?,
            "json" => {
                let rows: Vec<Vec<bool>> = mask.rows().into_iter().map(|row| row.to_vec()).collect();
                std::fs::write(path, serde_json::to_string(&rows)?)?;
            }
            other => bail!("不支持的输出格式: {other} (支持 ascii, json)"),
        }
        info!("掩膜已写入 {}", path.display());
    }

    Ok(())
}

fn parse_bbox(raw: &str) -> Result<Rect> {
    let values: Vec<f64> = raw
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .context("解析 bbox 失败")?;
    if values.len() != 4 {
        bail!("bbox 需要 4 个数值: min_x,min_y,max_x,max_y");
    }
    Ok(Rect::new(values[0], values[1], values[2], values[3]))
}
