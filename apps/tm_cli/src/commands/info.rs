// terramask\apps\tm_cli\src\commands\info.rs

//! 几何信息命令
//!
//! 打印几何文件的部分数、顶点数、包围盒和各部分面积。

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// 几何信息参数
#[derive(Args)]
pub struct InfoArgs {
    /// 几何文件路径
    #[arg(short, long)]
    pub geometry: PathBuf,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let multi = super::load_geometry(&args.geometry)?;

    info!("=== 几何信息 ===");
    info!("部分数: {}", multi.parts().len());
    info!("顶点总数: {}", multi.vertex_count());

    let bbox = multi.bbox();
    info!(
        "包围盒: x [{:.6}, {:.6}], y [{:.6}, {:.6}]",
        bbox.min_x, bbox.max_x, bbox.min_y, bbox.max_y
    );

    for (index, part) in multi.parts().iter().enumerate() {
        let hole_area: f64 = part.holes().iter().map(|h| h.signed_area().abs()).sum();
        let area = part.exterior().signed_area().abs() - hole_area;
        info!(
            "部分 {}: 外环 {} 顶点, {} 个孔, 面积 {:.6}",
            index,
            part.exterior().vertex_count(),
            part.holes().len(),
            area
        );
    }

    Ok(())
}
