// crates/tm_raster/src/contour.rs

//! 轮廓逐点栅格化（兜底基线）
//!
//! 对缺少内外拓扑的裸顶点序列（开或闭的轮廓线），逐个网格点
//! 做奇偶规则判定，轮廓视为隐式闭合。开销 O(H·W·V)，只适合
//! 小网格或轮廓线，不是性能路径——有完整区域语义的几何请走
//! `recursive` 模块。
//!
//! 边界包含约定与几何层一致：恰好落在轮廓边上的网格点算在内。

use crate::error::{RasterError, RasterResult};
use crate::grid::GridAxes;
use crate::mask::{new_mask, Mask};
use tm_geo::polygon::point_in_outline;
use tm_geo::{GeoError, Point2D, Rect};

/// 对轮廓线做逐点栅格化
///
/// `outline` 是有序顶点序列（隐式闭合），至少 3 个顶点。
/// 返回与网格同形状的掩膜：单元为 `true` 当且仅当对应采样点
/// 在轮廓内或恰好在轮廓边上。
///
/// # 示例
///
/// ```
/// use tm_geo::Point2D;
/// use tm_raster::contour::outline_mask;
/// use tm_raster::grid::GridAxes;
///
/// let outline = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(2.0, 0.0),
///     Point2D::new(2.0, 2.0),
///     Point2D::new(0.0, 2.0),
/// ];
/// let grid = GridAxes::new(vec![-1.0, 1.0, 3.0], vec![-1.0, 1.0, 3.0]).unwrap();
/// let mask = outline_mask(&outline, &grid).unwrap();
/// assert!(mask[[1, 1]]);
/// assert!(!mask[[0, 0]]);
/// ```
pub fn outline_mask(outline: &[Point2D], grid: &GridAxes) -> RasterResult<Mask> {
    if outline.len() < 3 {
        return Err(RasterError::degenerate_outline(outline.len()));
    }
    for (index, p) in outline.iter().enumerate() {
        if !p.is_finite() {
            return Err(GeoError::non_finite_coordinate(index).into());
        }
    }
    let bbox = Rect::of_points(outline)
        .ok_or_else(|| RasterError::degenerate_outline(outline.len()))?;

    let mut mask = new_mask(grid.ny(), grid.nx());
    for (i, &y) in grid.ys().iter().enumerate() {
        for (j, &x) in grid.xs().iter().enumerate() {
            let p = Point2D::new(x, y);
            // 包围盒剔除
            if !bbox.contains_point(&p) {
                continue;
            }
            if point_in_outline(outline, p) {
                mask[[i, j]] = true;
            }
        }
    }
    Ok(mask)
}

// ============================================================================
// 测试
// ============================================================================
