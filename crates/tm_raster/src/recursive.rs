// crates/tm_raster/src/recursive.rs

//! 递归细分栅格化
//!
//! 核心算法：对网格的包围矩形做三分类判定——
//!
//! 1. 区域与矩形不相交 → 整块置 `false`；
//! 2. 区域完全包含矩形 → 整块置 `true`；
//! 3. 部分重叠 → 对半细分递归，1×1 时退化为单点判定。
//!
//! 区域边界不穿过某个子矩形时，整个子块用 O(1) 次几何判定
//! 解决；最坏情况（边界穿过每个子矩形直到 1×1）退化为逐点
//! 判定的开销。平滑边界通常只触及细分树中 O(√(H·W)) 个叶子。
//!
//! 细分始终用向下取整的对半切分（`W=5 → 2+3`），每次递归
//! 严格缩小 `H+W`，保证终止。四个象限写入同一掩膜的互不重叠
//! 子视图，由 [`ndarray::ArrayViewMut2::split_at`] 在类型层面
//! 保证无别名。

use crate::error::{RasterError, RasterResult};
use crate::grid::{span_rect, GridAxes};
use crate::mask::{new_mask, Mask};
use ndarray::{ArrayViewMut2, Axis};
use tm_geo::{Point2D, Region};

/// 对整个网格栅格化区域，返回新分配的掩膜
///
/// 单元 `[i, j]` 为 `true` 当且仅当采样点 `(xs[j], ys[i])`
/// 在区域内（边界算在内，与 [`Region`] 的约定一致）。
///
/// # 示例
///
/// ```
/// use tm_geo::Rect;
/// use tm_raster::grid::GridAxes;
/// use tm_raster::recursive::region_mask;
///
/// let region = Rect::new(0.0, 0.0, 1.0, 1.0);
/// let grid = GridAxes::new(vec![0.5, 2.0], vec![0.5, 2.0]).unwrap();
/// let mask = region_mask(&region, &grid);
/// assert!(mask[[0, 0]]);
/// assert!(!mask[[1, 1]]);
/// ```
#[must_use]
pub fn region_mask<R: Region>(region: &R, grid: &GridAxes) -> Mask {
    let mut mask = new_mask(grid.ny(), grid.nx());
    fill_recursive(region, grid.xs(), grid.ys(), mask.view_mut());
    mask
}

/// 向调用方持有的掩膜视图中填充区域
///
/// 掩膜形状必须等于 `(grid.ny(), grid.nx())`，否则在触碰掩膜
/// 之前返回 [`RasterError::ShapeMismatch`]。成功返回时每个单元
/// 都被写过恰好一次；不存在部分成功的状态。
pub fn fill_region_into<R: Region>(
    region: &R,
    grid: &GridAxes,
    mask: ArrayViewMut2<'_, bool>,
) -> RasterResult<()> {
    RasterError::check_shape((grid.ny(), grid.nx()), mask.dim())?;
    fill_recursive(region, grid.xs(), grid.ys(), mask);
    Ok(())
}

/// 递归填充（内部入口，`parallel` 模块复用）
///
/// 前置条件：`mask.dim() == (ys.len(), xs.len())` 且两轴非空。
pub(crate) fn fill_recursive<R: Region>(
    region: &R,
    xs: &[f64],
    ys: &[f64],
    mut mask: ArrayViewMut2<'_, bool>,
) {
    debug_assert_eq!(mask.dim(), (ys.len(), xs.len()));

    let rect = span_rect(xs, ys);

    if !region.intersects_rect(&rect) {
        mask.fill(false);
        return;
    }
    if region.contains_rect(&rect) {
        mask.fill(true);
        return;
    }

    let (ny, nx) = mask.dim();

    if ny == 1 && nx == 1 {
        mask[[0, 0]] = region.contains_point(Point2D::new(xs[0], ys[0]));
    } else if ny == 1 {
        let half = nx / 2;
        let (left, right) = mask.split_at(Axis(1), half);
        fill_recursive(region, &xs[..half], ys, left);
        fill_recursive(region, &xs[half..], ys, right);
    } else if nx == 1 {
        let half = ny / 2;
        let (top, bottom) = mask.split_at(Axis(0), half);
        fill_recursive(region, xs, &ys[..half], top);
        fill_recursive(region, xs, &ys[half..], bottom);
    } else {
        let half_x = nx / 2;
        let half_y = ny / 2;
        let (top, bottom) = mask.split_at(Axis(0), half_y);
        let (top_left, top_right) = top.split_at(Axis(1), half_x);
        let (bottom_left, bottom_right) = bottom.split_at(Axis(1), half_x);

        fill_recursive(region, &xs[..half_x], &ys[..half_y], top_left);
        fill_recursive(region, &xs[half_x..], &ys[..half_y], top_right);
        fill_recursive(region, &xs[..half_x], &ys[half_y..], bottom_left);
        fill_recursive(region, &xs[half_x..], &ys[half_y..], bottom_right);
    }
}

// ============================================================================
// 测试
// ============================================================================
