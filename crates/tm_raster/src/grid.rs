// crates/tm_raster/src/grid.rs

//! 采样网格坐标轴
//!
//! 网格由两条严格单调的一维坐标序列定义：`xs`（长度 = 列数）与
//! `ys`（长度 = 行数）。坐标是采样点位置，不必等距。
//! 每条轴可以递增也可以递减（行 0 在北侧的地理栅格 y 轴递减）。
//!
//! [`span_rect`] 由坐标子区间派生包围矩形，是递归细分的
//! 唯一几何输入。

use crate::error::{RasterError, RasterResult};
use tm_geo::Rect;

/// 采样网格坐标轴
///
/// 构造时验证两条轴非空、坐标有限、严格单调（方向各轴独立）。
///
/// # 示例
///
/// ```
/// use tm_raster::grid::GridAxes;
///
/// let grid = GridAxes::new(
///     vec![-2.0, -1.0, 0.0, 1.0, 2.0],
///     vec![-2.0, -1.0, 0.0, 1.0, 2.0],
/// ).unwrap();
/// assert_eq!(grid.nx(), 5);
/// assert_eq!(grid.ny(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct GridAxes {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl GridAxes {
    /// 从坐标序列创建网格
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> RasterResult<Self> {
        check_axis("x", &xs)?;
        check_axis("y", &ys)?;
        Ok(Self { xs, ys })
    }

    /// 从包围矩形和像素数等距构建网格
    ///
    /// x 轴从西向东递增，y 轴从北向南递减（行 0 在北侧），
    /// 与地理栅格的常规行序一致。
    pub fn from_rect(rect: &Rect, nx: usize, ny: usize) -> RasterResult<Self> {
        if nx == 0 {
            return Err(RasterError::zero_dimension("x"));
        }
        if ny == 0 {
            return Err(RasterError::zero_dimension("y"));
        }
        let xs = linspace(rect.min_x, rect.max_x, nx);
        let ys = linspace(rect.max_y, rect.min_y, ny);
        Self::new(xs, ys)
    }

    /// 列数
    #[must_use]
    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    /// 行数
    #[must_use]
    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    /// 网格单元总数
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.nx() * self.ny()
    }

    /// x 坐标序列
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// y 坐标序列
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// 整个网格的包围矩形
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        span_rect(&self.xs, &self.ys)
    }

    /// 指定行列处的采样点
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> tm_geo::Point2D {
        tm_geo::Point2D::new(self.xs[col], self.ys[row])
    }
}

/// 坐标子区间张成的包围矩形
///
/// 覆盖 `[首坐标, 末坐标] × [首坐标, 末坐标]`，对递减轴自动规范化。
/// 单坐标子区间退化为零宽/零高矩形，合法。
///
/// # Panics
///
/// 任一子区间为空属于调用方契约违反，立即断言失败。
#[must_use]
pub fn span_rect(xs: &[f64], ys: &[f64]) -> Rect {
    assert!(
        !xs.is_empty() && !ys.is_empty(),
        "span_rect 需要非空坐标子区间"
    );
    Rect::new(xs[0], ys[0], xs[xs.len() - 1], ys[ys.len() - 1])
}

/// 等距坐标序列（端点精确落在 `start` 和 `end` 上）
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// 验证坐标轴：非空、坐标有限、严格单调
fn check_axis(axis: &'static str, values: &[f64]) -> RasterResult<()> {
    if values.is_empty() {
        return Err(RasterError::empty_axis(axis));
    }
    for (index, v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(RasterError::non_finite_axis(axis, index));
        }
    }
    if values.len() == 1 {
        return Ok(());
    }
    let ascending = values[1] > values[0];
    for index in 1..values.len() {
        let ok = if ascending {
            values[index] > values[index - 1]
        } else {
            values[index] < values[index - 1]
        };
        if !ok {
            return Err(RasterError::non_monotonic_axis(axis, index));
        }
    }
    Ok(())
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v.len(), 5);
        assert!((v[0] - 0.0).abs() < 1e-15);
        assert!((v[1] - 0.25).abs() < 1e-15);
        assert!((v[4] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_linspace_descending() {
        let v = linspace(10.0, 0.0, 3);
        assert!((v[0] - 10.0).abs() < 1e-15);
        assert!((v[1] - 5.0).abs() < 1e-15);
        assert!((v[2] - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_linspace_single() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn test_grid_axes_new() {
        let grid = GridAxes::new(vec![0.0, 1.0, 2.0], vec![5.0, 4.0]).unwrap();
        assert_eq!(grid.nx(), 3);
        assert_eq!(grid.ny(), 2);
        assert_eq!(grid.cell_count(), 6);
    }

    #[test]
    fn test_grid_axes_rejects_empty() {
        let err = GridAxes::new(vec![], vec![0.0]).unwrap_err();
        assert!(matches!(err, RasterError::EmptyAxis { axis: "x" }));
    }

    #[test]
    fn test_grid_axes_rejects_duplicates() {
        let err = GridAxes::new(vec![0.0, 1.0, 1.0], vec![0.0]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::NonMonotonicAxis { axis: "x", index: 2 }
        ));
    }

    #[test]
    fn test_grid_axes_rejects_direction_change() {
        let err = GridAxes::new(vec![0.0], vec![0.0, 2.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::NonMonotonicAxis { axis: "y", index: 2 }
        ));
    }

    #[test]
    fn test_grid_axes_rejects_nan() {
        let err = GridAxes::new(vec![0.0, f64::NAN], vec![0.0]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::NonFiniteAxis { axis: "x", index: 1 }
        ));
    }

    #[test]
    fn test_grid_axes_accepts_descending() {
        let grid = GridAxes::new(vec![0.0, 1.0], vec![10.0, 5.0, 0.0]).unwrap();
        assert_eq!(grid.ny(), 3);
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 20.0);
        let grid = GridAxes::from_rect(&rect, 11, 5).unwrap();

        assert_eq!(grid.nx(), 11);
        assert_eq!(grid.ny(), 5);
        // x 递增
        assert!((grid.xs()[0] - 0.0).abs() < 1e-15);
        assert!((grid.xs()[10] - 10.0).abs() < 1e-15);
        // y 递减（行 0 在北侧）
        assert!((grid.ys()[0] - 20.0).abs() < 1e-15);
        assert!((grid.ys()[4] - 0.0).abs() < 1e-15);
    }

    #[test]
    fn test_from_rect_zero_dimension() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(matches!(
            GridAxes::from_rect(&rect, 0, 5).unwrap_err(),
            RasterError::ZeroDimension { axis: "x" }
        ));
        assert!(matches!(
            GridAxes::from_rect(&rect, 5, 0).unwrap_err(),
            RasterError::ZeroDimension { axis: "y" }
        ));
    }

    #[test]
    fn test_bounding_rect() {
        let grid = GridAxes::new(vec![0.0, 1.0, 2.0], vec![10.0, 5.0, 0.0]).unwrap();
        assert_eq!(grid.bounding_rect(), Rect::new(0.0, 0.0, 2.0, 10.0));
    }

    #[test]
    fn test_span_rect_sub_range() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [9.0, 8.0];
        assert_eq!(span_rect(&xs, &ys), Rect::new(1.0, 8.0, 3.0, 9.0));
    }

    #[test]
    fn test_span_rect_degenerate() {
        let rect = span_rect(&[5.0], &[3.0]);
        assert!(rect.is_degenerate());
        assert!((rect.min_x - 5.0).abs() < 1e-15);
        assert!((rect.max_x - 5.0).abs() < 1e-15);
    }

    #[test]
    fn test_grid_point() {
        let grid = GridAxes::new(vec![0.0, 1.0], vec![10.0, 20.0]).unwrap();
        let p = grid.point(1, 0);
        assert!((p.x - 0.0).abs() < 1e-15);
        assert!((p.y - 20.0).abs() < 1e-15);
    }
}
