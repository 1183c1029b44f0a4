// crates/tm_raster/src/parallel.rs

//! 并行掩膜填充
//!
//! 递归细分的各兄弟子调用写入互不重叠的掩膜子视图，天然适合
//! 并行：只在递归树的顶部若干层做 `rayon::join` 扇出，剩余
//! 层级退回串行填充，输出与串行版本逐单元一致。
//!
//! 小网格的任务切分开销超过收益，直接串行；`Auto` 按单元数
//! 阈值决定。

use crate::grid::{span_rect, GridAxes};
use crate::mask::{new_mask, Mask};
use crate::recursive::fill_recursive;
use ndarray::{ArrayViewMut2, Axis};
use tm_geo::{Point2D, Region};

/// 填充策略
///
/// - `Sequential`: 完全串行执行，适用于小网格
/// - `Parallel`: 顶部若干层 `rayon::join` 扇出
/// - `Auto`: 根据单元数自动选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStrategy {
    /// 串行执行
    Sequential,
    /// 并行扇出
    Parallel,
    /// 自动选择（根据网格规模）
    #[default]
    Auto,
}

/// 填充配置
#[derive(Debug, Clone)]
pub struct FillConfig {
    /// 填充策略
    pub strategy: FillStrategy,
    /// 最小并行单元数（`Auto` 低于此值使用串行）
    pub min_parallel_cells: usize,
    /// 并行扇出的递归层数，之后退回串行
    pub parallel_depth: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            strategy: FillStrategy::Auto,
            min_parallel_cells: 4096,
            parallel_depth: 4,
        }
    }
}

impl FillConfig {
    /// 创建构建器
    pub fn builder() -> FillConfigBuilder {
        FillConfigBuilder::default()
    }
}

/// 配置构建器
#[derive(Default)]
pub struct FillConfigBuilder {
    config: FillConfig,
}

impl FillConfigBuilder {
    /// 设置填充策略
    #[must_use]
    pub fn strategy(mut self, strategy: FillStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// 设置最小并行单元数
    #[must_use]
    pub fn min_parallel_cells(mut self, cells: usize) -> Self {
        self.config.min_parallel_cells = cells;
        self
    }

    /// 设置并行扇出层数
    #[must_use]
    pub fn parallel_depth(mut self, depth: usize) -> Self {
        self.config.parallel_depth = depth;
        self
    }

    /// 完成构建
    #[must_use]
    pub fn build(self) -> FillConfig {
        self.config
    }
}

/// 按配置栅格化区域
///
/// 输出与 [`crate::recursive::region_mask`] 逐单元一致，
/// 策略只影响执行方式。
#[must_use]
pub fn region_mask_with<R: Region + Sync>(
    region: &R,
    grid: &GridAxes,
    config: &FillConfig,
) -> Mask {
    let cells = grid.cell_count();
    let use_parallel = match config.strategy {
        FillStrategy::Sequential => false,
        FillStrategy::Parallel => true,
        FillStrategy::Auto => cells >= config.min_parallel_cells,
    };
    tracing::debug!(cells, use_parallel, "选择掩膜填充策略");

    let mut mask = new_mask(grid.ny(), grid.nx());
    if use_parallel {
        fill_parallel(
            region,
            grid.xs(),
            grid.ys(),
            mask.view_mut(),
            config.parallel_depth,
        );
    } else {
        fill_recursive(region, grid.xs(), grid.ys(), mask.view_mut());
    }
    mask
}

/// 顶部 `depth` 层并行扇出的递归填充
fn fill_parallel<R: Region + Sync>(
    region: &R,
    xs: &[f64],
    ys: &[f64],
    mut mask: ArrayViewMut2<'_, bool>,
    depth: usize,
) {
    if depth == 0 {
        fill_recursive(region, xs, ys, mask);
        return;
    }

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
        rayon::join(
            || fill_parallel(region, &xs[..half], ys, left, depth - 1),
            || fill_parallel(region, &xs[half..], ys, right, depth - 1),
        );
    } else if nx == 1 {
        let half = ny / 2;
        let (top, bottom) = mask.split_at(Axis(0), half);
        rayon::join(
            || fill_parallel(region, xs, &ys[..half], top, depth - 1),
            || fill_parallel(region, xs, &ys[half..], bottom, depth - 1),
        );
    } else {
        let half_x = nx / 2;
        let half_y = ny / 2;
        let (top, bottom) = mask.split_at(Axis(0), half_y);
        let (top_left, top_right) = top.split_at(Axis(1), half_x);
        let (bottom_left, bottom_right) = bottom.split_at(Axis(1), half_x);

        rayon::join(
            || {
                rayon::join(
                    || fill_parallel(region, &xs[..half_x], &ys[..half_y], top_left, depth - 1),
                    || fill_parallel(region, &xs[half_x..], &ys[..half_y], top_right, depth - 1),
                )
            },
            || {
                rayon::join(
                    || fill_parallel(region, &xs[..half_x], &ys[half_y..], bottom_left, depth - 1),
                    || {
                        fill_parallel(
                            region,
                            &xs[half_x..],
                            &ys[half_y..],
                            bottom_right,
                            depth - 1,
                        )
                    },
                )
            },
        );
    }
}

// ============================================================================
// 测试
// ============================================================================
