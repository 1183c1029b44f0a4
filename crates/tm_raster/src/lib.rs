// crates/tm_raster/src/lib.rs

//! TerraMask 栅格层
//!
//! 把具备 [`tm_geo::Region`] 能力的平面区域转换为规则网格上的
//! 布尔掩膜：每个网格采样点落在区域内记 `true`，否则记 `false`。
//!
//! # 模块
//!
//! - `grid`: 采样网格坐标轴与包围矩形派生
//! - `mask`: 布尔掩膜类型与统计辅助
//! - `recursive`: 递归细分栅格化（核心算法）
//! - `parallel`: rayon 并行填充策略
//! - `contour`: 轮廓线逐点栅格化（兜底基线）
//!
//! # 示例
//!
//! ```
//! use tm_geo::prelude::*;
//! use tm_raster::prelude::*;
//!
//! let poly = Polygon::from_vertices(vec![
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(8.0, 0.0),
//!     Point2D::new(8.0, 8.0),
//!     Point2D::new(0.0, 8.0),
//! ]).unwrap();
//!
//! let grid = GridAxes::from_rect(&Rect::new(-2.0, -2.0, 10.0, 10.0), 64, 64).unwrap();
//! let mask = region_mask(&poly, &grid);
//! assert!(count_true(&mask) > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod contour;
pub mod error;
pub mod grid;
pub mod mask;
pub mod parallel;
pub mod recursive;

/// 预导入模块
pub mod prelude {
    pub use crate::contour::outline_mask;
    pub use crate::error::{RasterError, RasterResult};
    pub use crate::grid::{linspace, span_rect, GridAxes};
    pub use crate::mask::{count_true, fill_fraction, new_mask, to_ascii, Mask};
    pub use crate::parallel::{region_mask_with, FillConfig, FillStrategy};
    pub use crate::recursive::{fill_region_into, region_mask};
}

// 重导出常用类型
pub use contour::outline_mask;
pub use error::{RasterError, RasterResult};
pub use grid::{span_rect, GridAxes};
pub use mask::Mask;
pub use parallel::{region_mask_with, FillConfig, FillStrategy};
pub use recursive::{fill_region_into, region_mask};
