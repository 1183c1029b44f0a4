// terramask\crates\tm_geo\src/error.rs
//! 几何层错误类型
//!
//! 所有几何体在构造时完成验证，构造成功后的谓词查询不会失败。
//!
//! # 错误分类
//!
//! - **退化几何**：环顶点数不足
//! - **非法坐标**：坐标含 NaN 或无穷大
//! - **空集合**：多部分多边形不含任何部分

use crate::geometry::Point2D;
use thiserror::Error;

/// Geo 模块结果类型
pub type GeoResult<T> = Result<T, GeoError>;

/// 几何错误
#[derive(Error, Debug)]
pub enum GeoError {
    /// 环顶点数不足
    #[error("退化的多边形环: 顶点数 {count}, 至少需要 3 个")]
    DegenerateRing {
        /// 实际顶点数
        count: usize,
    },

    /// 坐标含 NaN 或无穷大
    #[error("非法坐标: 顶点 {index} 含 NaN 或无穷大")]
    NonFiniteCoordinate {
        /// 非法顶点的下标
        index: usize,
    },

    /// 多部分多边形为空
    #[error("空的多部分多边形: 至少需要一个部分")]
    EmptyMultiPolygon,
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl GeoError {
    /// 创建退化环错误
    #[inline]
    pub fn degenerate_ring(count: usize) -> Self {
        Self::DegenerateRing { count }
    }

    /// 创建非法坐标错误
    #[inline]
    pub fn non_finite_coordinate(index: usize) -> Self {
        Self::NonFiniteCoordinate { index }
    }

    /// 验证一组环顶点：数量充足且全部有限
    #[inline]
    pub fn check_ring_vertices(vertices: &[Point2D]) -> GeoResult<()> {
        if vertices.len() < 3 {
            return Err(Self::degenerate_ring(vertices.len()));
        }
        for (index, v) in vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(Self::non_finite_coordinate(index));
            }
        }
        Ok(())
    }
}

// ============================================================================
// 测试
// ============================================================================
