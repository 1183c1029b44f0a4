// crates/tm_raster/src/error.rs

//! 栅格层错误类型
//!
//! 栅格化核心是对调用方已验证输入的纯计算：这里的错误全部属于
//! 前置条件违反（空轴、非单调轴、掩膜形状不匹配），在触碰掩膜
//! 之前立即返回，不存在部分成功的状态。

use thiserror::Error;
use tm_geo::GeoError;

/// Raster 模块结果类型
pub type RasterResult<T> = Result<T, RasterError>;

/// 栅格化错误
#[derive(Error, Debug)]
pub enum RasterError {
    /// 坐标轴为空
    #[error("空坐标轴: {axis} 轴至少需要一个坐标")]
    EmptyAxis {
        /// 轴名（"x" 或 "y"）
        axis: &'static str,
    },

    /// 坐标轴含 NaN 或无穷大
    #[error("非法坐标: {axis} 轴下标 {index} 处含 NaN 或无穷大")]
    NonFiniteAxis {
        /// 轴名
        axis: &'static str,
        /// 非法值的下标
        index: usize,
    },

    /// 坐标轴非严格单调（含重复值）
    #[error("坐标轴非严格单调: {axis} 轴在下标 {index} 处")]
    NonMonotonicAxis {
        /// 轴名
        axis: &'static str,
        /// 首个破坏单调性的下标
        index: usize,
    },

    /// 网格维度为零
    #[error("网格维度为零: {axis} 轴需要至少一个采样点")]
    ZeroDimension {
        /// 轴名
        axis: &'static str,
    },

    /// 掩膜形状与网格不匹配
    #[error("掩膜形状不匹配: 期望 {expected_rows}x{expected_cols}, 实际 {actual_rows}x{actual_cols}")]
    ShapeMismatch {
        /// 期望行数（ys 长度）
        expected_rows: usize,
        /// 期望列数（xs 长度）
        expected_cols: usize,
        /// 实际行数
        actual_rows: usize,
        /// 实际列数
        actual_cols: usize,
    },

    /// 轮廓顶点数不足
    #[error("退化的轮廓: 顶点数 {count}, 至少需要 3 个")]
    DegenerateOutline {
        /// 实际顶点数
        count: usize,
    },

    /// 几何层错误（向下聚合）
    #[error("几何层错误: {0}")]
    Geo(#[from] GeoError),
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl RasterError {
    /// 创建空坐标轴错误
    #[inline]
    pub fn empty_axis(axis: &'static str) -> Self {
        Self::EmptyAxis { axis }
    }

    /// 创建非法坐标错误
    #[inline]
    pub fn non_finite_axis(axis: &'static str, index: usize) -> Self {
        Self::NonFiniteAxis { axis, index }
    }

    /// 创建非单调轴错误
    #[inline]
    pub fn non_monotonic_axis(axis: &'static str, index: usize) -> Self {
        Self::NonMonotonicAxis { axis, index }
    }

    /// 创建零维度错误
    #[inline]
    pub fn zero_dimension(axis: &'static str) -> Self {
        Self::ZeroDimension { axis }
    }

    /// 创建形状不匹配错误
    #[inline]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        }
    }

    /// 创建退化轮廓错误
    #[inline]
    pub fn degenerate_outline(count: usize) -> Self {
        Self::DegenerateOutline { count }
    }

    /// 检查掩膜形状是否与网格匹配
    #[inline]
    pub fn check_shape(expected: (usize, usize), actual: (usize, usize)) -> RasterResult<()> {
        if expected != actual {
            Err(Self::shape_mismatch(expected, actual))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
