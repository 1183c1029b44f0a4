// terramask\crates\tm_geo\src/rect.rs
//! 轴对齐矩形
//!
//! 递归细分栅格化的核心派生数据：矩形总是由坐标轴子区间计算得到，
//! 从不独立于坐标数组存储。零宽或零高的退化矩形是合法值。

use crate::geometry::Point2D;
use serde::{Deserialize, Serialize};

/// 轴对齐矩形
///
/// 构造时自动规范化，保证 `min_x <= max_x` 且 `min_y <= max_y`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// 最小 x
    pub min_x: f64,
    /// 最小 y
    pub min_y: f64,
    /// 最大 x
    pub max_x: f64,
    /// 最大 y
    pub max_y: f64,
}

impl Rect {
    /// 创建新的矩形（自动规范化角点次序）
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// 从两个角点创建
    #[must_use]
    pub fn from_corners(p1: Point2D, p2: Point2D) -> Self {
        Self::new(p1.x, p1.y, p2.x, p2.y)
    }

    /// 计算一组点的包围盒
    ///
    /// 空集合返回 `None`。
    #[must_use]
    pub fn of_points(points: &[Point2D]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self::from_corners(min, max))
    }

    /// 检查点是否在矩形内（含边界）
    #[must_use]
    pub fn contains_point(&self, point: &Point2D) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// 检查另一个矩形是否完全在本矩形内（含边界）
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// 检查两个矩形是否相交（含共享边界）
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// 合并两个矩形
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// 扩展矩形
    #[must_use]
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// 计算宽度
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// 计算高度
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// 计算面积
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// 计算中心点
    #[must_use]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// 是否为退化矩形（零宽或零高）
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// 四个角点（左下、右下、右上、左上）
    #[must_use]
    pub fn corners(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.min_x, self.min_y),
            Point2D::new(self.max_x, self.min_y),
            Point2D::new(self.max_x, self.max_y),
            Point2D::new(self.min_x, self.max_y),
        ]
    }
}

// ============================================================================
// 测试
// ============================================================================
