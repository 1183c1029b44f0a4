// terramask\crates\tm_geo\src/geometry.rs
//! 几何类型定义
//!
//! 提供栅格化流水线统一使用的 2D 点类型。
//!
//! 坐标单位不作约定：既可以是投影坐标（米），也可以是经纬度（度），
//! 网格轴与几何体保持一致即可。

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// 2D 点 - 用于平面几何和地理坐标
///
/// # 示例
///
/// ```
/// use tm_geo::geometry::Point2D;
///
/// let p1 = Point2D::new(0.0, 0.0);
/// let p2 = Point2D::new(3.0, 4.0);
/// let dist = p1.distance_to(&p2); // 5.0
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X坐标（或经度）
    pub x: f64,
    /// Y坐标（或纬度）
    pub y: f64,
}

impl Point2D {
    /// 零点常量
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// 创建新的2D点
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 从经纬度创建（lon, lat）
    #[inline]
    #[must_use]
    pub const fn from_lonlat(lon: f64, lat: f64) -> Self {
        Self { x: lon, y: lat }
    }

    /// 点积
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 叉积（返回标量，即Z分量）
    #[inline]
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// 向量长度
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// 向量长度的平方
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// 计算到另一个点的欧几里得距离
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// 计算到另一个点的距离的平方
    #[inline]
    #[must_use]
    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// 线性插值
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// 标量乘法
    #[inline]
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// 判断是否为有限数
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// 分量最小值
    #[inline]
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// 分量最大值
    #[inline]
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
}

// ============================================================================
// 运算符实现
// ============================================================================

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Point2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Mul<Point2D> for f64 {
    type Output = Point2D;

    #[inline]
    fn mul(self, point: Point2D) -> Point2D {
        point.scale(self)
    }
}

// ============================================================================
// 转换实现
// ============================================================================

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_new() {
        let p = Point2D::new(1.0, 2.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance_to(&p2) - 5.0).abs() < 1e-10);
        assert!((p1.distance_squared_to(&p2) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_dot_cross() {
        let p1 = Point2D::new(1.0, 0.0);
        let p2 = Point2D::new(0.0, 1.0);
        assert!((p1.dot(&p2)).abs() < 1e-10);
        assert!((p1.cross(&p2) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_ops() {
        let p1 = Point2D::new(1.0, 2.0);
        let p2 = Point2D::new(3.0, 4.0);
        let sum = p1 + p2;
        assert!((sum.x - 4.0).abs() < 1e-10);
        assert!((sum.y - 6.0).abs() < 1e-10);

        let diff = p2 - p1;
        assert!((diff.x - 2.0).abs() < 1e-10);

        let scaled = p1 * 2.0;
        assert!((scaled.y - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_lerp() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(10.0, 20.0);
        let mid = p1.lerp(&p2, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-10);
        assert!((mid.y - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_is_finite() {
        assert!(Point2D::new(1.0, 2.0).is_finite());
        assert!(!Point2D::new(f64::NAN, 2.0).is_finite());
        assert!(!Point2D::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_from() {
        let p1: Point2D = (1.0, 2.0).into();
        assert!((p1.x - 1.0).abs() < 1e-10);
        assert!((p1.y - 2.0).abs() < 1e-10);

        let p2: Point2D = [3.0, 4.0].into();
        assert!((p2.x - 3.0).abs() < 1e-10);
        assert!((p2.y - 4.0).abs() < 1e-10);
    }
}
