// terramask\crates\tm_geo\src/polygon.rs
//! 环、多边形与多部分多边形
//!
//! 提供带孔多边形的构造与判定：
//!
//! - [`Ring`]: 隐式闭合的顶点环（构造时验证）
//! - [`Polygon`]: 一个外环加零个或多个孔环
//! - [`MultiPolygon`]: 多个多边形部分的并集
//!
//! # 判定规则
//!
//! 点的包含性采用**奇偶规则**（射线法），对环的方向不敏感，
//! 孔环无需特定的绕向。恰好落在任意环边上的点算作在区域内，
//! 判定阈值为 [`BOUNDARY_TOLERANCE`]。

use crate::error::{GeoError, GeoResult};
use crate::geometry::Point2D;
use crate::rect::Rect;
use crate::region::Region;
use serde::Serialize;

/// 边界判定容差（绝对距离）
///
/// 点到环边的距离小于该值时视为落在边界上。
pub const BOUNDARY_TOLERANCE: f64 = 1e-12;

// ============================================================================
// 自由函数 - 供环和轮廓栅格化共用
// ============================================================================

/// 奇偶规则射线法：统计从点向 +x 方向的射线与轮廓边的交点数
///
/// 轮廓视为隐式闭合（末顶点连回首顶点）。
#[must_use]
pub fn even_odd_crossings(vertices: &[Point2D], p: Point2D) -> usize {
    if vertices.is_empty() {
        return 0;
    }
    let n = vertices.len();
    let mut crossings = 0;
    let mut j = n - 1;

    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > p.y) != (vj.y > p.y))
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            crossings += 1;
        }
        j = i;
    }
    crossings
}

/// 点是否落在轮廓的某条边上（含隐式闭合边）
#[must_use]
pub fn point_on_outline(vertices: &[Point2D], p: Point2D) -> bool {
    let n = vertices.len();
    let tol2 = BOUNDARY_TOLERANCE * BOUNDARY_TOLERANCE;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        if point_segment_distance_squared(p, a, b) <= tol2 {
            return true;
        }
    }
    false
}

/// 边界包含的奇偶规则判定：点在轮廓内或恰好在轮廓边上
#[must_use]
pub fn point_in_outline(vertices: &[Point2D], p: Point2D) -> bool {
    point_on_outline(vertices, p) || even_odd_crossings(vertices, p) % 2 == 1
}

/// 线段与闭矩形是否有公共点（Liang-Barsky 裁剪）
///
/// 端点在矩形内、线段穿过矩形、以及仅触及矩形边界均算相交。
/// 退化矩形（零宽或零高）与退化线段（两端点重合）同样适用。
#[must_use]
pub fn segment_intersects_rect(a: Point2D, b: Point2D, rect: &Rect) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let clips = [
        (-dx, a.x - rect.min_x),
        (dx, rect.max_x - a.x),
        (-dy, a.y - rect.min_y),
        (dy, rect.max_y - a.y),
    ];

    for (p, q) in clips {
        if p == 0.0 {
            // 平行于该边界：整条线段在界外则不相交
            if q < 0.0 {
                return false;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return false;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return false;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }

    t0 <= t1
}

/// 点到线段的距离平方
#[inline]
pub(crate) fn point_segment_distance_squared(p: Point2D, a: Point2D, b: Point2D) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return p.distance_squared_to(&a);
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    let proj = a.lerp(&b, t);
    p.distance_squared_to(&proj)
}

// ============================================================================
// Ring - 隐式闭合的顶点环
// ============================================================================

/// 多边形环
///
/// 有序顶点序列，隐式闭合（末顶点连回首顶点）。构造时验证：
/// 至少 3 个顶点且坐标全部有限；显式重复的闭合顶点会被去掉。
#[derive(Debug, Clone, Serialize)]
pub struct Ring {
    vertices: Vec<Point2D>,
    bbox: Rect,
}

impl Ring {
    /// 创建新环
    pub fn new(mut vertices: Vec<Point2D>) -> GeoResult<Self> {
        if vertices.len() >= 2 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        GeoError::check_ring_vertices(&vertices)?;
        let bbox = Rect::of_points(&vertices)
            .ok_or_else(|| GeoError::degenerate_ring(vertices.len()))?;
        Ok(Self { vertices, bbox })
    }

    /// 顶点序列（不含重复的闭合顶点）
    #[must_use]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// 顶点数
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 环的包围盒
    #[must_use]
    pub fn bbox(&self) -> &Rect {
        &self.bbox
    }

    /// 遍历全部边（含闭合边）
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// 射线法交点计数
    #[must_use]
    pub fn crossings(&self, p: Point2D) -> usize {
        even_odd_crossings(&self.vertices, p)
    }

    /// 点是否落在环边上
    #[must_use]
    pub fn point_on_boundary(&self, p: Point2D) -> bool {
        point_on_outline(&self.vertices, p)
    }

    /// 有向面积（鞋带公式，逆时针为正）
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            sum += a.cross(&b);
        }
        sum / 2.0
    }
}

// ============================================================================
// Polygon - 外环加孔环
// ============================================================================

/// 带孔多边形
///
/// 一个外环与零个或多个孔环。奇偶规则天然处理孔：
/// 落在孔内的点相对全部环的交点数为偶数。
#[derive(Debug, Clone, Serialize)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
    bbox: Rect,
}

impl Polygon {
    /// 从外环和孔环创建多边形
    #[must_use]
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        let bbox = *exterior.bbox();
        Self {
            exterior,
            holes,
            bbox,
        }
    }

    /// 从顶点序列创建无孔多边形
    pub fn from_vertices(vertices: Vec<Point2D>) -> GeoResult<Self> {
        Ok(Self::new(Ring::new(vertices)?, Vec::new()))
    }

    /// 外环
    #[must_use]
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// 孔环
    #[must_use]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// 遍历全部环（外环在前）
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// 多边形包围盒（即外环包围盒）
    #[must_use]
    pub fn bbox(&self) -> &Rect {
        &self.bbox
    }

    /// 全部环的顶点总数
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rings().map(Ring::vertex_count).sum()
    }

    /// 任意环边与闭矩形是否有公共点
    fn any_edge_intersects(&self, rect: &Rect) -> bool {
        self.rings()
            .any(|ring| ring.edges().any(|(a, b)| segment_intersects_rect(a, b, rect)))
    }
}

impl Region for Polygon {
    fn contains_point(&self, p: Point2D) -> bool {
        if !self.bbox.contains_point(&p) {
            return false;
        }
        if self.rings().any(|ring| ring.point_on_boundary(p)) {
            return true;
        }
        let crossings: usize = self.rings().map(|ring| ring.crossings(p)).sum();
        crossings % 2 == 1
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        if !self.bbox.contains_rect(rect) {
            return false;
        }
        // 没有环边进入矩形时，矩形内部的奇偶性处处与角点一致
        if self.any_edge_intersects(rect) {
            return false;
        }
        rect.corners().iter().all(|c| self.contains_point(*c))
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        if !self.bbox.intersects(rect) {
            return false;
        }
        if rect.corners().iter().any(|c| self.contains_point(*c)) {
            return true;
        }
        self.any_edge_intersects(rect)
    }
}

// ============================================================================
// MultiPolygon - 多部分多边形
// ============================================================================

/// 多部分多边形
///
/// 各部分的并集。`contains_rect` 要求矩形被**单个**部分包含，
/// 横跨两个相邻部分的矩形会保守地返回 `false`（细分层会继续递归）。
#[derive(Debug, Clone, Serialize)]
pub struct MultiPolygon {
    parts: Vec<Polygon>,
    bbox: Rect,
}

impl MultiPolygon {
    /// 从多边形部分创建
    pub fn new(parts: Vec<Polygon>) -> GeoResult<Self> {
        let mut iter = parts.iter();
        let first = iter.next().ok_or(GeoError::EmptyMultiPolygon)?;
        let bbox = iter.fold(*first.bbox(), |acc, p| acc.merge(p.bbox()));
        Ok(Self { parts, bbox })
    }

    /// 多边形部分
    #[must_use]
    pub fn parts(&self) -> &[Polygon] {
        &self.parts
    }

    /// 整体包围盒
    #[must_use]
    pub fn bbox(&self) -> &Rect {
        &self.bbox
    }

    /// 全部部分的顶点总数
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(Polygon::vertex_count).sum()
    }
}

impl Region for MultiPolygon {
    fn contains_point(&self, p: Point2D) -> bool {
        self.bbox.contains_point(&p) && self.parts.iter().any(|part| part.contains_point(p))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        self.bbox.contains_rect(rect) && self.parts.iter().any(|part| part.contains_rect(rect))
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        self.bbox.intersects(rect) && self.parts.iter().any(|part| part.intersects_rect(rect))
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::from_vertices(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ])
        .unwrap()
    }

    fn square_with_hole() -> Polygon {
        let exterior = Ring::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ])
        .unwrap();
        let hole = Ring::new(vec![
            Point2D::new(4.0, 4.0),
            Point2D::new(6.0, 4.0),
            Point2D::new(6.0, 6.0),
            Point2D::new(4.0, 6.0),
        ])
        .unwrap();
        Polygon::new(exterior, vec![hole])
    }

    #[test]
    fn test_ring_rejects_degenerate() {
        let err = Ring::new(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]).unwrap_err();
        assert!(matches!(err, GeoError::DegenerateRing { count: 2 }));
    }

    #[test]
    fn test_ring_drops_closing_vertex() {
        let ring = Ring::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(ring.vertex_count(), 3);
    }

    #[test]
    fn test_ring_signed_area() {
        let ccw = Ring::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
        ])
        .unwrap();
        assert!((ccw.signed_area() - 4.0).abs() < 1e-10);

        let cw = Ring::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 2.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(2.0, 0.0),
        ])
        .unwrap();
        assert!((cw.signed_area() + 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_in_polygon_triangle() {
        let triangle = Polygon::from_vertices(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(1.0, 2.0),
        ])
        .unwrap();
        assert!(triangle.contains_point(Point2D::new(1.0, 0.5)));
        assert!(!triangle.contains_point(Point2D::new(3.0, 0.0)));
    }

    #[test]
    fn test_point_in_polygon_concave() {
        // L 形多边形
        let poly = Polygon::from_vertices(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(2.0, 4.0),
            Point2D::new(0.0, 4.0),
        ])
        .unwrap();
        assert!(poly.contains_point(Point2D::new(1.0, 3.0)));
        assert!(poly.contains_point(Point2D::new(3.0, 1.0)));
        assert!(!poly.contains_point(Point2D::new(3.0, 3.0)));
    }

    #[test]
    fn test_boundary_point_counts_as_inside() {
        let square = unit_square();
        assert!(square.contains_point(Point2D::new(0.5, 0.0)));
        assert!(square.contains_point(Point2D::new(0.0, 0.0)));
        assert!(square.contains_point(Point2D::new(1.0, 1.0)));
    }

    #[test]
    fn test_polygon_with_hole() {
        let poly = square_with_hole();
        assert!(poly.contains_point(Point2D::new(2.0, 2.0)));
        assert!(!poly.contains_point(Point2D::new(5.0, 5.0)));
        // 孔边界属于区域边界，算在内
        assert!(poly.contains_point(Point2D::new(4.0, 5.0)));
    }

    #[test]
    fn test_segment_intersects_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        // 穿过
        assert!(segment_intersects_rect(
            Point2D::new(-5.0, 5.0),
            Point2D::new(15.0, 5.0),
            &rect
        ));
        // 完全在内
        assert!(segment_intersects_rect(
            Point2D::new(2.0, 2.0),
            Point2D::new(8.0, 8.0),
            &rect
        ));
        // 触边
        assert!(segment_intersects_rect(
            Point2D::new(-5.0, 10.0),
            Point2D::new(15.0, 10.0),
            &rect
        ));
        // 完全在外
        assert!(!segment_intersects_rect(
            Point2D::new(-5.0, 11.0),
            Point2D::new(15.0, 11.0),
            &rect
        ));
        // 斜向错过角点
        assert!(!segment_intersects_rect(
            Point2D::new(11.0, 5.0),
            Point2D::new(5.0, 11.0),
            &rect
        ));
    }

    #[test]
    fn test_segment_intersects_degenerate_rect() {
        let line = Rect::new(0.0, 5.0, 10.0, 5.0);
        assert!(segment_intersects_rect(
            Point2D::new(5.0, 0.0),
            Point2D::new(5.0, 10.0),
            &line
        ));
        assert!(!segment_intersects_rect(
            Point2D::new(5.0, 6.0),
            Point2D::new(5.0, 10.0),
            &line
        ));
    }

    #[test]
    fn test_contains_rect() {
        let poly = unit_square();
        assert!(poly.contains_rect(&Rect::new(0.25, 0.25, 0.75, 0.75)));
        assert!(!poly.contains_rect(&Rect::new(0.5, 0.5, 1.5, 1.5)));
        assert!(!poly.contains_rect(&Rect::new(2.0, 2.0, 3.0, 3.0)));
    }

    #[test]
    fn test_contains_rect_blocked_by_hole() {
        let poly = square_with_hole();
        // 不含孔的子矩形
        assert!(poly.contains_rect(&Rect::new(1.0, 1.0, 3.0, 3.0)));
        // 覆盖孔的矩形不被包含
        assert!(!poly.contains_rect(&Rect::new(3.0, 3.0, 7.0, 7.0)));
        // 恰好是孔的矩形
        assert!(!poly.contains_rect(&Rect::new(4.5, 4.5, 5.5, 5.5)));
    }

    #[test]
    fn test_intersects_rect() {
        let poly = unit_square();
        assert!(poly.intersects_rect(&Rect::new(0.5, 0.5, 1.5, 1.5)));
        assert!(poly.intersects_rect(&Rect::new(-1.0, -1.0, 2.0, 2.0)));
        assert!(!poly.intersects_rect(&Rect::new(2.0, 2.0, 3.0, 3.0)));
        // 仅共享边界
        assert!(poly.intersects_rect(&Rect::new(1.0, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn test_rect_inside_hole_is_disjoint() {
        let poly = square_with_hole();
        assert!(!poly.intersects_rect(&Rect::new(4.5, 4.5, 5.5, 5.5)));
    }

    #[test]
    fn test_contains_implies_intersects() {
        let poly = square_with_hole();
        let rects = [
            Rect::new(1.0, 1.0, 3.0, 3.0),
            Rect::new(3.0, 3.0, 7.0, 7.0),
            Rect::new(-1.0, -1.0, 11.0, 11.0),
            Rect::new(20.0, 20.0, 30.0, 30.0),
            Rect::new(2.0, 2.0, 2.0, 2.0),
        ];
        for rect in &rects {
            if poly.contains_rect(rect) {
                assert!(poly.intersects_rect(rect));
            }
        }
    }

    #[test]
    fn test_multipolygon() {
        let left = Polygon::from_vertices(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ])
        .unwrap();
        let right = Polygon::from_vertices(vec![
            Point2D::new(5.0, 0.0),
            Point2D::new(6.0, 0.0),
            Point2D::new(6.0, 1.0),
            Point2D::new(5.0, 1.0),
        ])
        .unwrap();
        let multi = MultiPolygon::new(vec![left, right]).unwrap();

        assert!(multi.contains_point(Point2D::new(0.5, 0.5)));
        assert!(multi.contains_point(Point2D::new(5.5, 0.5)));
        assert!(!multi.contains_point(Point2D::new(3.0, 0.5)));

        assert!(multi.contains_rect(&Rect::new(5.25, 0.25, 5.75, 0.75)));
        assert!(!multi.contains_rect(&Rect::new(0.5, 0.5, 5.5, 0.75)));
        assert!(multi.intersects_rect(&Rect::new(0.5, 0.5, 5.5, 0.75)));
    }

    #[test]
    fn test_multipolygon_rejects_empty() {
        let err = MultiPolygon::new(Vec::new()).unwrap_err();
        assert!(matches!(err, GeoError::EmptyMultiPolygon));
    }

    #[test]
    fn test_point_in_outline_matches_ring() {
        let vertices = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(2.0, 4.0),
            Point2D::new(0.0, 4.0),
        ];
        let poly = Polygon::from_vertices(vertices.clone()).unwrap();
        for &(x, y) in &[
            (1.0, 1.0),
            (3.0, 1.0),
            (3.0, 3.0),
            (1.0, 3.0),
            (0.0, 0.0),
            (5.0, 5.0),
            (2.0, 2.0),
        ] {
            let p = Point2D::new(x, y);
            assert_eq!(
                point_in_outline(&vertices, p),
                poly.contains_point(p),
                "({x}, {y})"
            );
        }
    }
}
