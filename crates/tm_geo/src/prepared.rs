// terramask\crates\tm_geo\src/prepared.rs
//! 基于 R-tree 边索引的预处理多边形
//!
//! [`PreparedPolygon`] 把多边形的全部环边装入 R-tree，
//! 矩形判定只检查包络与查询窗相交的候选边，射线法只统计
//! 包络跨过扫描线的候选边，复杂度从 O(E) 降到 O(log E + k)。
//!
//! 判定语义与 [`Polygon`] 完全一致，适合顶点很多的海岸线、
//! 行政边界等几何体反复参与栅格化的场景。

use crate::geometry::Point2D;
use crate::polygon::{
    point_segment_distance_squared, segment_intersects_rect, Polygon, BOUNDARY_TOLERANCE,
};
use crate::rect::Rect;
use crate::region::Region;
use rstar::{RTree, RTreeObject, AABB};

/// 环边条目
#[derive(Debug, Clone)]
struct EdgeEntry {
    a: Point2D,
    b: Point2D,
}

impl EdgeEntry {
    /// 射线法单边判定：边是否与从 p 向 +x 的射线相交
    #[inline]
    fn crosses_ray(&self, p: Point2D) -> bool {
        ((self.a.y > p.y) != (self.b.y > p.y))
            && p.x < (self.b.x - self.a.x) * (p.y - self.a.y) / (self.b.y - self.a.y) + self.a.x
    }
}

impl RTreeObject for EdgeEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.a.x.min(self.b.x), self.a.y.min(self.b.y)],
            [self.a.x.max(self.b.x), self.a.y.max(self.b.y)],
        )
    }
}

/// 预处理多边形
///
/// # 示例
///
/// ```
/// use tm_geo::prelude::*;
///
/// let poly = Polygon::from_vertices(vec![
///     Point2D::new(0.0, 0.0),
///     Point2D::new(4.0, 0.0),
///     Point2D::new(4.0, 4.0),
///     Point2D::new(0.0, 4.0),
/// ]).unwrap();
/// let prepared = PreparedPolygon::new(poly);
///
/// assert!(prepared.contains_point(Point2D::new(2.0, 2.0)));
/// ```
#[derive(Debug)]
pub struct PreparedPolygon {
    polygon: Polygon,
    edges: RTree<EdgeEntry>,
}

impl PreparedPolygon {
    /// 从多边形构建边索引
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        let entries: Vec<EdgeEntry> = polygon
            .rings()
            .flat_map(|ring| ring.edges())
            .map(|(a, b)| EdgeEntry { a, b })
            .collect();
        Self {
            polygon,
            edges: RTree::bulk_load(entries),
        }
    }

    /// 底层多边形
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// 索引中的边数
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.size()
    }

    /// 包络与矩形相交的候选边
    fn candidate_edges<'a>(&'a self, rect: &Rect) -> impl Iterator<Item = &'a EdgeEntry> + 'a {
        let envelope = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
        self.edges.locate_in_envelope_intersecting(&envelope)
    }

    /// 任意环边与闭矩形是否有公共点（只测候选边）
    fn any_edge_intersects(&self, rect: &Rect) -> bool {
        self.candidate_edges(rect)
            .any(|edge| segment_intersects_rect(edge.a, edge.b, rect))
    }

    /// 点是否落在某条环边上（只测点邻域内的候选边）
    fn point_on_boundary(&self, p: Point2D) -> bool {
        let tol2 = BOUNDARY_TOLERANCE * BOUNDARY_TOLERANCE;
        let probe = Rect::new(p.x, p.y, p.x, p.y).expand(BOUNDARY_TOLERANCE);
        self.candidate_edges(&probe)
            .any(|edge| point_segment_distance_squared(p, edge.a, edge.b) <= tol2)
    }
}

impl Region for PreparedPolygon {
    fn contains_point(&self, p: Point2D) -> bool {
        let bbox = self.polygon.bbox();
        if !bbox.contains_point(&p) {
            return false;
        }
        if self.point_on_boundary(p) {
            return true;
        }
        // 射线向 +x：只有包络跨过扫描线且延伸到 p 右侧的边才可能相交
        let strip = Rect::new(p.x, p.y, bbox.max_x, p.y);
        let crossings = self
            .candidate_edges(&strip)
            .filter(|edge| edge.crosses_ray(p))
            .count();
        crossings % 2 == 1
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        if !self.polygon.bbox().contains_rect(rect) {
            return false;
        }
        if self.any_edge_intersects(rect) {
            return false;
        }
        rect.corners().iter().all(|c| self.contains_point(*c))
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        if !self.polygon.bbox().intersects(rect) {
            return false;
        }
        if rect.corners().iter().any(|c| self.contains_point(*c)) {
            return true;
        }
        self.any_edge_intersects(rect)
    }
}

// ============================================================================
// 测试
// ============================================================================
