// terramask\crates\tm_geo\src/region.rs
//! 区域判定能力 trait
//!
//! 递归细分栅格化对几何后端的全部要求就是三个谓词。
//! 任何能回答这三个问题的类型都可以作为掩膜的来源，
//! 不限于本 crate 的多边形类型。

use crate::geometry::Point2D;
use crate::rect::Rect;

/// 具有内外之分的平面区域
///
/// # 不变量
///
/// 实现必须满足：
///
/// 1. `contains_rect(r)` 为真 ⟹ `intersects_rect(r)` 为真；
/// 2. `contains_rect(r)` 为真 ⟹ 矩形内每个点的 `contains_point` 为真；
/// 3. `intersects_rect(r)` 为假 ⟹ 矩形内每个点的 `contains_point` 为假。
///
/// `contains_rect` 允许保守地返回 `false`（细分层会继续递归），
/// `intersects_rect` 不允许漏报任何重叠。
///
/// 退化矩形（零宽或零高）是合法查询，不得 panic。
pub trait Region {
    /// 点是否在区域内（边界算在内）
    fn contains_point(&self, p: Point2D) -> bool;

    /// 矩形是否完全在区域内
    fn contains_rect(&self, rect: &Rect) -> bool;

    /// 矩形与区域是否有公共点（含共享边界）
    fn intersects_rect(&self, rect: &Rect) -> bool;
}

impl<R: Region + ?Sized> Region for &R {
    fn contains_point(&self, p: Point2D) -> bool {
        (**self).contains_point(p)
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        (**self).contains_rect(rect)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        (**self).intersects_rect(rect)
    }
}

impl<R: Region + ?Sized> Region for Box<R> {
    fn contains_point(&self, p: Point2D) -> bool {
        (**self).contains_point(p)
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        (**self).contains_rect(rect)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        (**self).intersects_rect(rect)
    }
}

/// 矩形本身也是一个区域
impl Region for Rect {
    fn contains_point(&self, p: Point2D) -> bool {
        Rect::contains_point(self, &p)
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        Rect::contains_rect(self, rect)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        Rect::intersects(self, rect)
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_as_region() {
        let region = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Region::contains_point(&region, Point2D::new(5.0, 5.0)));
        assert!(Region::contains_rect(
            &region,
            &Rect::new(1.0, 1.0, 9.0, 9.0)
        ));
        assert!(!Region::intersects_rect(
            &region,
            &Rect::new(20.0, 20.0, 30.0, 30.0)
        ));
    }

    #[test]
    fn test_region_through_reference() {
        let region = Rect::new(0.0, 0.0, 1.0, 1.0);
        let by_ref: &dyn Region = &region;
        assert!(by_ref.contains_point(Point2D::new(0.5, 0.5)));

        let boxed: Box<dyn Region> = Box::new(region);
        assert!(boxed.contains_point(Point2D::new(0.5, 0.5)));
    }
}
