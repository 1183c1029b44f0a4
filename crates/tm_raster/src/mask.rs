// crates/tm_raster/src/mask.rs

//! 布尔掩膜
//!
//! 掩膜是 `ndarray::Array2<bool>`：行 `i` 对应 `ys[i]`，
//! 列 `j` 对应 `xs[j]`。本模块提供分配与统计辅助函数，
//! 填充逻辑在 `recursive` 与 `contour` 模块。

use ndarray::Array2;

/// 布尔栅格掩膜（行对应 y，列对应 x）
pub type Mask = Array2<bool>;

/// 分配全 `false` 的掩膜
#[must_use]
pub fn new_mask(ny: usize, nx: usize) -> Mask {
    Array2::from_elem((ny, nx), false)
}

/// 统计 `true` 单元数
#[must_use]
pub fn count_true(mask: &Mask) -> usize {
    mask.iter().filter(|&&v| v).count()
}

/// `true` 单元占比（空掩膜返回 0）
#[must_use]
pub fn fill_fraction(mask: &Mask) -> f64 {
    if mask.is_empty() {
        return 0.0;
    }
    count_true(mask) as f64 / mask.len() as f64
}

/// 以 ASCII 字符画渲染掩膜（`#` = true, `.` = false），调试用
#[must_use]
pub fn to_ascii(mask: &Mask) -> String {
    let mut out = String::with_capacity(mask.nrows() * (mask.ncols() + 1));
    for row in mask.rows() {
        for &cell in row {
            out.push(if cell { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mask_zeroed() {
        let mask = new_mask(3, 4);
        assert_eq!(mask.dim(), (3, 4));
        assert_eq!(count_true(&mask), 0);
    }

    #[test]
    fn test_count_and_fraction() {
        let mut mask = new_mask(2, 2);
        mask[[0, 0]] = true;
        mask[[1, 1]] = true;
        assert_eq!(count_true(&mask), 2);
        assert!((fill_fraction(&mask) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_to_ascii() {
        let mut mask = new_mask(2, 3);
        mask[[0, 1]] = true;
        let art = to_ascii(&mask);
        assert_eq!(art, ".#.\n...\n");
    }
}
