//! Queen movement shape: the union of the rook and bishop shapes.

use crate::moves::bishop_moves::bishop_shape_allows;
use crate::moves::rook_moves::rook_shape_allows;

#[inline]
pub const fn queen_shape_allows(dx: i8, dy: i8) -> bool {
    rook_shape_allows(dx, dy) || bishop_shape_allows(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::queen_shape_allows;

    #[test]
    fn queen_combines_lines_and_diagonals() {
        assert!(queen_shape_allows(0, -4));
        assert!(queen_shape_allows(5, 5));
        assert!(!queen_shape_allows(1, 2));
    }
}
