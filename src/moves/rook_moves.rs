//! Rook movement shape: along exactly one axis.

#[inline]
pub const fn rook_shape_allows(dx: i8, dy: i8) -> bool {
    (dx == 0) != (dy == 0)
}

#[cfg(test)]
mod tests {
    use super::rook_shape_allows;

    #[test]
    fn rook_moves_on_one_axis() {
        assert!(rook_shape_allows(0, 5));
        assert!(rook_shape_allows(-3, 0));
        assert!(!rook_shape_allows(0, 0));
        assert!(!rook_shape_allows(1, 1));
    }
}
