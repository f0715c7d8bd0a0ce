//! Bishop movement shape: any diagonal.

#[inline]
pub const fn bishop_shape_allows(dx: i8, dy: i8) -> bool {
    dx.abs() == dy.abs()
}

#[cfg(test)]
mod tests {
    use super::bishop_shape_allows;

    #[test]
    fn bishop_moves_on_diagonals_only() {
        assert!(bishop_shape_allows(3, -3));
        assert!(bishop_shape_allows(-7, -7));
        assert!(!bishop_shape_allows(0, 2));
        assert!(!bishop_shape_allows(2, 1));
    }
}
