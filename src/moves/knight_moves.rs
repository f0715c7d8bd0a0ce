//! Knight movement shape. Knights jump, so nothing between origin and target
//! is ever inspected.

#[inline]
pub const fn knight_shape_allows(dx: i8, dy: i8) -> bool {
    matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1))
}
