/// Integer coordinate in pixel space (or grid space, for cells).
///
/// All motion is integer-stepped; there is no fractional component.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position::new(0, 0);

    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`, saturating at the `i32` limits.
    #[inline(always)]
    pub const fn plus(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Scale both axes by `factor`, e.g. grid cell to pixel origin.
    #[inline(always)]
    pub const fn times(self, factor: i32) -> Self {
        Self::new(self.x.saturating_mul(factor), self.y.saturating_mul(factor))
    }

    /// Integer-divide both axes by `divisor`, truncating toward zero.
    #[inline(always)]
    pub const fn div(self, divisor: i32) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }

    /// Clamp each axis into `[min, max]`.
    #[inline(always)]
    pub fn clamp(self, min: Position, max: Position) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }
}
