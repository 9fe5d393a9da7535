use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::Size;

/// 2D point or offset in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// Translates a point by a size, treating `width`/`height` as `x`/`y`.
impl Add<Size> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Size) -> Vec2 {
        Vec2::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub<Size> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Size) -> Vec2 {
        Vec2::new(self.x - rhs.width, self.y - rhs.height)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_are_componentwise() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, -2.0);
        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, Vec2::new(2.0, 6.0));
    }

    #[test]
    fn assign_ops_accumulate() {
        let mut acc = Vec2::zero();
        acc += Vec2::new(500.0, 500.0);
        acc += Vec2::new(10.0, 20.0);
        acc -= Vec2::new(5.0, 5.0);
        assert_eq!(acc, Vec2::new(505.0, 515.0));
    }

    #[test]
    fn size_translates_point() {
        let p = Vec2::new(100.0, 50.0);
        assert_eq!(p + Size::new(20.0, 10.0), Vec2::new(120.0, 60.0));
        assert_eq!(p - Size::new(20.0, 10.0), Vec2::new(80.0, 40.0));
    }

    #[test]
    fn scalar_ops() {
        let p = Vec2::new(8.0, -4.0);
        assert_eq!(p * 0.5, Vec2::new(4.0, -2.0));
        assert_eq!(p / 4.0, Vec2::new(2.0, -1.0));
        assert_eq!(-p, Vec2::new(-8.0, 4.0));
    }
}
