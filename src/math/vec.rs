use crate::math::matrix::{Matrix4, Transform3};
use overload::overload;
use std::fmt::{Display, Formatter};
use std::ops;
use std::ops::{Index, IndexMut};

/// Two-dimensional vector, such as the `(10, 2)` sample combined by the renderer entry point.
///
/// Components are also reachable by index: `0` is `x`, `1` is `y`.
/// # Examples
/// ```
/// use cgs::math::Vec2;
///
/// let sample = Vec2::new(10.0, 2.0);
///
/// assert_eq!(sample[0] * sample[1], 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    /// The origin of the plane.
    pub const fn zero() -> Vec2 {
        Vec2::new(0.0, 0.0)
    }
}

impl Index<u8> for Vec2 {
    type Output = f32;

    fn index(&self, index: u8) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Out of bounds index {} for Vec2", index),
        }
    }
}

impl IndexMut<u8> for Vec2 {
    fn index_mut(&mut self, index: u8) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Out of bounds index {} for Vec2", index),
        }
    }
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec2[{}, {}]", self.x, self.y)
    }
}

/// Three-dimensional vector.
///
/// Used as the sample `(2.5, 5, 7.5)` of the renderer entry point and as the direction,
/// scale and rotation arguments of [Matrix4]. Components are reachable by index `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    pub const fn zero() -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }

    /// Euclidean length, used to recover the scale factors of a [Matrix4].
    /// # Examples
    /// ```
    /// use cgs::math::Vec3;
    ///
    /// let column = Vec3::new(0.0, 3.0, 4.0);
    ///
    /// assert_eq!(column.length(), 5.0);
    /// ```
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Transform3 for Vec3 {
    /// Vectors are directions: the translation part of the matrix is ignored.
    fn transform(&self, mat: &Matrix4) -> Self {
        let row = |r: usize| mat.at(r, 0) * self.x + mat.at(r, 1) * self.y + mat.at(r, 2) * self.z;
        Vec3::new(row(0), row(1), row(2))
    }
}

impl Index<u8> for Vec3 {
    type Output = f32;

    fn index(&self, index: u8) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Out of bounds index {} for Vec3", index),
        }
    }
}

impl IndexMut<u8> for Vec3 {
    fn index_mut(&mut self, index: u8) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Out of bounds index {} for Vec3", index),
        }
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec3[{}, {}, {}]", self.x, self.y, self.z)
    }
}

overload!((l: ?Vec3) + (r: ?Vec3) -> Vec3 {Vec3::new(l.x + r.x, l.y + r.y, l.z + r.z)});
overload!((l: ?Vec3) - (r: ?Vec3) -> Vec3 {Vec3::new(l.x - r.x, l.y - r.y, l.z - r.z)});
overload!((l: ?Vec3) * (s: f32) -> Vec3 {Vec3::new(l.x * s, l.y * s, l.z * s)});
