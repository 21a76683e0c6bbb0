use crate::math::Vec3;
use overload::overload;
use std::fmt::Formatter;
use std::ops;
use std::ops::{Index, IndexMut};

/// Ordering used when a matrix is flattened into a plain array.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixMajor {
    /// Consecutive elements belong to the same column. This is what GLSL expects by default.
    Column,
    /// Consecutive elements belong to the same row. This is the internal storage of [Matrix4].
    Row,
}

/// Trait used to transform geometric entities with a [Matrix4].
pub trait Transform3 {
    /// Returns the entity transformed by the given matrix.
    #[must_use]
    fn transform(&self, mat: &Matrix4) -> Self;
}

/// A 4x4 matrix of single precision floats.
///
/// Values are stored in row-major order inside the `m` array, so the element at row `r` and
/// column `c` is `m[r * 4 + c]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4 {
    /// The sixteen values of the matrix, in row-major order.
    pub m: [f32; 16],
}

impl Matrix4 {
    /// Constructs a matrix from sixteen values in row-major order.
    pub fn new(values: &[f32; 16]) -> Matrix4 {
        Matrix4 { m: *values }
    }

    /// Constructs a matrix with every element equal to zero.
    pub const fn zero() -> Matrix4 {
        Matrix4 { m: [0.0; 16] }
    }

    /// Constructs the identity matrix.
    /// # Examples
    /// ```
    /// use cgs::math::Matrix4;
    ///
    /// let m = Matrix4::identity();
    ///
    /// assert_eq!(m.at(0, 0), 1.0);
    /// assert_eq!(m.at(0, 1), 0.0);
    /// assert_eq!(m.at(3, 3), 1.0);
    /// ```
    pub const fn identity() -> Matrix4 {
        Matrix4 {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Returns the element at the given row and column.
    /// # Panics
    /// Panics if `row` or `col` are greater than 3.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[flat_index(row, col)]
    }

    /// Replaces the element at the given row and column.
    /// # Panics
    /// Panics if `row` or `col` are greater than 3.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.m[flat_index(row, col)] = value;
    }

    /// Constructs a translation matrix moving points along `dir`.
    pub fn translation(dir: &Vec3) -> Matrix4 {
        let mut m = Matrix4::identity();
        m.m[03] = dir.x;
        m.m[07] = dir.y;
        m.m[11] = dir.z;
        m
    }

    /// Constructs a (possibly non-uniform) scaling matrix.
    pub fn scale(magnitude: &Vec3) -> Matrix4 {
        let mut m = Matrix4::identity();
        m.m[00] = magnitude.x;
        m.m[05] = magnitude.y;
        m.m[10] = magnitude.z;
        m
    }

    /// Constructs a rotation matrix around the `x` axis. The angle is in radians.
    pub fn rotate_x(roll: f32) -> Matrix4 {
        let (sin, cos) = roll.sin_cos();
        let mut m = Matrix4::identity();
        m.m[05] = cos;
        m.m[06] = -sin;
        m.m[09] = sin;
        m.m[10] = cos;
        m
    }

    /// Constructs a rotation matrix around the `y` axis. The angle is in radians.
    pub fn rotate_y(pitch: f32) -> Matrix4 {
        let (sin, cos) = pitch.sin_cos();
        let mut m = Matrix4::identity();
        m.m[00] = cos;
        m.m[02] = sin;
        m.m[08] = -sin;
        m.m[10] = cos;
        m
    }

    /// Constructs a rotation matrix around the `z` axis. The angle is in radians.
    pub fn rotate_z(yaw: f32) -> Matrix4 {
        let (sin, cos) = yaw.sin_cos();
        let mut m = Matrix4::identity();
        m.m[00] = cos;
        m.m[01] = -sin;
        m.m[04] = sin;
        m.m[05] = cos;
        m
    }

    /// Returns the transposed matrix.
    #[must_use = "Matrix4::transpose() does not act in place!"]
    pub fn transpose(&self) -> Matrix4 {
        let mut out = Matrix4::zero();
        for row in 0..4 {
            for col in 0..4 {
                out.m[col * 4 + row] = self.m[row * 4 + col];
            }
        }
        out
    }

    /// Returns the inverse of the matrix, or None if the matrix is singular.
    pub fn inverse(&self) -> Option<Matrix4> {
        let m = &self.m;
        let mut inv = [0.0; 16];
        inv[00] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];
        inv[04] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];
        inv[08] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];
        inv[01] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        inv[05] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        inv[09] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];
        inv[02] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        inv[06] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];
        inv[03] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        inv[07] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];
        let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
        if det == 0.0 || !det.is_finite() {
            None
        } else {
            let inv_det = 1.0 / det;
            inv.iter_mut().for_each(|val| *val *= inv_det);
            Some(Matrix4 { m: inv })
        }
    }

    /// Extracts the translation component of an affine transformation.
    pub fn get_translation(&self) -> Vec3 {
        Vec3::new(self.m[03], self.m[07], self.m[11])
    }

    /// Extracts the scale component of an affine transformation.
    ///
    /// Negative scales can not be recovered and are returned as positive.
    pub fn get_scale(&self) -> Vec3 {
        let x = Vec3::new(self.m[00], self.m[04], self.m[08]).length();
        let y = Vec3::new(self.m[01], self.m[05], self.m[09]).length();
        let z = Vec3::new(self.m[02], self.m[06], self.m[10]).length();
        Vec3::new(x, y, z)
    }

    /// Flattens the matrix in the requested order.
    /// # Examples
    /// ```
    /// use cgs::math::{Matrix4, MatrixMajor, Vec3};
    ///
    /// let m = Matrix4::translation(&Vec3::new(1.0, 2.0, 3.0));
    /// let gpu = m.to_array(MatrixMajor::Column);
    ///
    /// assert_eq!(&gpu[12..15], &[1.0, 2.0, 3.0]);
    /// ```
    pub fn to_array(&self, major: MatrixMajor) -> [f32; 16] {
        match major {
            MatrixMajor::Row => self.m,
            MatrixMajor::Column => self.transpose().m,
        }
    }

    /// Builds a matrix from values flattened in the given order.
    pub fn from_array(values: &[f32; 16], major: MatrixMajor) -> Matrix4 {
        match major {
            MatrixMajor::Row => Matrix4::new(values),
            MatrixMajor::Column => Matrix4::new(values).transpose(),
        }
    }
}

/// The default matrix is the identity, so an untouched transform leaves geometry unchanged.
impl Default for Matrix4 {
    fn default() -> Self {
        Matrix4::identity()
    }
}

fn flat_index(row: usize, col: usize) -> usize {
    if row > 3 || col > 3 {
        panic!("Out of bounds index ({}, {}) for Matrix4", row, col);
    }
    row * 4 + col
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.m[flat_index(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.m[flat_index(row, col)]
    }
}

impl std::fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Matrix4[[{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}]]",
            self.m[00],
            self.m[01],
            self.m[02],
            self.m[03],
            self.m[04],
            self.m[05],
            self.m[06],
            self.m[07],
            self.m[08],
            self.m[09],
            self.m[10],
            self.m[11],
            self.m[12],
            self.m[13],
            self.m[14],
            self.m[15]
        )
    }
}

fn add(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    let mut out = *a;
    out.m.iter_mut().zip(b.m.iter()).for_each(|(x, y)| *x += y);
    out
}

fn sub(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    let mut out = *a;
    out.m.iter_mut().zip(b.m.iter()).for_each(|(x, y)| *x -= y);
    out
}

fn mul(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    let mut out = Matrix4::zero();
    for row in 0..4 {
        for col in 0..4 {
            out.m[row * 4 + col] = (0..4)
                .map(|k| a.m[row * 4 + k] * b.m[k * 4 + col])
                .sum();
        }
    }
    out
}

overload!((a: ?Matrix4) + (b: ?Matrix4) -> Matrix4 {add(&a, &b)});
overload!((a: ?Matrix4) - (b: ?Matrix4) -> Matrix4 {sub(&a, &b)});
overload!((a: ?Matrix4) * (b: ?Matrix4) -> Matrix4 {mul(&a, &b)});
overload!((a: &mut Matrix4) += (b: ?Matrix4) {*a = add(a, &b);});
overload!((a: &mut Matrix4) -= (b: ?Matrix4) {*a = sub(a, &b);});
overload!((a: &mut Matrix4) *= (b: ?Matrix4) {*a = mul(a, &b);});
