mod matrix;
pub use self::matrix::Matrix4;
pub use self::matrix::MatrixMajor;
pub use self::matrix::Transform3;
mod vec;
pub use self::vec::Vec2;
pub use self::vec::Vec3;
#[cfg(test)]
mod tests;
