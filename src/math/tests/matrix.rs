use crate::math::{Matrix4, MatrixMajor, Vec3};
use assert_approx_eq::assert_approx_eq;

#[test]
fn matrix4_new() {
    let vals = [
        0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
    ];
    let m = Matrix4::new(&vals);
    assert_eq!(m.m, vals);
    assert_eq!(m.at(0, 0), 0.0);
    assert_eq!(m.at(1, 2), 6.0);
    assert_eq!(m.at(3, 1), 13.0);
    assert_eq!(m[(2, 3)], 11.0);
}

#[test]
fn matrix4_default_is_identity() {
    let m = Matrix4::default();
    assert_eq!(m, Matrix4::identity());
    assert_eq!(m.at(0, 0), 1.0);
}

#[test]
fn matrix4_set_zero() {
    let m = Matrix4::zero();
    assert!(m.m.iter().all(|&x| x == 0.0));
}

#[test]
fn matrix4_set_element() {
    let mut m = Matrix4::zero();
    m.set(1, 3, 4.5);
    m[(3, 0)] = -2.0;
    assert_eq!(m.m[07], 4.5);
    assert_eq!(m.m[12], -2.0);
}

#[test]
#[should_panic]
fn matrix4_at_out_of_bounds() {
    let m = Matrix4::identity();
    let _ = m.at(0, 4);
}

#[test]
fn matrix4_set_translation() {
    let dir = Vec3::new(-87.39175, 8.35182, -93.43325);
    let m = Matrix4::translation(&dir);
    assert_eq!(m.m[00], 1.0);
    assert_eq!(m.m[03], dir.x);
    assert_eq!(m.m[05], 1.0);
    assert_eq!(m.m[07], dir.y);
    assert_eq!(m.m[10], 1.0);
    assert_eq!(m.m[11], dir.z);
    assert_eq!(m.m[15], 1.0);
    assert_eq!(m.get_translation(), dir);
}

#[test]
fn matrix4_set_scale_non_uniform() {
    let magnitude = Vec3::new(41.24096, -93.12313, 31.83295);
    let m = Matrix4::scale(&magnitude);
    assert_eq!(m.m[00], magnitude.x);
    assert_eq!(m.m[05], magnitude.y);
    assert_eq!(m.m[10], magnitude.z);
    assert_eq!(m.m[15], 1.0);
}

#[test]
fn matrix4_set_rotate_x() {
    let roll = 3.0 / 4.0 * std::f32::consts::PI;
    let m = Matrix4::rotate_x(roll);
    assert_approx_eq!(m.m[00], 1.0);
    assert_approx_eq!(m.m[05], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[06], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[09], 1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[10], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[15], 1.0);
}

#[test]
fn matrix4_set_rotate_y() {
    let pitch = 3.0 / 4.0 * std::f32::consts::PI;
    let m = Matrix4::rotate_y(pitch);
    assert_approx_eq!(m.m[00], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[02], 1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[05], 1.0);
    assert_approx_eq!(m.m[08], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[10], -1.0 / (2.0_f32).sqrt(), 1e-5);
}

#[test]
fn matrix4_set_rotate_z() {
    let yaw = 3.0 / 4.0 * std::f32::consts::PI;
    let m = Matrix4::rotate_z(yaw);
    assert_approx_eq!(m.m[00], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[01], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[04], 1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[05], -1.0 / (2.0_f32).sqrt(), 1e-5);
    assert_approx_eq!(m.m[10], 1.0);
}

#[test]
fn matrix4_transpose() {
    let vals = [
        27.9484, -88.37513, -25.05486, 0.93192, 19.53558, 55.46225, -92.99693, 13.30983, -39.91206,
        -63.35516, -80.28301, 96.89149, -97.99183, 69.73036, 34.27019, 58.81281,
    ];
    let m = Matrix4::new(&vals);
    let out = m.transpose();
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(m.at(row, col), out.at(col, row));
        }
    }
    assert_eq!(out.transpose(), m);
}

#[test]
fn matrix4_inverse_invertible() {
    let vals = [
        44.48, -69.73, 62.26, -89.47, -20.59, 45.01, -77.12, 21.26, 3.27, 42.29, -62.23, -49.23,
        6.83, -80.83, 18.96, -84.16,
    ];
    let m = Matrix4::new(&vals);
    let inv = m.inverse().unwrap();
    assert_approx_eq!(inv.m[00], 0.056968, 1e-4);
    assert_approx_eq!(inv.m[01], 0.060421, 1e-4);
    assert_approx_eq!(inv.m[05], -0.032876, 1e-4);
    let id = m * inv;
    let expected = Matrix4::identity();
    for i in 0..16 {
        assert_approx_eq!(id.m[i], expected.m[i], 1e-3);
    }
}

#[test]
fn matrix4_inverse_non_invertible() {
    assert!(Matrix4::zero().inverse().is_none());
}

#[test]
fn matrix4_get_scale() {
    let scale = Vec3::new(37.99025, 69.85438, 5.79172);
    let translation = Vec3::new(-17.90241, 37.90712, 74.85354);
    let rotation = Vec3::new(-20.80442, 27.33369, -31.58807);
    let mut combined = Matrix4::identity();
    combined *= Matrix4::translation(&translation);
    combined *= Matrix4::rotate_z(rotation.z);
    combined *= Matrix4::rotate_y(rotation.y);
    combined *= Matrix4::rotate_x(rotation.x);
    combined *= Matrix4::scale(&scale);
    let extracted = combined.get_scale();
    assert_approx_eq!(extracted.x, scale.x, 1e-3);
    assert_approx_eq!(extracted.y, scale.y, 1e-3);
    assert_approx_eq!(extracted.z, scale.z, 1e-3);
    let moved = combined.get_translation();
    assert_approx_eq!(moved.x, translation.x, 1e-4);
    assert_approx_eq!(moved.y, translation.y, 1e-4);
    assert_approx_eq!(moved.z, translation.z, 1e-4);
}

#[test]
fn matrix4_add_sub() {
    let val1 = [
        -98.96, 98.99, 72.96, 98.37, -61.17, 6.0, -13.05, 18.62, 43.24, -19.56, 39.17, -19.17,
        -49.98, -36.64, 48.0, 45.27,
    ];
    let m1 = Matrix4::new(&val1);
    let m2 = Matrix4::identity();
    let sum = m1 + m2;
    assert_eq!(sum.m[00], val1[0] + 1.0);
    assert_eq!(sum.m[01], val1[1]);
    let mut back = sum;
    back -= m2;
    assert_eq!(back, m1);
    assert_eq!(&sum - &m1, m2);
}

#[test]
fn matrix4_mul() {
    let val1 = [
        46.3, 6.5, -84.39, 6.06, 91.72, 78.04, -64.94, 32.07, -59.33, -78.26, 54.08, -73.42,
        -27.12, 4.49, 69.9, 91.19,
    ];
    let val2 = [
        -52.91, 12.02, -58.9, 29.93, -16.45, 78.46, 19.49, 27.82, 63.5, 74.75, 51.43, 8.44, 15.54,
        25.59, 73.89, -9.28,
    ];
    let m1 = Matrix4::new(&val1);
    let m2 = Matrix4::new(&val2);
    let out = m1 * m2;
    assert_approx_eq!(out.m[00], -7821.25048, 1e-2);
    assert_approx_eq!(out.m[05], 3191.89941, 1e-2);
    assert_approx_eq!(out.m[10], -674.419434, 1e-2);
    assert_approx_eq!(out.m[15], -943.077087, 1e-2);
    let mut m3 = m1;
    m3 *= m2;
    assert_eq!(m3, out);
    assert_eq!(m1 * Matrix4::identity(), m1);
}

#[test]
fn matrix4_column_major_export() {
    let m = Matrix4::translation(&Vec3::new(1.0, 2.0, 3.0));
    let column = m.to_array(MatrixMajor::Column);
    assert_eq!(column[12], 1.0);
    assert_eq!(column[13], 2.0);
    assert_eq!(column[14], 3.0);
    assert_eq!(m.to_array(MatrixMajor::Row), m.m);
    assert_eq!(Matrix4::from_array(&column, MatrixMajor::Column), m);
}
