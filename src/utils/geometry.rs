// src/utils/geometry.rs

use nalgebra::{Matrix3, Vector3};

pub type Point3 = [f64; 3];

/// Distance of a point from the origin
pub fn len(p: Point3) -> f64 {
  (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
}

/// Combined rotation matrix, applied X -> Y -> Z
///
/// # Arguments
/// * `rot_x`, `rot_y`, `rot_z` - View angles in degrees
///
/// # Returns
/// The 3x3 matrix `Rz * Ry * Rx`
pub fn rotation_xyz(rot_x: f64, rot_y: f64, rot_z: f64) -> Matrix3<f64> {
  let (sin_x, cos_x) = rot_x.to_radians().sin_cos();
  let (sin_y, cos_y) = rot_y.to_radians().sin_cos();
  let (sin_z, cos_z) = rot_z.to_radians().sin_cos();

  let rx = Matrix3::new(
    1.0, 0.0, 0.0, //
    0.0, cos_x, -sin_x, //
    0.0, sin_x, cos_x,
  );
  let ry = Matrix3::new(
    cos_y, 0.0, sin_y, //
    0.0, 1.0, 0.0, //
    -sin_y, 0.0, cos_y,
  );
  let rz = Matrix3::new(
    cos_z, -sin_z, 0.0, //
    sin_z, cos_z, 0.0, //
    0.0, 0.0, 1.0,
  );

  rz * ry * rx
}

/// Apply a rotation matrix to a point
pub fn apply(m: &Matrix3<f64>, p: Point3) -> Point3 {
  let v = m * Vector3::from(p);
  [v.x, v.y, v.z]
}
