//! Pure rigid-transform geometry used by the placement stages.
//!
//! Nothing here touches the structural graph: callers harvest positions, call
//! into these functions, and write results back themselves. Every constructor
//! that needs a direction rejects near-zero vectors instead of letting NaN
//! propagate into atom coordinates.

use nalgebra::{Point3, Rotation3, Unit, Vector3};
use thiserror::Error;

/// Vectors shorter than this are treated as degenerate.
pub const DEGENERACY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("the {context} vector has near-zero magnitude")]
    DegenerateVector { context: &'static str },
}

/// Scales the vector from `origin` to `point` by `factor`, keeping `origin` fixed.
pub fn scale_from(origin: &Point3<f64>, point: &Point3<f64>, factor: f64) -> Point3<f64> {
    origin + (point - origin) * factor
}

/// Unit normal of the plane spanned by `u` and `v`.
///
/// Fails when the two vectors are (anti)parallel or either is near zero, since
/// the cross product then carries no directional information.
pub fn plane_normal(
    u: &Vector3<f64>,
    v: &Vector3<f64>,
    context: &'static str,
) -> Result<Unit<Vector3<f64>>, GeometryError> {
    let cross = u.cross(v);
    if cross.norm() < DEGENERACY_TOLERANCE {
        return Err(GeometryError::DegenerateVector { context });
    }
    Ok(Unit::new_normalize(cross))
}

/// Normalizes `v`, failing on near-zero input.
pub fn unit_direction(
    v: &Vector3<f64>,
    context: &'static str,
) -> Result<Unit<Vector3<f64>>, GeometryError> {
    if v.norm() < DEGENERACY_TOLERANCE {
        return Err(GeometryError::DegenerateVector { context });
    }
    Ok(Unit::new_normalize(*v))
}

/// Angle between two vectors in degrees, in [0, 180].
pub fn angle_between_degrees(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    u.angle(v).to_degrees()
}

/// Angle-axis rotation from an (unnormalized) axis and an angle in degrees.
///
/// Fails when the axis is near zero, which arises from degenerate reference
/// geometry (e.g., collinear atoms) upstream.
pub fn rotation_about(
    axis: &Vector3<f64>,
    angle_degrees: f64,
    context: &'static str,
) -> Result<Rotation3<f64>, GeometryError> {
    let axis = unit_direction(axis, context)?;
    Ok(Rotation3::from_axis_angle(&axis, angle_degrees.to_radians()))
}

/// Angle-axis rotation about an already-validated unit axis.
pub fn rotation_about_unit(axis: &Unit<Vector3<f64>>, angle_degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(axis, angle_degrees.to_radians())
}

/// Rotates `point` about `pivot`.
pub fn rotate_about_pivot(
    rotation: &Rotation3<f64>,
    pivot: &Point3<f64>,
    point: &Point3<f64>,
) -> Point3<f64> {
    pivot + rotation * (point - pivot)
}

/// Scalar projection of (`point` − `anchor`) onto a unit axis.
pub fn axial_projection(
    point: &Point3<f64>,
    anchor: &Point3<f64>,
    axis: &Unit<Vector3<f64>>,
) -> f64 {
    (point - anchor).dot(axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scale_from_extends_along_the_ray() {
        let origin = Point3::new(1.0, 0.0, 0.0);
        let point = Point3::new(2.0, 0.0, 0.0);
        let scaled = scale_from(&origin, &point, 1.35);
        assert_relative_eq!(scaled.x, 2.35, epsilon = 1e-12);
        assert_relative_eq!(scaled.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn scale_from_with_unit_factor_is_identity() {
        let origin = Point3::new(-1.0, 2.0, 0.5);
        let point = Point3::new(3.0, -2.0, 1.5);
        assert_eq!(scale_from(&origin, &point, 1.0), point);
    }

    #[test]
    fn plane_normal_is_perpendicular_to_both_inputs() {
        let u = Vector3::new(1.0, 0.0, 0.0);
        let v = Vector3::new(0.0, 1.0, 0.0);
        let n = plane_normal(&u, &v, "test").unwrap();
        assert_relative_eq!(n.dot(&u), 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.dot(&v), 0.0, epsilon = 1e-12);
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn plane_normal_rejects_collinear_vectors() {
        let u = Vector3::new(1.0, 1.0, 0.0);
        let v = Vector3::new(2.0, 2.0, 0.0);
        assert_eq!(
            plane_normal(&u, &v, "plane normal"),
            Err(GeometryError::DegenerateVector {
                context: "plane normal"
            })
        );
    }

    #[test]
    fn unit_direction_rejects_near_zero_vectors() {
        let v = Vector3::new(1e-12, 0.0, 0.0);
        assert!(unit_direction(&v, "axis").is_err());
    }

    #[test]
    fn angle_between_degrees_matches_known_angles() {
        let x = Vector3::x();
        let y = Vector3::y();
        assert_relative_eq!(angle_between_degrees(&x, &y), 90.0, epsilon = 1e-9);
        assert_relative_eq!(angle_between_degrees(&x, &-x), 180.0, epsilon = 1e-9);
        assert_relative_eq!(angle_between_degrees(&x, &x), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn rotation_about_rotates_by_the_given_angle() {
        let rot = rotation_about(&Vector3::z(), 90.0, "axis").unwrap();
        let rotated = rot * Vector3::x();
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_about_rejects_zero_axis() {
        assert!(rotation_about(&Vector3::zeros(), 45.0, "rotation axis").is_err());
    }

    #[test]
    fn rotate_about_pivot_fixes_the_pivot() {
        let rot = rotation_about(&Vector3::z(), 90.0, "axis").unwrap();
        let pivot = Point3::new(1.0, 1.0, 0.0);
        assert_eq!(rotate_about_pivot(&rot, &pivot, &pivot), pivot);

        let moved = rotate_about_pivot(&rot, &pivot, &Point3::new(2.0, 1.0, 0.0));
        assert_relative_eq!(moved.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(moved.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn axial_projection_is_signed() {
        let axis = Unit::new_normalize(Vector3::x());
        let anchor = Point3::origin();
        assert_relative_eq!(
            axial_projection(&Point3::new(3.0, 4.0, 0.0), &anchor, &axis),
            3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            axial_projection(&Point3::new(-2.0, 0.0, 1.0), &anchor, &axis),
            -2.0,
            epsilon = 1e-12
        );
    }
}
