//! Analytic density fields for driving the extractors.
//!
//! These follow the usual signed-distance convention: negative inside,
//! positive outside.

use glam::Vec3A;

pub fn sphere(r: f32, p: Vec3A) -> f32 {
    p.length() - r
}

pub fn plane(o: Vec3A, n: Vec3A, p: Vec3A) -> f32 {
    (p - o).dot(n)
}

pub fn torus(major: f32, minor: f32, p: Vec3A) -> f32 {
    let q_x = (p.x * p.x + p.z * p.z).sqrt() - major;
    (q_x * q_x + p.y * p.y).sqrt() - minor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_sign_convention() {
        assert!(sphere(1.0, Vec3A::ZERO) < 0.0);
        assert!(sphere(1.0, Vec3A::new(2.0, 0.0, 0.0)) > 0.0);
        assert_eq!(sphere(1.0, Vec3A::X), 0.0);
    }

    #[test]
    fn plane_distance_is_signed() {
        let o = Vec3A::new(0.0, 0.5, 0.0);
        let n = Vec3A::Y;
        assert!(plane(o, n, Vec3A::ZERO) < 0.0);
        assert!(plane(o, n, Vec3A::Y) > 0.0);
    }
}
