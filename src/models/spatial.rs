// src/models/spatial.rs
//
// 3D pose for the decorative ring group. Rotation is Euler XYZ in
// radians, applied about x, then y, then z, then translated.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn apply_to_point(&self, point: Vec3) -> Vec3 {
        let p = rotate_x(point, self.rotation.x);
        let p = rotate_y(p, self.rotation.y);
        let p = rotate_z(p, self.rotation.z);
        p + self.position
    }
}

fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    vec3(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    vec3(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

fn rotate_z(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    vec3(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_pose_is_identity() {
        let pose = Pose::default();
        close(pose.apply_to_point(vec3(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_translation_only() {
        let pose = Pose::new(vec3(1.0, -1.0, 2.0), Vec3::ZERO);
        close(pose.apply_to_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 0.0, 3.0));
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let pose = Pose::new(Vec3::ZERO, vec3(0.0, 0.0, PI / 2.0));
        close(pose.apply_to_point(vec3(1.0, 0.0, 0.0)), vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let pose = Pose::new(Vec3::ZERO, vec3(0.0, PI / 2.0, 0.0));
        close(pose.apply_to_point(vec3(1.0, 0.0, 0.0)), vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let pose = Pose::new(Vec3::ZERO, vec3(0.4, -1.2, 2.1));
        let p = vec3(3.0, -4.0, 12.0);
        let q = pose.apply_to_point(p);
        assert!((p.length() - q.length()).abs() < 1e-4);
    }
}
