// src/render/camera.rs
//
// Fixed perspective camera on the +z axis looking toward -z.
// Projects posed 3D points into window coordinates; points behind
// the near plane are culled, never drawn.

use crate::config::CameraConfig;
use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position_z: f32,
    focal: f32,
    near: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig, window_height: f32) -> Self {
        let fov = config.fov_degrees.to_radians();
        Self {
            position_z: config.position_z,
            focal: (window_height * 0.5) / (fov * 0.5).tan(),
            near: config.near,
        }
    }

    /// Window-space projection, or None when the point is behind the
    /// near plane.
    pub fn project(&self, point: Vec3) -> Option<Point2> {
        let depth = self.position_z - point.z;
        if depth <= self.near {
            return None;
        }
        Some(pt2(
            point.x * self.focal / depth,
            point.y * self.focal / depth,
        ))
    }

    /// Projects a polyline, splitting it wherever points fall behind
    /// the near plane.
    pub fn project_polyline(&self, points: &[Vec3]) -> Vec<Vec<Point2>> {
        let mut runs = Vec::new();
        let mut run = Vec::new();
        for &p in points {
            match self.project(p) {
                Some(projected) => run.push(projected),
                None => {
                    if run.len() >= 2 {
                        runs.push(std::mem::take(&mut run));
                    } else {
                        run.clear();
                    }
                }
            }
        }
        if run.len() >= 2 {
            runs.push(run);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;

    fn camera() -> Camera {
        Camera::new(
            &CameraConfig {
                position_z: 12.0,
                fov_degrees: 60.0,
                near: 0.5,
            },
            900.0,
        )
    }

    #[test]
    fn test_axis_point_projects_to_center() {
        let cam = camera();
        let p = cam.project(vec3(0.0, 0.0, -14.0)).unwrap();
        assert!(p.x.abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
    }

    #[test]
    fn test_nearer_points_project_larger() {
        let cam = camera();
        let far = cam.project(vec3(2.0, 0.0, -20.0)).unwrap();
        let near = cam.project(vec3(2.0, 0.0, -5.0)).unwrap();
        assert!(near.x > far.x);
    }

    #[test]
    fn test_points_behind_near_plane_are_culled() {
        let cam = camera();
        assert!(cam.project(vec3(0.0, 0.0, 12.0)).is_none());
        assert!(cam.project(vec3(0.0, 0.0, 11.8)).is_none());
        assert!(cam.project(vec3(0.0, 0.0, 11.0)).is_some());
    }

    #[test]
    fn test_polyline_is_split_at_the_near_plane() {
        let cam = camera();
        let points = vec![
            vec3(0.0, 0.0, -5.0),
            vec3(0.0, 0.0, -4.0),
            vec3(0.0, 0.0, 12.0), // behind the camera
            vec3(0.0, 0.0, -3.0),
            vec3(0.0, 0.0, -2.0),
        ];
        let runs = cam.project_polyline(&points);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
    }
}
