// src/views/ring_view.rs
//
// The decorative 3D ring. Owns its thread geometry, dust particles
// and a smoothed pose; the scroll sample only ever moves the pose
// target, so the ring glides rather than jumps.

use nannou::prelude::*;
use std::f32::consts::PI;

use crate::{
    animation::{FrameContext, RingFloat, SmoothedVec3},
    config::RingConfig,
    models::{build_threads, scatter_particles, Pose, ThreadPath},
    render::Camera,
};

pub struct RingView {
    threads: Vec<ThreadPath>,
    particles: Vec<Vec3>,
    base_position: Vec3,
    travel: Vec3,
    position: SmoothedVec3,
    pose: Pose,
    time: f32,
    shimmer_speed: f32,
    stroke_weight: f32,
}

impl RingView {
    pub fn new(config: &RingConfig, stroke_weight: f32) -> Self {
        let threads = build_threads(config);
        let mut rng = rand::thread_rng();
        let particles = scatter_particles(config, &mut rng);
        log::info!(
            "ring geometry: {} threads, {} particles",
            threads.len(),
            particles.len()
        );

        let base_position = Vec3::from(config.base_position);
        Self {
            threads,
            particles,
            base_position,
            travel: Vec3::from(config.scroll_travel),
            position: SmoothedVec3::new(base_position, config.snap),
            pose: Pose::new(base_position, Vec3::ZERO),
            time: 0.0,
            shimmer_speed: config.shimmer_speed,
            stroke_weight,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        self.time = ctx.time;

        // Scroll drives the pose target; the filter does the motion.
        self.position
            .set_target(self.base_position + self.travel * ctx.progress);
        let smoothed = self.position.update(ctx.dt);

        let position = smoothed + RingFloat::position_offset(ctx.time);
        let rotation = vec3(ctx.progress * PI * 0.4, ctx.progress * PI * 0.25, 0.0)
            + RingFloat::rotation_offset(ctx.time);

        self.pose = Pose::new(position, rotation);
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn draw(&self, draw: &Draw, camera: &Camera) {
        if self.threads.is_empty() {
            return;
        }

        for (i, thread) in self.threads.iter().enumerate() {
            let pulse = (self.time * self.shimmer_speed + i as f32 * 0.01).sin() * 0.1 + 0.9;
            let opacity = thread.base_opacity * pulse;
            let color = rgba(
                thread.color.red,
                thread.color.green,
                thread.color.blue,
                opacity,
            );

            let posed: Vec<Vec3> = thread
                .points
                .iter()
                .map(|&p| self.pose.apply_to_point(p))
                .collect();

            for run in camera.project_polyline(&posed) {
                draw.polyline()
                    .weight(self.stroke_weight)
                    .points(run)
                    .color(color);
            }
        }

        self.draw_particles(draw, camera);
    }

    fn draw_particles(&self, draw: &Draw, camera: &Camera) {
        for (i, &base) in self.particles.iter().enumerate() {
            let drift = vec3(
                (self.time * 0.4 + i as f32).sin(),
                (self.time * 0.3 + i as f32 * 0.5).cos(),
                (self.time * 0.35 + i as f32 * 0.3).sin(),
            ) * 0.12;

            let point = self.pose.apply_to_point(base + drift);
            if let Some(projected) = camera.project(point) {
                draw.ellipse()
                    .xy(projected)
                    .radius(1.6)
                    .color(rgba(0.031, 0.569, 0.698, 0.5));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> RingConfig {
        RingConfig {
            major_radius: 8.0,
            minor_radius: 2.0,
            longitudinal_count: 4,
            circumference_count: 4,
            spiral_count: 2,
            spiral_wraps: 12,
            cross_count: 4,
            particle_count: 10,
            base_position: [-6.0, 2.0, -14.0],
            scroll_travel: [14.0, -7.0, 5.0],
            snap: 0.001,
            shimmer_speed: 1.2,
        }
    }

    fn ctx(progress: f32, time: f32) -> FrameContext {
        FrameContext {
            time,
            dt: 1.0 / 60.0,
            active_index: 0.0,
            progress,
        }
    }

    #[test]
    fn test_pose_settles_on_the_scroll_target() {
        let mut ring = RingView::new(&test_config(), 1.0);
        for frame in 0..600 {
            ring.update(&ctx(1.0, frame as f32 / 60.0));
        }
        let target = vec3(8.0, -5.0, -9.0); // base + travel
        // Within the float wobble envelope of the target.
        assert!((ring.pose().position - target).length() < 0.1);
    }

    #[test]
    fn test_zero_scroll_keeps_the_base_position() {
        let mut ring = RingView::new(&test_config(), 1.0);
        ring.update(&ctx(0.0, 0.0));
        let base = vec3(-6.0, 2.0, -14.0);
        assert!((ring.pose().position - base).length() < 0.1);
    }

    #[test]
    fn test_scroll_tilts_the_ring() {
        let mut ring = RingView::new(&test_config(), 1.0);
        for frame in 0..60 {
            ring.update(&ctx(1.0, frame as f32 / 60.0));
        }
        // x rotation carries the progress * PI * 0.4 term (plus <=0.1 wobble)
        assert!(ring.pose().rotation.x > PI * 0.4 - 0.11);
    }
}
