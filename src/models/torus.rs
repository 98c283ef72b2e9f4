// src/models/torus.rs
//
// Procedural wire-thread geometry for the decorative ring.
//
// The ring is a torus sampled into layered polylines: longitudinal
// threads along the ring, circumferential loops around the tube,
// forward/reverse spirals, and two cross-hatch chord layers. Layer
// generation is independent per thread, so it runs through rayon.

use crate::config::RingConfig;
use nannou::prelude::*;
use rayon::prelude::*;
use std::f32::consts::TAU;

const LONGITUDINAL_SEGMENTS: usize = 120;
const CIRCUMFERENCE_SEGMENTS: usize = 48;
const SPIRAL_SEGMENTS: usize = 180;

// Cyan palette lifted from the site theme
pub fn palette_primary() -> Rgb<f32> {
    rgb(0.031, 0.569, 0.698)
}
pub fn palette_bright() -> Rgb<f32> {
    rgb(0.133, 0.827, 0.933)
}
pub fn palette_dark() -> Rgb<f32> {
    rgb(0.055, 0.455, 0.565)
}

/// Point on a torus with major radius `big_r` and tube radius `r`.
/// `u` runs around the ring, `v` around the tube.
pub fn torus_point(big_r: f32, r: f32, u: f32, v: f32) -> Vec3 {
    let x = (big_r + r * v.cos()) * u.cos();
    let y = (big_r + r * v.cos()) * u.sin();
    let z = r * v.sin();
    vec3(x, y, z)
}

pub fn lerp_rgb(a: Rgb<f32>, b: Rgb<f32>, t: f32) -> Rgb<f32> {
    rgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}

/// One polyline of the ring plus its draw style.
#[derive(Debug, Clone)]
pub struct ThreadPath {
    pub points: Vec<Vec3>,
    pub color: Rgb<f32>,
    pub base_opacity: f32,
}

fn longitudinal_threads(big_r: f32, r: f32, count: usize) -> Vec<ThreadPath> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let v = i as f32 / count as f32 * TAU;
            let points = (0..=LONGITUDINAL_SEGMENTS)
                .map(|j| {
                    let u = j as f32 / LONGITUDINAL_SEGMENTS as f32 * TAU;
                    torus_point(big_r, r, u, v)
                })
                .collect();
            ThreadPath {
                points,
                color: lerp_rgb(palette_primary(), palette_bright(), i as f32 / count as f32),
                base_opacity: 0.35,
            }
        })
        .collect()
}

fn circumference_threads(big_r: f32, r: f32, count: usize) -> Vec<ThreadPath> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let u = i as f32 / count as f32 * TAU;
            let points = (0..=CIRCUMFERENCE_SEGMENTS)
                .map(|j| {
                    let v = j as f32 / CIRCUMFERENCE_SEGMENTS as f32 * TAU;
                    torus_point(big_r, r, u, v)
                })
                .collect();
            ThreadPath {
                points,
                color: lerp_rgb(palette_dark(), palette_primary(), i as f32 / count as f32),
                base_opacity: 0.3,
            }
        })
        .collect()
}

fn spiral_threads(big_r: f32, r: f32, count: usize, wraps: u32, reverse: bool) -> Vec<ThreadPath> {
    let direction = if reverse { -1.0 } else { 1.0 };
    (0..count)
        .into_par_iter()
        .map(|i| {
            let offset = i as f32 / count as f32 * TAU;
            let points = (0..=SPIRAL_SEGMENTS)
                .map(|j| {
                    let t = j as f32 / SPIRAL_SEGMENTS as f32;
                    let u = t * TAU;
                    let v = offset + direction * t * TAU * wraps as f32;
                    torus_point(big_r, r, u, v)
                })
                .collect();
            let t = i as f32 / count as f32;
            let (color, base_opacity) = if reverse {
                (lerp_rgb(palette_dark(), palette_bright(), t), 0.28)
            } else {
                (lerp_rgb(palette_bright(), palette_primary(), t), 0.32)
            };
            ThreadPath {
                points,
                color,
                base_opacity,
            }
        })
        .collect()
}

// Short chords hugging the tube surface; together with the reversed
// set they form the cross pattern.
fn cross_threads(big_r: f32, r: f32, count: usize, reverse: bool) -> Vec<ThreadPath> {
    let direction = if reverse { -1.0 } else { 1.0 };
    let tube = if reverse { r * 0.98 } else { r * 1.02 };
    let twist = direction * 6.0;
    (0..count)
        .into_par_iter()
        .map(|i| {
            let t = i as f32 / count as f32;
            let u1 = t * TAU;
            let v1 = direction * t * TAU * 4.0;
            let u2 = u1 + (TAU / count as f32) * twist;
            let v2 = v1 + direction * TAU * 0.25;

            let points = vec![torus_point(big_r, tube, u1, v1), torus_point(big_r, tube, u2, v2)];
            let (color, base_opacity) = if reverse {
                (lerp_rgb(palette_dark(), palette_primary(), t), 0.35)
            } else {
                (lerp_rgb(palette_primary(), palette_bright(), t), 0.4)
            };
            ThreadPath {
                points,
                color,
                base_opacity,
            }
        })
        .collect()
}

/// Build every thread layer of the ring.
pub fn build_threads(config: &RingConfig) -> Vec<ThreadPath> {
    let big_r = config.major_radius;
    let r = config.minor_radius;

    let mut threads = longitudinal_threads(big_r, r, config.longitudinal_count);
    threads.extend(circumference_threads(big_r, r, config.circumference_count));
    threads.extend(spiral_threads(
        big_r,
        r,
        config.spiral_count,
        config.spiral_wraps,
        false,
    ));
    threads.extend(spiral_threads(
        big_r,
        r,
        config.spiral_count,
        config.spiral_wraps,
        true,
    ));
    threads.extend(cross_threads(big_r, r, config.cross_count, false));
    threads.extend(cross_threads(big_r, r, config.cross_count, true));
    threads
}

/// Dust particles scattered over a thickened torus shell.
pub fn scatter_particles<R: rand::Rng>(config: &RingConfig, rng: &mut R) -> Vec<Vec3> {
    (0..config.particle_count)
        .map(|_| {
            let u = rng.gen_range(0.0..TAU);
            let v = rng.gen_range(0.0..TAU);
            let r = config.minor_radius * 1.25 + rng.gen_range(0.0..config.minor_radius);
            torus_point(config.major_radius, r, u, v)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> RingConfig {
        RingConfig {
            major_radius: 8.0,
            minor_radius: 2.0,
            longitudinal_count: 12,
            circumference_count: 10,
            spiral_count: 6,
            spiral_wraps: 12,
            cross_count: 8,
            particle_count: 50,
            base_position: [-6.0, 2.0, -14.0],
            scroll_travel: [14.0, -7.0, 5.0],
            snap: 0.001,
            shimmer_speed: 1.2,
        }
    }

    #[test]
    fn test_torus_point_lies_on_tube() {
        // Distance from the major circle must equal the tube radius.
        for i in 0..32 {
            for j in 0..32 {
                let u = i as f32 / 32.0 * TAU;
                let v = j as f32 / 32.0 * TAU;
                let p = torus_point(8.0, 2.0, u, v);
                let ring_distance = (p.x * p.x + p.y * p.y).sqrt() - 8.0;
                let tube_distance = (ring_distance * ring_distance + p.z * p.z).sqrt();
                assert!((tube_distance - 2.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_layer_counts_match_config() {
        let config = test_config();
        let threads = build_threads(&config);
        // longitudinal + circumference + 2x spirals + 2x cross
        assert_eq!(threads.len(), 12 + 10 + 6 * 2 + 8 * 2);
        assert!(threads.iter().all(|t| t.points.len() >= 2));
    }

    #[test]
    fn test_opacities_are_visible_fractions() {
        let threads = build_threads(&test_config());
        for thread in &threads {
            assert!(thread.base_opacity > 0.0 && thread.base_opacity < 1.0);
        }
    }

    #[test]
    fn test_particles_stay_near_the_ring() {
        let config = test_config();
        let mut rng = rand::thread_rng();
        let particles = scatter_particles(&config, &mut rng);
        assert_eq!(particles.len(), 50);
        for p in &particles {
            let ring_distance = (p.x * p.x + p.y * p.y).sqrt() - config.major_radius;
            let shell = (ring_distance * ring_distance + p.z * p.z).sqrt();
            assert!(shell <= config.minor_radius * 2.25 + 1e-3);
        }
    }
}
