// src/animation/float.rs
//
// Idle "floating" micro-motion. Small sinusoidal offsets driven by
// wall-clock time, added on top of the scroll-derived base transform.

use nannou::prelude::*;

/// Vertical bob and rotation wobble for the active card.
#[derive(Debug, Clone, Copy)]
pub struct CardFloat {
    pub amplitude: f32,
    pub rotation: f32,
}

impl CardFloat {
    pub fn offsets(&self, time: f32) -> (f32, f32) {
        let float_y = (time * 0.5).sin() * self.amplitude;
        let float_rotate = (time * 0.3).sin() * self.rotation;
        (float_y, float_rotate)
    }
}

/// 3D wobble for the decorative ring: gentle position drift plus
/// per-axis rotation sway. Time comes from the host clock, so the
/// motion speed is frame-rate independent by construction.
#[derive(Debug, Clone, Copy)]
pub struct RingFloat;

impl RingFloat {
    pub fn position_offset(time: f32) -> Vec3 {
        vec3(
            (time * 0.2).sin() * 0.015,
            (time * 0.15).cos() * 0.02,
            0.0,
        )
    }

    pub fn rotation_offset(time: f32) -> Vec3 {
        vec3(
            (time * 0.08).sin() * 0.1,
            time * 0.03,
            (time * 0.06).cos() * 0.08,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_float_is_bounded() {
        let float = CardFloat {
            amplitude: 4.0,
            rotation: 1.5,
        };
        for step in 0..1000 {
            let t = step as f32 * 0.05;
            let (y, r) = float.offsets(t);
            assert!(y.abs() <= 4.0 + 1e-6);
            assert!(r.abs() <= 1.5 + 1e-6);
        }
    }

    #[test]
    fn test_card_float_is_deterministic() {
        let float = CardFloat {
            amplitude: 4.0,
            rotation: 1.5,
        };
        assert_eq!(float.offsets(1.25), float.offsets(1.25));
    }

    #[test]
    fn test_ring_wobble_is_bounded() {
        for step in 0..1000 {
            let t = step as f32 * 0.1;
            let p = RingFloat::position_offset(t);
            assert!(p.x.abs() <= 0.015 + 1e-6);
            assert!(p.y.abs() <= 0.02 + 1e-6);
            assert_eq!(p.z, 0.0);
        }
    }
}
