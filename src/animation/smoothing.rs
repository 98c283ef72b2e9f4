// src/animation/smoothing.rs
//
// Frame-rate-independent exponential smoothing.
// current += (target - current) * factor, with factor derived from dt
// so perceived speed does not depend on the frame rate.

use nannou::prelude::*;

/// Fraction of the remaining gap closed after `dt` seconds, given the
/// fraction `snap` that should remain after one full second.
pub fn decay_factor(snap: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    let snap = snap.clamp(1e-6, 0.999_999);
    1.0 - snap.powf(dt)
}

#[derive(Debug, Clone, Copy)]
pub struct Smoothed {
    current: f32,
    target: f32,
    snap: f32,
}

impl Smoothed {
    pub fn new(value: f32, snap: f32) -> Self {
        Self {
            current: value,
            target: value,
            snap,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to a value, skipping the filter.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    pub fn update(&mut self, dt: f32) -> f32 {
        let factor = decay_factor(self.snap, dt);
        self.current += (self.target - self.current) * factor;
        self.current
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SmoothedVec3 {
    current: Vec3,
    target: Vec3,
    snap: f32,
}

impl SmoothedVec3 {
    pub fn new(value: Vec3, snap: f32) -> Self {
        Self {
            current: value,
            target: value,
            snap,
        }
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn update(&mut self, dt: f32) -> Vec3 {
        let factor = decay_factor(self.snap, dt);
        self.current += (self.target - self.current) * factor;
        self.current
    }

    pub fn value(&self) -> Vec3 {
        self.current
    }
}
