// src/animation/fan.rs
//
// The per-card transform function for the fan carousel.
//
// Everything here is a pure function of (card index, active index):
// translation spreads linearly from the active card, rotation fans
// outward up to a maximum angle, scale and opacity fall off linearly
// down to their floors, and stacking order drops with distance so
// cards near the active index always paint on top.

use crate::config::FanConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Fan rotation in degrees; negative left of the active card.
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_order: i32,
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FanLayout {
    pub spread_x: f32,
    pub spread_y: f32,
    pub rotation_step: f32,
    pub max_rotation: f32,
    pub scale_falloff: f32,
    pub scale_floor: f32,
    pub opacity_falloff: f32,
    pub opacity_floor: f32,
    pub z_base: i32,
    pub z_weight: f32,
}

impl FanLayout {
    pub fn from_config(config: &FanConfig) -> Self {
        Self {
            spread_x: config.spread_x,
            spread_y: config.spread_y,
            rotation_step: config.rotation_step,
            max_rotation: config.max_rotation,
            scale_falloff: config.scale_falloff,
            scale_floor: config.scale_floor,
            opacity_falloff: config.opacity_falloff,
            opacity_floor: config.opacity_floor,
            z_base: config.z_base,
            z_weight: config.z_weight,
        }
    }

    pub fn card_transform(&self, index: usize, active: f32) -> CardTransform {
        let relative = index as f32 - active;
        let distance = relative.abs();

        let rotation =
            (relative * self.rotation_step).clamp(-self.max_rotation, self.max_rotation);

        CardTransform {
            translate_x: relative * self.spread_x,
            translate_y: distance * self.spread_y,
            rotation,
            scale: (1.0 - distance * self.scale_falloff).max(self.scale_floor),
            opacity: (1.0 - distance * self.opacity_falloff).max(self.opacity_floor),
            // Rounding buckets are z_weight wide: two cards whose distances
            // round to the same bucket share a z_order.
            z_order: self.z_base - (distance * self.z_weight).round() as i32,
            interactive: distance < 0.5,
        }
    }
}
