// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub deck_file: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct ScrollConfig {
    pub unit: f32,        // virtual pixels of scroll per card
    pub wheel_speed: f32, // wheel delta multiplier
    pub snap: f32,        // remaining gap fraction after 1s of smoothing
}

#[derive(Debug, Deserialize)]
pub struct FanConfig {
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
    pub card_width: f32,
    pub card_height: f32,
    pub float_amplitude: f32,
    pub float_rotation: f32,
}

#[derive(Debug, Deserialize)]
pub struct RingConfig {
    pub major_radius: f32,
    pub minor_radius: f32,
    pub longitudinal_count: usize,
    pub circumference_count: usize,
    pub spiral_count: usize,
    pub spiral_wraps: u32,
    pub cross_count: usize,
    pub particle_count: usize,
    pub base_position: [f32; 3],
    pub scroll_travel: [f32; 3],
    pub snap: f32,
    pub shimmer_speed: f32,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    pub position_z: f32,
    pub fov_degrees: f32,
    pub near: f32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub stroke_weight: f32,
    pub background: [f32; 3],
}
