// src/views/mod.rs

pub mod fan_view;
pub mod ring_view;

pub use fan_view::FanView;
pub use ring_view::RingView;
