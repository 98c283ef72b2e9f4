pub mod deck;
pub mod spatial;
pub mod torus;

pub use deck::{Card, Deck};
pub use spatial::Pose;
pub use torus::{build_threads, scatter_particles, torus_point, ThreadPath};
