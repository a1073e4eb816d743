pub mod geometry;
pub mod particle;
pub mod render;
pub mod rng;
pub mod simulation;
