//! Blueprints Scoring - score dice buildings against their blueprints
//!
//! A building is a 3x2 grid of dice stacks. Each die has a material (glass,
//! recycled, stone, wood) and a face value. A building is scored per material,
//! plus a bonus when its stack heights match the blueprint exactly. Any rule
//! violation scores the whole building 0.

pub mod app;
pub mod blueprint;
pub mod building;
pub mod core;
pub mod scorers;
pub mod scoring;
pub mod violations;
