//! Island terrain generation library
//!
//! Seed-controlled procedural islands: a layered-noise heightfield shaped
//! by a parametric silhouette mask, beach/cliff shore masks derived from
//! it, and a triangulated surface mesh built from the grid.

pub mod compositor;
pub mod config;
pub mod export;
pub mod grid;
pub mod island;
pub mod mesh;
pub mod noise_field;
pub mod shape;
pub mod util;
