// src/core/mod.rs
pub mod classifier;
pub mod converter;
pub mod engine;
pub mod irregular;
pub mod persona;
pub mod stems;
pub mod types;
