// src/core/mod.rs
pub mod engine;
pub mod language;
pub mod matcher;
pub mod types;
