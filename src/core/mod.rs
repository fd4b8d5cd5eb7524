// src/core/mod.rs
pub mod engine;
pub mod group;
pub mod translator;
pub mod trie;
pub mod types;
