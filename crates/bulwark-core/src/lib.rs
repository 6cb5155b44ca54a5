//! Core types and definitions for the BULWARK wave engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, events, constants, and the difficulty scaling laws.
//! It has no dependency on any runtime framework.

pub mod components;
pub mod constants;
pub mod difficulty;
pub mod events;
