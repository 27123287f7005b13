//! # rmap-core
//!
//! Core types, level ranks, and error types for rmap.
//!
//! This crate provides the foundational types shared across all rmap crates:
//! - Entity structs for the skill catalog (domains, categories, options)
//! - Advisory rules that rewrite option notes based on earlier answers
//! - Level, tag, selection-policy, and step enums
//! - Ordinal ranks for comparing expertise with required levels
//! - The questionnaire selection state
//! - Questionnaire error types
//! - View and response types handed to presentation layers

pub mod entities;
pub mod enums;
pub mod errors;
pub mod level;
pub mod responses;
pub mod state;
