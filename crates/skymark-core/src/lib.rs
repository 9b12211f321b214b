//! Skymark Core Types
//!
//! This crate provides the foundational value types for Skymark symbol
//! rendering. It includes:
//!
//! - **Colors**: Normalized RGBA colors with packed-integer and CSS color
//!   support ([`color::Rgba`])
//! - **Geometry**: Basic geometric types and the 2D affine transform used by
//!   symbol painting ([`geometry`] module)

pub mod color;
pub mod geometry;
