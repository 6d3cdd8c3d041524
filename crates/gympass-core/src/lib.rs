//! # gympass-core
//!
//! Core types, geo-distance calculation, ID generation, and error types for gympass.
//!
//! This crate provides the foundational types shared across all gympass crates:
//! - Entity structs for gyms and check-ins
//! - Great-circle distance between coordinates (the geofencing primitive)
//! - ID prefix constants and random ID generation
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod geo;
pub mod ids;

/// Number of records returned per page by every paginated listing.
pub const PAGE_SIZE: u32 = 20;

/// Zero-based offset of the first record on a 1-indexed `page`.
///
/// Page `0` is treated as page `1`.
#[must_use]
pub const fn page_offset(page: u32) -> u64 {
    let page = if page == 0 { 1 } else { page };
    (page as u64 - 1) * PAGE_SIZE as u64
}
