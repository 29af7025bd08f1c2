//! # Domain Models
//!
//! Pure storefront types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod envelope;
pub mod identity;
pub mod registry;
