//! Shared payload types between the PrintDesk dashboard and its REST backend.
//!
//! Everything here is plain data mirrored from the backend plus the small
//! amount of pure logic the views need (grouping, filtering, totals,
//! validation). Nothing in this crate touches the DOM, so it is tested natively.

pub mod domain;
pub mod shared;
pub mod system;
