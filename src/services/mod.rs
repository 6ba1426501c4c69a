//! Business operations on top of [`crate::store::ProductStore`].
//!
//! Each function takes the store explicitly so handlers and tests can hand in
//! whichever backend they hold.

pub mod product;
pub mod report;
pub mod stock;
