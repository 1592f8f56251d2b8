//! View-state layer - pure layout computation.
//!
//! # Module Structure
//!
//! - `layout`: column widths and viewport height from terminal dimensions

pub mod layout;

pub use layout::{compute_columns, compute_viewport_height, ChromeOverhead, Column};
