//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive `TuiApp<TestBackend>` through
//! crossterm events and inspect both state and rendered output.

mod acceptance_filtering;
mod acceptance_navigation;
