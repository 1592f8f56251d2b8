//! Shell History Browser (cmdhist)
//!
//! Interactive terminal browser over shell history: a single-line query narrows
//! a table of recent commands (time, directory, command) by substring match, the
//! arrow keys move the selection, and the layout reflows on resize.
//!
//! The crate follows a Pure Core / Impure Shell split. `filter`, `state`, and
//! `view_state` are pure; `view` owns the terminal and the event loop.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
