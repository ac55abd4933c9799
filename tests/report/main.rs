//! Report generation integration tests.
//!
//! Each test builds a results tree in a temp dir and runs the full
//! pipeline through the public API.

#[path = "../common/mod.rs"]
mod common;

mod comparison;
mod gc;
mod selection;
mod sweeps;
