//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands take the
//! generator by `&mut` so the caller decides which engine drives them.

pub mod bench;
pub mod draw;
pub mod validate;
