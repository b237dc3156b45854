//! Blockfall (workspace facade crate).
//!
//! This package keeps a single `blockfall::{adapter,core,engine,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use blockfall_adapter as adapter;
pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;
