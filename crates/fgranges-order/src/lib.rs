#![deny(unsafe_code)]

//! Reproducible ordering of key arrays.
//!
//! This crate provides the ordering primitives that every sort, group and dedup
//! operation in fgranges is built on:
//! - Stable single-key and two-key permutations (`get_order`, `get_order_two_key`)
//! - Plain value sorting with no permutation retained (`sort_in_place`)
//!
//! The permutations are computed with an unstable sort underneath. Stability comes
//! from an explicit final tie-break on the original index, which always sorts the
//! smaller index first regardless of the requested [`Direction`].

pub mod direction;
pub mod order;

// Re-export submodule contents at crate root for convenience
pub use direction::Direction;
pub use order::{
    base_fits, get_order, get_order_into, get_order_two_key, get_order_two_key_into, permute,
    sort_in_place,
};
