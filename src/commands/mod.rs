//! CLI command implementations for fgranges.
//!
//! Each submodule implements a single subcommand.
//!
//! # Command Categories
//!
//! ## Ordering
//! - [`order`] - Stable sort order of integer values
//! - [`dedup`] - Sort and remove duplicate values
//!
//! ## Ranges
//! - [`shift`] - Shift ranges into another coordinate frame
//! - [`group`] - Group values by group id

#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

pub mod command;
pub mod common;
pub mod dedup;
pub mod group;
pub mod order;
pub mod shift;
