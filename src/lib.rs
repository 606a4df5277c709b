// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Converts neuron morphology and network descriptions into a
//! visualization scene tree.
//!
//! Segments become sphere and cylinder primitives tagged with the segment
//! groups they (transitively) belong to. Reserved anatomical groups feed a
//! single color-coded `Cell Regions` node, channel densities become
//! per-channel overlay regions, and network populations expand into one
//! named branch per member.
//!
//! # Key entry points
//!
//! - [`populate_visual_tree`] - fill a [`scene::VisualizationTree`] from a
//!   [`model::ModelDocument`]
//! - [`PopulateContext`] - aspect id, [`registry::ComponentRegistry`],
//!   [`registry::EntityRegistry`] and [`options::Options`] for one run
//! - [`membership::SegmentMembership`] - segment id to containing groups,
//!   closed over include chains
//!
//! The transformation is synchronous and performs no I/O; loading documents
//! and options from disk is left to [`model::ModelDocument::load`] and
//! [`options::Options::load`].

pub mod assembler;
pub mod density;
pub mod error;
pub mod geometry;
pub mod membership;
pub mod model;
pub mod network;
pub mod options;
pub mod regions;
pub mod registry;
pub mod scene;

pub use assembler::{populate_visual_tree, PopulateContext, PopulateStats};
pub use error::MorphovizError;
