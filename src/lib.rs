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
// Complexity limits (thresholds in clippy.toml)
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

//! Per-residue score coloring for protein structure viewers.
//!
//! Resicolor turns per-residue scores stored in structure metadata (AlphaFold
//! pLDDT confidence, interaction-interface flags, physicochemical values) into
//! residue colors. It never renders anything itself: a host viewer resolves
//! residues, asks a theme for a color, and draws.
//!
//! # Key entry points
//!
//! - [`score::build`] - index per-residue records by [`score::ResidueIndex`]
//! - [`color::GradientPalette`] - discrete multi-stop RGB gradient
//! - [`theme`] - score / category coloring modes over an index
//! - [`store::ScoreStore`] - per-structure score indices, attached on load
//! - [`options::Options`] - color palettes and gradient settings (TOML)
//!
//! # Data flow
//!
//! The host hands over the structure's `seq_label` metadata as a
//! [`table::MetadataBlock`] together with a [`resolver::ResidueResolver`].
//! [`store::ScoreStore::attach`] builds one [`score::ScoreIndex`] per score
//! kind present in the block. Themes borrow those indices and answer color
//! queries per residue until the structure is detached.

pub mod color;
pub mod error;
pub mod options;
pub mod resolver;
pub mod score;
pub mod store;
pub mod table;
pub mod theme;
pub mod viewer;
