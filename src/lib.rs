//! create-stencil-components scaffolds a Stencil component library.
//! It merges a base template with one framework variant, then substitutes
//! `{{TOKEN}}` placeholders in directory names, file names and text contents.

/// Preloaded project options (stdin JSON)
pub mod answers;

/// Identifier case conversions
pub mod case;

/// Command-line interface module
pub mod cli;

/// Project configuration and validation
pub mod config;

/// Error types and handling
pub mod error;

/// Orchestration of a generation run
pub mod generator;

pub mod logger;

/// Base + variant tree merging
pub mod merger;

/// Git initialization and dependency installation
pub mod post_gen;

/// Token substitution in file contents
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Token substitution in entry names
pub mod renamer;

/// The `{{TOKEN}}` substitution engine
pub mod renderer;

/// Template kinds and directory layout
pub mod template;

/// The token table of a run
pub mod variables;
