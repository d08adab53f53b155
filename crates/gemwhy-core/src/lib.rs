//! Core data types for gemwhy.
//!
//! This crate defines the resolved-bundle model the rest of gemwhy operates
//! on: packages, dependency requirements, the manifest (a fully resolved
//! package set plus the project's top-level requirements), and the
//! `Gemfile.lock` parser that produces it.
//!
//! This crate performs no network I/O and holds no global state.

pub mod errors;
pub mod lockfile;
pub mod package;
