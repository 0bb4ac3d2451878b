//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod compare;
pub mod maps;
pub mod projects;
pub mod report;
pub mod series;
pub mod strains;
pub mod summary;
