//! Subcommands

pub mod catalog;
pub mod classify;
pub mod info;
