//! linexml - convert line-delimited people records into an XML tree.
//!
//! This crate provides the `linexml` command-line tool. Parsing and XML
//! serialization live in [`linexml_records`]; this crate adds output
//! configuration, alternative renderings and the CLI.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
