#![forbid(unsafe_code)]

//! Websites: open web pages from short commands
//!
//! Each site adapter maps a handful of tokens (a repository abbreviation and
//! a command, a documentation section and a term) to a URL, which is then
//! handed to the operating system's default opener.

pub mod cli;
pub mod command;
pub mod cursor;
pub mod error;
pub mod output;
pub mod refs;
pub mod runner;
pub mod sites;
