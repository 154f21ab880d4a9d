#![forbid(unsafe_code)]

//! Output formatters for resolved URLs

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
