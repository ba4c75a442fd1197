//! Output formatting for command results

pub mod human;

pub use human::HumanFormatter;
