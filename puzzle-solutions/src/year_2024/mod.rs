//! Solutions for the 2024 event

pub mod day_1;
