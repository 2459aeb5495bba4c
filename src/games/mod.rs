//! Game implementations.

pub mod twenty_one;
