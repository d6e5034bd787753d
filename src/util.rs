//! Shared utility modules used across assent components.

pub mod similarity;
