//! Configuration models.

pub mod theme;
