//! Persistence contracts.

pub mod prefs;
