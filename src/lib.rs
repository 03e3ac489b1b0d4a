// src/lib.rs

//! procwatch library
//!
//! Polls a conference proceedings page, extracts candidate listing entries
//! with a set of fallback heuristics, and sends a one-time notification when
//! the target year and keyword appear together in one entry.

pub mod error;
pub mod extract;
pub mod models;
pub mod services;
pub mod storage;
