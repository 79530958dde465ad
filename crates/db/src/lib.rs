//! Typed row shapes for the Millennium database.
//!
//! This crate carries the shape contract only. Queries belong to the
//! applications that own them.

pub mod models;
