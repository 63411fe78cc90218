//! Travel cost calculator server.
//!
//! Looks up the driving time between two UK postcodes and prices the
//! journey from an hourly rate: time-based cost plus a flat call-out fee.

pub mod calculate;
pub mod config;
pub mod domain;
pub mod travel;
pub mod web;
