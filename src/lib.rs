//! VastuVista - Rule-based Vastu Shastra analysis engine.
//!
//! This crate implements the scoring core of the VastuVista application:
//! a weighted space scorer for single rooms, a floor-plan compliance
//! checker, and the recommendation generators that sit downstream of both.

pub mod domain;
