//! Smart Laziness - Self-assessment and efficiency habit tracking service
//!
//! This crate implements the backend for the Smart Laziness program:
//! a workaholism-symptom questionnaire, a log of efficiency decisions,
//! a shared bank of automation recipes, and aggregate team metrics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
