//! SDR Intake - Multi-step lead intake questionnaire
//!
//! Collects a prospect's organization, sales operations, technical
//! environment and AI SDR requirements across a four-step wizard, keeps a
//! local draft while they work, and writes the finished questionnaire as a
//! parent submission with section records and one row per multi-choice
//! selection.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
