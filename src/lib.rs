//! Screening Backend - Self-scored psychological screening questionnaires
//!
//! This crate serves a fixed catalog of screening instruments, scores
//! submitted responses, validates respondent contact details, and persists
//! finished results to a headless content store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
