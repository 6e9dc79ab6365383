//! Home Security Monitor library.
//!
//! This library provides the alarm decision engine that turns sensor
//! activity and camera frames into alarm status changes, together with the
//! collaborators it talks to (repository, image analysis, status listeners).

pub mod config;
pub mod error;
pub mod image;
pub mod input;
pub mod listeners;
pub mod repository;
pub mod security;
pub mod sensors;
