//! SkillForge client
//!
//! Terminal client for the SkillForge training recommendation service: look a
//! member up by id, show the recommended trainings as tags, and report the
//! service's health in a transient banner.
//!
//! Layering follows a pure core / impure shell split: `model` and `state` are
//! plain data and transitions, `controller` drives them through the
//! `port::RenderPort` seam, and `service` and `view` own all I/O.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod port;
pub mod service;
pub mod state;
pub mod view;
