//! Library exports for the xscriber overlay.
//!
//! The binary is a thin shell over [`backend::run_x11`]; the pipeline itself is
//! generic over [`display::DisplayServer`] so it can be driven without an X server.

pub mod backend;
pub mod capture;
pub mod config;
pub mod display;
pub mod draw;
pub mod input;

pub use config::Config;
