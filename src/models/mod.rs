//! Data models for option-price surfaces
//!
//! This module contains the data structure for the solved surface grid the
//! plotter renders.

mod surface;

pub use surface::*;
