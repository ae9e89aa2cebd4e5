//! Wavedrift library - flowing noise-wave background animation

pub mod cli;
pub mod clock;
pub mod noise;
pub mod panel;
pub mod params;
pub mod rendering;
pub mod stroke;
pub mod viewport;
pub mod waves;
