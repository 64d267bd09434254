//! View components.

pub mod particle_field;
pub mod status_badge;
