//! Ambient particle field background.
//!
//! Renders a viewport-sized canvas behind the page with:
//! - A fixed-size pool of translucent dots drifting at constant speed
//! - Reflection off the surface edges (velocity sign flip, no clamping)
//! - Faint lines between dots closer than a threshold, fading with distance
//! - Wholesale pool regeneration when the viewport is resized
//!
//! # Example
//!
//! ```ignore
//! use research_dashboard::{FieldTheme, ParticleField};
//!
//! let theme = FieldTheme { count: 80, ..FieldTheme::default() };
//! view! { <ParticleField class="dimmed" theme=theme /> }
//! ```

mod component;
mod lifecycle;
pub mod particles;
mod render;
pub mod theme;

pub use component::ParticleField;
pub use lifecycle::{AnimationFrames, FrameLoop, FrameScheduler, LoopState};
pub use particles::{Link, Particle, ParticlePool};
pub use theme::{Color, FieldTheme, MAX_PARTICLES, Range, ThemeError};
