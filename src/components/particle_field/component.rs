//! Leptos component hosting the particle field canvas.
//!
//! On mount the canvas is sized to the viewport, a pool is generated and the
//! frame loop starts. A window `resize` regenerates the pool synchronously
//! inside the handler, so a frame never sees a half-built pool. When the
//! owning view is cleaned up the loop and the listener are dropped, which
//! cancels the pending frame and detaches the handler.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::lifecycle::{FrameLoop, LoopState, WindowListener};
use super::particles::ParticlePool;
use super::render;
use super::theme::FieldTheme;

/// Simulation state shared by the resize handler and the frame loop.
struct FieldContext {
	pool: ParticlePool,
	theme: FieldTheme,
	rng: StdRng,
}

/// Keeps a mounted field alive. Dropping it tears the field down.
struct FieldRuntime {
	_frame_loop: FrameLoop,
	_resize: WindowListener,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn field_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	}
}

/// Sets up the field on `canvas`. `None` when there is no window, no 2D
/// context or the resize listener cannot be registered.
fn mount(canvas: HtmlCanvasElement, theme: FieldTheme) -> Option<FieldRuntime> {
	let window: Window = web_sys::window()?;
	let ctx = context_2d(&canvas)?;
	let (width, height) = viewport_size(&window)?;
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);

	let mut rng = field_rng(theme.seed);
	let pool = ParticlePool::new(&theme, width, height, &mut rng);
	info!(
		"particle-field: mounted {} particles on {}x{}",
		pool.particles().len(),
		width,
		height
	);
	let context = Rc::new(RefCell::new(FieldContext { pool, theme, rng }));

	let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
	let resize = WindowListener::attach(&window, "resize", move || {
		let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		let mut guard = context_resize.borrow_mut();
		let c = &mut *guard;
		if (nw, nh) == (c.pool.width(), c.pool.height()) {
			return;
		}
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		c.pool.regenerate(&c.theme, nw, nh, &mut c.rng);
		debug!("particle-field: regenerated pool for {}x{}", nw, nh);
	})?;

	let context_frame = context;
	let frame_loop = FrameLoop::start(move || {
		let mut c = context_frame.borrow_mut();
		c.pool.step();
		render::render(&c.pool, &ctx, &c.theme);
	});
	if frame_loop.state() == LoopState::Stopped {
		debug!("particle-field: animation frames unavailable, showing nothing");
	}

	Some(FieldRuntime {
		_frame_loop: frame_loop,
		_resize: resize,
	})
}

/// Ambient background of drifting dots joined by faint lines.
///
/// Fills the viewport behind all other content and ignores pointer events.
/// `class` is appended to the canvas classes; `theme` overrides the look.
/// If the canvas has no 2D context the component renders nothing.
#[component]
pub fn ParticleField(
	/// Extra classes for the canvas.
	#[prop(optional, into)]
	class: Option<String>,
	/// Look of the field; defaults to [`FieldTheme::default`].
	#[prop(optional)]
	theme: Option<FieldTheme>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime = StoredValue::new_local(None::<FieldRuntime>);
	let theme = theme.unwrap_or_default();

	let style = format!(
		"position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -10; \
		 pointer-events: none; opacity: {};",
		theme.surface_opacity
	);
	let class = match class {
		Some(extra) => format!("particle-field {extra}"),
		None => "particle-field".to_string(),
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		// Tear down a previous mount before starting a new loop.
		runtime.update_value(|slot| drop(slot.take()));
		let mounted = mount(canvas, theme.clone());
		if mounted.is_none() {
			debug!("particle-field: no drawing surface, skipping setup");
		}
		runtime.update_value(|slot| *slot = mounted);
	});

	on_cleanup(move || {
		runtime.try_update_value(|slot| slot.take());
	});

	view! { <canvas node_ref=canvas_ref class=class style=style aria-hidden="true" /> }
}
