//! Browser registrations owned by the particle field.
//!
//! Both handles release what they registered when dropped: the frame loop
//! cancels its pending `requestAnimationFrame` and frees its callback, the
//! listener detaches itself from the window. Tearing down the component is
//! therefore just dropping them.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Where the frame loop stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// A frame is requested.
	Running {
		/// Cancels the requested frame.
		handle: i32,
	},
	/// No frame is pending and none will be requested again.
	Stopped,
}

/// Source of frame callbacks for a [`FrameLoop`].
pub trait FrameScheduler {
	/// Asks for one more frame. `None` when no frame can be scheduled.
	fn request(&self) -> Option<i32>;

	/// Cancels the frame identified by `handle`.
	fn cancel(&self, handle: i32);

	/// Frees the registered callback; no later frame may reach the loop.
	fn release(&self);
}

/// `requestAnimationFrame` on the current window.
#[derive(Default)]
pub struct AnimationFrames {
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameScheduler for AnimationFrames {
	fn request(&self) -> Option<i32> {
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		web_sys::window()?
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel(&self, handle: i32) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}

	fn release(&self) {
		self.callback.borrow_mut().take();
	}
}

struct LoopInner<S> {
	state: Cell<LoopState>,
	scheduler: S,
	on_frame: RefCell<Box<dyn FnMut()>>,
}

impl<S: FrameScheduler> LoopInner<S> {
	fn new(scheduler: S, on_frame: impl FnMut() + 'static) -> Rc<Self> {
		Rc::new(Self {
			state: Cell::new(LoopState::Stopped),
			scheduler,
			on_frame: RefCell::new(Box::new(on_frame)),
		})
	}

	/// One delivered frame. A stopped loop ignores it and never reschedules.
	fn tick(&self) {
		if self.state.get() == LoopState::Stopped {
			return;
		}
		{
			let mut on_frame = self.on_frame.borrow_mut();
			(*on_frame)();
		}
		self.request_next();
	}

	fn request_next(&self) {
		match self.scheduler.request() {
			Some(handle) => self.state.set(LoopState::Running { handle }),
			None => {
				warn!("particle-field: could not request an animation frame, loop stopped");
				self.state.set(LoopState::Stopped);
			}
		}
	}
}

/// Self-rescheduling frame loop with explicit cancellation.
///
/// The scheduled callback only holds a weak reference back to the loop, so
/// the loop is owned solely by this handle.
pub struct FrameLoop<S: FrameScheduler = AnimationFrames> {
	inner: Rc<LoopInner<S>>,
}

impl FrameLoop<AnimationFrames> {
	/// Requests the first frame; `on_frame` then runs once per display refresh.
	pub fn start(on_frame: impl FnMut() + 'static) -> Self {
		let inner = LoopInner::new(AnimationFrames::default(), on_frame);

		let weak: Weak<LoopInner<AnimationFrames>> = Rc::downgrade(&inner);
		let callback: Closure<dyn FnMut()> = Closure::new(move || {
			if let Some(inner) = weak.upgrade() {
				inner.tick();
			}
		});
		*inner.scheduler.callback.borrow_mut() = Some(callback);

		Self::begin(inner)
	}
}

impl<S: FrameScheduler> FrameLoop<S> {
	/// Like [`FrameLoop::start`], with frames delivered by `scheduler`.
	pub fn with_scheduler(scheduler: S, on_frame: impl FnMut() + 'static) -> Self {
		Self::begin(LoopInner::new(scheduler, on_frame))
	}

	fn begin(inner: Rc<LoopInner<S>>) -> Self {
		inner.request_next();
		Self { inner }
	}

	/// Current state; `Stopped` once stopped or if no frame could be requested.
	pub fn state(&self) -> LoopState {
		self.inner.state.get()
	}

	/// Cancels the pending frame and frees the callback. Safe to call twice.
	pub fn stop(&self) {
		if let LoopState::Running { handle } = self.inner.state.replace(LoopState::Stopped) {
			self.inner.scheduler.cancel(handle);
			info!("particle-field: frame loop stopped");
		}
		self.inner.scheduler.release();
	}
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
	fn drop(&mut self) {
		self.stop();
	}
}

/// An event listener on the window, removed on drop.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	/// Returns `None` if the browser refused the registration.
	pub fn attach(window: &Window, event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
		let callback: Closure<dyn FnMut()> = Closure::new(handler);
		window
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.ok()?;
		Some(Self { event, callback })
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		}
	}
}
