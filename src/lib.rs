//! research-dashboard: browser front end pieces for the qualitative research assistant.
//!
//! This crate provides the WASM dashboard's ambient particle background,
//! project status badges and the placeholder services the screens talk to
//! until the real backend lands.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Enables the `js` entropy source for `rand` on wasm32.
use getrandom as _;

pub mod components;
pub mod services;

pub use components::particle_field::{FieldTheme, ParticleField};
pub use components::status_badge::{BadgeSize, ProjectStatus, StatusBadge};
pub use services::{MockBackend, ResearchBackend};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("research-dashboard: logging initialized");
}

/// Parses the page-embedded theme override, falling back to defaults when it
/// is malformed or asks for something the renderer cannot draw.
pub fn parse_field_theme(json: Option<&str>) -> FieldTheme {
	let Some(json) = json else {
		return FieldTheme::default();
	};
	let theme = match FieldTheme::from_json(json) {
		Ok(theme) => theme,
		Err(e) => {
			warn!("research-dashboard: ignoring malformed field theme: {}", e);
			return FieldTheme::default();
		}
	};
	if let Err(e) = theme.validate() {
		warn!("research-dashboard: ignoring invalid field theme: {}", e);
		return FieldTheme::default();
	}
	info!("research-dashboard: field theme override with {} particles", theme.count);
	theme
}

/// Reads the text of the `<script id="field-theme">` element, if any.
fn field_theme_json() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-theme")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Mounts the particle background behind a minimal overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = parse_field_theme(field_theme_json().as_deref());
	let methodologies = MockBackend::new().methodologies();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Research Dashboard" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleField theme=theme />
		<main class="dashboard-overlay">
			<header>
				<h1>"Research Dashboard"</h1>
				<StatusBadge status=ProjectStatus::InProgress size=BadgeSize::Sm />
			</header>
			<p class="subtitle">"Methodologies available to your agents"</p>
			<ul class="methodologies">
				{methodologies
					.into_iter()
					.map(|m| view! { <li title=m.description>{m.name}</li> })
					.collect_view()}
			</ul>
		</main>
	}
}
