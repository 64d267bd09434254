//! Canvas rendering for the particle field.
//!
//! One frame is drawn in two passes: dots first, then the connecting lines
//! computed from the already-updated positions.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticlePool;
use super::theme::FieldTheme;

/// Clears the surface and paints the current state of the field.
pub fn render(pool: &ParticlePool, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, pool.width(), pool.height());
	draw_particles(pool, ctx, theme);
	draw_links(pool, ctx, theme);
}

fn draw_particles(pool: &ParticlePool, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	for p in pool.particles() {
		ctx.set_fill_style_str(&theme.color.with_alpha(p.opacity).to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_links(pool: &ParticlePool, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.set_line_width(theme.link_width);

	for link in pool.links(theme) {
		ctx.set_stroke_style_str(&theme.color.with_alpha(link.alpha).to_css());
		ctx.begin_path();
		ctx.move_to(link.from.0, link.from.1);
		ctx.line_to(link.to.0, link.to.1);
		ctx.stroke();
	}
}
