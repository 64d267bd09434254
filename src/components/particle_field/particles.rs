//! Ambient particle pool: generation, per-frame motion and the connection pass.
//!
//! Nothing here touches the browser, so the whole simulation runs (and is
//! tested) natively. Randomness is injected through [`rand::Rng`].

use rand::Rng;

use super::theme::{FieldTheme, Range};

/// A single floating dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Horizontal displacement per frame.
	pub vx: f64,
	/// Vertical displacement per frame.
	pub vy: f64,
	/// Dot radius in pixels.
	pub radius: f64,
	/// Fill alpha, fixed for the particle's lifetime.
	pub opacity: f64,
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range) -> f64 {
	if range.is_degenerate() {
		range.min
	} else {
		rng.gen_range(range.min..range.max)
	}
}

impl Particle {
	fn spawn<R: Rng + ?Sized>(theme: &FieldTheme, width: f64, height: f64, rng: &mut R) -> Self {
		let velocity = Range::new(-theme.speed, theme.speed);
		Self {
			x: sample(rng, Range::new(0.0, width)),
			y: sample(rng, Range::new(0.0, height)),
			radius: sample(rng, theme.radius),
			vx: sample(rng, velocity),
			vy: sample(rng, velocity),
			opacity: sample(rng, theme.opacity),
		}
	}

	/// Moves one frame, then reflects off any edge the new position lies beyond.
	///
	/// Position is not clamped: a particle that just crossed an edge is drawn
	/// outside the bounds for this one frame, and the flipped velocity brings
	/// it back on the next.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}
}

/// A connecting line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Position of the earlier particle in the pool.
	pub from: (f64, f64),
	/// Position of the later particle in the pool.
	pub to: (f64, f64),
	/// Stroke opacity.
	pub alpha: f64,
}

/// Stroke opacity for two particles `distance` apart, or `None` when they are
/// too far apart to be linked. Fades linearly from `max_alpha` to zero at `max_distance`.
pub fn link_alpha(distance: f64, max_distance: f64, max_alpha: f64) -> Option<f64> {
	if distance < max_distance {
		Some(max_alpha * (1.0 - distance / max_distance))
	} else {
		None
	}
}

/// Fixed-size pool of particles bouncing inside a `width` x `height` surface.
#[derive(Clone, Debug)]
pub struct ParticlePool {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticlePool {
	/// Generates `theme.count` particles inside `width` x `height`.
	pub fn new<R: Rng + ?Sized>(theme: &FieldTheme, width: f64, height: f64, rng: &mut R) -> Self {
		let mut pool = Self {
			particles: Vec::new(),
			width,
			height,
		};
		pool.regenerate(theme, width, height, rng);
		pool
	}

	/// Replaces the whole pool with fresh particles for new bounds.
	///
	/// Positions are not carried over; every particle is drawn anew.
	pub fn regenerate<R: Rng + ?Sized>(
		&mut self,
		theme: &FieldTheme,
		width: f64,
		height: f64,
		rng: &mut R,
	) {
		self.width = width;
		self.height = height;
		self.particles = (0..theme.count)
			.map(|_| Particle::spawn(theme, width, height, rng))
			.collect();
	}

	/// Advances every particle by one frame.
	pub fn step(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.advance(width, height);
		}
	}

	/// Current particles, in generation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Surface width the pool was generated for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the pool was generated for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Connection pass: every unordered pair closer than `theme.link_distance`.
	///
	/// Quadratic in the pool size, which stays small and fixed.
	pub fn links(&self, theme: &FieldTheme) -> impl Iterator<Item = Link> + '_ {
		let (max_distance, max_alpha) = (theme.link_distance, theme.link_alpha);
		self.particles.iter().enumerate().flat_map(move |(i, a)| {
			self.particles[i + 1..].iter().filter_map(move |b| {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				link_alpha(distance, max_distance, max_alpha).map(|alpha| Link {
					from: (a.x, a.y),
					to: (b.x, b.y),
					alpha,
				})
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			opacity: 0.5,
		}
	}

	fn pool_of(particles: Vec<Particle>, width: f64, height: f64) -> ParticlePool {
		ParticlePool {
			particles,
			width,
			height,
		}
	}

	#[test]
	fn regenerate_fills_pool_within_bounds() {
		let theme = FieldTheme::default();
		let mut rng = StdRng::seed_from_u64(7);
		let field = ParticlePool::new(&theme, 640.0, 480.0, &mut rng);

		assert_eq!(field.particles().len(), 50);
		for p in field.particles() {
			assert!((0.0..640.0).contains(&p.x));
			assert!((0.0..480.0).contains(&p.y));
			assert!((0.5..2.5).contains(&p.radius));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((0.1..0.6).contains(&p.opacity));
		}
	}

	#[test]
	fn regenerate_replaces_previous_pool() {
		let theme = FieldTheme::default();
		let mut rng = StdRng::seed_from_u64(11);
		let mut field = ParticlePool::new(&theme, 1024.0, 768.0, &mut rng);
		let before = field.particles().to_vec();

		field.regenerate(&theme, 1024.0, 768.0, &mut rng);
		assert_eq!(field.particles().len(), before.len());
		assert_ne!(field.particles(), before.as_slice());

		field.regenerate(&theme, 200.0, 100.0, &mut rng);
		assert_eq!(field.particles().len(), 50);
		assert_eq!((field.width(), field.height()), (200.0, 100.0));
		assert!(
			field
				.particles()
				.iter()
				.all(|p| p.x < 200.0 && p.y < 100.0)
		);
	}

	#[test]
	fn same_seed_same_layout() {
		let theme = FieldTheme::default();
		let a = ParticlePool::new(&theme, 300.0, 300.0, &mut StdRng::seed_from_u64(3));
		let b = ParticlePool::new(&theme, 300.0, 300.0, &mut StdRng::seed_from_u64(3));
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn zero_sized_surface_does_not_panic() {
		let theme = FieldTheme::default();
		let mut field = ParticlePool::new(&theme, 0.0, 0.0, &mut StdRng::seed_from_u64(1));
		assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
		for _ in 0..10 {
			field.step();
		}
		let bound = theme.speed;
		assert!(
			field
				.particles()
				.iter()
				.all(|p| p.x.abs() <= bound && p.y.abs() <= bound)
		);
	}

	#[test]
	fn huge_speed_does_not_panic() {
		let theme = FieldTheme::from_json(r#"{ "speed": 1e308 }"#).unwrap();
		let field = ParticlePool::new(&theme, 100.0, 100.0, &mut StdRng::seed_from_u64(1));

		assert_eq!(field.particles().len(), theme.count);
		// The velocity span overflows, so it collapses to its lower bound.
		assert!(field.particles().iter().all(|p| p.vx == -1e308 && p.vy == -1e308));
	}

	#[test]
	fn stays_within_one_frame_overshoot() {
		let theme = FieldTheme::default();
		let (w, h) = (120.0, 80.0);
		let mut field = ParticlePool::new(&theme, w, h, &mut StdRng::seed_from_u64(42));
		let eps = theme.speed;

		for _ in 0..20_000 {
			field.step();
			for p in field.particles() {
				assert!(p.x >= -eps && p.x <= w + eps, "x out of range: {}", p.x);
				assert!(p.y >= -eps && p.y <= h + eps, "y out of range: {}", p.y);
			}
		}
	}

	#[test]
	fn speed_is_preserved() {
		let theme = FieldTheme::default();
		let mut field = ParticlePool::new(&theme, 50.0, 50.0, &mut StdRng::seed_from_u64(5));
		let initial: Vec<(f64, f64)> = field
			.particles()
			.iter()
			.map(|p| (p.vx.abs(), p.vy.abs()))
			.collect();

		for _ in 0..5_000 {
			field.step();
		}
		for (p, (vx, vy)) in field.particles().iter().zip(initial) {
			assert_eq!(p.vx.abs(), vx);
			assert_eq!(p.vy.abs(), vy);
		}
	}

	#[test]
	fn crossing_right_edge_flips_in_same_step() {
		let width = 100.0;
		let mut p = Particle {
			vx: 0.25,
			..particle_at(width - 0.1, 50.0)
		};
		p.advance(width, 100.0);

		assert!((p.x - (width + 0.15)).abs() < 1e-9);
		assert_eq!(p.vx, -0.25);

		p.advance(width, 100.0);
		assert!(p.x < width);
		assert_eq!(p.vx, -0.25);
	}

	#[test]
	fn crossing_top_edge_flips_only_y() {
		let mut p = Particle {
			vx: 0.1,
			vy: -0.2,
			..particle_at(10.0, 0.1)
		};
		p.advance(100.0, 100.0);
		assert_eq!(p.vy, 0.2);
		assert_eq!(p.vx, 0.1);
	}

	#[test]
	fn link_alpha_fades_with_distance() {
		let alpha = link_alpha(100.0, 150.0, 0.15).unwrap();
		assert!((alpha - 0.05).abs() < 1e-9);
		assert_eq!(link_alpha(0.0, 150.0, 0.15), Some(0.15));
		assert_eq!(link_alpha(150.0, 150.0, 0.15), None);
		assert_eq!(link_alpha(200.0, 150.0, 0.15), None);
	}

	#[test]
	fn links_cover_unordered_pairs_once() {
		let theme = FieldTheme::default();
		let field = pool_of(
			vec![
				particle_at(0.0, 0.0),
				particle_at(100.0, 0.0),
				particle_at(300.0, 0.0),
			],
			400.0,
			400.0,
		);
		let links: Vec<Link> = field.links(&theme).collect();

		assert_eq!(links.len(), 1);
		assert_eq!(links[0].from, (0.0, 0.0));
		assert_eq!(links[0].to, (100.0, 0.0));
		assert!((links[0].alpha - 0.05).abs() < 1e-9);
	}

	#[test]
	fn far_pair_has_no_link() {
		let theme = FieldTheme::default();
		let field = pool_of(
			vec![particle_at(0.0, 0.0), particle_at(200.0, 0.0)],
			400.0,
			400.0,
		);
		assert_eq!(field.links(&theme).count(), 0);
	}

	#[test]
	fn dense_cluster_links_every_pair() {
		let theme = FieldTheme::default();
		let particles = (0..6).map(|i| particle_at(i as f64, 0.0)).collect();
		let field = pool_of(particles, 10.0, 10.0);
		assert_eq!(field.links(&theme).count(), 6 * 5 / 2);
	}
}
