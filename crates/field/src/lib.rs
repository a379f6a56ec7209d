#![deny(unsafe_code)]
//! Bouncing-particle field simulation.
//!
//! A [`ParticleField`] owns an ordered collection of point-mass
//! [`Particle`]s inside a rectangular extent. Each tick advances every
//! particle by its velocity and reflects velocity components at the
//! extent's edges. Hosts can append bursts of particles at a point in
//! response to clicks; rendering optionally paints a translucent fade
//! overlay before the particles, producing motion trails.
//!
//! Particles never interact with each other, so tick order only affects
//! draw order (insertion order, later on top).

use drift_engine_core::bounds::Bounds;
use drift_engine_core::color::Srgb;
use drift_engine_core::error::FieldError;
use drift_engine_core::palette::Palette;
use drift_engine_core::params::{param_color, param_f64, param_usize};
use drift_engine_core::prng::Xorshift64;
use drift_engine_core::simulation::Simulation;
use drift_engine_core::surface::Surface;
use glam::DVec2;
use serde_json::Value;
use std::collections::VecDeque;

/// Half-range of the velocity draw: each component is uniform in [-2, 2].
const VELOCITY_HALF_RANGE: f64 = 2.0;
/// Lower edge of the radius draw.
const RADIUS_MIN: f64 = 2.0;
/// Upper edge of the radius draw.
const RADIUS_MAX: f64 = 6.0;
/// Stock initial population.
const DEFAULT_COUNT: usize = 50;

/// A single point-mass particle: position, velocity, visual radius, color.
///
/// Plain value type; all behavior lives in the associated functions. The
/// fields are public because tests and hosts legitimately pin state (the
/// simulation has no invariants beyond what [`Particle::tick`] restores).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub color: Srgb,
}

impl Particle {
    /// Creates a particle at a uniformly random position within `bounds`.
    ///
    /// Velocity components are uniform in [-2, 2], radius uniform in
    /// [2, 6], color a uniform palette pick.
    pub fn create(bounds: Bounds, palette: &Palette, rng: &mut Xorshift64) -> Self {
        let position = bounds.random_point(rng);
        Self::create_at(position, palette, rng)
    }

    /// Creates a particle at a caller-specified position, skipping the
    /// random-position draw but drawing everything else normally.
    ///
    /// Draw order is fixed (vx, vy, radius, color) so seeded replays are
    /// stable.
    pub fn create_at(position: DVec2, palette: &Palette, rng: &mut Xorshift64) -> Self {
        let velocity = DVec2::new(
            rng.next_symmetric(VELOCITY_HALF_RANGE),
            rng.next_symmetric(VELOCITY_HALF_RANGE),
        );
        let radius = rng.next_range(RADIUS_MIN, RADIUS_MAX);
        let color = palette.pick(rng);
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Advances the position by one frame's velocity and reflects at the
    /// extent edges.
    ///
    /// For each axis independently: if the new coordinate left
    /// `[0, extent]`, that axis's velocity is negated. The position is
    /// left where it landed — a particle may overshoot the edge by up to
    /// one tick's displacement and re-enters on the next tick. Reflection
    /// preserves speed.
    pub fn tick(&mut self, bounds: Bounds) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > bounds.width() {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.height() {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Draws the particle as a filled circle. Side effect only.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.position.x, self.position.y, self.radius, self.color);
    }
}

/// Translucent full-surface overlay painted before the particles.
///
/// Low alpha leaves ghosts of previous frames (motion trails); alpha 1.0
/// is a plain clear for hosts whose surface would otherwise accumulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailFade {
    pub color: Srgb,
    pub alpha: f64,
}

impl TrailFade {
    /// Creates a fade overlay, clamping `alpha` to [0, 1].
    pub fn new(color: Srgb, alpha: f64) -> Self {
        Self {
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Configuration for a [`ParticleField`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Initial particle population. Zero is a valid no-op field.
    pub count: usize,
    /// Optional population ceiling; the oldest particles are evicted when
    /// bursts push past it. `None` preserves the unbounded behavior.
    pub max_particles: Option<usize>,
    /// Optional fade overlay painted before the particles each frame.
    pub trail: Option<TrailFade>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            max_particles: None,
            trail: None,
        }
    }
}

impl FieldConfig {
    /// Applies JSON overrides onto this configuration.
    ///
    /// Recognized keys: `count`, `max_particles` (0 removes the cap),
    /// `trail_alpha` (0 disables the overlay), `trail_color` (hex).
    /// Missing or wrong-typed keys keep the existing value.
    pub fn overridden(mut self, params: &Value) -> Self {
        self.count = param_usize(params, "count", self.count);

        let cap = param_usize(params, "max_particles", self.max_particles.unwrap_or(0));
        self.max_particles = (cap > 0).then_some(cap);

        let base_alpha = self.trail.map_or(0.0, |t| t.alpha);
        let base_color = self.trail.map_or(Srgb::BLACK, |t| t.color);
        let alpha = param_f64(params, "trail_alpha", base_alpha);
        let color = param_color(params, "trail_color", base_color);
        self.trail = (alpha > 0.0).then(|| TrailFade::new(color, alpha));

        self
    }

    /// Builds a configuration from JSON, starting from the defaults.
    pub fn from_json(params: &Value) -> Self {
        Self::default().overridden(params)
    }
}

/// An ordered collection of particles simulated within a rectangular extent.
pub struct ParticleField {
    bounds: Bounds,
    palette: Palette,
    particles: VecDeque<Particle>,
    rng: Xorshift64,
    max_particles: Option<usize>,
    trail: Option<TrailFade>,
}

impl ParticleField {
    /// Creates a field populated with `config.count` particles.
    ///
    /// Returns `FieldError::InvalidConfiguration` if the cap is zero or
    /// smaller than the initial population. Bounds are validated at
    /// [`Bounds::new`]; no partial field is ever created.
    pub fn new(
        config: FieldConfig,
        bounds: Bounds,
        palette: Palette,
        seed: u64,
    ) -> Result<Self, FieldError> {
        if let Some(cap) = config.max_particles {
            if cap == 0 {
                return Err(FieldError::InvalidConfiguration(
                    "max_particles must be at least 1 when set".to_string(),
                ));
            }
            if config.count > cap {
                return Err(FieldError::InvalidConfiguration(format!(
                    "initial count {} exceeds max_particles {cap}",
                    config.count
                )));
            }
        }

        let mut rng = Xorshift64::new(seed);
        let particles = (0..config.count)
            .map(|_| Particle::create(bounds, &palette, &mut rng))
            .collect();

        Ok(Self {
            bounds,
            palette,
            particles,
            rng,
            max_particles: config.max_particles,
            trail: config.trail,
        })
    }

    /// The field's rectangular extent.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of live particles.
    pub fn population(&self) -> usize {
        self.particles.len()
    }

    /// Iterates over the particles in insertion order.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Appends `count` particles at `origin`.
    ///
    /// Each new particle draws velocity, radius, and color normally; only
    /// the position draw is skipped. With a cap configured, the oldest
    /// particles are evicted once the population exceeds it.
    pub fn spawn_burst(&mut self, origin: DVec2, count: usize) {
        for _ in 0..count {
            self.particles
                .push_back(Particle::create_at(origin, &self.palette, &mut self.rng));
        }
        if let Some(cap) = self.max_particles {
            while self.particles.len() > cap {
                self.particles.pop_front();
            }
        }
    }

    /// Advances every particle by one frame, in insertion order.
    ///
    /// Never changes the population.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.tick(self.bounds);
        }
    }

    /// Draws the optional fade overlay, then every particle in insertion
    /// order (later insertions on top).
    pub fn render(&self, surface: &mut dyn Surface) {
        if let Some(trail) = self.trail {
            surface.fill_rect(
                0.0,
                0.0,
                self.bounds.width(),
                self.bounds.height(),
                trail.color,
                trail.alpha,
            );
        }
        for particle in &self.particles {
            particle.render(surface);
        }
    }
}

impl Simulation for ParticleField {
    fn tick(&mut self) -> Result<(), FieldError> {
        ParticleField::tick(self);
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) {
        ParticleField::render(self, surface);
    }

    fn population(&self) -> usize {
        ParticleField::population(self)
    }

    fn spawn_burst(&mut self, origin: DVec2, count: usize) {
        ParticleField::spawn_burst(self, origin, count);
    }
}
