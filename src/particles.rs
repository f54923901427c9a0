//! Ambient particle field drawn behind every page.
//!
//! The simulation is split in two: [`ParticleField::step`] advances the
//! state and [`ParticleField::draw`] paints it onto any [`Surface`]. The
//! browser implements `Surface` over a 2D canvas context; tests record the
//! calls instead.
//!
//! Motion is integrated one unit per frame with no time normalisation, so
//! the perceived speed follows the display refresh rate.

use std::f64::consts::TAU;

use rand::Rng;

/// An sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` notation accepted by canvas style setters.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Particle tints. The alpha here is only the resting value; the twinkle
/// overrides it every frame.
pub const PALETTE: [Rgba; 4] = [
    Rgba::new(251, 176, 64, 0.75),
    Rgba::new(251, 176, 64, 0.45),
    Rgba::new(142, 209, 252, 0.55),
    Rgba::new(255, 255, 255, 0.22),
];

/// A radial gradient fading from `color` at `center` to transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Centre in normalised viewport coordinates.
    pub center: (f64, f64),
    /// Radius as a fraction of the shorter viewport side.
    pub reach: f64,
    pub color: Rgba,
}

impl Glow {
    pub fn resolve(&self, width: f64, height: f64) -> (f64, f64, f64) {
        (
            width * self.center.0,
            height * self.center.1,
            width.min(height) * self.reach,
        )
    }
}

pub const GLOWS: [Glow; 2] = [
    Glow {
        center: (0.75, 0.15),
        reach: 0.55,
        color: Rgba::new(251, 176, 64, 0.06),
    },
    Glow {
        center: (0.15, 0.25),
        reach: 0.6,
        color: Rgba::new(142, 209, 252, 0.05),
    },
];

/// Tunables for the field. `Default` carries the values the site ships with.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub min_particles: usize,
    pub max_particles: usize,
    /// Viewport area (CSS px²) that earns one particle before clamping.
    pub area_per_particle: f64,
    pub radius: (f64, f64),
    pub speed: (f64, f64),
    /// Phase increment per frame.
    pub twinkle_rate: (f64, f64),
    pub twinkle_base: f64,
    pub twinkle_amplitude: f64,
    pub alpha_band: (f64, f64),
    pub link_distance: f64,
    pub link_alpha: f64,
    /// How far past an edge a particle may drift before it wraps.
    pub margin: f64,
    pub max_pixel_ratio: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min_particles: 55,
            max_particles: 95,
            area_per_particle: 24_000.0,
            radius: (1.2, 3.2),
            speed: (0.15, 0.55),
            twinkle_rate: (0.004, 0.012),
            twinkle_base: 0.55,
            twinkle_amplitude: 0.25,
            alpha_band: (0.12, 0.85),
            link_distance: 135.0,
            link_alpha: 0.18,
            margin: 20.0,
            max_pixel_ratio: 2.0,
        }
    }
}

impl FieldConfig {
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let area = (width * height).max(0.0);
        let wanted = (area / self.area_per_particle).floor();
        let wanted = if wanted.is_finite() {
            wanted as usize
        } else {
            self.max_particles
        };
        wanted.clamp(self.min_particles, self.max_particles)
    }

    pub fn viewport(&self, width: f64, height: f64, device_pixel_ratio: f64) -> Viewport {
        let pixel_ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(1.0, self.max_pixel_ratio.max(1.0))
        } else {
            1.0
        };
        Viewport {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio,
        }
    }
}

/// Visible area in CSS pixels plus the backing-store scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Canvas attribute size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).floor() as u32,
            (self.height * self.pixel_ratio).floor() as u32,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: Rgba,
    pub phase: f64,
    pub phase_step: f64,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &FieldConfig, viewport: &Viewport) -> Self {
        let radius = sample(rng, config.radius);
        let speed = sample(rng, config.speed);
        let angle = sample(rng, (0.0, TAU));
        Self {
            x: sample(rng, (0.0, viewport.width)),
            y: sample(rng, (0.0, viewport.height)),
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            radius,
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            phase_step: sample(rng, config.twinkle_rate),
            phase: sample(rng, (0.0, TAU)),
        }
    }

    pub fn alpha(&self, config: &FieldConfig) -> f64 {
        let raw = config.twinkle_base + self.phase.sin() * config.twinkle_amplitude;
        raw.clamp(config.alpha_band.0, config.alpha_band.1)
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn wrap(value: f64, extent: f64, margin: f64) -> f64 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

/// A connection between two nearby particles, by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

/// Drawing primitives the field needs from a backend.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn glow(&mut self, glow: &Glow, width: f64, height: f64);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), alpha: f64);
    fn dot(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, viewport: Viewport, rng: &mut R) -> Self {
        let mut field = Self {
            config,
            viewport,
            particles: Vec::new(),
        };
        field.reset(viewport, rng);
        field
    }

    /// Throw the current particles away and spawn a fresh set sized for
    /// `viewport`.
    pub fn reset<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        let count = self.config.particle_count(viewport.width, viewport.height);
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(rng, &self.config, &viewport)));
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Every unordered pair closer than the link distance. Quadratic, but
    /// the particle count is capped.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let threshold = self.config.link_distance;
        let max_alpha = self.config.link_alpha;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let dx = ps[a].x - ps[b].x;
                let dy = ps[a].y - ps[b].y;
                let dist = (dx * dx + dy * dy).sqrt();
                (dist < threshold).then(|| Link {
                    a,
                    b,
                    alpha: (1.0 - dist / threshold) * max_alpha,
                })
            })
        })
    }

    pub fn twinkle(&mut self) {
        for p in &mut self.particles {
            p.phase += p.phase_step;
        }
    }

    pub fn advance(&mut self) {
        let Viewport { width, height, .. } = self.viewport;
        let margin = self.config.margin;
        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx, width, margin);
            p.y = wrap(p.y + p.vy, height, margin);
        }
    }

    /// One simulation tick without drawing.
    pub fn step(&mut self) {
        self.twinkle();
        self.advance();
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let Viewport { width, height, .. } = self.viewport;
        surface.clear(width, height);
        for glow in &GLOWS {
            surface.glow(glow, width, height);
        }
        for link in self.links() {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            surface.line((a.x, a.y), (b.x, b.y), link.alpha);
        }
        for p in &self.particles {
            surface.dot(p.x, p.y, p.radius, p.color.with_alpha(p.alpha(&self.config)));
        }
    }

    /// A full animation frame: twinkle, paint, then move. Particles are
    /// drawn where they were at the start of the frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.twinkle();
        self.draw(surface);
        self.advance();
    }
}
