//! Scene state: orbital positions advanced once per tick and drawn into a
//! canvas.

use arrayvec::ArrayVec;

use crate::bodies::{
    BeltSpec, MoonSpec, PlanetSpec, ASTEROID_BELT, KUIPER_BELT, MAX_MOONS, PLANETS, SUN,
};
use crate::rng::SimpleRng;
use crate::term::Canvas;
use crate::types::{Color, SceneAction};

/// Simulation time added per tick at speed 1.
pub const TIME_STEP: f64 = 0.001;

pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 16.0;

/// Key legend drawn in the top-left corner when hints are on.
pub const HINTS: &str = "q quit  space pause  o orbits  h hints  +/- speed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    pub seed: u32,
    pub orbits: bool,
    pub hints: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            orbits: true,
            hints: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Moon {
    spec: &'static MoonSpec,
    angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Planet {
    spec: &'static PlanetSpec,
    moons: ArrayVec<Moon, MAX_MOONS>,
}

/// A single-pixel body on a circular orbit around the sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub radius: f64,
    pub angle: f64,
    pub speed: f64,
}

#[derive(Debug, Clone)]
pub struct Scene {
    time: f64,
    speed: f64,
    paused: bool,
    orbits: bool,
    hints: bool,
    quit: bool,
    planets: Vec<Planet>,
    asteroids: Vec<Asteroid>,
    kuiper: Vec<Asteroid>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let planets = PLANETS
            .iter()
            .map(|spec| Planet {
                spec,
                moons: spec
                    .moons
                    .iter()
                    .map(|m| Moon { spec: m, angle: 0.0 })
                    .collect(),
            })
            .collect();
        let asteroids = populate_belt(&ASTEROID_BELT, &mut rng);
        let kuiper = populate_belt(&KUIPER_BELT, &mut rng);

        Self {
            time: 0.0,
            speed: 1.0,
            paused: false,
            orbits: config.orbits,
            hints: config.hints,
            quit: false,
            planets,
            asteroids,
            kuiper,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn orbits(&self) -> bool {
        self.orbits
    }

    pub fn hints(&self) -> bool {
        self.hints
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn kuiper_belt(&self) -> &[Asteroid] {
        &self.kuiper
    }

    pub fn apply_action(&mut self, action: SceneAction) {
        match action {
            SceneAction::Quit => self.quit = true,
            SceneAction::TogglePause => self.paused = !self.paused,
            SceneAction::ToggleOrbits => self.orbits = !self.orbits,
            SceneAction::ToggleHints => self.hints = !self.hints,
            SceneAction::SpeedUp => self.speed = (self.speed * 2.0).min(MAX_SPEED),
            SceneAction::SlowDown => self.speed = (self.speed / 2.0).max(MIN_SPEED),
        }
        log::debug!("scene action {:?} (speed {})", action, self.speed);
    }

    /// Advance the simulation by one tick.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        let k = self.speed;
        self.time += TIME_STEP * k;
        for planet in &mut self.planets {
            for moon in &mut planet.moons {
                moon.angle += moon.spec.speed * k;
            }
        }
        for body in self.asteroids.iter_mut().chain(self.kuiper.iter_mut()) {
            body.angle += body.speed * k;
        }
    }

    /// Offset of planet `index` from the sun at the current time.
    pub fn planet_offset(&self, index: usize) -> Option<(f64, f64)> {
        self.planets.get(index).map(|p| self.offset_of(p.spec))
    }

    fn offset_of(&self, spec: &PlanetSpec) -> (f64, f64) {
        let angle = self.time * spec.speed;
        (spec.distance * angle.cos(), spec.distance * angle.sin())
    }

    /// Issue this tick's draw calls. The canvas is not cleared here.
    pub fn draw(&self, canvas: &mut Canvas) {
        let cx = (canvas.width() / 2) as f64;
        let cy = (canvas.height() / 2) as f64;

        canvas.circle(cx, cy, SUN.radius, SUN.color);

        for planet in &self.planets {
            let spec = planet.spec;
            if self.orbits {
                canvas.ring(cx, cy, spec.distance as i64, None);
            }

            let (dx, dy) = self.offset_of(spec);
            let (px, py) = (cx + dx, cy + dy);
            canvas.circle(px, py, spec.radius, spec.color);

            for moon in &planet.moons {
                let mx = px + moon.spec.orbit_radius * moon.angle.cos();
                let my = py + moon.spec.orbit_radius * moon.angle.sin();
                canvas.circle(mx, my, 1, moon.spec.color);
            }

            for ring in spec.rings {
                canvas.ring(px, py, spec.radius + ring.distance, ring.color);
            }
        }

        for body in self.kuiper.iter().chain(self.asteroids.iter()) {
            canvas.set(
                cx + body.radius * body.angle.cos(),
                cy + body.radius * body.angle.sin(),
                None,
            );
        }

        if self.hints {
            canvas.text(0.0, 0.0, HINTS, Color::White);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

fn populate_belt(spec: &BeltSpec, rng: &mut SimpleRng) -> Vec<Asteroid> {
    (0..spec.count)
        .map(|_| {
            let offset = rng.next_f64() * spec.width;
            let angle = rng.range_f64(0.0, std::f64::consts::TAU);
            let speed = spec.base_speed
                + rng.next_f64() * spec.speed_jitter
                + offset * spec.speed_per_offset;
            Asteroid {
                radius: spec.inner_radius + offset,
                angle,
                speed,
            }
        })
        .collect()
}
