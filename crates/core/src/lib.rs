//! Scene module - the orrery simulation, pure and deterministic
//!
//! This module owns everything that moves: the sun, planets with their moons
//! and rings, and two belts of single-pixel bodies. It does no I/O. Each tick
//! the caller advances the scene and asks it to issue draw calls against a
//! [`Canvas`](tui_orrery_term::Canvas).
//!
//! # Module Structure
//!
//! - [`bodies`]: static catalog of bodies and belt parameters
//! - [`rng`]: seeded LCG so belt layouts are reproducible
//! - [`scene`]: simulation clock, user toggles and the draw pass
//!
//! # Example
//!
//! ```
//! use tui_orrery_core::{Scene, SceneConfig};
//! use tui_orrery_term::Canvas;
//!
//! let mut canvas = Canvas::new(400, 200).unwrap();
//! let mut scene = Scene::new(SceneConfig::default());
//!
//! scene.advance();
//! canvas.clear();
//! scene.draw(&mut canvas);
//!
//! assert!(canvas.cells().iter().any(|c| !c.is_blank()));
//! ```

pub mod bodies;
pub mod rng;
pub mod scene;

pub use tui_orrery_term as term;
pub use tui_orrery_types as types;

pub use bodies::{BeltSpec, MoonSpec, PlanetSpec, RingSpec, SunSpec, PLANETS, SUN};
pub use rng::SimpleRng;
pub use scene::{Asteroid, Scene, SceneConfig, HINTS};
