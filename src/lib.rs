//! Mass-spring wave polygons driven by a moving pointer.
//!
//! `polywave` simulates closed polygons whose edges are chains of anchored
//! spring particles. A pointer dragging through a ring pushes nearby particles
//! along its motion; anchors and ring neighbors pull them back, producing
//! waves that travel along the edge and settle.
//!
//! # Features
//!
//! - **Spring rings**: particles in an index arena with cyclic neighbor wiring
//! - **Two-phase ticks**: all forces read a pre-tick snapshot before anyone moves
//! - **Pointer influence**: linear-falloff drag, from real input or a script
//! - **Wave scene**: the stacked-waves setup with seeded per-ring constants
//! - **Observable**: monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Example
//! ```
//! use polywave::{advance, OutlineVertex, PointerState, RingConfig, SimulationConfig, SpringRing};
//!
//! let outline = [
//!     OutlineVertex::spring(0.0f32, 100.0),
//!     OutlineVertex::fixed(200.0, 100.0),
//!     OutlineVertex::fixed(200.0, 200.0),
//!     OutlineVertex::fixed(0.0, 200.0),
//!     OutlineVertex::fixed(0.0, 100.0),
//! ];
//! let mut rings = [SpringRing::new(&outline, RingConfig::new()).unwrap()];
//! let mut pointer = PointerState::new();
//! let config = SimulationConfig::new();
//!
//! pointer.record_real_motion(90.0, 100.0);
//! pointer.record_real_motion(100.0, 110.0);
//! for tick in 0..60 {
//!     advance(&mut pointer, &mut rings, tick, &config);
//! }
//! let boundary = rings[0].positions();
//! assert_eq!(boundary.len(), 7);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod color;
pub mod pointer;
pub mod particle;
pub mod ring;
pub mod simulation;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use color::{Color, PALETTE};
pub use pointer::{MotionScript, MotionSource, OscillatingSweep, PointerState};
pub use particle::SpringParticle;
pub use ring::{OutlineVertex, SpringRing};
pub use simulation::{advance, advance_observed};
pub use scene::{SceneConfig, WaveScene};
pub use config::{RingConfig, SimulationConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SimulationError;
