//! `aco-core` — foundational types for the `rust_aco` maze pathfinder.
//!
//! This crate is a dependency of every other `aco-*` crate.  It intentionally
//! has no `aco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`coord`]     | `Coordinate`, grid cell arithmetic                    |
//! | [`direction`] | `Direction` enum (the four cardinal moves)            |
//! | [`route`]     | `Route` — a start cell plus a direction list          |
//! | [`ids`]       | `WalkerId`, `Generation`                              |
//! | [`rng`]       | `WalkerRng` (per-walker deterministic RNG)            |
//! | [`config`]    | `ColonyConfig`                                        |
//! | [`error`]     | `AcoError`, `AcoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ColonyConfig;
pub use coord::Coordinate;
pub use direction::Direction;
pub use error::{AcoError, AcoResult};
pub use ids::{Generation, WalkerId};
pub use rng::WalkerRng;
pub use route::Route;
