//! `aco-colony` — the generation loop that turns many random walks into one
//! short route.
//!
//! A [`Colony`] sends waves of walkers (see `aco-walk`) across a maze. Each
//! generation walks against a frozen pheromone snapshot; afterwards the field
//! evaporates once and every completed, simplified route deposits scent along
//! its cells. Short routes spend the same deposit over fewer cells, so they
//! smell stronger, attract the next wave, and the colony converges.
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | `colony`   | [`Colony`] and the per-generation phases           |
//! | `builder`  | [`ColonyBuilder`], validation at construction time |
//! | `observer` | [`ColonyObserver`], [`GenerationStats`]            |
//! | `error`    | [`ColonyError`] / [`ColonyResult`]                 |
//!
//! | Flag       | Effect                                             |
//! |------------|----------------------------------------------------|
//! | `parallel` | Walk each generation on Rayon's thread pool        |

pub mod builder;
pub mod colony;
pub mod error;
pub mod observer;

pub use builder::ColonyBuilder;
pub use colony::Colony;
pub use error::{ColonyError, ColonyResult};
pub use observer::{ColonyObserver, GenerationStats, NoopObserver};
