//! `aco-walk` — a single scent-following walker and its supporting pieces.
//!
//! One walker is one attempt to get from the start of a maze to its end by
//! repeatedly sniffing the four neighboring cells and drawing the next step
//! with probability proportional to scent. The crate also carries the route
//! simplifier that strips loops out of a finished walk before the colony
//! rewards it.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | `policy`   | [`ScentPolicy`] trait and the production [`WeightedDraw`] |
//! | `walker`   | [`Walker`], the step loop and dead-end handling           |
//! | `simplify` | [`simplify`], loop removal over a finished route          |
//! | `error`    | [`WalkError`] / [`WalkResult`]                            |

pub mod error;
pub mod policy;
pub mod simplify;
pub mod walker;

pub use error::{WalkError, WalkResult};
pub use policy::{DirectionWeights, ScentPolicy, WeightedDraw};
pub use simplify::simplify;
pub use walker::Walker;
