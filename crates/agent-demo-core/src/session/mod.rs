//! Session domain module.
//!
//! # Module Structure
//!
//! - `tier`: Access tiers and their static limit table (`Tier`, `TierLimits`)
//! - `model`: The session record (`SessionRecord`)
//! - `service`: Contract for creating and looking up sessions (`SessionService`)
//! - `registry`: In-memory, process-lifetime implementation (`SessionRegistry`)

mod model;
mod registry;
mod service;
mod tier;

pub use model::SessionRecord;
pub use registry::SessionRegistry;
pub use service::SessionService;
pub use tier::{Tier, TierLimits};
