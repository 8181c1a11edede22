pub mod attacher;
pub mod emitter;
pub mod link_filter;
pub mod membership;
pub mod session;

pub use session::{IntersectSession, RunOutcome};
