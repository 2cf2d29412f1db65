//! Query layer consumed by display code: one-hop results, the exploration
//! session, and a shared handle for swapping graphs on reload.

pub mod exploration;
pub mod handle;
pub mod session;

pub use exploration::Exploration;
pub use handle::GraphHandle;
pub use session::{ExplorationSession, ExplorationState};
