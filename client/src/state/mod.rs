//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toasts`) and each piece is held in
//! a single `RwSignal` provided through context, so components depend on the
//! smallest model they need.

pub mod session;
pub mod toasts;

use std::sync::Arc;

use community::CommunityRepository;

/// Read-only community content shared through context.
pub type Community = Arc<dyn CommunityRepository + Send + Sync>;
