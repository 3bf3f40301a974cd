//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each one implements a `community` seam against a web API and
//! degrades to a no-op outside the `hydrate` build.

pub mod delay;
pub mod storage;
