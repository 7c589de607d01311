//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure decision
//! logic from page components so they can be tested natively.

pub mod route_guard;
pub mod storage;
pub mod validation;
