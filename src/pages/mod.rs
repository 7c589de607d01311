//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submission flow and delegates field
//! rendering to `components`. Submission flows are plain async functions so
//! they can be driven in tests without a browser.

pub mod sign_in;
pub mod sign_up;
pub mod welcome;
