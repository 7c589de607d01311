//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only cross-page state is the authentication session; form input
//! stays local to each page.

pub mod session;
