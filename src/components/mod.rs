//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render and bind input only; submission logic lives in the
//! pages that own them.

pub mod form_field;
