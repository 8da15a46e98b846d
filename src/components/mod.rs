//! UI components.

pub mod space_backdrop;
