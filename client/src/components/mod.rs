//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search chrome and the pin grid. The feed itself
//! lives in the root component's signal and reaches them as props.

pub mod header;
pub mod mainboard;
pub mod pin;
