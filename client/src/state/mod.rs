//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The board feed is `pins::Feed`; only presentation state that has no
//! counterpart there lives here.

pub mod search;
