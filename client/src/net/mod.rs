//! Networking glue between components and the `pins` search client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `feed` spawns searches on the browser event loop and writes their results
//! into the board signal through `pins::Feed` tickets.

pub mod feed;
