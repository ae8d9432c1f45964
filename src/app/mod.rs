//! Application core: command decoding and dispatch, zero I/O.
//!
//! Frame bodies come in as byte slices, replies go out through the
//! [`Transport`](crate::link::transport::Transport) seam and actuator
//! writes go through the port traits in [`ports`], so this layer runs
//! unchanged against host mocks.

pub mod commands;
pub mod events;
pub mod ports;
pub mod registry;
pub mod service;
