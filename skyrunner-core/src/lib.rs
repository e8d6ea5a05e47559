//! The core of the Skyrunner demo collection. This crate contains the
//! window-free game logic the demos are built on: the lane-runner
//! simulation, input snapshots, parametric curve evaluation and the
//! character action state machine. Everything here runs headless and is
//! unit-tested without a GL context.

pub mod animation;
pub mod curve;
pub mod input;
pub mod random;
pub mod runner;
