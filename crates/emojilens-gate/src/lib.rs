//! # emojilens-gate
//!
//! Decides, per render frame, whether to start a classification cycle and whether to
//! refresh what is displayed. The two cadences are independent.

pub mod gate;

pub use gate::{GateDecision, RefreshGate};
