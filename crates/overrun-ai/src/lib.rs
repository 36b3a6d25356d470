//! Enemy AI for OVERRUN.
//!
//! Implements the per-enemy behavior state machine and archetype-driven
//! stat profiles. Pure functions over plain data, with no pool or engine
//! dependency, so the FSM is trivially testable.

pub mod fsm;
pub mod profiles;

#[cfg(test)]
mod tests;
