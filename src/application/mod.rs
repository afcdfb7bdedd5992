pub mod effects;
pub mod signatures;
pub mod simulation;
