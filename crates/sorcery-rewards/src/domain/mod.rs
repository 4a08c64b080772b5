//! Pure reward rules: novelty filtering, scoring and outcomes.

pub mod novelty;
pub mod outcome;
pub mod scoring;
