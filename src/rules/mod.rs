//! Game rules that do not need the whole state.
//!
//! - `scoring`: End-game scores and the winner

pub mod scoring;

pub use scoring::{final_scores, score_player, FinalScores};
