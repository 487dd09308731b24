pub mod game_builders;
pub mod mocks;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use game_builders::{card_multiset, filler_cards, GameBuilder};
#[allow(unused_imports)]
pub use mocks::{KeyedPrompter, ScriptedPrompter};
