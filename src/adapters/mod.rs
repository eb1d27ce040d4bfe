// Adapters layer: turns user input into core calls and core results into user-visible text.

#[cfg(feature = "cli")]
pub mod commands;
pub mod output;
pub mod repl;
