// Library surface for the game core and headless/integration tests.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod game;
pub mod guess;
pub mod lang;
pub mod runtime;
pub mod segment;
pub mod stats;
pub mod storage;
