// Library surface for headless/integration tests and reuse.
// Terminal setup and the event loop stay in main.rs.
pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod feedback;
pub mod guard;
pub mod host;
pub mod navigation;
pub mod runtime;
pub mod scheduler;
pub mod scoring;
pub mod screens;
pub mod sequencer;
pub mod session;
pub mod ui;
pub mod util;
