//! Integration tests for rgn-showcase
//!
//! Tests are organized by component:
//! - sequencer_test: Load gate, entrance, carousel and teardown on a paused clock
//! - motion_test: Entrance schedule, glow loop, parallax math
//! - ui_test: Headless rendering and theme
//! - config_test: Config and catalog files
//! - cli_test: Argument parsing and command handlers

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
