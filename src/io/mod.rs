/// Command-line interface and batch file processing
pub mod cli;
/// Board geometry, solver constants and output defaults
pub mod configuration;
/// Error types and path context for I/O failures
pub mod error;
/// Text board loader, solution writer and solution reader
pub mod format;
/// PNG rendering of a board in its current state
pub mod image;
/// Progress display for batches of boards
pub mod progress;
