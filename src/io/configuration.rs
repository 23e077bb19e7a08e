//! Board geometry, solver constants and output defaults

// Board geometry
/// Number of columns on every board
pub const BOARD_WIDTH: usize = 7;
/// Number of rows on every board
pub const BOARD_HEIGHT: usize = 10;

/// Quarter turns in a full rotation, bounding each search loop
pub const ROTATION_STEPS: usize = 4;

// File naming
/// Extension of board and solution files
pub const BOARD_EXTENSION: &str = "txt";
/// Suffix added to board file stems for solution files
pub const SOLUTION_SUFFIX: &str = "_solution";
/// Extension of rendered boards
pub const IMAGE_EXTENSION: &str = "png";

// Rendering
/// Edge length of one tile in pixels
pub const TILE_SIZE_PX: u32 = 46;
/// Thickness of a pipe arm in pixels
pub const ARM_WIDTH_PX: u32 = 10;
/// Side of the square drawn for house bodies in pixels
pub const HOUSE_SIZE_PX: u32 = 22;
/// Background behind every tile
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Thin outline separating tiles
pub const GRID_LINE_COLOR: [u8; 3] = [224, 224, 224];
/// Gas tanks
pub const TANK_COLOR: [u8; 3] = [226, 132, 34];
/// Houses and pipes the flow has not reached
pub const OFF_COLOR: [u8; 3] = [150, 150, 150];
/// Houses and pipes reached by the flow
pub const ON_COLOR: [u8; 3] = [52, 120, 214];
