//! PNG rendering of a board in its current state

use crate::board::{Board, Direction, Tile, TileRole};
use crate::io::configuration::{
    ARM_WIDTH_PX, BACKGROUND_COLOR, GRID_LINE_COLOR, HOUSE_SIZE_PX, OFF_COLOR, ON_COLOR,
    TANK_COLOR, TILE_SIZE_PX,
};
use crate::io::error::{PuzzleError, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

fn fill_rect(img: &mut RgbImage, rect: Rect, color: [u8; 3]) {
    let x_end = (rect.x + rect.width).min(img.width());
    let y_end = (rect.y + rect.height).min(img.height());
    for y in rect.y..y_end {
        for x in rect.x..x_end {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}

// Band running from the tile center to the edge in `direction`
const fn arm_rect(origin_x: u32, origin_y: u32, direction: Direction) -> Rect {
    let center = TILE_SIZE_PX / 2;
    let half = ARM_WIDTH_PX / 2;
    let band = center - half;
    let long = center + half;
    match direction {
        Direction::North => Rect {
            x: origin_x + band,
            y: origin_y,
            width: ARM_WIDTH_PX,
            height: long,
        },
        Direction::South => Rect {
            x: origin_x + band,
            y: origin_y + band,
            width: ARM_WIDTH_PX,
            height: TILE_SIZE_PX - band,
        },
        Direction::East => Rect {
            x: origin_x + band,
            y: origin_y + band,
            width: TILE_SIZE_PX - band,
            height: ARM_WIDTH_PX,
        },
        Direction::West => Rect {
            x: origin_x,
            y: origin_y + band,
            width: long,
            height: ARM_WIDTH_PX,
        },
    }
}

const fn tile_color(tile: &Tile) -> [u8; 3] {
    match tile.kind().role() {
        TileRole::Tank => TANK_COLOR,
        TileRole::Empty => BACKGROUND_COLOR,
        TileRole::House | TileRole::Pipe => {
            if tile.is_visited() {
                ON_COLOR
            } else {
                OFF_COLOR
            }
        }
    }
}

fn draw_tile(img: &mut RgbImage, tile: &Tile) {
    let position = tile.position();
    let origin_x = position.x as u32 * TILE_SIZE_PX;
    let origin_y = position.y as u32 * TILE_SIZE_PX;

    fill_rect(
        img,
        Rect {
            x: origin_x,
            y: origin_y,
            width: TILE_SIZE_PX,
            height: TILE_SIZE_PX,
        },
        GRID_LINE_COLOR,
    );
    fill_rect(
        img,
        Rect {
            x: origin_x + 1,
            y: origin_y + 1,
            width: TILE_SIZE_PX - 2,
            height: TILE_SIZE_PX - 2,
        },
        BACKGROUND_COLOR,
    );

    if tile.kind().is_empty() {
        return;
    }

    let color = tile_color(tile);
    for direction in tile.endpoints().iter() {
        fill_rect(img, arm_rect(origin_x, origin_y, direction), color);
    }

    let body = if tile.kind().is_house() {
        HOUSE_SIZE_PX
    } else {
        ARM_WIDTH_PX
    };
    let inset = (TILE_SIZE_PX - body) / 2;
    fill_rect(
        img,
        Rect {
            x: origin_x + inset,
            y: origin_y + inset,
            width: body,
            height: body,
        },
        color,
    );
}

/// Draw every tile of the board into an RGB image
///
/// Tiles are laid out on a square pixel grid. Pipes and houses reached by the
/// flow use the "on" color; tanks always use the tank color.
pub fn render_board(board: &Board) -> RgbImage {
    let width = board.width() as u32 * TILE_SIZE_PX;
    let height = board.height() as u32 * TILE_SIZE_PX;
    let mut img = RgbImage::from_pixel(width, height, Rgb(BACKGROUND_COLOR));

    for tile in board.tiles() {
        draw_tile(&mut img, tile);
    }
    img
}

/// Render the board and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &Path) -> Result<()> {
    let img = render_board(board);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
