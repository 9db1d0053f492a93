//! Grid snapping for face drops.

use kurbo::{Point, Rect, Size};

use crate::tile::GridCell;

/// Number of grid cells along each face edge.
pub const GRID_CELLS: u32 = 15;

/// Cell size for a face of the given width.
///
/// Recomputed from the live face rectangle at every drop, never cached, so
/// responsive face resizing is tolerated.
pub fn cell_size(face_width: f64) -> f64 {
    (face_width / GRID_CELLS as f64).round().max(1.0)
}

/// A resolved drop: the snapped in-face position and its grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappedDrop {
    /// Tile position relative to the face's top-left corner.
    pub position: Point,
    /// Grid cell derived from the snapped position.
    pub cell: GridCell,
}

/// Check whether a release point lies within the face rectangle.
/// All four edges count as inside.
pub fn within_face(face: Rect, point: Point) -> bool {
    point.x >= face.x0 && point.x <= face.x1 && point.y >= face.y0 && point.y <= face.y1
}

/// Resolve a release point inside `face` to a snapped, clamped tile
/// position and grid cell.
///
/// The release point stands for the tile's center: half the tile size is
/// subtracted before snapping so the tile lands on the cell the cursor was
/// over. Clamping keeps the tile fully inside the face and both grid
/// indices in [0, 14].
pub fn resolve_drop(face: Rect, release: Point, tile_size: Size) -> SnappedDrop {
    let cell = cell_size(face.width());

    let mut x = (release.x - face.x0).round() - (tile_size.width / 2.0).round();
    let mut y = (release.y - face.y0).round() - (tile_size.height / 2.0).round();

    x = (x / cell).round() * cell;
    y = (y / cell).round() * cell;

    x = x.clamp(0.0, (face.width() - tile_size.width).max(0.0));
    y = y.clamp(0.0, (face.height() - tile_size.height).max(0.0));

    let col = ((x / cell).floor() as u32).min(GRID_CELLS - 1);
    let row = ((y / cell).floor() as u32).min(GRID_CELLS - 1);

    SnappedDrop {
        position: Point::new(x, y),
        cell: GridCell::new(col, row),
    }
}
