//! Tile records and the seeds they are created from.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rotation::Face;

/// Identifier of a tile. Supplied by the host document, conventionally in
/// the form `char-<LETTER><n>`.
pub type TileId = String;

/// Default edge length of a tile in pixels.
pub const TILE_SIZE: f64 = 40.0;

/// Horizontal distance between staggered rest positions in the pool.
pub const POOL_STAGGER_X: f64 = 60.0;

/// Offset of the first rest position from the pool's top-left corner.
pub const POOL_MARGIN: f64 = 20.0;

/// The container a tile is currently parented under.
///
/// A tile is owned by exactly one container at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Container {
    /// The "available characters" strip tiles rest in while unplaced.
    Pool,
    /// One of the four cube faces.
    Face(Face),
}

/// A grid cell on a face. Both indices are kept in [0, 14] by drop
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub col: u32,
    pub row: u32,
}

impl GridCell {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Host-supplied identity and letter for one tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSeed {
    pub id: TileId,
    pub value: String,
}

impl TileSeed {
    /// Seed with a host-supplied id.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Seed with a freshly minted id, for hosts that do not track tile
    /// identity themselves.
    pub fn minted(value: impl Into<String>) -> Self {
        let value = value.into();
        let id = format!("char-{}{}", value, Uuid::new_v4().simple());
        Self { id, value }
    }
}

/// One draggable labeled tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Display letter.
    pub value: String,
    /// Pixel position relative to the owning container's top-left corner.
    pub position: Point,
    /// Edge lengths in pixels.
    pub size: Size,
    /// Rest position in the pool, assigned once at creation.
    pub default_position: Point,
    /// Grid cell, present only while the tile sits on a face.
    pub grid_cell: Option<GridCell>,
    /// Current owning container.
    pub container: Container,
}

impl Tile {
    /// Create a pool tile at the staggered rest position for `slot`.
    pub fn new(seed: TileSeed, slot: usize) -> Self {
        let default_position = pool_rest_position(slot);
        Self {
            id: seed.id,
            value: seed.value,
            position: default_position,
            size: Size::new(TILE_SIZE, TILE_SIZE),
            default_position,
            grid_cell: None,
            container: Container::Pool,
        }
    }

    /// Screen-space bounds of this tile given its container's origin.
    pub fn bounds_from(&self, origin: Point) -> Rect {
        Rect::from_origin_size(
            Point::new(origin.x + self.position.x, origin.y + self.position.y),
            self.size,
        )
    }

    /// Move back to the rest position in the pool, clearing both grid axes.
    pub fn return_to_default(&mut self) {
        self.position = self.default_position;
        self.grid_cell = None;
        self.container = Container::Pool;
    }
}

/// Rest position for the `slot`-th tile ever seeded: staggered horizontally,
/// fixed vertical offset.
pub fn pool_rest_position(slot: usize) -> Point {
    Point::new(POOL_MARGIN + slot as f64 * POOL_STAGGER_X, POOL_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_positions_are_staggered() {
        assert_eq!(pool_rest_position(0), Point::new(20.0, 20.0));
        assert_eq!(pool_rest_position(1), Point::new(80.0, 20.0));
        assert_eq!(pool_rest_position(4), Point::new(260.0, 20.0));
    }

    #[test]
    fn test_new_tile_rests_in_pool() {
        let tile = Tile::new(TileSeed::new("char-A1", "A"), 2);
        assert_eq!(tile.container, Container::Pool);
        assert_eq!(tile.position, tile.default_position);
        assert_eq!(tile.position, Point::new(140.0, 20.0));
        assert!(tile.grid_cell.is_none());
    }

    #[test]
    fn test_return_to_default_clears_both_axes() {
        let mut tile = Tile::new(TileSeed::new("char-B2", "B"), 0);
        tile.position = Point::new(100.0, 120.0);
        tile.grid_cell = Some(GridCell::new(5, 6));
        tile.container = Container::Face(Face::North);

        tile.return_to_default();

        assert_eq!(tile.position, tile.default_position);
        assert_eq!(tile.grid_cell, None);
        assert_eq!(tile.container, Container::Pool);
    }

    #[test]
    fn test_bounds_follow_container_origin() {
        let tile = Tile::new(TileSeed::new("char-C3", "C"), 0);
        let bounds = tile.bounds_from(Point::new(100.0, 200.0));
        assert_eq!(bounds.origin(), Point::new(120.0, 220.0));
        assert_eq!(bounds.width(), TILE_SIZE);
        assert_eq!(bounds.height(), TILE_SIZE);
    }

    #[test]
    fn test_minted_seeds_are_unique() {
        let a = TileSeed::minted("A");
        let b = TileSeed::minted("A");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("char-A"));
    }
}
