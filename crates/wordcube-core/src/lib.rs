//! Wordcube Core Library
//!
//! Platform-agnostic interaction logic for the Wordcube board: cube
//! rotation tracking, grid-snapped tile dragging, and play payload
//! assembly. The presentation layer feeds pointer events and per-frame
//! container rectangles in; serialized placements come out.

pub mod board;
pub mod input;
pub mod payload;
pub mod rotation;
pub mod snap;
pub mod tile;

pub use board::{Board, DropOutcome, Layout};
pub use input::{DragSession, PointerEvent};
pub use payload::{
    PLAY_ACTION, PlacedChar, PlayPayload, active_face_positions, build_play_payload, make_play,
};
pub use rotation::{Face, QUARTER_TURN, Rotation, RotationError};
pub use snap::{GRID_CELLS, SnappedDrop, cell_size, resolve_drop, within_face};
pub use tile::{Container, GridCell, TILE_SIZE, Tile, TileId, TileSeed};
