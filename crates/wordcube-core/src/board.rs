//! The tile arena: pool and face containers, drag state, and drop
//! resolution.
//!
//! The board owns every tile record, a child list per container preserving
//! placement order, and the rotation state. All mutation goes through
//! `&mut` methods; there is no interior mutability and no locking.

use std::collections::{HashMap, HashSet};

use kurbo::{Point, Rect};

use crate::input::{DragSession, PointerEvent};
use crate::rotation::{Face, Rotation, RotationError};
use crate::snap::{self, SnappedDrop};
use crate::tile::{Container, GridCell, Tile, TileId, TileSeed};

/// Screen rectangles of the visible containers for the current frame.
///
/// Supplied by the presentation layer at event time and never cached, so
/// responsive layouts are tolerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// The pool strip ("available characters").
    pub pool: Rect,
    /// The active face, if one is currently presented.
    pub face: Option<Rect>,
}

impl Layout {
    pub fn new(pool: Rect, face: Rect) -> Self {
        Self {
            pool,
            face: Some(face),
        }
    }

    /// Layout with no face on screen; every drop falls back to the pool.
    pub fn pool_only(pool: Rect) -> Self {
        Self { pool, face: None }
    }
}

/// Where a tile ended up after drop resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Placed on the active face at the given cell.
    Placed {
        tile: TileId,
        face: Face,
        cell: GridCell,
    },
    /// Returned to its rest position in the pool.
    Returned { tile: TileId },
}

/// The complete interaction state of the widget.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// All tiles, keyed by id.
    tiles: HashMap<TileId, Tile>,
    /// Creation order of the tiles still present.
    seeded: Vec<TileId>,
    /// Pool children, in placement order.
    pool: Vec<TileId>,
    /// Face children, in placement order, indexed by [`Face::index`].
    faces: [Vec<TileId>; 4],
    rotation: Rotation,
    drag: Option<DragSession>,
    /// Rest-position slots handed out so far. Never reused, so tiles added
    /// by later reconciles do not land on top of earlier ones.
    next_slot: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles in the arena.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by id.
    pub fn tile(&self, id: &str) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Restore a rotation, e.g. from host-saved state. Values not produced
    /// by the rotate commands surface as [`RotationError`] at use time.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Rotation normalized to [0, 360).
    pub fn normalized_rotation(&self) -> i32 {
        self.rotation.normalized()
    }

    /// The face currently turned toward the viewer.
    pub fn active_face(&self) -> Result<Face, RotationError> {
        self.rotation.active_face()
    }

    /// The tile currently following the cursor, if any.
    pub fn dragged_tile(&self) -> Option<&Tile> {
        self.drag.as_ref().and_then(|session| self.tiles.get(&session.tile))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pool children in placement order.
    pub fn pool_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.pool.iter().filter_map(|id| self.tiles.get(id))
    }

    /// Children of the given face in placement order.
    pub fn face_tiles(&self, face: Face) -> impl Iterator<Item = &Tile> {
        self.faces[face.index()].iter().filter_map(|id| self.tiles.get(id))
    }

    /// Bring the arena in line with the host's current tile set.
    ///
    /// Unknown seeds become pool tiles at the next staggered rest position;
    /// known tiles keep their position, container, and grid cell; tiles
    /// whose id no longer appears in `seeds` are removed. Idempotent:
    /// reconciling twice with the same seeds is a no-op.
    pub fn reconcile(&mut self, seeds: &[TileSeed]) {
        let keep: HashSet<&str> = seeds.iter().map(|seed| seed.id.as_str()).collect();

        let vanished: Vec<TileId> = self
            .seeded
            .iter()
            .filter(|id| !keep.contains(id.as_str()))
            .cloned()
            .collect();
        for id in &vanished {
            self.detach(id);
            self.seeded.retain(|known| known != id);
            self.tiles.remove(id);
            if self.drag.as_ref().is_some_and(|session| &session.tile == id) {
                self.drag = None;
            }
        }

        let mut added = 0;
        for seed in seeds {
            if self.tiles.contains_key(&seed.id) {
                continue;
            }
            let tile = Tile::new(seed.clone(), self.next_slot);
            self.next_slot += 1;
            self.seeded.push(tile.id.clone());
            self.pool.push(tile.id.clone());
            self.tiles.insert(tile.id.clone(), tile);
            added += 1;
        }

        if added > 0 || !vanished.is_empty() {
            log::debug!(
                "reconciled tiles: {} added, {} removed, {} total",
                added,
                vanished.len(),
                self.tiles.len()
            );
        }
    }

    /// Turn the cube one quarter to the left and reset all placements, so
    /// grid coordinates are never stale relative to another orientation.
    pub fn rotate_left(&mut self) {
        self.rotation.rotate_left();
        self.reset_placements();
        log::debug!("rotated left, now facing {}", self.rotation.normalized());
    }

    /// Turn the cube one quarter to the right and reset all placements.
    pub fn rotate_right(&mut self) {
        self.rotation.rotate_right();
        self.reset_placements();
        log::debug!("rotated right, now facing {}", self.rotation.normalized());
    }

    /// Return every tile to its rest position in the pool, clearing both
    /// grid axes. A reset also ends any drag in flight.
    pub fn reset_placements(&mut self) {
        self.drag = None;
        for children in &mut self.faces {
            children.clear();
        }
        self.pool.clear();
        for id in &self.seeded {
            if let Some(tile) = self.tiles.get_mut(id) {
                tile.return_to_default();
            }
            self.pool.push(id.clone());
        }
    }

    /// Feed one pointer event.
    ///
    /// Returns the drop outcome when the event ends a drag, `None`
    /// otherwise. Fails only on the rotation invariant, which aborts the
    /// current gesture.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        layout: &Layout,
    ) -> Result<Option<DropOutcome>, RotationError> {
        match event {
            PointerEvent::Down { position } => {
                self.begin_drag(position, layout)?;
                Ok(None)
            }
            PointerEvent::Move { position } => {
                self.drag_move(position);
                Ok(None)
            }
            PointerEvent::Up { position } => self.end_drag(position, layout),
        }
    }

    fn begin_drag(&mut self, position: Point, layout: &Layout) -> Result<(), RotationError> {
        if self.drag.is_some() {
            // single-pointer assumption; a second down is ignored
            return Ok(());
        }
        let face = self.active_face()?;
        if let Some(id) = self.hit_test(position, layout, face) {
            log::debug!("drag started on tile {id}");
            self.drag = Some(DragSession::new(id, position));
        }
        Ok(())
    }

    /// Topmost tile under the pointer: active-face children above the pool,
    /// later-placed children above earlier ones.
    fn hit_test(&self, position: Point, layout: &Layout, face: Face) -> Option<TileId> {
        if let Some(face_rect) = layout.face {
            for id in self.faces[face.index()].iter().rev() {
                if let Some(tile) = self.tiles.get(id) {
                    if tile.bounds_from(face_rect.origin()).contains(position) {
                        return Some(id.clone());
                    }
                }
            }
        }
        for id in self.pool.iter().rev() {
            if let Some(tile) = self.tiles.get(id) {
                if tile.bounds_from(layout.pool.origin()).contains(position) {
                    return Some(id.clone());
                }
            }
        }
        None
    }

    fn drag_move(&mut self, position: Point) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let delta = session.step(position);
        let id = session.tile.clone();
        if let Some(tile) = self.tiles.get_mut(&id) {
            tile.position += delta;
        }
    }

    fn end_drag(
        &mut self,
        position: Point,
        layout: &Layout,
    ) -> Result<Option<DropOutcome>, RotationError> {
        let Some(session) = self.drag.take() else {
            return Ok(None);
        };
        let face = self.active_face()?;
        let id = session.tile;
        let Some(tile) = self.tiles.get(&id) else {
            return Ok(None);
        };

        let outcome = match layout.face {
            Some(face_rect) if snap::within_face(face_rect, position) => {
                let drop = snap::resolve_drop(face_rect, position, tile.size);
                self.place_on_face(&id, face, drop);
                log::debug!(
                    "tile {id} placed on {} at ({}, {})",
                    face.name(),
                    drop.cell.col,
                    drop.cell.row
                );
                DropOutcome::Placed {
                    tile: id,
                    face,
                    cell: drop.cell,
                }
            }
            _ => {
                self.return_to_pool(&id);
                log::debug!("tile {id} returned to the pool");
                DropOutcome::Returned { tile: id }
            }
        };
        Ok(Some(outcome))
    }

    /// Remove a tile from whichever child list currently holds it.
    fn detach(&mut self, id: &str) {
        self.pool.retain(|child| child != id);
        for children in &mut self.faces {
            children.retain(|child| child != id);
        }
    }

    fn place_on_face(&mut self, id: &TileId, face: Face, drop: SnappedDrop) {
        self.detach(id);
        if let Some(tile) = self.tiles.get_mut(id) {
            tile.position = drop.position;
            tile.grid_cell = Some(drop.cell);
            tile.container = Container::Face(face);
        }
        // appended at the end: last placed is topmost
        self.faces[face.index()].push(id.clone());
    }

    fn return_to_pool(&mut self, id: &TileId) {
        self.detach(id);
        if let Some(tile) = self.tiles.get_mut(id) {
            tile.return_to_default();
        }
        self.pool.push(id.clone());
    }
}
