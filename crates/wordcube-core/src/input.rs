//! Mouse pointer events and the transient drag session.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::tile::TileId;

/// A pointer event fed in by the host UI.
///
/// Only mouse input is handled; there is no touch or keyboard path.
/// Positions are in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// State of one in-flight drag: the grabbed tile and the pointer position
/// as of the last processed event.
///
/// Created on pointer-down over a tile, destroyed on pointer-up. At most
/// one session exists at a time (single-pointer assumption).
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// The tile following the cursor.
    pub tile: TileId,
    /// Pointer position at the last processed event.
    pub last_position: Point,
}

impl DragSession {
    pub fn new(tile: TileId, position: Point) -> Self {
        Self {
            tile,
            last_position: position,
        }
    }

    /// Pointer delta since the last processed event, advancing the anchor.
    /// The tile follows the cursor 1:1, so this delta is applied verbatim.
    pub fn step(&mut self, position: Point) -> Vec2 {
        let delta = Vec2::new(
            position.x - self.last_position.x,
            position.y - self.last_position.y,
        );
        self.last_position = position;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_reports_delta_and_advances() {
        let mut session = DragSession::new("char-A1".to_string(), Point::new(10.0, 10.0));

        let delta = session.step(Point::new(25.0, 4.0));
        assert!((delta.x - 15.0).abs() < f64::EPSILON);
        assert!((delta.y + 6.0).abs() < f64::EPSILON);
        assert_eq!(session.last_position, Point::new(25.0, 4.0));

        let delta = session.step(Point::new(25.0, 4.0));
        assert!(delta.x.abs() < f64::EPSILON);
        assert!(delta.y.abs() < f64::EPSILON);
    }
}
