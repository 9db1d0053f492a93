//! Cube rotation state and active-face resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One rotation step in degrees.
pub const QUARTER_TURN: i32 = 90;

/// Raised when the normalized rotation does not face a cube side.
///
/// Rotation is only ever mutated in quarter-turn steps, so any other
/// normalized value means the host corrupted the state. This is a
/// programming error, not a recoverable user condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("normalized rotation {0} does not face a cube side")]
pub struct RotationError(pub i32);

/// One of the four drop-target faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    North,
    East,
    South,
    West,
}

impl Face {
    /// All faces in rotation order (0°, 90°, 180°, 270°).
    pub const ALL: [Face; 4] = [Face::North, Face::East, Face::South, Face::West];

    /// Container index of this face.
    pub fn index(self) -> usize {
        match self {
            Face::North => 0,
            Face::East => 1,
            Face::South => 2,
            Face::West => 3,
        }
    }

    /// Human-readable name, used for labels and logging.
    pub fn name(self) -> &'static str {
        match self {
            Face::North => "north",
            Face::East => "east",
            Face::South => "south",
            Face::West => "west",
        }
    }
}

/// The cube's visual rotation, in whole degrees.
///
/// The raw value accumulates without bound (it drives the visual transform,
/// where -90 and 270 animate differently) and is normalized to [0, 360)
/// before any face lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    degrees: i32,
}

impl Rotation {
    /// Rotation at page-load orientation (0°, north facing the viewer).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a rotation from raw degrees, e.g. host-saved state.
    ///
    /// Values that are not multiples of 90 are accepted here but surface as
    /// [`RotationError`] the first time a face is resolved.
    pub fn from_degrees(degrees: i32) -> Self {
        Self { degrees }
    }

    /// Raw accumulated degrees.
    pub fn degrees(self) -> i32 {
        self.degrees
    }

    /// Turn one quarter to the left.
    pub fn rotate_left(&mut self) {
        self.degrees -= QUARTER_TURN;
    }

    /// Turn one quarter to the right.
    pub fn rotate_right(&mut self) {
        self.degrees += QUARTER_TURN;
    }

    /// Rotation normalized to [0, 360), always non-negative.
    pub fn normalized(self) -> i32 {
        ((self.degrees % 360) + 360) % 360
    }

    /// The face currently turned toward the viewer.
    pub fn active_face(self) -> Result<Face, RotationError> {
        match self.normalized() {
            0 => Ok(Face::North),
            90 => Ok(Face::East),
            180 => Ok(Face::South),
            270 => Ok(Face::West),
            other => Err(RotationError(other)),
        }
    }
}
