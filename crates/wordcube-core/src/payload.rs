//! Play payload assembly: the position report for the active face and the
//! value map attached to an outgoing form submission.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::Board;
use crate::rotation::RotationError;

/// Action discriminator the server expects on a play submission.
pub const PLAY_ACTION: &str = "makePlay";

/// One placed tile as reported to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedChar {
    pub id: String,
    pub val: String,
    /// `[column, row]` grid indices on the active face.
    pub pos: [u32; 2],
}

/// The complete value map attached to an outgoing "make play" submission.
///
/// Serializes to
/// `{"actionType": "makePlay", "side": 0|90|180|270, "chars": [...]}`.
/// No validation happens here; the external form framework and the server
/// own submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayPayload {
    pub action_type: String,
    /// Normalized rotation at build time.
    pub side: i32,
    pub chars: Vec<PlacedChar>,
}

impl PlayPayload {
    /// Render as the value map an external form framework attaches to the
    /// request parameters.
    pub fn to_form_values(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Read the placement of every tile on the active face, in placement
/// order. Pure read; the board is not touched.
pub fn active_face_positions(board: &Board) -> Result<Vec<PlacedChar>, RotationError> {
    let face = board.active_face()?;
    Ok(board
        .face_tiles(face)
        .filter_map(|tile| {
            // a face child always carries a cell; skip rather than invent one
            let cell = tile.grid_cell?;
            Some(PlacedChar {
                id: tile.id.clone(),
                val: tile.value.clone(),
                pos: [cell.col, cell.row],
            })
        })
        .collect())
}

/// Build the payload for an outgoing play submission from the current
/// board state.
pub fn build_play_payload(board: &Board) -> Result<PlayPayload, RotationError> {
    Ok(PlayPayload {
        action_type: PLAY_ACTION.to_string(),
        side: board.normalized_rotation(),
        chars: active_face_positions(board)?,
    })
}

/// Build the payload and reset all placements, the full effect of the
/// "make play" command: the snapshot goes out, the tiles come home.
pub fn make_play(board: &mut Board) -> Result<PlayPayload, RotationError> {
    let payload = build_play_payload(board)?;
    board.reset_placements();
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Layout;
    use crate::input::PointerEvent;
    use crate::rotation::Rotation;
    use crate::tile::TileSeed;
    use kurbo::{Point, Rect};

    fn layout() -> Layout {
        Layout::new(
            Rect::new(0.0, 0.0, 600.0, 80.0),
            Rect::new(100.0, 100.0, 400.0, 400.0),
        )
    }

    fn place(board: &mut Board, grab: Point, release: Point) {
        board
            .handle_pointer_event(PointerEvent::Down { position: grab }, &layout())
            .unwrap();
        board
            .handle_pointer_event(PointerEvent::Up { position: release }, &layout())
            .unwrap();
    }

    #[test]
    fn test_empty_face_reports_no_chars() {
        let mut board = Board::new();
        board.reconcile(&[TileSeed::new("t1", "A")]);
        assert_eq!(active_face_positions(&board).unwrap(), vec![]);
    }

    #[test]
    fn test_payload_shape_matches_form_contract() {
        let mut board = Board::new();
        board.reconcile(&[TileSeed::new("t1", "A")]);
        board.set_rotation(Rotation::from_degrees(90));
        // rotation 90 -> east face; relative release (80, 100) with a
        // 40x40 tile adjusts to (60, 80), already on the grid -> cell (3, 4)
        place(&mut board, Point::new(40.0, 40.0), Point::new(180.0, 200.0));

        let payload = build_play_payload(&board).unwrap();
        assert_eq!(payload.side, 90);
        assert_eq!(
            payload.chars,
            vec![PlacedChar {
                id: "t1".to_string(),
                val: "A".to_string(),
                pos: [3, 4],
            }]
        );

        let values = payload.to_form_values().unwrap();
        assert_eq!(
            values,
            serde_json::json!({
                "actionType": "makePlay",
                "side": 90,
                "chars": [{"id": "t1", "val": "A", "pos": [3, 4]}],
            })
        );
    }

    #[test]
    fn test_positions_come_in_placement_order() {
        let mut board = Board::new();
        board.reconcile(&[TileSeed::new("t1", "A"), TileSeed::new("t2", "B")]);
        // place the second-seeded tile first
        place(&mut board, Point::new(100.0, 40.0), Point::new(150.0, 150.0));
        place(&mut board, Point::new(40.0, 40.0), Point::new(350.0, 350.0));

        let ids: Vec<String> = active_face_positions(&board)
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["t2".to_string(), "t1".to_string()]);
    }

    #[test]
    fn test_corrupt_rotation_fails_the_report() {
        let mut board = Board::new();
        board.set_rotation(Rotation::from_degrees(17));
        assert!(active_face_positions(&board).is_err());
        assert!(build_play_payload(&board).is_err());
    }

    #[test]
    fn test_make_play_snapshots_then_resets() {
        let mut board = Board::new();
        board.reconcile(&[TileSeed::new("t1", "A")]);
        place(&mut board, Point::new(40.0, 40.0), Point::new(250.0, 250.0));

        let payload = make_play(&mut board).unwrap();

        assert_eq!(payload.chars.len(), 1);
        assert_eq!(active_face_positions(&board).unwrap(), vec![]);
        assert_eq!(board.pool_tiles().count(), 1);
    }
}
