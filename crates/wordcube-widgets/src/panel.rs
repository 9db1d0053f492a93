//! The board panel: command toolbar, pool strip, and active face grid.
//!
//! The panel owns no state of its own. Every frame it lays out the two
//! containers, hands this frame's pointer input and container rectangles to
//! the core, then paints whatever the board says is true.

use egui::{Align2, CornerRadius, CursorIcon, Pos2, Sense, Stroke, StrokeKind, Ui, vec2};
use kurbo::Point;
use wordcube_core::{
    Board, Container, DropOutcome, GRID_CELLS, Layout, PlayPayload, PointerEvent, RotationError,
    Tile, cell_size, make_play,
};

use crate::buttons::CommandButton;
use crate::{layout, sizing, theme};

/// Visual configuration for [`BoardPanel`].
#[derive(Debug, Clone)]
pub struct BoardPanelStyle {
    /// Height of the pool strip.
    pub pool_height: f32,
    /// Preferred edge length of the face square; shrinks to the available
    /// width.
    pub face_size: f32,
}

impl Default for BoardPanelStyle {
    fn default() -> Self {
        Self {
            pool_height: 80.0,
            face_size: 450.0,
        }
    }
}

/// What happened during one frame of the panel.
#[derive(Debug, Default)]
pub struct BoardResponse {
    /// Payload built because "Make play" was clicked this frame. The host
    /// attaches it to its outgoing form submission.
    pub play: Option<PlayPayload>,
    /// Drop outcome if a drag ended this frame.
    pub outcome: Option<DropOutcome>,
    /// Rotation invariant violation, if one surfaced.
    pub error: Option<RotationError>,
}

/// The board panel widget.
#[derive(Debug, Clone, Default)]
pub struct BoardPanel {
    style: BoardPanelStyle,
}

impl BoardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: BoardPanelStyle) -> Self {
        Self { style }
    }

    /// Show the toolbar, the pool strip, and the active face, feeding this
    /// frame's pointer input into the board.
    pub fn show(&self, ui: &mut Ui, board: &mut Board) -> BoardResponse {
        let mut response = BoardResponse::default();

        self.toolbar(ui, board, &mut response);
        layout::separator(ui);

        let (pool_rect, _) = ui.allocate_exact_size(
            vec2(ui.available_width(), self.style.pool_height),
            Sense::hover(),
        );
        ui.add_space(8.0);
        let side = self.style.face_size.min(ui.available_width());
        let (face_rect, _) = ui.allocate_exact_size(vec2(side, side), Sense::hover());

        // the layout is rebuilt every frame, so the grid follows live resizes
        let frame_layout = Layout::new(to_kurbo_rect(pool_rect), to_kurbo_rect(face_rect));
        for event in pointer_events(ui) {
            match board.handle_pointer_event(event, &frame_layout) {
                Ok(Some(outcome)) => response.outcome = Some(outcome),
                Ok(None) => {}
                Err(err) => response.error = Some(err),
            }
        }

        self.paint_pool(ui, pool_rect, board);
        self.paint_face(ui, face_rect, board);
        self.paint_dragged(ui, pool_rect, face_rect, board);

        if board.is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        }

        response
    }

    fn toolbar(&self, ui: &mut Ui, board: &mut Board, response: &mut BoardResponse) {
        ui.horizontal(|ui| {
            if CommandButton::new("⟲ Rotate").show(ui) {
                board.rotate_left();
            }
            if CommandButton::new("Rotate ⟳").show(ui) {
                board.rotate_right();
            }
            if CommandButton::new("Reset").show(ui) {
                board.reset_placements();
            }
            if CommandButton::new("Make play").accent(true).show(ui) {
                match make_play(board) {
                    Ok(payload) => response.play = Some(payload),
                    Err(err) => response.error = Some(err),
                }
            }
            match board.active_face() {
                Ok(face) => layout::section_label(
                    ui,
                    &format!("{} · {}°", face.name(), board.normalized_rotation()),
                ),
                Err(_) => layout::section_label(ui, "no face"),
            }
        });
    }

    fn paint_pool(&self, ui: &Ui, rect: egui::Rect, board: &Board) {
        let painter = ui.painter();
        painter.rect_filled(
            rect,
            CornerRadius::same(sizing::CORNER_RADIUS),
            theme::POOL_BG,
        );
        painter.rect_stroke(
            rect,
            CornerRadius::same(sizing::CORNER_RADIUS),
            Stroke::new(1.0, theme::BORDER),
            StrokeKind::Inside,
        );
        for tile in board.pool_tiles() {
            if is_dragged(board, tile) {
                continue;
            }
            paint_tile(ui, tile_rect(tile, rect.min), tile);
        }
    }

    fn paint_face(&self, ui: &Ui, rect: egui::Rect, board: &Board) {
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(0), theme::FACE_BG);
        paint_grid(ui, rect);
        painter.rect_stroke(
            rect,
            CornerRadius::same(0),
            Stroke::new(1.0, theme::BORDER),
            StrokeKind::Inside,
        );
        if let Ok(face) = board.active_face() {
            for tile in board.face_tiles(face) {
                if is_dragged(board, tile) {
                    continue;
                }
                paint_tile(ui, tile_rect(tile, rect.min), tile);
            }
        }
    }

    /// The dragged tile paints last so it rides above everything else.
    fn paint_dragged(&self, ui: &Ui, pool_rect: egui::Rect, face_rect: egui::Rect, board: &Board) {
        let Some(tile) = board.dragged_tile() else {
            return;
        };
        let origin = match tile.container {
            Container::Pool => pool_rect.min,
            Container::Face(face) => {
                if board.active_face() == Ok(face) {
                    face_rect.min
                } else {
                    return;
                }
            }
        };
        paint_tile(ui, tile_rect(tile, origin), tile);
    }
}

fn is_dragged(board: &Board, tile: &Tile) -> bool {
    board.dragged_tile().is_some_and(|dragged| dragged.id == tile.id)
}

fn paint_grid(ui: &Ui, rect: egui::Rect) {
    let painter = ui.painter();
    let cell = cell_size(f64::from(rect.width())) as f32;
    let stroke = Stroke::new(1.0, theme::GRID_LINE);
    for i in 0..=GRID_CELLS {
        let x = (i as f32 * cell).min(rect.width());
        painter.line_segment(
            [
                Pos2::new(rect.left() + x, rect.top()),
                Pos2::new(rect.left() + x, rect.bottom()),
            ],
            stroke,
        );
        let y = (i as f32 * cell).min(rect.height());
        painter.line_segment(
            [
                Pos2::new(rect.left(), rect.top() + y),
                Pos2::new(rect.right(), rect.top() + y),
            ],
            stroke,
        );
    }
}

fn paint_tile(ui: &Ui, rect: egui::Rect, tile: &Tile) {
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        CornerRadius::same(sizing::TILE_RADIUS),
        theme::TILE_FILL,
    );
    painter.rect_stroke(
        rect,
        CornerRadius::same(sizing::TILE_RADIUS),
        Stroke::new(1.0, theme::TILE_BORDER),
        StrokeKind::Inside,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        &tile.value,
        egui::FontId::proportional(rect.height() * 0.45),
        theme::TEXT,
    );
}

/// Screen rectangle of a tile given its container's top-left corner.
fn tile_rect(tile: &Tile, origin: Pos2) -> egui::Rect {
    from_kurbo_rect(tile.bounds_from(Point::new(f64::from(origin.x), f64::from(origin.y))))
}

fn to_point(pos: Pos2) -> Point {
    Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn to_kurbo_rect(rect: egui::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(rect.left()),
        f64::from(rect.top()),
        f64::from(rect.right()),
        f64::from(rect.bottom()),
    )
}

fn from_kurbo_rect(rect: kurbo::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

/// Translate raw egui events into core pointer events. Only the primary
/// mouse button drags tiles.
fn translate_events(events: &[egui::Event]) -> Vec<PointerEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => Some(if *pressed {
                PointerEvent::Down {
                    position: to_point(*pos),
                }
            } else {
                PointerEvent::Up {
                    position: to_point(*pos),
                }
            }),
            egui::Event::PointerMoved(pos) => Some(PointerEvent::Move {
                position: to_point(*pos),
            }),
            _ => None,
        })
        .collect()
}

fn pointer_events(ui: &Ui) -> Vec<PointerEvent> {
    ui.input(|input| translate_events(&input.events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use wordcube_core::TileSeed;

    fn seeded_board() -> Board {
        let mut board = Board::new();
        board.reconcile(&[TileSeed::new("char-A0", "A"), TileSeed::new("char-B1", "B")]);
        board
    }

    fn run_frame(
        ctx: &egui::Context,
        panel: &BoardPanel,
        board: &mut Board,
        events: Vec<egui::Event>,
    ) -> BoardResponse {
        let mut response = BoardResponse::default();
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = panel.show(ui, board);
            });
        });
        response
    }

    #[test]
    fn test_idle_frame_leaves_the_board_alone() {
        let ctx = egui::Context::default();
        let panel = BoardPanel::new();
        let mut board = seeded_board();

        let response = run_frame(&ctx, &panel, &mut board, vec![]);

        assert!(response.play.is_none());
        assert!(response.error.is_none());
        assert_eq!(board.pool_tiles().count(), 2);
        assert!(!board.is_dragging());
    }

    #[test]
    fn test_frame_renders_placed_tiles() {
        let ctx = egui::Context::default();
        let panel = BoardPanel::new();
        let mut board = seeded_board();

        // place a tile through the core with an explicit layout, then make
        // sure a frame renders the placed state without complaint
        let core_layout = Layout::new(
            Rect::new(0.0, 0.0, 600.0, 80.0),
            Rect::new(100.0, 100.0, 400.0, 400.0),
        );
        board
            .handle_pointer_event(
                PointerEvent::Down {
                    position: Point::new(40.0, 40.0),
                },
                &core_layout,
            )
            .unwrap();
        board
            .handle_pointer_event(
                PointerEvent::Up {
                    position: Point::new(250.0, 250.0),
                },
                &core_layout,
            )
            .unwrap();

        let response = run_frame(&ctx, &panel, &mut board, vec![]);

        assert!(response.error.is_none());
        assert_eq!(board.pool_tiles().count(), 1);
    }

    #[test]
    fn test_translate_keeps_only_primary_pointer_events() {
        let events = vec![
            egui::Event::PointerMoved(Pos2::new(5.0, 6.0)),
            egui::Event::PointerButton {
                pos: Pos2::new(7.0, 8.0),
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::default(),
            },
            egui::Event::PointerButton {
                pos: Pos2::new(9.0, 1.0),
                button: egui::PointerButton::Secondary,
                pressed: true,
                modifiers: egui::Modifiers::default(),
            },
            egui::Event::PointerButton {
                pos: Pos2::new(2.0, 3.0),
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::default(),
            },
        ];

        let translated = translate_events(&events);

        assert_eq!(
            translated,
            vec![
                PointerEvent::Move {
                    position: Point::new(5.0, 6.0)
                },
                PointerEvent::Down {
                    position: Point::new(7.0, 8.0)
                },
                PointerEvent::Up {
                    position: Point::new(2.0, 3.0)
                },
            ]
        );
    }

    #[test]
    fn test_geometry_roundtrip() {
        let rect = egui::Rect::from_min_max(Pos2::new(10.0, 20.0), Pos2::new(110.0, 220.0));
        assert_eq!(from_kurbo_rect(to_kurbo_rect(rect)), rect);
    }

    #[test]
    fn test_tile_rect_offsets_by_container_origin() {
        let board = seeded_board();
        let tile = board.tile("char-A0").unwrap();

        let rect = tile_rect(tile, Pos2::new(100.0, 50.0));

        assert_eq!(rect.min, Pos2::new(120.0, 70.0));
        assert_eq!(rect.size(), vec2(40.0, 40.0));
    }
}
