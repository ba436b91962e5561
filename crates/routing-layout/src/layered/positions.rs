use super::Cell;
use crate::{FlowDirection, Point, Vec2};

/// Map a grid cell to the top-left corner of its node
///
/// Levels advance along the flow axis and lanes across it, each cell being
/// `cell_size` wide/high and the whole grid offset by `margin`.
pub(crate) fn cell_position(cell: Cell, cell_size: Vec2, margin: f32, direction: FlowDirection) -> Point {
    let level = cell.level as f32;
    let lane = cell.lane as f32;

    match direction {
        FlowDirection::Horizontal => Point::new(margin + level * cell_size.x, margin + lane * cell_size.y),
        FlowDirection::Vertical => Point::new(margin + lane * cell_size.x, margin + level * cell_size.y),
    }
}
