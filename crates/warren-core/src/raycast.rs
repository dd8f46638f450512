//! First-person projection by DDA ray marching.
//!
//! Each view column casts one ray as two independent marchers, one walking
//! horizontal grid-line crossings and one walking vertical crossings. The
//! nearer wall hit wins, gets fisheye-corrected against the view center and
//! maps to a column height inversely proportional to distance.

use std::f32::consts::PI;

use crate::consts::{COLUMN_ANGLE, MAX_RAY_STEPS};
use crate::dungeon::DungeonGrid;
use crate::player::{wrap_angle, PlayerPose};

/// Which marcher found the winning wall; drives shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallShade {
    /// Neither marcher hit within its step budget.
    None,
    /// Hit on a horizontal grid line (north/south face).
    Horizontal,
    /// Hit on a vertical grid line (east/west face).
    Vertical,
}

/// Projected wall for one view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallColumn {
    /// Rows of wall to draw, already clipped to the viewport height.
    pub height: usize,
    pub shade: WallShade,
}

/// Project the grid into one wall column per view column.
///
/// Rays span one degree per column, centered on the player's facing angle.
/// Pure function of pose and grid; never fails.
pub fn cast(
    grid: &DungeonGrid,
    pose: &PlayerPose,
    view_width: usize,
    view_height: usize,
    tile_size: f32,
) -> Vec<WallColumn> {
    let mut columns = Vec::with_capacity(view_width);
    let mut angle = wrap_angle(pose.angle - COLUMN_ANGLE * (view_width / 2) as f32);
    for _ in 0..view_width {
        columns.push(cast_column(grid, pose, angle, view_height, tile_size));
        angle = wrap_angle(angle + COLUMN_ANGLE);
    }
    columns
}

fn cast_column(
    grid: &DungeonGrid,
    pose: &PlayerPose,
    angle: f32,
    view_height: usize,
    tile_size: f32,
) -> WallColumn {
    let horizontal = march_horizontal(grid, pose, angle, tile_size);
    let vertical = march_vertical(grid, pose, angle, tile_size);

    let (distance, shade) = match (horizontal, vertical) {
        (None, None) => {
            return WallColumn {
                height: 0,
                shade: WallShade::None,
            }
        }
        (Some(h), None) => (h, WallShade::Horizontal),
        (None, Some(v)) => (v, WallShade::Vertical),
        (Some(h), Some(v)) => {
            if v < h {
                (v, WallShade::Vertical)
            } else {
                (h, WallShade::Horizontal)
            }
        }
    };

    // Fisheye correction: scale by the cosine of the offset from the view
    // center so flat walls project flat. An offset past 90 degrees puts the
    // hit behind the view plane; that column shows nothing.
    let corrected = distance * (pose.angle - angle).cos();
    if corrected <= 0.0 {
        return WallColumn {
            height: 0,
            shade: WallShade::None,
        };
    }
    let height = ((tile_size * view_height as f32) / corrected) as usize;
    WallColumn {
        height: height.min(view_height),
        shade,
    }
}

/// March along horizontal grid-line crossings (stepping in y).
fn march_horizontal(
    grid: &DungeonGrid,
    pose: &PlayerPose,
    angle: f32,
    tile_size: f32,
) -> Option<f32> {
    let sin_a = angle.sin();
    if sin_a.abs() < 1e-6 {
        // Ray parallel to horizontal lines; it can never cross one.
        return None;
    }
    let inv_tan = -angle.cos() / sin_a;
    let (ry, y_step) = if angle < PI {
        // Looking toward +y: first crossing below the player.
        ((pose.y / tile_size).floor() * tile_size + tile_size, tile_size)
    } else {
        // Looking toward -y: just inside the cell above the line.
        (
            (pose.y / tile_size).floor() * tile_size - 0.0001,
            -tile_size,
        )
    };
    let rx = (pose.y - ry) * inv_tan + pose.x;
    let x_step = -y_step * inv_tan;
    march(grid, pose, rx, ry, x_step, y_step, tile_size)
}

/// March along vertical grid-line crossings (stepping in x).
fn march_vertical(
    grid: &DungeonGrid,
    pose: &PlayerPose,
    angle: f32,
    tile_size: f32,
) -> Option<f32> {
    let cos_a = angle.cos();
    if cos_a.abs() < 1e-6 {
        // Ray parallel to vertical lines.
        return None;
    }
    let neg_tan = -angle.sin() / cos_a;
    let half_pi = PI / 2.0;
    let three_half_pi = 3.0 * PI / 2.0;
    let (rx, x_step) = if !(half_pi..=three_half_pi).contains(&angle) {
        // Looking toward +x.
        ((pose.x / tile_size).floor() * tile_size + tile_size, tile_size)
    } else {
        (
            (pose.x / tile_size).floor() * tile_size - 0.0001,
            -tile_size,
        )
    };
    let ry = (pose.x - rx) * neg_tan + pose.y;
    let y_step = -x_step * neg_tan;
    march(grid, pose, rx, ry, x_step, y_step, tile_size)
}

/// Step crossing to crossing until a solid cell or the step budget.
fn march(
    grid: &DungeonGrid,
    pose: &PlayerPose,
    mut rx: f32,
    mut ry: f32,
    x_step: f32,
    y_step: f32,
    tile_size: f32,
) -> Option<f32> {
    for _ in 0..MAX_RAY_STEPS {
        if rx < 0.0 || ry < 0.0 {
            return None;
        }
        let tx = (rx / tile_size) as usize;
        let ty = (ry / tile_size) as usize;
        match grid.tile(tx, ty) {
            Ok(tile) if tile.is_solid() => {
                let dx = rx - pose.x;
                let dy = ry - pose.y;
                return Some((dx * dx + dy * dy).sqrt());
            }
            Ok(_) => {}
            // Left the grid; the marchers only ever move further out.
            Err(_) => return None,
        }
        rx += x_step;
        ry += y_step;
    }
    None
}
