use crate::core::duel::BoardLayout;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Axis window (max x, max y) that shows the whole board plus whatever
/// path is currently on screen, padded and held at the fixed display
/// ratio so boards of any size render with the same proportions.
pub fn board_axis_window(layout: &BoardLayout, path: &[(f64, f64)]) -> (f64, f64) {
    let mut raw_max_x = 1.0f64;
    let mut raw_max_y = 1.0f64;
    for rect in [layout.tank1, layout.tank2, layout.obstacle] {
        raw_max_x = raw_max_x.max(rect.right);
        raw_max_y = raw_max_y.max(rect.top);
    }
    for &(x, y) in path {
        raw_max_x = raw_max_x.max(x);
        raw_max_y = raw_max_y.max(y);
    }

    let mut x_span = (raw_max_x * (1.0 + X_PADDING_RATIO)).max(1.0);
    let mut y_span = (raw_max_y * (1.0 + Y_PADDING_RATIO)).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

#[cfg(test)]
mod tests {
    use super::{DISTANCE_TO_HEIGHT_RATIO, board_axis_window};
    use crate::core::duel::BoardLayout;

    #[test]
    fn window_covers_the_whole_board() {
        let layout = BoardLayout::classic();
        let (max_x, max_y) = board_axis_window(&layout, &[]);
        assert!(max_x >= layout.tank2.right);
        assert!(max_y >= layout.obstacle.top);
    }

    #[test]
    fn window_keeps_the_fixed_display_ratio() {
        let (max_x, max_y) = board_axis_window(&BoardLayout::classic(), &[]);
        assert!((max_x / max_y - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
    }

    #[test]
    fn a_high_arc_stretches_the_window() {
        let layout = BoardLayout::classic();
        let (_, base_y) = board_axis_window(&layout, &[]);
        let (_, tall_y) = board_axis_window(&layout, &[(50.0, 120.0)]);
        assert!(tall_y > base_y);
        assert!(tall_y >= 120.0);
    }
}
