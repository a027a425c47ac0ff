use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 720;
pub const MSAA_SAMPLES: i32 = 4;

pub const LEFT_MARGIN: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 90.0;

pub const TITLE_Y: f32 = 40.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

// Shot playback rate in trajectory samples per second.
pub const REVEAL_SAMPLES_PER_S: f32 = 420.0;

pub const SPEED_SLIDER_RANGE: (f32, f32) = (1.0, 120.0);
pub const ANGLE_SLIDER_RANGE: (f32, f32) = (0.0, 180.0);

pub const TITLE_SCREEN_BG: Color = Color::new(0.92, 0.93, 0.95, 1.0);
pub const START_BUTTON_COLOR: Color = Color::new(0.14, 0.45, 0.95, 1.0);
pub const START_BUTTON_HOVER_COLOR: Color = Color::new(0.10, 0.36, 0.80, 1.0);
pub const START_BUTTON_TEXT: &str = "Start Duel";

pub const TANK1_COLOR: Color = Color::new(0.16, 0.35, 0.90, 1.0);
pub const TANK2_COLOR: Color = Color::new(0.85, 0.18, 0.18, 1.0);
pub const OBSTACLE_COLOR: Color = Color::new(0.12, 0.12, 0.13, 1.0);
pub const PREVIEW_COLOR: Color = Color::new(0.30, 0.55, 0.96, 0.55);
