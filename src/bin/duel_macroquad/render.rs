use macroquad::prelude::*;
use tank_duel::core::duel::{BoardLayout, MatchPhase, Player};

use crate::constants::{
    OBSTACLE_COLOR, START_BUTTON_COLOR, START_BUTTON_HOVER_COLOR, START_BUTTON_TEXT, TANK1_COLOR,
    TANK2_COLOR, TITLE_SCREEN_BG, TITLE_Y, X_GRID_LINES, Y_GRID_LINES,
};
use crate::state::AppRuntime;

pub(crate) fn player_color(player: Player) -> Color {
    match player {
        Player::One => TANK1_COLOR,
        Player::Two => TANK2_COLOR,
    }
}

pub(crate) fn world_to_screen(
    world: (f64, f64),
    window: (f64, f64),
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) -> Vec2 {
    let plot_w = f64::from((right - left).max(1.0));
    let plot_h = f64::from((bottom - top).max(1.0));
    let x = f64::from(left) + (world.0 / window.0.max(1.0)) * plot_w;
    let y = f64::from(bottom) - (world.1 / window.1.max(1.0)) * plot_h;
    vec2(x as f32, y as f32)
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_grid(left: f32, right: f32, top: f32, bottom: f32, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    window: (f64, f64),
) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        let label = format_axis_value(f64::from(t) * window.0, window.0);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            x - (size.width * 0.5),
            bottom + 22.0,
            f32::from(tick_font_size),
            label_color,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        let label = format_axis_value(f64::from(t) * window.1, window.1);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            (left - 8.0) - size.width,
            y + (size.height * 0.35),
            f32::from(tick_font_size),
            label_color,
        );
    }

    draw_text("Distance (m)", right - 130.0, bottom + 48.0, 18.0, label_color);
    draw_text("Height (m)", left + 10.0, top - 8.0, 18.0, label_color);
}

pub(crate) fn draw_board(
    layout: &BoardLayout,
    window: (f64, f64),
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) {
    let boxes = [
        (layout.tank1, TANK1_COLOR),
        (layout.tank2, TANK2_COLOR),
        (layout.obstacle, OBSTACLE_COLOR),
    ];
    for (rect, color) in boxes {
        let top_left = world_to_screen((rect.left, rect.top), window, left, right, top, bottom);
        let bottom_right =
            world_to_screen((rect.right, rect.bottom), window, left, right, top, bottom);
        draw_rectangle(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
            color,
        );
    }
}

/// Draws a sampled path; an empty or single-sample path renders nothing.
pub(crate) fn draw_path(
    points: &[(f64, f64)],
    window: (f64, f64),
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let mut prev = world_to_screen(points[0], window, left, right, top, bottom);
    for &point in &points[1..] {
        let next = world_to_screen(point, window, left, right, top, bottom);
        draw_line(prev.x, prev.y, next.x, next.y, thickness, color);
        prev = next;
    }
}

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, right: f32, screen_h: f32) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_text("Tank Duel", left, TITLE_Y, 30.0, header_color);
    draw_text(
        "Space fire | Enter next turn | R new match | V preview",
        left,
        TITLE_Y + 26.0,
        18.0,
        DARKGRAY,
    );

    let (banner, banner_color) = match state.duel.phase() {
        MatchPhase::AwaitingShot(player) => (
            format!("Player {} to fire", player.number()),
            player_color(player),
        ),
        MatchPhase::Finished(player) => (
            format!("Player {} wins!", player.number()),
            player_color(player),
        ),
    };
    let banner_size = measure_text(&banner, None, 26, 1.0);
    draw_text(
        &banner,
        right - banner_size.width,
        TITLE_Y,
        26.0,
        banner_color,
    );

    if let MatchPhase::Finished(player) = state.duel.phase() {
        let text = format!("Player {} wins the duel!", player.number());
        let size = measure_text(&text, None, 48, 1.0);
        draw_text(
            &text,
            left + (((right - left) - size.width) * 0.5),
            TITLE_Y + 64.0,
            48.0,
            player_color(player),
        );
    }

    draw_text(&state.status_line, left, screen_h - 34.0, 22.0, DARKGRAY);
}

pub(crate) fn draw_title_screen(screen_w: f32, screen_h: f32) -> bool {
    clear_background(TITLE_SCREEN_BG);

    let title = "Tank Duel";
    let title_size = measure_text(title, None, 64, 1.0);
    draw_text(
        title,
        (screen_w - title_size.width) * 0.5,
        screen_h * 0.32,
        64.0,
        Color::from_rgba(30, 30, 35, 255),
    );

    let subtitle = "Two tanks, one wall, first hit wins";
    let subtitle_size = measure_text(subtitle, None, 26, 1.0);
    draw_text(
        subtitle,
        (screen_w - subtitle_size.width) * 0.5,
        (screen_h * 0.32) + 44.0,
        26.0,
        DARKGRAY,
    );

    let button_w = 240.0;
    let button_h = 58.0;
    let button_x = (screen_w - button_w) * 0.5;
    let button_y = screen_h * 0.5;
    let (mouse_x, mouse_y) = mouse_position();
    let hovered = mouse_x >= button_x
        && mouse_x <= button_x + button_w
        && mouse_y >= button_y
        && mouse_y <= button_y + button_h;

    draw_rectangle(
        button_x,
        button_y,
        button_w,
        button_h,
        if hovered {
            START_BUTTON_HOVER_COLOR
        } else {
            START_BUTTON_COLOR
        },
    );
    let label_size = measure_text(START_BUTTON_TEXT, None, 28, 1.0);
    draw_text(
        START_BUTTON_TEXT,
        button_x + ((button_w - label_size.width) * 0.5),
        button_y + (button_h * 0.5) + (label_size.height * 0.35),
        28.0,
        WHITE,
    );

    hovered && is_mouse_button_pressed(MouseButton::Left)
}
