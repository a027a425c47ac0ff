use macroquad::prelude::*;
use tank_duel::core::window::board_axis_window;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    PREVIEW_COLOR, RIGHT_MARGIN, TOP_MARGIN,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{aim_preview, apply_actions, step_replay};
use crate::model::{AppScene, TurnPhase};
use crate::render::{
    draw_axis_tick_labels, draw_board, draw_grid, draw_hud, draw_path, draw_title_screen,
    player_color, world_to_screen,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Tank Duel".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        if state.scene == AppScene::Title {
            if draw_title_screen(screen_w, screen_h) {
                state.scene = AppScene::Game;
                state.reset_match();
            }
            next_frame().await;
            continue;
        }

        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_replay(&mut state, frame_dt);

        let preview = aim_preview(&state);

        // One axis window for everything on screen so the view does not
        // jump mid-replay.
        let mut window = {
            let path: &[(f64, f64)] = state
                .replay
                .as_ref()
                .map(|replay| replay.path.as_slice())
                .unwrap_or(&[]);
            board_axis_window(state.duel.layout(), path)
        };
        if let Some(points) = preview.as_deref() {
            let preview_window = board_axis_window(state.duel.layout(), points);
            window.0 = window.0.max(preview_window.0);
            window.1 = window.1.max(preview_window.1);
        }

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(
            left,
            right,
            top,
            bottom,
            Color::from_rgba(227, 231, 236, 255),
        );
        draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
        draw_line(left, top, left, bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(left, right, top, bottom, window);
        draw_board(state.duel.layout(), window, left, right, top, bottom);

        if let Some(points) = preview.as_deref() {
            draw_path(points, window, left, right, top, bottom, 2.0, PREVIEW_COLOR);
        }

        if let Some(replay) = &state.replay {
            let revealed = replay.revealed_points();
            draw_path(
                revealed,
                window,
                left,
                right,
                top,
                bottom,
                3.0,
                player_color(replay.shooter),
            );
            if state.phase == TurnPhase::Replaying {
                if let Some(&head) = revealed.last() {
                    let p = world_to_screen(head, window, left, right, top, bottom);
                    draw_circle(p.x, p.y, 6.0, player_color(replay.shooter));
                    draw_circle_lines(p.x, p.y, 6.0, 2.0, DARKGRAY);
                }
            }
        }

        draw_hud(&state, left, right, screen_h);
        next_frame().await;
    }
}
