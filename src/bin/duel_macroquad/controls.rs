use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{ANGLE_SLIDER_RANGE, SPEED_SLIDER_RANGE};
use crate::model::TurnPhase;
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) fire: bool,
    pub(crate) next_turn: bool,
    pub(crate) new_match: bool,
    pub(crate) toggle_preview: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            fire: self.fire || other.fire,
            next_turn: self.next_turn || other.next_turn,
            new_match: self.new_match || other.new_match,
            toggle_preview: self.toggle_preview || other.toggle_preview,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        fire: is_key_pressed(KeyCode::Space),
        next_turn: is_key_pressed(KeyCode::Enter),
        new_match: is_key_pressed(KeyCode::R),
        toggle_preview: is_key_pressed(KeyCode::V),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let label = match state.duel.active_player() {
        Some(player) => format!("Player {} Controls", player.number()),
        None => "Match Over".to_string(),
    };

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 110.0), vec2(330.0, 260.0))
        .label(&label)
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, &format!("g = {:.2} m/s^2", state.duel.gravity_mps2()));
            ui.separator();
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_SLIDER_RANGE.0..ANGLE_SLIDER_RANGE.1,
                &mut state.aim.angle_deg,
            );
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                SPEED_SLIDER_RANGE.0..SPEED_SLIDER_RANGE.1,
                &mut state.aim.speed_mps,
            );
            ui.separator();
            if ui.button(None, "Fire (Space)") {
                actions.fire = true;
            }
            if ui.button(None, "Next Turn (Enter)") {
                actions.next_turn = true;
            }
            if ui.button(None, "New Match (R)") {
                actions.new_match = true;
            }
            if ui.button(None, "Toggle Preview (V)") {
                actions.toggle_preview = true;
            }
            ui.separator();
            ui.label(None, &format!("Phase: {}", phase_text(state.phase)));
            ui.label(
                None,
                if state.show_preview {
                    "Preview: on"
                } else {
                    "Preview: off"
                },
            );
        });

    actions
}

pub(crate) fn phase_text(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::Aiming => "Aiming",
        TurnPhase::Replaying => "Shot in flight",
        TurnPhase::Resolved => "Resolved",
        TurnPhase::MatchOver => "Match over",
    }
}
