use tank_duel::core::ballistics::LaunchParams;
use tank_duel::core::shot::{ShotOutcome, resolve_shot};

use crate::constants::REVEAL_SAMPLES_PER_S;
use crate::controls::FrameActions;
use crate::model::{ShotReplay, TurnPhase};
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.toggle_preview {
        state.show_preview = !state.show_preview;
    }
    if actions.new_match {
        state.reset_match();
        return;
    }

    match state.phase {
        TurnPhase::Aiming if actions.fire => fire(state),
        TurnPhase::Resolved if actions.next_turn => state.begin_turn(),
        _ => {}
    }
}

fn fire(state: &mut AppRuntime) {
    let Some(shooter) = state.duel.active_player() else {
        return;
    };

    let speed_mps = f64::from(state.aim.speed_mps);
    let angle_deg = f64::from(state.aim.angle_deg);
    match state.duel.take_shot(speed_mps, angle_deg) {
        Ok(resolution) => {
            let blocked = resolution.blocked_by_obstacle();
            state.replay = Some(ShotReplay {
                shooter,
                outcome: resolution.outcome,
                blocked,
                path: resolution.path.points,
                revealed: 0.0,
            });
            state.phase = TurnPhase::Replaying;
            state.status_line = format!(
                "Player {} fires at {speed_mps:.0} m/s, {angle_deg:.0} deg",
                shooter.number()
            );
        }
        Err(err) => state.status_line = format!("Shot rejected: {err}"),
    }
}

pub(crate) fn step_replay(state: &mut AppRuntime, frame_dt: f32) {
    if state.phase != TurnPhase::Replaying {
        return;
    }
    let Some(replay) = state.replay.as_mut() else {
        return;
    };

    replay.revealed += REVEAL_SAMPLES_PER_S * frame_dt;
    if !replay.is_done() {
        return;
    }

    match replay.outcome {
        ShotOutcome::Hit => {
            state.status_line = format!(
                "Direct hit! Player {} wins. Press R for a new match.",
                replay.shooter.number()
            );
            state.phase = TurnPhase::MatchOver;
        }
        ShotOutcome::Miss => {
            let cause = if replay.blocked {
                "Blocked by the obstacle"
            } else {
                "Shot misses"
            };
            let next = state
                .duel
                .active_player()
                .map(|player| player.number())
                .unwrap_or_default();
            state.status_line = format!("{cause}. Press enter for Player {next}.");
            state.phase = TurnPhase::Resolved;
        }
    }
}

/// Would-be resolution of the current slider values, computed with the pure
/// resolver; the match itself is untouched.
pub(crate) fn aim_preview(state: &AppRuntime) -> Option<Vec<(f64, f64)>> {
    if !state.show_preview || state.phase != TurnPhase::Aiming {
        return None;
    }
    let shooter = state.duel.active_player()?;
    let layout = state.duel.layout();
    let (x0_m, y0_m) = layout.tank(shooter).center();
    let params = LaunchParams::new(
        x0_m,
        y0_m,
        f64::from(state.aim.speed_mps),
        f64::from(state.aim.angle_deg),
    )
    .with_gravity(state.duel.gravity_mps2());

    resolve_shot(layout.tank(shooter.other()), layout.obstacle, params)
        .ok()
        .map(|resolution| resolution.path.points)
}
