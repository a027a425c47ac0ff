use tank_duel::core::duel::Player;
use tank_duel::core::shot::ShotOutcome;

#[derive(Clone, Copy)]
pub(crate) struct AimConfig {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
}

impl AimConfig {
    // Mirrored opening aim so each side starts pointed at the other.
    pub(crate) fn default_for(player: Player) -> Self {
        match player {
            Player::One => Self {
                speed_mps: 32.0,
                angle_deg: 60.0,
            },
            Player::Two => Self {
                speed_mps: 32.0,
                angle_deg: 120.0,
            },
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum TurnPhase {
    Aiming,
    Replaying,
    Resolved,
    MatchOver,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppScene {
    Title,
    Game,
}

/// A resolved shot being played back sample by sample.
pub(crate) struct ShotReplay {
    pub(crate) shooter: Player,
    pub(crate) outcome: ShotOutcome,
    pub(crate) blocked: bool,
    pub(crate) path: Vec<(f64, f64)>,
    pub(crate) revealed: f32,
}

impl ShotReplay {
    pub(crate) fn revealed_points(&self) -> &[(f64, f64)] {
        let count = (self.revealed.floor() as usize).min(self.path.len());
        &self.path[..count]
    }

    pub(crate) fn is_done(&self) -> bool {
        self.revealed.floor() as usize >= self.path.len()
    }
}
