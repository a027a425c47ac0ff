use crate::core::ballistics::{EARTH_GRAVITY_MPS2, LaunchParams};
use crate::core::error::DuelError;
use crate::core::geometry::Rect;
use crate::core::shot::{ShotOutcome, ShotResolution, resolve_shot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// The fixed board for one match: two tank footprints and the central
/// obstacle. Never mutated once the match starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub tank1: Rect,
    pub tank2: Rect,
    pub obstacle: Rect,
}

impl BoardLayout {
    /// The classic layout: tanks in the lower corners, a tall wall between.
    pub fn classic() -> Self {
        Self {
            tank1: Rect::new(10.0, 15.0, 0.0, 5.0),
            tank2: Rect::new(90.0, 95.0, 0.0, 5.0),
            obstacle: Rect::new(40.0, 60.0, 0.0, 50.0),
        }
    }

    pub fn tank(&self, player: Player) -> Rect {
        match player {
            Player::One => self.tank1,
            Player::Two => self.tank2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingShot(Player),
    Finished(Player),
}

/// Turn-taking state machine. Player one opens; each resolved shot either
/// ends the match or hands the turn to the other player.
#[derive(Clone, Copy, Debug)]
pub struct Duel {
    layout: BoardLayout,
    gravity_mps2: f64,
    phase: MatchPhase,
}

impl Duel {
    pub fn new(layout: BoardLayout) -> Self {
        Self::with_gravity(layout, EARTH_GRAVITY_MPS2)
    }

    pub fn with_gravity(layout: BoardLayout, gravity_mps2: f64) -> Self {
        Self {
            layout,
            gravity_mps2,
            phase: MatchPhase::AwaitingShot(Player::One),
        }
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn active_player(&self) -> Option<Player> {
        match self.phase {
            MatchPhase::AwaitingShot(player) => Some(player),
            MatchPhase::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            MatchPhase::Finished(player) => Some(player),
            MatchPhase::AwaitingShot(_) => None,
        }
    }

    /// One full turn: the active tank fires from the center of its
    /// footprint at the opponent. Exactly one resolved shot per transition;
    /// a hit ends the match, a miss hands the turn over.
    pub fn take_shot(
        &mut self,
        speed_mps: f64,
        angle_deg: f64,
    ) -> Result<ShotResolution, DuelError> {
        let shooter = match self.phase {
            MatchPhase::AwaitingShot(player) => player,
            MatchPhase::Finished(_) => return Err(DuelError::MatchOver),
        };

        let (x0_m, y0_m) = self.layout.tank(shooter).center();
        let params =
            LaunchParams::new(x0_m, y0_m, speed_mps, angle_deg).with_gravity(self.gravity_mps2);
        let resolution = resolve_shot(self.layout.tank(shooter.other()), self.layout.obstacle, params)?;

        self.phase = match resolution.outcome {
            ShotOutcome::Hit => MatchPhase::Finished(shooter),
            ShotOutcome::Miss => MatchPhase::AwaitingShot(shooter.other()),
        };

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardLayout, Duel, MatchPhase, Player};
    use crate::core::error::DuelError;
    use crate::core::shot::ShotOutcome;

    #[test]
    fn player_one_opens_the_match() {
        let duel = Duel::new(BoardLayout::classic());
        assert_eq!(duel.phase(), MatchPhase::AwaitingShot(Player::One));
        assert_eq!(duel.active_player(), Some(Player::One));
        assert_eq!(duel.winner(), None);
    }

    #[test]
    fn a_hit_finishes_the_match_for_the_shooter() {
        let mut duel = Duel::new(BoardLayout::classic());
        let resolution = duel.take_shot(35.0, 70.0).expect("shot should resolve");
        assert_eq!(resolution.outcome, ShotOutcome::Hit);
        assert_eq!(duel.phase(), MatchPhase::Finished(Player::One));
        assert_eq!(duel.winner(), Some(Player::One));
    }

    #[test]
    fn a_miss_hands_the_turn_over_without_touching_the_board() {
        let layout = BoardLayout::classic();
        let mut duel = Duel::new(layout);
        let resolution = duel.take_shot(10.0, 45.0).expect("shot should resolve");
        assert_eq!(resolution.outcome, ShotOutcome::Miss);
        assert_eq!(duel.phase(), MatchPhase::AwaitingShot(Player::Two));
        assert_eq!(*duel.layout(), layout);
    }

    #[test]
    fn player_two_can_win_with_the_mirrored_arc() {
        let mut duel = Duel::new(BoardLayout::classic());
        duel.take_shot(10.0, 45.0).expect("shot should resolve");
        let resolution = duel.take_shot(35.0, 110.0).expect("shot should resolve");
        assert_eq!(resolution.outcome, ShotOutcome::Hit);
        assert_eq!(duel.winner(), Some(Player::Two));
    }

    #[test]
    fn shots_after_the_match_is_decided_are_rejected() {
        let mut duel = Duel::new(BoardLayout::classic());
        duel.take_shot(35.0, 70.0).expect("shot should resolve");
        let err = duel.take_shot(35.0, 70.0).expect_err("shot should be rejected");
        assert_eq!(err, DuelError::MatchOver);
    }

    #[test]
    fn generator_errors_abort_the_turn_without_a_transition() {
        let mut duel = Duel::with_gravity(BoardLayout::classic(), -1.0);
        let err = duel.take_shot(35.0, 70.0).expect_err("shot should fail");
        assert!(matches!(err, DuelError::InvalidParameters(_)));
        // The failed turn consumed nothing: player one still shoots.
        assert_eq!(duel.active_player(), Some(Player::One));
    }
}
