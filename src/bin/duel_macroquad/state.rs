use tank_duel::core::duel::{BoardLayout, Duel, Player};

use crate::model::{AimConfig, AppScene, ShotReplay, TurnPhase};

pub(crate) struct AppRuntime {
    pub(crate) duel: Duel,
    pub(crate) aim: AimConfig,
    pub(crate) scene: AppScene,
    pub(crate) phase: TurnPhase,
    pub(crate) replay: Option<ShotReplay>,
    pub(crate) show_preview: bool,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            duel: Duel::new(BoardLayout::classic()),
            aim: AimConfig::default_for(Player::One),
            scene: AppScene::Title,
            phase: TurnPhase::Aiming,
            replay: None,
            show_preview: false,
            status_line: "Player 1 to fire".to_string(),
        }
    }

    pub(crate) fn reset_match(&mut self) {
        self.duel = Duel::new(BoardLayout::classic());
        self.aim = AimConfig::default_for(Player::One);
        self.phase = TurnPhase::Aiming;
        self.replay = None;
        self.status_line = "New match: Player 1 to fire".to_string();
    }

    pub(crate) fn begin_turn(&mut self) {
        let Some(player) = self.duel.active_player() else {
            return;
        };
        self.aim = AimConfig::default_for(player);
        self.phase = TurnPhase::Aiming;
        self.replay = None;
        self.status_line = format!("Player {} to fire", player.number());
    }
}
