use crate::core::ballistics::{DEFAULT_SAMPLES, LaunchParams, Trajectory, generate_trajectory};
use crate::core::error::DuelError;
use crate::core::geometry::{Rect, first_strike_index, truncate_at_rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit,
}

/// One resolved shot: the outcome plus the path to display, clipped at
/// whatever the projectile ran into first.
#[derive(Clone, Debug)]
pub struct ShotResolution {
    pub outcome: ShotOutcome,
    pub path: Trajectory,
}

impl ShotResolution {
    /// A missed shot whose path was clipped ran into the obstacle; a clear
    /// miss keeps its full path.
    pub fn blocked_by_obstacle(&self) -> bool {
        self.outcome == ShotOutcome::Miss && self.path.len() < DEFAULT_SAMPLES
    }
}

/// Resolves one shot against the opponent's tank and the central obstacle.
///
/// The obstacle is tested first and blocks on presence alone: a path that
/// enters both rectangles is a blocked miss even when it reaches the target
/// at an earlier sample. The two first-in-rect indices are deliberately not
/// compared numerically.
pub fn resolve_shot(
    target: Rect,
    obstacle: Rect,
    params: LaunchParams,
) -> Result<ShotResolution, DuelError> {
    let flight = generate_trajectory(params, DEFAULT_SAMPLES)?;

    if first_strike_index(&flight.points, obstacle).is_some() {
        return Ok(ShotResolution {
            outcome: ShotOutcome::Miss,
            path: Trajectory {
                points: truncate_at_rect(&flight.points, obstacle).to_vec(),
            },
        });
    }

    if first_strike_index(&flight.points, target).is_some() {
        return Ok(ShotResolution {
            outcome: ShotOutcome::Hit,
            path: Trajectory {
                points: truncate_at_rect(&flight.points, target).to_vec(),
            },
        });
    }

    Ok(ShotResolution {
        outcome: ShotOutcome::Miss,
        path: flight,
    })
}

#[cfg(test)]
mod tests {
    use super::{ShotOutcome, resolve_shot};
    use crate::core::ballistics::{DEFAULT_SAMPLES, LaunchParams};
    use crate::core::error::DuelError;
    use crate::core::geometry::Rect;

    const TARGET: Rect = Rect {
        left: 90.0,
        right: 95.0,
        bottom: 0.0,
        top: 5.0,
    };
    const OBSTACLE: Rect = Rect {
        left: 40.0,
        right: 60.0,
        bottom: 0.0,
        top: 50.0,
    };

    #[test]
    fn flat_shot_into_the_obstacle_is_a_blocked_miss() {
        // 50 m/s at 45 degrees out of the left tank runs straight into the
        // obstacle face well below its top.
        let resolution = resolve_shot(TARGET, OBSTACLE, LaunchParams::new(12.5, 0.0, 50.0, 45.0))
            .expect("resolution should succeed");
        assert_eq!(resolution.outcome, ShotOutcome::Miss);
        assert!(resolution.blocked_by_obstacle());
        let (x_last, y_last) = resolution.path.last().expect("clipped path has samples");
        assert!(!OBSTACLE.contains(x_last, y_last));
        assert!(x_last < OBSTACLE.right);
    }

    #[test]
    fn lobbed_shot_clears_the_obstacle_and_hits() {
        // High arc over the obstacle, coming down inside the right tank.
        let resolution = resolve_shot(TARGET, OBSTACLE, LaunchParams::new(12.5, 2.5, 35.0, 70.0))
            .expect("resolution should succeed");
        assert_eq!(resolution.outcome, ShotOutcome::Hit);
        assert!(!resolution.path.is_empty());
        assert!(resolution.path.len() < DEFAULT_SAMPLES);
        // The clipped path ends on or just outside the target boundary.
        let (x_last, y_last) = resolution.path.last().expect("clipped path has samples");
        assert!(!TARGET.contains(x_last, y_last));
    }

    #[test]
    fn obstacle_takes_precedence_when_both_rects_are_crossed() {
        // A long 45-degree arc from the origin passes through a low obstacle
        // and would also descend into a far target.
        let obstacle = Rect::new(40.0, 60.0, 0.0, 50.0);
        let far_target = Rect::new(200.0, 210.0, 0.0, 80.0);
        let resolution = resolve_shot(
            far_target,
            obstacle,
            LaunchParams::new(0.0, 0.0, 50.0, 45.0),
        )
        .expect("resolution should succeed");
        assert_eq!(resolution.outcome, ShotOutcome::Miss);
        assert!(resolution.blocked_by_obstacle());
        let (x_last, _) = resolution.path.last().expect("clipped path has samples");
        assert!(x_last < obstacle.left);
    }

    #[test]
    fn clear_miss_keeps_the_full_path() {
        // Far too little speed to reach anything.
        let resolution = resolve_shot(TARGET, OBSTACLE, LaunchParams::new(12.5, 2.5, 10.0, 45.0))
            .expect("resolution should succeed");
        assert_eq!(resolution.outcome, ShotOutcome::Miss);
        assert!(!resolution.blocked_by_obstacle());
        assert_eq!(resolution.path.len(), DEFAULT_SAMPLES);
    }

    #[test]
    fn generator_errors_propagate_through_the_resolver() {
        let err = resolve_shot(
            TARGET,
            OBSTACLE,
            LaunchParams::new(12.5, 2.5, 35.0, 70.0).with_gravity(-9.8),
        )
        .expect_err("resolution should fail");
        assert!(matches!(err, DuelError::InvalidParameters(_)));
    }
}
