use crate::core::error::DuelError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

/// Sample count used when a caller does not ask for a specific one.
pub const DEFAULT_SAMPLES: usize = 1000;

#[derive(Clone, Copy, Debug)]
pub struct LaunchParams {
    pub x0_m: f64,
    pub y0_m: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
}

impl LaunchParams {
    pub fn new(x0_m: f64, y0_m: f64, speed_mps: f64, angle_deg: f64) -> Self {
        Self {
            x0_m,
            y0_m,
            speed_mps,
            angle_deg,
            gravity_mps2: EARTH_GRAVITY_MPS2,
        }
    }

    pub fn with_gravity(mut self, gravity_mps2: f64) -> Self {
        self.gravity_mps2 = gravity_mps2;
        self
    }
}

/// Time-ordered (x, y) samples of one ballistic flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub points: Vec<(f64, f64)>,
}

impl Trajectory {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }
}

pub fn velocity_components(params: LaunchParams) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(params: LaunchParams, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = params.x0_m + (vx * time_s);
    let y = params.y0_m + (vy * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Time until the unobstructed flight returns to y = 0, regardless of the
/// launch height. This is the larger root of y0 + vy*t - 0.5*g*t^2 = 0, so
/// the flight ends at the ground baseline rather than at the first upward
/// crossing of it.
pub fn flight_time(params: LaunchParams) -> Result<f64, DuelError> {
    if !params.x0_m.is_finite()
        || !params.y0_m.is_finite()
        || !params.speed_mps.is_finite()
        || !params.angle_deg.is_finite()
        || !params.gravity_mps2.is_finite()
    {
        return Err(DuelError::InvalidParameters(
            "inputs must be finite numbers".to_string(),
        ));
    }
    if params.speed_mps < 0.0 {
        return Err(DuelError::InvalidParameters(format!(
            "speed cannot be negative, got {} m/s",
            params.speed_mps
        )));
    }
    if params.gravity_mps2 <= 0.0 {
        return Err(DuelError::InvalidParameters(format!(
            "gravity must be positive, got {} m/s^2",
            params.gravity_mps2
        )));
    }

    let (_, vy) = velocity_components(params);
    let disc = (vy * vy) + (2.0 * params.gravity_mps2 * params.y0_m);
    if disc < 0.0 {
        return Err(DuelError::InvalidParameters(format!(
            "no real landing time: vy^2 + 2*g*y0 is negative ({disc})"
        )));
    }

    let t_land = (vy + disc.sqrt()) / params.gravity_mps2;
    if t_land < 0.0 {
        return Err(DuelError::InvalidParameters(format!(
            "landing time computed as negative ({t_land})"
        )));
    }

    Ok(t_land)
}

/// Samples the flight at `samples` uniform time steps over [0, t_land],
/// inclusive of both endpoints.
pub fn generate_trajectory(params: LaunchParams, samples: usize) -> Result<Trajectory, DuelError> {
    if samples < 2 {
        return Err(DuelError::InvalidParameters(format!(
            "a trajectory needs at least a start and an end sample, got {samples}"
        )));
    }

    let t_land = flight_time(params)?;
    let last = (samples - 1) as f64;
    let points = (0..samples)
        .map(|i| position_at_time(params, (i as f64 * t_land) / last))
        .collect();

    Ok(Trajectory { points })
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_SAMPLES, DuelError, EARTH_GRAVITY_MPS2, LaunchParams, flight_time,
        generate_trajectory,
    };

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_flight_time_for_flat_ground() {
        let time = flight_time(LaunchParams::new(0.0, 0.0, 10.0, 45.0))
            .expect("calculation should succeed");
        assert_close(time, 1.4431, 0.001);
    }

    #[test]
    fn zero_speed_drop_lands_from_launch_height() {
        let time = flight_time(LaunchParams::new(0.0, 2.0, 0.0, 10.0))
            .expect("calculation should succeed");
        assert_close(time, 0.6389, 0.001);
    }

    #[test]
    fn final_sample_returns_to_ground_regardless_of_launch_height() {
        for &(y0, speed, angle) in &[(0.0, 50.0, 45.0), (2.5, 35.0, 70.0), (40.0, 12.0, 160.0)] {
            let trajectory =
                generate_trajectory(LaunchParams::new(12.5, y0, speed, angle), DEFAULT_SAMPLES)
                    .expect("calculation should succeed");
            let (_, y_last) = trajectory.last().expect("trajectory has samples");
            assert_close(y_last, 0.0, 1e-9);
        }
    }

    #[test]
    fn first_sample_is_the_launch_point() {
        let trajectory = generate_trajectory(LaunchParams::new(12.5, 2.5, 35.0, 70.0), 100)
            .expect("calculation should succeed");
        assert_eq!(trajectory.len(), 100);
        assert_close(trajectory.points[0].0, 12.5, 1e-12);
        assert_close(trajectory.points[0].1, 2.5, 1e-12);
    }

    #[test]
    fn path_ascends_then_descends_for_upward_launches() {
        let trajectory = generate_trajectory(LaunchParams::new(0.0, 0.0, 40.0, 60.0), 500)
            .expect("calculation should succeed");
        let heights: Vec<f64> = trajectory.points.iter().map(|&(_, y)| y).collect();
        let mut descending = false;
        for pair in heights.windows(2) {
            if pair[1] < pair[0] {
                descending = true;
            } else {
                assert!(!descending, "height rose again after the apex");
            }
        }
        assert!(descending, "trajectory never came down");
    }

    #[test]
    fn x_is_monotonic_in_the_sign_of_cos_theta() {
        let rightward = generate_trajectory(LaunchParams::new(0.0, 0.0, 30.0, 45.0), 200)
            .expect("calculation should succeed");
        assert!(rightward.points.windows(2).all(|p| p[1].0 >= p[0].0));

        let leftward = generate_trajectory(LaunchParams::new(0.0, 0.0, 30.0, 135.0), 200)
            .expect("calculation should succeed");
        assert!(leftward.points.windows(2).all(|p| p[1].0 <= p[0].0));
    }

    #[test]
    fn rejects_non_positive_gravity() {
        let err = flight_time(LaunchParams::new(0.0, 0.0, 10.0, 45.0).with_gravity(0.0))
            .expect_err("calculation should fail");
        assert!(matches!(err, DuelError::InvalidParameters(_)));
    }

    #[test]
    fn rejects_impossible_landing_time() {
        let err = flight_time(LaunchParams::new(0.0, -10.0, 1.0, 0.0))
            .expect_err("calculation should fail");
        let DuelError::InvalidParameters(reason) = err else {
            panic!("wrong error kind");
        };
        assert!(reason.contains("no real landing time"));
    }

    #[test]
    fn rejects_fewer_than_two_samples() {
        for samples in [0, 1] {
            let err = generate_trajectory(LaunchParams::new(0.0, 0.0, 10.0, 45.0), samples)
                .expect_err("calculation should fail");
            assert!(matches!(err, DuelError::InvalidParameters(_)));
        }
    }

    #[test]
    fn default_gravity_is_earth() {
        let params = LaunchParams::new(0.0, 0.0, 10.0, 45.0);
        assert_close(params.gravity_mps2, EARTH_GRAVITY_MPS2, 0.0);
    }
}
