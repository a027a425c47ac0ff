use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::prelude::*;

use tank_duel::core::ballistics::EARTH_GRAVITY_MPS2;
use tank_duel::core::duel::{BoardLayout, Duel, Player};
use tank_duel::core::shot::{ShotOutcome, ShotResolution};
use tank_duel::core::window::board_axis_window;

const SPEED_RANGE_MPS: (f64, f64) = (1.0, 300.0);
const ANGLE_RANGE_DEG: (f64, f64) = (0.0, 180.0);
const SNAPSHOT_DIR: &str = "shots";
const SNAPSHOT_SIZE: (u32, u32) = (960, 480);

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

/// Blocking prompt for a number inside an inclusive [min, max] range.
/// Re-prompts on anything non-numeric or out of range; EOF is an error.
fn read_f64_in_range(prompt: &str, range: (f64, f64)) -> Result<f64, String> {
    let (min, max) = range;
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(value) if value >= min && value <= max => return Ok(value),
            Ok(value) => eprintln!("{value} is outside [{min}, {max}]. Try again."),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn wait_for_enter() -> Result<(), String> {
    print!("Press enter to continue.");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Could not read input: {e}"))?;
    Ok(())
}

fn snapshot_path(turn: u32) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    Path::new(SNAPSHOT_DIR).join(format!("turn-{turn:02}-{stamp}.png"))
}

fn shooter_color(shooter: Player) -> RGBColor {
    match shooter {
        Player::One => BLUE,
        Player::Two => RED,
    }
}

/// Renders the board and the (possibly clipped) shot path to a PNG:
/// player one's tank blue, player two's red, the obstacle black.
fn render_snapshot(
    layout: &BoardLayout,
    path: &[(f64, f64)],
    shooter: Player,
    turn: u32,
) -> Result<PathBuf, String> {
    fs::create_dir_all(SNAPSHOT_DIR)
        .map_err(|e| format!("Could not create '{SNAPSHOT_DIR}': {e}"))?;
    let file = snapshot_path(turn);
    let (max_x, max_y) = board_axis_window(layout, path);

    let root = BitMapBackend::new(&file, SNAPSHOT_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Could not clear the snapshot: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Turn {turn} - Player {}", shooter.number()),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(32)
        .y_label_area_size(44)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)
        .map_err(|e| format!("Could not build the board chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| format!("Could not draw the board grid: {e}"))?;

    let boxes = [
        (layout.tank1, BLUE),
        (layout.tank2, RED),
        (layout.obstacle, BLACK),
    ];
    for (rect, color) in boxes {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(rect.left, rect.bottom), (rect.right, rect.top)],
                color.filled(),
            )))
            .map_err(|e| format!("Could not draw a board box: {e}"))?;
    }

    chart
        .draw_series(LineSeries::new(
            path.iter().copied(),
            shooter_color(shooter).stroke_width(2),
        ))
        .map_err(|e| format!("Could not draw the shot path: {e}"))?;

    root.present()
        .map_err(|e| format!("Could not write '{}': {e}", file.display()))?;
    drop(chart);
    drop(root);
    Ok(file)
}

fn report_outcome(resolution: &ShotResolution, shooter: Player) {
    match resolution.outcome {
        ShotOutcome::Hit => println!("Direct hit! Player {} wins.", shooter.number()),
        ShotOutcome::Miss if resolution.blocked_by_obstacle() => {
            println!("The obstacle blocks the shot.");
        }
        ShotOutcome::Miss => {
            if let Some((x_land, _)) = resolution.path.last() {
                println!("Miss. The shot comes down around x = {x_land:.1} m.");
            } else {
                println!("Miss.");
            }
        }
    }
}

fn play(mut duel: Duel) -> Result<Player, String> {
    let mut turn = 1u32;
    while let Some(shooter) = duel.active_player() {
        println!();
        println!("Turn {turn}: Player {} to fire.", shooter.number());
        let speed = read_f64_in_range(
            &format!(
                "Velocity (m/s, {} to {}): ",
                SPEED_RANGE_MPS.0, SPEED_RANGE_MPS.1
            ),
            SPEED_RANGE_MPS,
        )?;
        let angle = read_f64_in_range(
            &format!(
                "Angle (degrees, {} to {}): ",
                ANGLE_RANGE_DEG.0, ANGLE_RANGE_DEG.1
            ),
            ANGLE_RANGE_DEG,
        )?;

        let resolution = duel
            .take_shot(speed, angle)
            .map_err(|e| e.to_string())?;
        log::info!(
            "player {} fired at {speed} m/s, {angle} deg: {:?}",
            shooter.number(),
            resolution.outcome
        );

        report_outcome(&resolution, shooter);
        let file = render_snapshot(duel.layout(), &resolution.path.points, shooter, turn)?;
        log::debug!("snapshot written to {}", file.display());
        println!("Board saved to {}.", file.display());

        if duel.winner().is_none() {
            wait_for_enter()?;
        }
        turn += 1;
    }

    duel.winner()
        .ok_or_else(|| "match ended without a winner".to_string())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <gravity_mps2>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 1.62");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let gravity = match args.len() {
        1 => EARTH_GRAVITY_MPS2,
        2 => parse_f64(&args[1], "gravity")?,
        _ => return Err("Expected at most 1 argument: <gravity_mps2>.".to_string()),
    };
    if gravity <= 0.0 {
        return Err(format!("Gravity must be positive, got {gravity}."));
    }

    println!("Tank duel: first hit wins.");
    println!("Player 1 is the blue tank on the left, Player 2 the red tank on the right.");
    if gravity != EARTH_GRAVITY_MPS2 {
        println!("Gravity: {gravity} m/s^2.");
    }

    let duel = Duel::with_gravity(BoardLayout::classic(), gravity);
    let winner = play(duel)?;
    println!();
    println!("Player {} wins the duel!", winner.number());
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{SNAPSHOT_DIR, parse_f64, snapshot_path};

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_f64("9.8", "gravity").expect("should parse"), 9.8);
    }

    #[test]
    fn rejects_non_numeric_input_with_the_label() {
        let err = parse_f64("fast", "gravity").expect_err("should fail");
        assert!(err.contains("gravity"));
        assert!(err.contains("fast"));
    }

    #[test]
    fn snapshot_names_carry_the_turn_number() {
        let path = snapshot_path(7);
        assert!(path.starts_with(SNAPSHOT_DIR));
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("snapshot name is utf-8");
        assert!(name.starts_with("turn-07-"));
        assert!(name.ends_with(".png"));
    }
}
