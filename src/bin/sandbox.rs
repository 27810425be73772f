//! Headless sandbox: throws one body across the world and prints where it is
//! after every rendered frame.
//!
//! ```text
//! sandbox -a 60 -v 100 -m 1 --steps 120
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use physic_engine::{Angle, Engine, FixedStep, Point, ShapeKind, Vec2, WorldSettings};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Launch angle in degrees, counter-clockwise from +x
    #[arg(short = 'a', long, default_value_t = 60.0, allow_negative_numbers = true)]
    angle: f32,

    /// Launch speed in world units per second
    #[arg(short = 'v', long, default_value_t = 100.0)]
    speed: f32,

    /// Body mass; 0 makes the body immovable
    #[arg(short = 'm', long, default_value_t = 1.0)]
    mass: f32,

    /// Number of frames to run
    #[arg(long, default_value_t = 120)]
    steps: u32,

    /// Fixed simulation time step in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Pace frames with the wall clock instead of running as fast as possible
    #[arg(long)]
    realtime: bool,

    /// World settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_settings(path: Option<&PathBuf>) -> Result<WorldSettings, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(WorldSettings::from_json(&json)?)
        }
        None => Ok(WorldSettings {
            top_right: Point::new(840.0, 480.0),
            ..WorldSettings::default()
        }),
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut clock = FixedStep::new(args.dt)?;
    let settings = load_settings(args.config.as_ref())?;
    let mut engine = Engine::with_settings(settings)?;

    let velocity = Vec2::from_polar(args.speed, Angle::new(args.angle));
    let handle = engine.try_create_body(ShapeKind::Circle, settings.bottom_left, velocity, args.mass)?;
    engine.add_body(handle);

    log::info!(
        "launching body at {} deg, {} u/s, mass {}",
        args.angle,
        args.speed,
        args.mass
    );

    let frame_time = Duration::from_secs_f32(args.dt);
    let mut last = Instant::now();

    for frame in 0..args.steps {
        let elapsed = if args.realtime {
            std::thread::sleep(frame_time);
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f32();
            last = now;
            elapsed
        } else {
            args.dt
        };

        for _ in 0..clock.advance(elapsed) {
            engine.step(args.dt)?;
        }

        if let Some(body) = engine.body(handle) {
            let p = body.position();
            let v = body.velocity();
            println!(
                "frame {:4}  pos ({:8.3}, {:8.3})  vel ({:8.3}, {:8.3})",
                frame, p.x, p.y, v.x, v.y
            );
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
