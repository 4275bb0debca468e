//! Drag Shot entry point
//!
//! Native demo: loads tuning (optionally from a JSON file given as the first
//! argument), aims and fires one shot inside a walled box and prints the
//! preview and the landing point.

use drag_shot::sim::SegmentWorld;
use drag_shot::{ConfigError, FrameInput, Session, SessionConfig, SessionEvent};
use glam::Vec2;

/// Frame time for the demo loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on a flight after this many frames
const MAX_FRAMES: usize = 60 * 30;

fn main() {
    env_logger::init();
    log::info!("Drag Shot (native) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    let world = SegmentWorld::enclosure(Vec2::new(-8.0, 0.0), Vec2::new(8.0, 6.0))
        .with_segment(Vec2::new(3.0, 0.0), Vec2::new(3.0, 2.0));
    let start = Vec2::new(-6.0, 0.5);
    let pull_to = start + Vec2::new(-1.5, -1.2);

    let mut session = Session::new(config, start);

    let grab = FrameInput {
        pointer: Some(start),
        pressed: true,
        held: true,
        released: false,
    };
    session.update(&grab, FRAME_DT, &world);

    let aim = FrameInput {
        pointer: Some(pull_to),
        held: true,
        ..Default::default()
    };
    session.update(&aim, FRAME_DT, &world);

    println!("Preview ({} points):", session.preview().len());
    for point in session.preview() {
        println!("  ({:7.3}, {:7.3})", point.x, point.y);
    }

    let fire = FrameInput {
        pointer: Some(pull_to),
        released: true,
        ..Default::default()
    };
    let mut events = session.update(&fire, FRAME_DT, &world);

    let idle = FrameInput::default();
    for _ in 0..MAX_FRAMES {
        if !session.projectile().is_launched {
            break;
        }
        events.extend(session.update(&idle, FRAME_DT, &world));
    }

    for event in &events {
        match event {
            SessionEvent::Launched { velocity } => {
                println!("Launched at ({:.3}, {:.3})", velocity.x, velocity.y);
            }
            SessionEvent::Stopped { position } => {
                println!("Came to rest at ({:.3}, {:.3})", position.x, position.y);
            }
            SessionEvent::OutOfShots => println!("Out of shots!"),
            SessionEvent::DragStarted | SessionEvent::Won => {}
        }
    }
    println!("Shots remaining: {}", session.budget().shots_remaining());

    Ok(())
}
