//! Brick Dash entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless scripted run and prints the final scoreboard.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use brick_dash::consts::TICKS_PER_SECOND;
    use brick_dash::{HudSnapshot, Session, Tuning};

    env_logger::init();
    log::info!("Brick Dash (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path)?,
        None => Tuning::default(),
    };

    let mut session = Session::with_tuning(tuning);
    let max_frames = 120 * TICKS_PER_SECOND as u64;

    for frame in 0..max_frames {
        let out = session.frame(scripted_input(frame));
        for event in &out.events {
            log::debug!("frame {}: {:?}", frame, event);
        }
        if let Some(hud) = &out.hud {
            log::info!(
                "score {} coins {} lives {} {}",
                hud.score,
                hud.coins,
                hud.lives,
                hud.power_status
            );
        }
        if let Some(end) = out.ended {
            println!(
                "Run {} after {} frames with {} points",
                if end.won { "won" } else { "lost" },
                frame + 1,
                end.score
            );
            break;
        }
    }

    let hud = HudSnapshot::capture(session.state());
    let json = serde_json::to_string_pretty(&hud).context("failed to serialize scoreboard")?;
    println!("{json}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WebSession, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> anyhow::Result<brick_dash::Tuning> {
    use anyhow::Context;

    let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    brick_dash::Tuning::from_json(&json).with_context(|| format!("invalid tuning in {path}"))
}

/// Run right, hop every so often, throw fire whenever possible
#[cfg(not(target_arch = "wasm32"))]
fn scripted_input(frame: u64) -> brick_dash::sim::TickInput {
    brick_dash::sim::TickInput {
        left: false,
        right: true,
        jump: frame % 45 < 10,
        fire: true,
    }
}
