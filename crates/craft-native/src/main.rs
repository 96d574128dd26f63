mod script;

use anyhow::{bail, Context};
use craft_core::{FramePipeline, RecipeBook, Tuning, Viewport, World, WorldEvent};
use script::{demo_session, ScriptedHands};

const VIEW_WIDTH: f32 = 1280.0;
const VIEW_HEIGHT: f32 = 720.0;
const FRAME_MS: f64 = 1000.0 / 60.0;
const JITTER_PX: f32 = 1.5;
// keep running after the script ends so lost hands get reported
const TAIL_MS: f64 = 500.0;

struct Options {
    seed: u64,
    frames: Option<u64>,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut opts = Options {
        seed: 7,
        frames: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let v = args.next().context("--seed needs a value")?;
                opts.seed = v.parse().with_context(|| format!("bad --seed {v}"))?;
            }
            "--frames" => {
                let v = args.next().context("--frames needs a value")?;
                opts.frames = Some(v.parse().with_context(|| format!("bad --frames {v}"))?);
            }
            other => bail!("unknown argument {other} (expected --seed N or --frames N)"),
        }
    }
    Ok(opts)
}

fn log_event(frame: u64, now_ms: f64, ev: &WorldEvent) {
    match ev {
        WorldEvent::Merged(m) => log::info!(
            "[{frame:>4} {now_ms:>7.0}ms] merged {:?} into {} at ({:.0}, {:.0})",
            m.consumed,
            m.kind,
            m.at.x,
            m.at.y
        ),
        WorldEvent::Discovered(kind) => log::info!("[{frame:>4} {now_ms:>7.0}ms] discovered {kind}"),
        other => log::info!("[{frame:>4} {now_ms:>7.0}ms] {other:?}"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let opts = parse_args()?;
    let viewport = Viewport::new(VIEW_WIDTH, VIEW_HEIGHT)?;
    let mut source = ScriptedHands::new(demo_session(), viewport, JITTER_PX, opts.seed);
    let frames = opts
        .frames
        .unwrap_or(((source.end_ms() + TAIL_MS) / FRAME_MS).ceil() as u64);

    let world = World::new(Tuning::default(), RecipeBook::classic(), viewport);
    let mut pipeline = FramePipeline::new(world);
    let mut events = Vec::new();
    let started = instant::Instant::now();
    let mut detections = 0u64;

    log::info!(
        "replaying {frames} frames at {VIEW_WIDTH}x{VIEW_HEIGHT}, seed {}",
        opts.seed
    );
    for frame in 0..frames {
        let now_ms = frame as f64 * FRAME_MS;
        if pipeline.frame(now_ms, viewport, &mut source, &mut events) {
            detections += 1;
        }
        for ev in events.drain(..) {
            log_event(frame, now_ms, &ev);
        }
    }

    let world = pipeline.world();
    log::info!(
        "done: {detections} detections in {:.1?}, {} items on the table",
        started.elapsed(),
        world.items().len()
    );
    for item in world.items().iter() {
        log::info!(
            "  {} #{} at ({:.0}, {:.0})",
            item.kind,
            item.id.0,
            item.pos.x,
            item.pos.y
        );
    }
    let palette: Vec<&str> = world.discovered().iter().collect();
    log::info!("palette: {}", palette.join(", "));
    Ok(())
}
