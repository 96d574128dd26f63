//! Scripted hands: keyframed fingertip paths turned into noisy 21-point
//! landmark sets, so the engine can be driven without a camera.

use craft_core::error::Result;
use craft_core::{HandLandmarks, LandmarkSource, Viewport, LANDMARKS_PER_HAND};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grip {
    Open,
    Pinch,
    Closed,
}

impl Grip {
    /// Thumb-index and thumb-middle fingertip distances in pixels.
    fn spans(self) -> (f32, f32) {
        match self {
            Grip::Open => (120.0, 140.0),
            Grip::Pinch => (30.0, 120.0),
            Grip::Closed => (30.0, 40.0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Key {
    pub t_ms: f64,
    pub tip: Vec2,
    pub grip: Grip,
}

#[inline]
pub fn key(t_ms: f64, x: f32, y: f32, grip: Grip) -> Key {
    Key {
        t_ms,
        tip: Vec2::new(x, y),
        grip,
    }
}

/// One hand's keyframes. The hand is visible from its first key to its last.
#[derive(Clone, Debug)]
pub struct Track {
    keys: Vec<Key>,
}

impl Track {
    pub fn new(mut keys: Vec<Key>) -> Self {
        keys.sort_by(|a, b| a.t_ms.total_cmp(&b.t_ms));
        Self { keys }
    }

    pub fn end_ms(&self) -> f64 {
        self.keys.last().map(|k| k.t_ms).unwrap_or(0.0)
    }

    /// Tip position (linearly interpolated) and grip (held from the previous key).
    pub fn sample(&self, t_ms: f64) -> Option<(Vec2, Grip)> {
        let first = self.keys.first()?;
        let last = self.keys.last()?;
        if t_ms < first.t_ms || t_ms > last.t_ms {
            return None;
        }
        let i = self
            .keys
            .iter()
            .rposition(|k| k.t_ms <= t_ms)
            .unwrap_or(0);
        let a = self.keys[i];
        let Some(b) = self.keys.get(i + 1) else {
            return Some((a.tip, a.grip));
        };
        let span = (b.t_ms - a.t_ms).max(1e-6);
        let f = ((t_ms - a.t_ms) / span) as f32;
        Some((a.tip.lerp(b.tip, f), a.grip))
    }
}

/// Lay out a plausible hand around the index fingertip, in screen pixels.
fn synth_screen_hand(tip: Vec2, grip: Grip) -> [Vec2; LANDMARKS_PER_HAND] {
    let (d_index, d_middle) = grip.spans();
    let thumb = tip + Vec2::new(d_index, 0.0);
    let middle = thumb + Vec2::new(0.0, d_middle);
    let wrist = tip + Vec2::new(d_index * 0.5, 170.0);

    let mut pts = [Vec2::ZERO; LANDMARKS_PER_HAND];
    pts[0] = wrist;
    // each finger: three joints spread between the wrist and its tip
    let fingers = [
        (1, thumb),
        (5, tip),
        (9, middle),
        (13, middle + Vec2::new(-25.0, 10.0)),
        (17, middle + Vec2::new(-45.0, 25.0)),
    ];
    for (base, end) in fingers {
        for j in 0..4 {
            let f = (j + 1) as f32 / 4.0;
            pts[base + j] = wrist.lerp(end, f);
        }
    }
    pts
}

pub struct ScriptedHands {
    tracks: Vec<Track>,
    viewport: Viewport,
    jitter_px: f32,
    rng: StdRng,
    detections: u64,
}

impl ScriptedHands {
    pub fn new(tracks: Vec<Track>, viewport: Viewport, jitter_px: f32, seed: u64) -> Self {
        Self {
            tracks,
            viewport,
            jitter_px,
            rng: StdRng::seed_from_u64(seed),
            detections: 0,
        }
    }

    pub fn end_ms(&self) -> f64 {
        self.tracks.iter().map(Track::end_ms).fold(0.0, f64::max)
    }

    fn jitter(&mut self) -> Vec2 {
        if self.jitter_px <= 0.0 {
            return Vec2::ZERO;
        }
        let j = self.jitter_px;
        Vec2::new(self.rng.gen_range(-j..j), self.rng.gen_range(-j..j))
    }
}

impl LandmarkSource for ScriptedHands {
    fn detect(&mut self, now_ms: f64) -> Result<Vec<HandLandmarks>> {
        let samples: Vec<(Vec2, Grip)> = self
            .tracks
            .iter()
            .filter_map(|t| t.sample(now_ms))
            .collect();
        let mut hands = Vec::with_capacity(samples.len());
        for (tip, grip) in samples {
            let screen = synth_screen_hand(tip, grip);
            let mut normalized = [Vec2::ZERO; LANDMARKS_PER_HAND];
            for (dst, p) in normalized.iter_mut().zip(screen.iter()) {
                let p = *p + self.jitter();
                // undo the mirror the interpreter applies
                *dst = Vec2::new(1.0 - p.x / self.viewport.width, p.y / self.viewport.height);
            }
            hands.push(HandLandmarks::new(&normalized)?);
        }
        // every other detection reports the hands in reverse, the way a real
        // detector reorders them
        self.detections += 1;
        if self.detections % 2 == 0 {
            hands.reverse();
        }
        Ok(hands)
    }
}

/// Two hands crafting Steam, then Cloud.
pub fn demo_session() -> Vec<Track> {
    use Grip::*;
    vec![
        Track::new(vec![
            key(0.0, 400.0, 400.0, Open),
            key(600.0, 80.0, 60.0, Open),
            key(800.0, 80.0, 60.0, Pinch),
            key(1400.0, 600.0, 300.0, Pinch),
            key(1500.0, 600.0, 300.0, Open),
            key(2100.0, 80.0, 130.0, Open),
            key(2300.0, 80.0, 130.0, Pinch),
            key(2900.0, 660.0, 300.0, Pinch),
            key(3000.0, 660.0, 300.0, Open),
            key(3400.0, 800.0, 600.0, Open),
        ]),
        Track::new(vec![
            key(3600.0, 1000.0, 200.0, Open),
            key(4200.0, 80.0, 340.0, Open),
            key(4400.0, 80.0, 340.0, Pinch),
            key(5000.0, 900.0, 500.0, Pinch),
            key(5100.0, 900.0, 500.0, Open),
            key(5500.0, 1100.0, 650.0, Open),
        ]),
        Track::new(vec![
            key(5800.0, 630.0, 420.0, Open),
            key(6100.0, 630.0, 300.0, Closed),
            key(6900.0, 900.0, 470.0, Closed),
            key(7100.0, 900.0, 470.0, Open),
            key(7500.0, 1000.0, 600.0, Open),
        ]),
    ]
}
