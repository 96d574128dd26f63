//! Per-frame driver: throttled detection, hand tracking, pointer
//! classification and the world step.
//!
//! Rendering may run every display refresh, but the detector and everything
//! downstream of it only run when the detection interval has elapsed. On the
//! frames in between the world is left untouched and the last hands are
//! redrawn as they were.

use smallvec::SmallVec;

use crate::constants::MAX_HANDS;
use crate::draw::{self, DrawList, HandView};
use crate::error::Result;
use crate::gesture::{classify, HandLandmarks, Pointer, ScreenHand};
use crate::tracking::HandTracker;
use crate::tuning::Viewport;
use crate::world::{World, WorldEvent};

/// Anything that can report the hands visible at a point in time.
pub trait LandmarkSource {
    fn detect(&mut self, now_ms: f64) -> Result<Vec<HandLandmarks>>;
}

#[derive(Clone, Debug)]
pub struct DetectionThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl DetectionThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// True (and the interval restarts) when a detection is due at `now_ms`.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

pub struct FramePipeline {
    world: World,
    tracker: HandTracker,
    throttle: DetectionThrottle,
    hands: Vec<HandView>,
}

impl FramePipeline {
    pub fn new(world: World) -> Self {
        let tracker = HandTracker::new(&world.tuning);
        let throttle = DetectionThrottle::new(world.tuning.detect_interval_ms);
        Self {
            world,
            tracker,
            throttle,
            hands: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn hands(&self) -> &[HandView] {
        &self.hands
    }

    /// Run one display frame. Returns true when a detection was processed.
    pub fn frame<S: LandmarkSource + ?Sized>(
        &mut self,
        now_ms: f64,
        viewport: Viewport,
        source: &mut S,
        events: &mut Vec<WorldEvent>,
    ) -> bool {
        if !self.throttle.ready(now_ms) {
            return false;
        }
        self.world.set_viewport(viewport);
        let detections = match source.detect(now_ms) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("[detector] {}", e);
                return false;
            }
        };
        self.process(&detections, now_ms, events);
        true
    }

    /// Feed one detection result through tracking and the world step.
    pub fn process(&mut self, detections: &[HandLandmarks], now_ms: f64, events: &mut Vec<WorldEvent>) {
        let viewport = self.world.viewport();
        if detections.len() > MAX_HANDS {
            log::warn!(
                "[detector] {} hands reported, tracking the first {}",
                detections.len(),
                MAX_HANDS
            );
        }
        let screens: SmallVec<[ScreenHand; MAX_HANDS]> = detections
            .iter()
            .take(MAX_HANDS)
            .map(|h| h.to_screen(viewport))
            .collect();
        let tips: SmallVec<[glam::Vec2; MAX_HANDS]> = screens.iter().map(|s| s.index_tip()).collect();

        let mut lost = Vec::new();
        let ids = self.tracker.assign(&tips, &mut lost);
        for hand in lost {
            self.world.hand_lost(hand, events);
        }

        let pointers: SmallVec<[Pointer; MAX_HANDS]> = ids
            .iter()
            .zip(screens.iter())
            .map(|(id, s)| classify(*id, s, &self.world.tuning))
            .collect();
        self.world.step(&pointers, now_ms, events);

        self.hands = screens
            .into_iter()
            .zip(pointers)
            .map(|(screen, pointer)| HandView { screen, pointer })
            .collect();
    }

    pub fn scene(&self) -> DrawList {
        draw::scene(&self.world, &self.hands)
    }
}
