//! Stable hand ids across detections.
//!
//! The detector reports hands in no guaranteed order, so its array index is
//! not an identity. Each processed detection is matched to the hands seen
//! before by index-fingertip distance, closest pairs first. Detections with
//! no tracked hand within `hand_match_dist` start a new id; tracked hands that
//! go unmatched for more than `hand_lost_after` detections are dropped and
//! reported as lost.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::MAX_HANDS;
use crate::gesture::HandId;
use crate::tuning::Tuning;

#[derive(Clone, Copy, Debug)]
struct Tracked {
    id: HandId,
    tip: Vec2,
    missed: u32,
}

#[derive(Clone, Debug)]
pub struct HandTracker {
    tracked: SmallVec<[Tracked; 4]>,
    next_id: u32,
    match_dist: f32,
    lost_after: u32,
}

impl HandTracker {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            tracked: SmallVec::new(),
            next_id: 0,
            match_dist: tuning.hand_match_dist,
            lost_after: tuning.hand_lost_after,
        }
    }

    /// Assign an id to each fingertip, in input order. Ids of hands that
    /// just expired are appended to `lost`.
    pub fn assign(&mut self, tips: &[Vec2], lost: &mut Vec<HandId>) -> SmallVec<[HandId; MAX_HANDS]> {
        let mut pairs: SmallVec<[(f32, usize, usize); 8]> = SmallVec::new();
        for (di, tip) in tips.iter().enumerate() {
            for (ti, t) in self.tracked.iter().enumerate() {
                let d = tip.distance(t.tip);
                if d <= self.match_dist {
                    pairs.push((d, di, ti));
                }
            }
        }
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut det_to_slot: SmallVec<[Option<usize>; MAX_HANDS]> = SmallVec::from_elem(None, tips.len());
        let mut slot_taken: SmallVec<[bool; 4]> = SmallVec::from_elem(false, self.tracked.len());
        for (_, di, ti) in pairs {
            if det_to_slot[di].is_none() && !slot_taken[ti] {
                det_to_slot[di] = Some(ti);
                slot_taken[ti] = true;
            }
        }

        for (ti, t) in self.tracked.iter_mut().enumerate() {
            if !slot_taken[ti] {
                t.missed += 1;
            }
        }

        let mut ids = SmallVec::new();
        for (di, tip) in tips.iter().enumerate() {
            let id = match det_to_slot[di] {
                Some(ti) => {
                    let t = &mut self.tracked[ti];
                    t.tip = *tip;
                    t.missed = 0;
                    t.id
                }
                None => {
                    let id = HandId(self.next_id);
                    self.next_id += 1;
                    self.tracked.push(Tracked {
                        id,
                        tip: *tip,
                        missed: 0,
                    });
                    log::info!("[tracker] new {} at ({:.0},{:.0})", id, tip.x, tip.y);
                    id
                }
            };
            ids.push(id);
        }

        let lost_after = self.lost_after;
        self.tracked.retain(|t| {
            if t.missed > lost_after {
                log::info!("[tracker] lost {}", t.id);
                lost.push(t.id);
                false
            } else {
                true
            }
        });
        ids
    }

    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }
}
