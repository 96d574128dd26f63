//! Draw lists handed to a front-end painter.
//!
//! The core decides what appears where and in which order; the painter only
//! knows how to execute each [`DrawCmd`] on its surface.

use glam::Vec2;

use crate::colors;
use crate::gesture::{Pointer, ScreenHand};
use crate::menu;
use crate::world::World;

/// Finger bones of the 21-point hand model.
pub const HAND_BONES: [(usize, usize); 20] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// Knuckle line across the palm, drawn only by the skeleton viewer.
pub const PALM_BONES: [(usize, usize); 3] = [(5, 9), (9, 13), (13, 17)];

const PALETTE_FONT: &str = "bold 13px system-ui";
const ITEM_FONT: &str = "bold 14px system-ui";

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// The camera frame, flipped horizontally to act as a mirror.
    MirroredVideo,
    /// Fill the whole surface.
    Wash { color: &'static str },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: &'static str,
    },
    PushClip { origin: Vec2, size: Vec2 },
    PopClip,
    Line {
        from: Vec2,
        to: Vec2,
        color: &'static str,
        width: f32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: &'static str,
        alpha: f32,
    },
    Ring {
        center: Vec2,
        radius: f32,
        color: &'static str,
        width: f32,
    },
    /// Radial gradient from `color` at the centre to transparent at `radius`.
    Glow {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    Label {
        at: Vec2,
        text: String,
        font: &'static str,
        color: &'static str,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCmd> {
        self.cmds.iter()
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

/// A hand as last seen by the detector, kept for drawing between detections.
#[derive(Clone, Debug, PartialEq)]
pub struct HandView {
    pub screen: ScreenHand,
    pub pointer: Pointer,
}

fn push_skeleton(
    list: &mut DrawList,
    hand: &ScreenHand,
    bones: &[(usize, usize)],
    color: &'static str,
    width: f32,
) {
    for &(a, b) in bones {
        list.push(DrawCmd::Line {
            from: hand.points[a],
            to: hand.points[b],
            color,
            width,
        });
    }
}

/// Full interaction scene: camera, hands, palette, ghosts, items.
pub fn scene(world: &World, hands: &[HandView]) -> DrawList {
    let tuning = &world.tuning;
    let viewport = world.viewport();
    let mut list = DrawList::default();
    list.push(DrawCmd::MirroredVideo);
    list.push(DrawCmd::Wash {
        color: colors::DIM_OVERLAY,
    });

    for hand in hands {
        let color = if hand.pointer.closed {
            colors::HAND_CLOSED
        } else {
            colors::HAND_OPEN
        };
        push_skeleton(&mut list, &hand.screen, &HAND_BONES, color, 2.0);
        for p in hand.screen.points.iter() {
            list.push(DrawCmd::Disc {
                center: *p,
                radius: 3.0,
                color,
                alpha: 1.0,
            });
        }
    }

    let strip = Vec2::new(tuning.menu_width, viewport.height);
    list.push(DrawCmd::Rect {
        origin: Vec2::ZERO,
        size: strip,
        color: colors::MENU_BACKGROUND,
    });
    list.push(DrawCmd::PushClip {
        origin: Vec2::ZERO,
        size: strip,
    });
    let offset = world.scroll().offset;
    for (i, kind) in world.discovered().iter().enumerate() {
        let center = menu::entry_center(i, offset, tuning);
        if let Some(color) = colors::item_color(kind) {
            list.push(DrawCmd::Disc {
                center,
                radius: tuning.menu_entry_radius,
                color,
                alpha: 1.0,
            });
        }
        list.push(DrawCmd::Label {
            at: center,
            text: kind.to_owned(),
            font: PALETTE_FONT,
            color: colors::LABEL_TEXT,
        });
    }
    list.push(DrawCmd::PopClip);

    let mut ghosts: Vec<_> = world.ghosts().collect();
    ghosts.sort_by_key(|g| g.hand);
    for g in ghosts {
        if let Some(color) = colors::item_color(&g.kind) {
            list.push(DrawCmd::Disc {
                center: g.pos,
                radius: tuning.ghost_radius,
                color,
                alpha: 0.8,
            });
        }
    }

    for it in world.items().iter() {
        if it.dragging_by.is_some() {
            list.push(DrawCmd::Ring {
                center: it.pos,
                radius: it.r + 6.0,
                color: colors::DRAG_RING,
                width: 4.0,
            });
        }
        match colors::item_color(&it.kind) {
            Some(color) => list.push(DrawCmd::Disc {
                center: it.pos,
                radius: it.r,
                color,
                alpha: 1.0,
            }),
            None => log::debug!("[draw] no colour for item type {}", it.kind),
        }
        list.push(DrawCmd::Label {
            at: it.pos,
            text: it.kind.clone(),
            font: ITEM_FONT,
            color: colors::LABEL_TEXT,
        });
    }
    list
}

/// Camera plus glowing skeletons only, one colour per detector slot.
pub fn skeleton_scene(hands: &[ScreenHand]) -> DrawList {
    let mut list = DrawList::default();
    list.push(DrawCmd::MirroredVideo);
    for (slot, hand) in hands.iter().enumerate() {
        let color = colors::SKELETON_HANDS[slot % colors::SKELETON_HANDS.len()];
        let glow = colors::SKELETON_GLOWS[slot % colors::SKELETON_GLOWS.len()];
        push_skeleton(&mut list, hand, &HAND_BONES, color, 4.0);
        push_skeleton(&mut list, hand, &PALM_BONES, color, 4.0);
        for p in hand.points.iter() {
            list.push(DrawCmd::Glow {
                center: *p,
                radius: 12.0,
                color: glow,
            });
            list.push(DrawCmd::Disc {
                center: *p,
                radius: 5.0,
                color,
                alpha: 1.0,
            });
        }
    }
    list
}
