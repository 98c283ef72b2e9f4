// src/views/fan_view.rs
//
// The card fan. Each CardSlot owns its card content and the transform
// derived for it on the last tick; FanView is the single driver that
// refreshes every slot once per frame and draws them in stacking order.

use nannou::prelude::*;

use crate::{
    animation::{CardFloat, CardTransform, FanLayout, FrameContext},
    config::FanConfig,
    models::{Card, Deck},
};

pub struct CardSlot {
    pub card: Card,
    pub transform: CardTransform,
}

pub struct FanView {
    layout: FanLayout,
    float: CardFloat,
    slots: Vec<CardSlot>,
    card_width: f32,
    card_height: f32,
    selected: Option<usize>,
    active_index: f32,
    float_y: f32,
    float_rotation: f32,
}

impl FanView {
    pub fn new(config: &FanConfig, deck: &Deck) -> Self {
        let layout = FanLayout::from_config(config);
        let slots = deck
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| CardSlot {
                card: card.clone(),
                transform: layout.card_transform(i, 0.0),
            })
            .collect();

        Self {
            layout,
            float: CardFloat {
                amplitude: config.float_amplitude,
                rotation: config.float_rotation,
            },
            slots,
            card_width: config.card_width,
            card_height: config.card_height,
            selected: None,
            active_index: 0.0,
            float_y: 0.0,
            float_rotation: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        self.active_index = ctx.active_index;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.transform = self.layout.card_transform(i, ctx.active_index);
        }
        let (float_y, float_rotation) = self.float.offsets(ctx.time);
        self.float_y = float_y;
        self.float_rotation = float_rotation;
    }

    /// Center of a slot in window space, float motion included.
    fn slot_center(&self, slot: &CardSlot) -> Point2 {
        let t = &slot.transform;
        let float_y = if t.interactive { self.float_y } else { 0.0 };
        pt2(t.translate_x, -t.translate_y + float_y)
    }

    /// Only slots within half an index of the active card take clicks;
    /// everything else is click-through.
    pub fn hit_test(&self, mouse: Point2) -> Option<usize> {
        let mut best: Option<(i32, usize)> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            let t = &slot.transform;
            if !t.interactive {
                continue;
            }
            let center = self.slot_center(slot);
            let half_w = self.card_width * t.scale * 0.5;
            let half_h = self.card_height * t.scale * 0.5;
            if (mouse.x - center.x).abs() <= half_w && (mouse.y - center.y).abs() <= half_h {
                match best {
                    Some((z, _)) if z >= t.z_order => {}
                    _ => best = Some((t.z_order, i)),
                }
            }
        }
        best.map(|(_, i)| i)
    }

    pub fn toggle_select(&mut self, index: usize) {
        if self.selected == Some(index) {
            self.selected = None;
        } else {
            self.selected = Some(index);
        }
    }

    pub fn draw(&self, draw: &Draw) {
        // Far cards first so near ones paint on top.
        let mut order: Vec<usize> = (0..self.slots.len()).collect();
        order.sort_by_key(|&i| self.slots[i].transform.z_order);

        for i in order {
            self.draw_slot(draw, i);
        }
    }

    fn draw_slot(&self, draw: &Draw, index: usize) {
        let slot = &self.slots[index];
        let t = &slot.transform;
        let center = self.slot_center(slot);
        let rotation = if t.interactive {
            t.rotation + self.float_rotation
        } else {
            t.rotation
        };

        let local = draw
            .x_y(center.x, center.y)
            .rotate(-rotation.to_radians())
            .scale(t.scale);

        let w = self.card_width;
        let h = self.card_height;
        let border = if self.selected == Some(index) {
            rgba(0.133, 0.827, 0.933, t.opacity)
        } else {
            rgba(0.133, 0.827, 0.933, t.opacity * 0.35)
        };

        local
            .rect()
            .w_h(w, h)
            .color(rgba(0.04, 0.065, 0.12, t.opacity * 0.92))
            .stroke(border)
            .stroke_weight(1.5);

        local
            .text(&slot.card.title)
            .x_y(0.0, h * 0.32)
            .w(w - 40.0)
            .font_size(20)
            .color(rgba(0.9, 0.96, 1.0, t.opacity));

        local
            .text(&slot.card.description)
            .x_y(0.0, h * 0.08)
            .w(w - 48.0)
            .font_size(13)
            .color(rgba(0.65, 0.75, 0.85, t.opacity));

        for (j, feature) in slot.card.features.iter().enumerate() {
            local
                .text(feature)
                .x_y(0.0, -h * 0.14 - j as f32 * 22.0)
                .w(w - 60.0)
                .font_size(12)
                .color(rgba(0.133, 0.827, 0.933, t.opacity * 0.9));
        }
    }

    /// Progress dots along the right edge, one per card.
    pub fn draw_indicator(&self, draw: &Draw, window: Rect) {
        let nearest = self.active_index.round() as usize;
        let x = window.right() - 40.0;
        let count = self.slots.len();
        for i in 0..count {
            let y = (count as f32 * 0.5 - i as f32 - 0.5) * 24.0;
            let (radius, color) = if i == nearest {
                (5.0, rgba(0.133, 0.827, 0.933, 1.0))
            } else {
                (3.0, rgba(0.3, 0.4, 0.5, 0.8))
            };
            draw.ellipse().x_y(x, y).radius(radius).color(color);
        }
    }
}
