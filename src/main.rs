// src/main.rs
use nannou::event::{MouseScrollDelta, TouchPhase};
use nannou::prelude::*;
use std::time::Instant;

use fanvis::{
    animation::{FrameContext, ScrollState},
    config::Config,
    models::Deck,
    render::Camera,
    views::{FanView, RingView},
};

struct Model {
    // Core components:
    scroll: ScrollState,
    fan: FanView,
    ring: RingView,

    // Rendering components:
    camera: Camera,
    background: Rgb,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the card deck
    let deck_path = config.resolve_deck_path();
    let deck = Deck::load(&deck_path).expect("Failed to load deck file");
    log::info!("loaded {} cards from {}", deck.len(), deck_path.display());

    // Create window
    app.new_window()
        .title("fanvis 0.2.1")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_wheel(mouse_wheel)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    let scroll = ScrollState::new(&config.scroll, deck.len());
    let fan = FanView::new(&config.fan, &deck);
    let ring = RingView::new(&config.ring, config.style.stroke_weight);
    let camera = Camera::new(&config.camera, config.window.height as f32);

    let bg = config.style.background;

    Model {
        scroll,
        fan,
        ring,
        camera,
        background: rgb(bg[0], bg[1], bg[2]),

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Right | Key::Down | Key::Space => {
            let next = model.scroll.target_item() + 1;
            model.scroll.scroll_to_item(next);
        }
        Key::Left | Key::Up => {
            let previous = model.scroll.target_item().saturating_sub(1);
            model.scroll.scroll_to_item(previous);
        }
        Key::Home => model.scroll.scroll_to_item(0),
        Key::End => {
            let last = model.fan.len().saturating_sub(1);
            model.scroll.scroll_to_item(last);
        }
        Key::D => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    match delta {
        // Wheel-down advances the fan
        MouseScrollDelta::LineDelta(_, y) => model.scroll.scroll_by(-y),
        MouseScrollDelta::PixelDelta(position) => {
            model.scroll.scroll_by(-position.y as f32 * 0.05)
        }
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    // Inert cards are click-through
    if let Some(index) = model.fan.hit_test(app.mouse.position()) {
        log::debug!("card {} clicked", index);
        model.fan.toggle_select(index);
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    let dt = duration.as_secs_f32();

    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / dt.max(1e-6);
    }

    // Advance the scroll filter, then hand every view the same snapshot
    model.scroll.update(dt);
    let ctx = FrameContext {
        time: app.time,
        dt,
        active_index: model.scroll.active_index(),
        progress: model.scroll.progress(),
    };

    model.fan.update(&ctx);
    model.ring.update(&ctx);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    // Ring first: it sits behind the cards
    model.ring.draw(&draw, &model.camera);
    model.fan.draw(&draw);
    model.fan.draw_indicator(&draw, app.window_rect());

    if model.debug_flag {
        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(app.window_rect().left() + 60.0, app.window_rect().top() - 30.0)
            .color(RED);
        draw.text(&format!(
            "scroll: {:.0}  index: {:.2}",
            model.scroll.offset(),
            model.scroll.active_index()
        ))
        .x_y(app.window_rect().left() + 90.0, app.window_rect().top() - 50.0)
        .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
