// src/main.rs
use nannou::prelude::*;
use nannou::winit::event::MouseScrollDelta;
use std::rc::Rc;
use tracing::{error, info, warn};

use statcount::{
    animation::{Capabilities, Clock, FrameQueue, MonotonicClock},
    config::{Config, ScrollConfig},
    errors::LoadError,
    models::StatsFile,
    render::GridRenderer,
    views::{CounterGrid, ScrollView},
    visibility::ViewportObserver,
};

struct Model {
    // Core components:
    grid: CounterGrid,
    scroll: ScrollView,

    // Capabilities handed to the grid:
    observer: Rc<ViewportObserver>,
    frames: Rc<FrameQueue>,
    clock: Rc<MonotonicClock>,

    // Rendering & input:
    renderer: GridRenderer,
    scroll_config: ScrollConfig,

    all_settled: bool,
}

fn main() {
    init_logging();
    nannou::app(model).update(update).run();
}

fn init_logging() {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_level(true))
        .init();
}

fn load_inputs() -> Result<(Config, StatsFile), LoadError> {
    let config = Config::load()?;
    let stats = StatsFile::load(config.resolve_stats_path())?;
    Ok((config, stats))
}

fn model(app: &App) -> Model {
    let (config, stats) = match load_inputs() {
        Ok(inputs) => inputs,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    // Create window
    let window = app
        .new_window()
        .title("statcount")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_wheel(mouse_wheel)
        .resized(resized)
        .build();
    if let Err(err) = window {
        error!("Failed to build window: {:?}", err);
        std::process::exit(1);
    }

    let observer = Rc::new(ViewportObserver::new());
    let frames = Rc::new(FrameQueue::new());
    let clock = Rc::new(MonotonicClock::new());
    let capabilities = Capabilities {
        observer: observer.clone(),
        scheduler: frames.clone(),
        clock: clock.clone(),
    };

    let grid = CounterGrid::mount(&stats.items, config.layout, config.animation, &capabilities);
    if grid.is_empty() {
        warn!("No stat items to show");
    }

    let scroll = ScrollView::new(
        config.window.width as f32,
        config.window.height as f32,
        grid.width(),
        grid.content_height(),
    );
    info!(
        "Content is {:.0}px tall, scroll down to reveal the counters",
        grid.content_height()
    );

    Model {
        grid,
        scroll,
        observer,
        frames,
        clock,
        renderer: GridRenderer::new(&config.style),
        scroll_config: config.scroll,
        all_settled: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let step = model.scroll_config.key_step;
    match key {
        Key::Down => model.scroll.scroll_by(step),
        Key::Up => model.scroll.scroll_by(-step),
        Key::PageDown | Key::Space => model.scroll.page_down(),
        Key::PageUp => model.scroll.page_up(),
        Key::Home => model.scroll.scroll_to(0.0),
        Key::End => model.scroll.scroll_to(model.scroll.max_offset()),
        _ => (),
    }
}

fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    // Positive wheel deltas scroll towards the top
    match delta {
        MouseScrollDelta::LineDelta(_, y) => {
            model.scroll.scroll_by(-y * model.scroll_config.wheel_step)
        }
        MouseScrollDelta::PixelDelta(position) => model.scroll.scroll_by(-position.y as f32),
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.scroll.resize(size.x, size.y);
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    // Visibility first, so a card revealed this update gets its first frame now
    let viewport = model.scroll.viewport();
    let grid = &model.grid;
    model.observer.update(&viewport, |id| grid.bounds_of(id));

    model.frames.run_frame(model.clock.now());

    if !model.all_settled && !model.grid.is_empty() && model.grid.all_finished() {
        info!("All {} counters settled", model.grid.len());
        model.all_settled = true;
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model
        .renderer
        .draw(&draw, &model.grid.render(), &model.scroll);

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!("Failed to draw frame: {:?}", err);
    }
}
