// src/main.rs
use nannou::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use checkmorph::{
    config::Config,
    controllers::{OscCommand, OscController},
    models::SavedState,
    render::NannouSurface,
    views::CheckView,
};

struct Model {
    // Core components:
    view: CheckView,
    config: Config,

    // Comms components:
    osc_controller: Option<OscController>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|err| {
        warn!(%err, "no usable config.toml, using defaults");
        Config::default()
    });

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        // the check view's strokes rely on this for anti-aliasing
        .msaa_samples(4)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .resized(resized)
        .build()
        .expect("Failed to build window");
    let window = app.window(window_id).expect("Window closed during setup");

    // nannou draws in logical points, so dp map 1:1
    let mut view = CheckView::new(&config.style, &config.animation, 1.0);
    let bounds = window.rect();
    let padding = view.padding();
    view.on_size_or_padding_changed(bounds.w(), bounds.h(), padding);
    view.set_click_handler(|state| info!(?state, "check view clicked"));

    // Pick up where the last run left off
    let state_path = config.resolve_state_path();
    if state_path.exists() {
        match SavedState::load(&state_path) {
            Ok(saved) => view.restore_state(&saved),
            Err(err) => {
                warn!(%err, path = %state_path.display(), "ignoring saved state");
                view.restore_state(&SavedState::default());
            }
        }
    }

    // Create OSC controller
    let osc_controller = if config.osc.enabled {
        OscController::new(config.osc.rx_port)
            .map_err(|err| warn!(%err, port = config.osc.rx_port, "OSC disabled"))
            .ok()
    } else {
        None
    };

    Model {
        view,
        config,
        osc_controller,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::T | Key::Space => {
            model.view.toggle();
        }
        Key::C => model.view.check(),
        Key::P => model.view.plus(),
        Key::A => {
            let enable = !model.view.auto_toggle();
            model.view.set_auto_toggle(enable);
            info!(enable, "auto toggle");
        }
        Key::Q => app.quit(),
        _ => (),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && app.window_rect().contains(app.mouse.position()) {
        model.view.click();
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    let padding = model.view.padding();
    model.view.on_size_or_padding_changed(size.x, size.y, padding);
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // Process OSC messages
    let commands = match model.osc_controller.as_mut() {
        Some(controller) => {
            controller.process_messages();
            controller.take_commands()
        }
        None => Vec::new(),
    };
    launch_commands(model, commands);

    model.view.update(app.time);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let [r, g, b] = model.config.window.background;
    draw.background().color(rgb(r, g, b));

    let mut surface = NannouSurface::new(&draw, app.window_rect());
    model.view.draw(&mut surface);

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to render frame");
    }
}

fn exit(_app: &App, model: Model) {
    let state_path = model.config.resolve_state_path();
    match model.view.save_state().save(&state_path) {
        Ok(()) => info!(path = %state_path.display(), "saved check view state"),
        Err(err) => warn!(%err, "failed to save check view state"),
    }
}

// ******************************* OSC Launcher *******************************

fn launch_commands(model: &mut Model, commands: Vec<OscCommand>) {
    let view = &mut model.view;

    for command in commands {
        match command {
            OscCommand::Toggle { duration_ms } => {
                match duration_ms {
                    Some(ms) => view.toggle_with(ms),
                    None => view.toggle(),
                };
            }
            OscCommand::Check { duration_ms } => match duration_ms {
                Some(ms) => view.check_with(ms),
                None => view.check(),
            },
            OscCommand::Plus { duration_ms } => match duration_ms {
                Some(ms) => view.plus_with(ms),
                None => view.plus(),
            },
            OscCommand::Click => view.click(),
            OscCommand::SetColor { r, g, b, a } => view.set_color(rgba(r, g, b, a)),
            OscCommand::SetStrokeWidth { width } => view.set_stroke_width(width),
            OscCommand::SetAutoToggle { enable } => view.set_auto_toggle(enable),
        }
    }
}
