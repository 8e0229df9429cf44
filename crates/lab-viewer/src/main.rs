//! Lab scene driver
//!
//! Builds the lab scene, prepares every mesh for GPU upload and replays a
//! short scripted input sequence against the first-person camera.
//!
//! # Usage
//!
//! ```bash
//! # Run with default settings
//! lab_viewer
//!
//! # Run with a settings file (TOML or JSON)
//! RUST_LOG=debug lab_viewer assets/settings.toml
//! ```

use std::path::Path;
use std::process;

use lab_core::Validate;
use lab_render::{lab_scene, prepare_mesh, Camera, CameraUniforms, Movement, Settings};

/// One simulated frame at 60 Hz.
const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Input recorded for a single frame.
#[derive(Debug, Clone, Copy)]
enum Input {
    Key(Movement),
    Cursor(f64, f64),
    Scroll(f64),
}

/// Walk forward, turn, strafe, look up hard enough to hit the pitch limit, zoom.
fn input_script() -> Vec<Input> {
    let mut script = Vec::new();
    script.extend(std::iter::repeat(Input::Key(Movement::Forward)).take(90));
    script.extend(std::iter::repeat(Input::Cursor(12.0, 0.0)).take(30));
    script.extend(std::iter::repeat(Input::Key(Movement::Left)).take(45));
    script.extend(std::iter::repeat(Input::Cursor(0.0, 400.0)).take(10));
    script.extend(std::iter::repeat(Input::Scroll(2.0)).take(20));
    script.extend(std::iter::repeat(Input::Key(Movement::Backward)).take(30));
    script
}

fn print_usage() {
    eprintln!(
        r#"Lab scene driver

USAGE:
    lab_viewer [settings]

ARGS:
    [settings]      Optional .toml or .json settings file

OPTIONS:
    --help          Show this help message

Set RUST_LOG=debug for per-mesh generation details.
"#
    );
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Error: too many arguments\n");
        print_usage();
        process::exit(1);
    }

    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        process::exit(0);
    }

    let settings = match args.get(1) {
        Some(path) => match Settings::load_from_file(Path::new(path)) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error: failed to load settings from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            log::info!("no settings file given, using defaults");
            Settings::default()
        }
    };

    if let Err(e) = run(&settings) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(settings: &Settings) -> lab_core::Result<()> {
    log::info!(
        "window \"{}\" {}x{} @ {} Hz{}",
        settings.window.title,
        settings.window.width,
        settings.window.height,
        settings.window.refresh_rate,
        if settings.window.fullscreen { " (fullscreen)" } else { "" }
    );

    let scene = lab_scene()?;
    let mut uploaded_bytes = 0;
    for object in scene.objects() {
        let render_mesh = prepare_mesh(&object.mesh);
        uploaded_bytes +=
            render_mesh.vertex_buffer_bytes.len() + render_mesh.index_buffer_bytes.len();
        log::info!(
            "{:<10} {:>6} vertices {:>7} elements",
            object.name,
            render_mesh.vertices.len(),
            render_mesh.element_count()
        );
    }
    if let Some(bounds) = scene.bounds() {
        log::info!(
            "scene: {} objects, {} triangles, {} bytes of buffers, bounds {} .. {}",
            scene.len(),
            scene.total_triangles(),
            uploaded_bytes,
            bounds.min,
            bounds.max
        );
    }

    let mut camera = Camera::from_settings(&settings.camera);
    for input in input_script() {
        match input {
            Input::Key(direction) => camera.move_by(direction, FRAME_SECONDS),
            Input::Cursor(dx, dy) => camera.look(dx, dy),
            Input::Scroll(delta) => camera.zoom(delta),
        }
    }
    camera.validate()?;

    log::info!(
        "camera at {} yaw {:.1} pitch {:.1} fov {:.1}, looking along {}",
        camera.position(),
        camera.yaw(),
        camera.pitch(),
        camera.field_of_view(),
        camera.front()
    );

    let uniforms = CameraUniforms::from_camera(
        &camera,
        settings.aspect_ratio(),
        settings.camera.near,
        settings.camera.far,
    );
    log::debug!("camera uniforms: {:?}", uniforms);

    Ok(())
}
