//! The parametric-curve renderer demo.
//!
//! Left/Right cycle through the curve family; dragging the mouse orbits
//! the camera and the scroll wheel zooms.

use std::f32::consts::TAU;
use std::time::Instant;

use glam::{Mat4, Vec3, vec2, vec4};
use glow::HasContext;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use skyrunner_client::abs::{App, Mesh};
use skyrunner_client::camera::OrbitCamera;
use skyrunner_client::config::Settings;
use skyrunner_client::other::{KeyboardState, MouseState};
use skyrunner_client::render::meshing::{grid_mesh, line_strip_mesh};
use skyrunner_client::{logger, shader_program};
use skyrunner_core::curve::Curve;

const SEGMENTS: usize = 512;

const CURVES: [(&str, Curve); 4] = [
    ("circle", Curve::Circle { radius: 3.0 }),
    (
        "helix",
        Curve::Helix {
            radius: 2.5,
            pitch: 1.2,
            turns: 5.0,
        },
    ),
    (
        "lissajous",
        Curve::Lissajous {
            a: 3.0,
            b: 2.0,
            delta: TAU / 4.0,
            scale: 3.5,
        },
    ),
    (
        "torus knot",
        Curve::TorusKnot {
            p: 2.0,
            q: 3.0,
            radius: 2.5,
            tube: 0.9,
        },
    ),
];

fn main() {
    let settings = Settings::load();
    logger::init(settings.log_level());

    let mut app = App::new(
        "Skyrunner - Curves",
        settings.width,
        settings.height,
        settings.fullscreen,
    )
    .expect("failed to create window");
    app.set_vsync(settings.vsync);

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.line_width(2.0);
    }

    let line_shader = shader_program!(line, app.gl, "..");
    let ground = grid_mesh(&app.gl, 10.0, 1.0);

    let mut selected = 0usize;
    let mut curve_mesh: Mesh = line_strip_mesh(&app.gl, &CURVES[selected].1.sample(SEGMENTS));
    log::info!("showing curve: {}", CURVES[selected].0);

    let mut camera = OrbitCamera::new(Vec3::ZERO, 12.0, settings.fov);
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();
    let mut aspect = settings.width as f32 / settings.height as f32;
    let mut last_time = Instant::now();
    let mut spin = 0.0f32;

    'running: loop {
        keyboard.pressed.clear();
        mouse.delta = glam::Vec2::ZERO;
        mouse.scroll_delta = glam::Vec2::ZERO;
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => {
                    unsafe {
                        app.gl.viewport(0, 0, width, height);
                    }
                    aspect = width as f32 / height as f32;
                }
                sdl2::event::Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    keyboard.down.insert(keycode);
                    keyboard.pressed.insert(keycode);
                }
                sdl2::event::Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    keyboard.down.remove(&keycode);
                }
                sdl2::event::Event::MouseMotion { xrel, yrel, .. } => {
                    mouse.delta = vec2(xrel as f32, yrel as f32);
                }
                sdl2::event::Event::MouseWheel { x, y, .. } => {
                    mouse.scroll_delta = vec2(x as f32, y as f32);
                }
                sdl2::event::Event::MouseButtonDown { mouse_btn, .. } => {
                    mouse.down.insert(mouse_btn);
                }
                sdl2::event::Event::MouseButtonUp { mouse_btn, .. } => {
                    mouse.down.remove(&mouse_btn);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f32().min(0.25);
        last_time = now;

        let mut switched = false;
        if keyboard.pressed.contains(&Keycode::Right) {
            selected = (selected + 1) % CURVES.len();
            switched = true;
        }
        if keyboard.pressed.contains(&Keycode::Left) {
            selected = (selected + CURVES.len() - 1) % CURVES.len();
            switched = true;
        }
        if switched {
            curve_mesh = line_strip_mesh(&app.gl, &CURVES[selected].1.sample(SEGMENTS));
            log::info!("showing curve: {}", CURVES[selected].0);
        }

        if mouse.down.contains(&MouseButton::Left) {
            camera.rotate(mouse.delta.x * 0.4, mouse.delta.y * 0.4);
        }
        camera.zoom(mouse.scroll_delta.y);
        // Idle spin keeps the 3D shape readable without any input.
        spin += 12.0 * dt;

        app.window
            .set_title(&format!("Skyrunner - Curves - {}", CURVES[selected].0))
            .unwrap();

        let view = camera.view();
        let projection = camera.projection(aspect);
        let model = Mat4::from_rotation_y(spin.to_radians());

        unsafe {
            app.gl.clear_color(0.07, 0.07, 0.1, 1.0);
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        line_shader.use_program();
        line_shader.set_uniform("u_view", view);
        line_shader.set_uniform("u_projection", projection);

        line_shader.set_uniform(
            "u_model",
            Mat4::from_translation(glam::vec3(0.0, -4.0, 0.0)),
        );
        line_shader.set_uniform("u_color", vec4(0.2, 0.22, 0.28, 1.0));
        ground.draw();

        line_shader.set_uniform("u_model", model);
        line_shader.set_uniform("u_color", vec4(0.4, 0.9, 0.6, 1.0));
        curve_mesh.draw();

        app.window.gl_swap_window();
    }
}
