//! The airplane lane-runner demo.
//!
//! Hold W to fly forward; A/D (or the arrow keys) switch lanes, Space and
//! LShift climb and dive. Active obstacles are drawn as red markers; hits
//! deactivate them and the run keeps going.

use std::time::Instant;

use glam::{Mat4, vec3, vec4};
use glow::HasContext;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::keyboard::Keycode;

use skyrunner_client::abs::App;
use skyrunner_client::camera::FollowCamera;
use skyrunner_client::config::Settings;
use skyrunner_client::other::KeyboardState;
use skyrunner_client::render::meshing::{cube_mesh, grid_mesh};
use skyrunner_client::{logger, shader_program};
use skyrunner_core::input::InputSnapshot;
use skyrunner_core::random::RngLaneSource;
use skyrunner_core::runner::LaneRunner;

const GRID_STEP: f32 = 3.0;

fn snapshot(keyboard: &KeyboardState) -> InputSnapshot {
    let down = |key| keyboard.down.contains(&key);
    InputSnapshot {
        forward: down(Keycode::W),
        lane_left: down(Keycode::A) || down(Keycode::Left),
        lane_right: down(Keycode::D) || down(Keycode::Right),
        up: down(Keycode::Space) || down(Keycode::Up),
        down: down(Keycode::LShift) || down(Keycode::Down),
    }
}

fn main() {
    let settings = Settings::load();
    logger::init(settings.log_level());

    let mut app = App::new(
        "Skyrunner - Lane Runner",
        settings.width,
        settings.height,
        settings.fullscreen,
    )
    .expect("failed to create window");
    app.set_vsync(settings.vsync);

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.enable(glow::CULL_FACE);
        app.gl.cull_face(glow::BACK);
        app.gl.front_face(glow::CCW);
    }

    let solid_shader = shader_program!(solid, app.gl, "..");
    let line_shader = shader_program!(line, app.gl, "..");

    let player_mesh = cube_mesh(&app.gl, vec3(0.8, 0.3, 0.8));
    let obstacle_mesh = cube_mesh(&app.gl, vec3(0.75, 0.75, 0.75));
    let ground = grid_mesh(&app.gl, 60.0, GRID_STEP);

    let mut runner = LaneRunner::new(
        settings.runner,
        RngLaneSource::new(StdRng::from_os_rng()),
    );
    let mut camera = FollowCamera::new(
        runner.player().position,
        vec3(0.0, 3.5, -9.0),
        5.0,
        settings.fov,
    );

    let mut keyboard = KeyboardState::default();
    let mut aspect = settings.width as f32 / settings.height as f32;
    let mut last_time = Instant::now();
    let mut hits: u32 = 0;

    'running: loop {
        keyboard.pressed.clear();
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
                _ => {}
            }
        }

        let now = Instant::now();
        // A debugger pause must not teleport the player.
        let dt = now.duration_since(last_time).as_secs_f32().min(0.25);
        last_time = now;

        let input = snapshot(&keyboard);
        for hit in runner.advance(dt, &input) {
            hits += 1;
            log::info!("hit obstacle on {:?} lane ({hits} total)", hit.lane);
        }
        let player = *runner.player();
        camera.update(dt, player.position);

        app.window
            .set_title(&format!(
                "Skyrunner - Lane Runner - distance {:.0} - hits {hits}",
                player.position.z
            ))
            .unwrap();

        let view = camera.view();
        let projection = camera.projection(aspect);

        unsafe {
            app.gl.clear_color(0.45, 0.65, 0.9, 1.0);
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        // The grid follows the player in whole steps so it reads as an
        // endless runway.
        let grid_z = (player.position.z / GRID_STEP).floor() * GRID_STEP;
        line_shader.use_program();
        line_shader.set_uniform("u_view", view);
        line_shader.set_uniform("u_projection", projection);
        line_shader.set_uniform("u_model", Mat4::from_translation(vec3(0.0, -0.5, grid_z)));
        line_shader.set_uniform("u_color", vec4(0.3, 0.4, 0.35, 1.0));
        ground.draw();

        solid_shader.use_program();
        solid_shader.set_uniform("u_view", view);
        solid_shader.set_uniform("u_projection", projection);

        solid_shader.set_uniform("u_model", Mat4::from_translation(player.position));
        solid_shader.set_uniform("u_color", vec4(0.9, 0.85, 0.3, 1.0));
        player_mesh.draw();

        solid_shader.set_uniform("u_color", vec4(0.9, 0.15, 0.1, 1.0));
        for obstacle in runner.obstacles().iter().filter(|o| o.active) {
            solid_shader.set_uniform("u_model", Mat4::from_translation(obstacle.position));
            obstacle_mesh.draw();
        }

        app.window.gl_swap_window();
    }
}
