//! The character animator demo.
//!
//! 1 = idle, W = walk, R = run, Space = jump. The character is a
//! procedural stand-in for a skinned model: limbs swing with the clip
//! phase and the ground scrolls at the action's travel speed. Mouse drag
//! orbits, scroll zooms.

use std::f32::consts::{PI, TAU};
use std::time::Instant;

use glam::{Mat4, vec2, vec3, vec4};
use glow::HasContext;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use skyrunner_client::abs::{App, Mesh, ShaderProgram};
use skyrunner_client::camera::OrbitCamera;
use skyrunner_client::config::Settings;
use skyrunner_client::other::{KeyboardState, MouseState};
use skyrunner_client::render::meshing::{cube_mesh, grid_mesh};
use skyrunner_client::{logger, shader_program};
use skyrunner_core::animation::{Action, ActionState};

const GRID_STEP: f32 = 1.0;

/// Limb swing amplitude per action, in degrees.
fn swing_amplitude(action: Action) -> f32 {
    match action {
        Action::Idle => 4.0,
        Action::Walk => 30.0,
        Action::Run => 55.0,
        Action::Jump => 12.0,
    }
}

fn selected_action(keyboard: &KeyboardState) -> Option<Action> {
    let mut action = None;
    if keyboard.down.contains(&Keycode::Num1) {
        action = Some(Action::Idle);
    }
    if keyboard.down.contains(&Keycode::W) {
        action = Some(Action::Walk);
    }
    if keyboard.down.contains(&Keycode::R) {
        action = Some(Action::Run);
    }
    if keyboard.down.contains(&Keycode::Space) {
        action = Some(Action::Jump);
    }
    action
}

struct Character {
    body: Mesh,
    head: Mesh,
    limb: Mesh,
}

impl Character {
    fn new(gl: &std::sync::Arc<glow::Context>) -> Self {
        Self {
            body: cube_mesh(gl, vec3(0.35, 0.5, 0.2)),
            head: cube_mesh(gl, vec3(0.2, 0.2, 0.2)),
            limb: cube_mesh(gl, vec3(0.12, 0.45, 0.12)),
        }
    }

    fn draw(&self, shader: &ShaderProgram, state: &ActionState) {
        let swing = (state.phase() * TAU).sin() * swing_amplitude(state.action()).to_radians();
        let hop = if state.action() == Action::Jump {
            (state.phase() * PI).sin() * 1.2
        } else {
            0.0
        };
        let root = Mat4::from_translation(vec3(0.0, hop, 0.0));

        shader.set_uniform("u_color", vec4(0.3, 0.5, 0.85, 1.0));
        shader.set_uniform("u_model", root * Mat4::from_translation(vec3(0.0, 1.4, 0.0)));
        self.body.draw();

        shader.set_uniform("u_color", vec4(0.9, 0.75, 0.6, 1.0));
        shader.set_uniform("u_model", root * Mat4::from_translation(vec3(0.0, 2.15, 0.0)));
        self.head.draw();

        // Opposite limbs swing in phase, like a walk cycle.
        shader.set_uniform("u_color", vec4(0.25, 0.4, 0.7, 1.0));
        let limbs = [
            (vec3(0.5, 1.85, 0.0), swing),
            (vec3(-0.5, 1.85, 0.0), -swing),
            (vec3(0.2, 0.9, 0.0), -swing),
            (vec3(-0.2, 0.9, 0.0), swing),
        ];
        for (pivot, angle) in limbs {
            let model = root
                * Mat4::from_translation(pivot)
                * Mat4::from_rotation_x(angle)
                * Mat4::from_translation(vec3(0.0, -0.45, 0.0));
            shader.set_uniform("u_model", model);
            self.limb.draw();
        }
    }
}

fn main() {
    let settings = Settings::load();
    logger::init(settings.log_level());

    let mut app = App::new(
        "Skyrunner - Animator",
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

    let character = Character::new(&app.gl);
    let ground = grid_mesh(&app.gl, 12.0, GRID_STEP);

    let mut state = ActionState::default();
    let mut camera = OrbitCamera::new(vec3(0.0, 1.2, 0.0), 7.0, settings.fov);
    let mut keyboard = KeyboardState::default();
    let mut mouse = MouseState::default();
    let mut aspect = settings.width as f32 / settings.height as f32;
    let mut last_time = Instant::now();
    let mut ground_scroll = 0.0f32;

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

        if let Some(action) = selected_action(&keyboard) {
            state.set_action(action);
        }
        state.update(dt);
        ground_scroll += state.action().travel_speed() * dt;

        if mouse.down.contains(&MouseButton::Left) {
            camera.rotate(mouse.delta.x * 0.4, mouse.delta.y * 0.4);
        }
        camera.zoom(mouse.scroll_delta.y);

        app.window
            .set_title(&format!("Skyrunner - Animator - {:?}", state.action()))
            .unwrap();

        let view = camera.view();
        let projection = camera.projection(aspect);

        unsafe {
            app.gl.clear_color(0.08, 0.08, 0.1, 1.0);
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        // The ground slides past at the action's travel speed so walk and
        // run read differently even though the character stays put.
        let grid_z = -ground_scroll.rem_euclid(GRID_STEP);
        line_shader.use_program();
        line_shader.set_uniform("u_view", view);
        line_shader.set_uniform("u_projection", projection);
        line_shader.set_uniform("u_model", Mat4::from_translation(vec3(0.0, 0.0, grid_z)));
        line_shader.set_uniform("u_color", vec4(0.25, 0.3, 0.3, 1.0));
        ground.draw();

        solid_shader.use_program();
        solid_shader.set_uniform("u_view", view);
        solid_shader.set_uniform("u_projection", projection);
        character.draw(&solid_shader, &state);

        app.window.gl_swap_window();
    }
}
