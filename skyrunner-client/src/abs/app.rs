//! SDL2 and OpenGL application management.
//!
//! [`App`] owns the SDL2 context, window and event pump plus the glow
//! OpenGL context the rest of the client renders through.

use std::sync::Arc;

/// The SDL2 window and its OpenGL 3.3 core context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates the window and GL context. The width and height are ignored
    /// when `fullscreen` is set.
    pub fn new(title: &str, width: u32, height: u32, fullscreen: bool) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let mut builder = video_subsystem.window(title, width, height);
        builder.opengl().resizable();
        if fullscreen {
            builder.fullscreen_desktop();
        }
        let window = builder.build().map_err(|e| e.to_string())?;

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump()?;

        log::info!("window created: {}x{}", window.size().0, window.size().1);

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }

    /// Enables or disables vsync, falling back with a warning when the
    /// driver refuses.
    pub fn set_vsync(&self, vsync: bool) {
        let interval = if vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = self.video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("failed to set swap interval: {e}");
        }
    }
}
