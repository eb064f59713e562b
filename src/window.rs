/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Window setup and OpenGL ES 2.0 context creation for the demo binary.
//!
//! Implemented using the sdl2 crate (a Rust wrapper for SDL2). All usage of
//! SDL should be confined to this module. Only built with the `window`
//! feature; the library itself never creates a context.

use sdl2::event::Event;
use sdl2::video::GLProfile;
use std::ffi::c_void;

pub struct Window {
    _sdl_ctx: sdl2::Sdl,
    video_ctx: sdl2::VideoSubsystem,
    window: sdl2::video::Window,
    event_pump: sdl2::EventPump,
    _gl_ctx: sdl2::video::GLContext,
}
impl Window {
    /// Open a window with an OpenGL ES 2.0 context, and make the context
    /// current.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Window, String> {
        let sdl_ctx = sdl2::init()?;
        let video_ctx = sdl_ctx.video()?;

        // It's important to set context version BEFORE window creation
        // ref. https://wiki.libsdl.org/SDL2/SDL_GLattr
        let attr = video_ctx.gl_attr();
        attr.set_context_version(2, 0);
        attr.set_context_profile(GLProfile::GLES);

        let window = video_ctx
            .window(title, width, height)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;

        let gl_ctx = window.gl_create_context()?;
        window.gl_make_current(&gl_ctx)?;

        let event_pump = sdl_ctx.event_pump()?;

        Ok(Window {
            _sdl_ctx: sdl_ctx,
            video_ctx,
            window,
            event_pump,
            _gl_ctx: gl_ctx,
        })
    }

    /// Loader for [crate::gles::GLES2Native::new].
    pub fn gl_get_proc_address(&self, name: &str) -> *const c_void {
        self.video_ctx.gl_get_proc_address(name) as *const _
    }

    /// Size of the drawable area in pixels.
    pub fn size_in_pixels(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    /// Handle pending events. Returns [false] once the user has asked to quit.
    pub fn poll_for_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                return false;
            }
        }
        true
    }

    pub fn swap_window(&mut self) {
        self.window.gl_swap_window();
    }
}
