/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Passthrough for a native OpenGL ES 2.0 driver.
//!
//! There's no validation here. Everything that needs checking is checked by
//! the legacy layer before it gets this far.

use super::gles20_raw as gles20;
use super::gles20_raw::types::*;
use super::GLES2;
use std::ffi::{c_void, CStr};

pub struct GLES2Native {
    _private: (),
}
impl GLES2Native {
    /// Load the function pointers using `loader`, which should be the
    /// windowing system's `GetProcAddress` equivalent for a context that is
    /// current on this thread.
    ///
    /// The bindings are global, so only one native context can be in use at a
    /// time.
    pub fn new<F>(loader: F) -> Result<Self, String>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gles20::load_with(loader);
        // These are the first calls the legacy layer makes. If they're
        // missing, nothing else will work either.
        for (name, loaded) in [
            ("glGetError", gles20::GetError::is_loaded()),
            ("glCreateShader", gles20::CreateShader::is_loaded()),
            ("glGenBuffers", gles20::GenBuffers::is_loaded()),
        ] {
            if !loaded {
                return Err(format!("{} could not be loaded", name));
            }
        }
        Ok(GLES2Native { _private: () })
    }
}

fn string_from_log(mut log: Vec<u8>) -> String {
    if let Some(nul) = log.iter().position(|&c| c == b'\0') {
        log.truncate(nul);
    }
    String::from_utf8_lossy(&log).into_owned()
}

impl GLES2 for GLES2Native {
    fn description(&self) -> &'static str {
        "Native OpenGL ES 2.0"
    }

    unsafe fn driver_description(&mut self) -> String {
        let version = CStr::from_ptr(gles20::GetString(gles20::VERSION) as *const _);
        let vendor = CStr::from_ptr(gles20::GetString(gles20::VENDOR) as *const _);
        let renderer = CStr::from_ptr(gles20::GetString(gles20::RENDERER) as *const _);
        // OpenGL ES requires the version to be prefixed "OpenGL ES", so we
        // don't need to contextualize it.
        format!(
            "{} / {} / {}",
            version.to_string_lossy(),
            vendor.to_string_lossy(),
            renderer.to_string_lossy()
        )
    }

    // Generic state manipulation
    unsafe fn GetError(&mut self) -> GLenum {
        gles20::GetError()
    }
    unsafe fn Enable(&mut self, cap: GLenum) {
        gles20::Enable(cap)
    }
    unsafe fn Disable(&mut self, cap: GLenum) {
        gles20::Disable(cap)
    }
    unsafe fn IsEnabled(&mut self, cap: GLenum) -> GLboolean {
        gles20::IsEnabled(cap)
    }
    unsafe fn GetBooleanv(&mut self, pname: GLenum, params: *mut GLboolean) {
        gles20::GetBooleanv(pname, params)
    }
    unsafe fn GetFloatv(&mut self, pname: GLenum, params: *mut GLfloat) {
        gles20::GetFloatv(pname, params)
    }
    unsafe fn GetIntegerv(&mut self, pname: GLenum, params: *mut GLint) {
        gles20::GetIntegerv(pname, params)
    }
    unsafe fn GetString(&mut self, name: GLenum) -> *const GLubyte {
        gles20::GetString(name)
    }
    unsafe fn Hint(&mut self, target: GLenum, mode: GLenum) {
        gles20::Hint(target, mode)
    }

    // Other state manipulation
    unsafe fn BlendFunc(&mut self, sfactor: GLenum, dfactor: GLenum) {
        gles20::BlendFunc(sfactor, dfactor)
    }
    unsafe fn ColorMask(
        &mut self,
        red: GLboolean,
        green: GLboolean,
        blue: GLboolean,
        alpha: GLboolean,
    ) {
        gles20::ColorMask(red, green, blue, alpha)
    }
    unsafe fn CullFace(&mut self, mode: GLenum) {
        gles20::CullFace(mode)
    }
    unsafe fn FrontFace(&mut self, mode: GLenum) {
        gles20::FrontFace(mode)
    }
    unsafe fn DepthFunc(&mut self, func: GLenum) {
        gles20::DepthFunc(func)
    }
    unsafe fn DepthMask(&mut self, flag: GLboolean) {
        gles20::DepthMask(flag)
    }
    unsafe fn DepthRangef(&mut self, near: GLclampf, far: GLclampf) {
        gles20::DepthRangef(near, far)
    }
    unsafe fn Scissor(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        gles20::Scissor(x, y, width, height)
    }
    unsafe fn Viewport(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        gles20::Viewport(x, y, width, height)
    }

    // Clearing
    unsafe fn Clear(&mut self, mask: GLbitfield) {
        gles20::Clear(mask)
    }
    unsafe fn ClearColor(
        &mut self,
        red: GLclampf,
        green: GLclampf,
        blue: GLclampf,
        alpha: GLclampf,
    ) {
        gles20::ClearColor(red, green, blue, alpha)
    }
    unsafe fn ClearDepthf(&mut self, depth: GLclampf) {
        gles20::ClearDepthf(depth)
    }
    unsafe fn ClearStencil(&mut self, s: GLint) {
        gles20::ClearStencil(s)
    }

    // Textures
    unsafe fn PixelStorei(&mut self, pname: GLenum, param: GLint) {
        gles20::PixelStorei(pname, param)
    }
    unsafe fn GenTextures(&mut self, n: GLsizei, textures: *mut GLuint) {
        gles20::GenTextures(n, textures)
    }
    unsafe fn DeleteTextures(&mut self, n: GLsizei, textures: *const GLuint) {
        gles20::DeleteTextures(n, textures)
    }
    unsafe fn BindTexture(&mut self, target: GLenum, texture: GLuint) {
        gles20::BindTexture(target, texture)
    }
    unsafe fn TexParameteri(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        gles20::TexParameteri(target, pname, param)
    }
    unsafe fn TexParameterfv(&mut self, target: GLenum, pname: GLenum, params: *const GLfloat) {
        gles20::TexParameterfv(target, pname, params)
    }
    unsafe fn TexParameteriv(&mut self, target: GLenum, pname: GLenum, params: *const GLint) {
        gles20::TexParameteriv(target, pname, params)
    }
    unsafe fn GetTexParameterfv(&mut self, target: GLenum, pname: GLenum, params: *mut GLfloat) {
        gles20::GetTexParameterfv(target, pname, params)
    }
    unsafe fn GetTexParameteriv(&mut self, target: GLenum, pname: GLenum, params: *mut GLint) {
        gles20::GetTexParameteriv(target, pname, params)
    }
    unsafe fn TexImage2D(
        &mut self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const GLvoid,
    ) {
        gles20::TexImage2D(
            target,
            level,
            internalformat,
            width,
            height,
            border,
            format,
            type_,
            pixels,
        )
    }
    unsafe fn TexSubImage2D(
        &mut self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const GLvoid,
    ) {
        gles20::TexSubImage2D(
            target, level, xoffset, yoffset, width, height, format, type_, pixels,
        )
    }

    // Buffers
    unsafe fn GenBuffers(&mut self, n: GLsizei, buffers: *mut GLuint) {
        gles20::GenBuffers(n, buffers)
    }
    unsafe fn BindBuffer(&mut self, target: GLenum, buffer: GLuint) {
        gles20::BindBuffer(target, buffer)
    }
    unsafe fn BufferData(
        &mut self,
        target: GLenum,
        size: GLsizeiptr,
        data: *const GLvoid,
        usage: GLenum,
    ) {
        gles20::BufferData(target, size, data, usage)
    }

    // Vertex attributes
    unsafe fn VertexAttribPointer(
        &mut self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const GLvoid,
    ) {
        gles20::VertexAttribPointer(index, size, type_, normalized, stride, pointer)
    }
    unsafe fn VertexAttrib4f(&mut self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        gles20::VertexAttrib4f(index, x, y, z, w)
    }
    unsafe fn EnableVertexAttribArray(&mut self, index: GLuint) {
        gles20::EnableVertexAttribArray(index)
    }
    unsafe fn DisableVertexAttribArray(&mut self, index: GLuint) {
        gles20::DisableVertexAttribArray(index)
    }

    // Drawing
    unsafe fn DrawArrays(&mut self, mode: GLenum, first: GLint, count: GLsizei) {
        gles20::DrawArrays(mode, first, count)
    }
    unsafe fn DrawElements(
        &mut self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const GLvoid,
    ) {
        gles20::DrawElements(mode, count, type_, indices)
    }

    // Shaders and programs
    unsafe fn CreateShader(&mut self, type_: GLenum) -> GLuint {
        gles20::CreateShader(type_)
    }
    unsafe fn ShaderSource(&mut self, shader: GLuint, source: &str) {
        let string = source.as_ptr() as *const GLchar;
        let length = source.len() as GLint;
        gles20::ShaderSource(shader, 1, &string, &length)
    }
    unsafe fn CompileShader(&mut self, shader: GLuint) {
        gles20::CompileShader(shader)
    }
    unsafe fn GetShaderiv(&mut self, shader: GLuint, pname: GLenum, params: *mut GLint) {
        gles20::GetShaderiv(shader, pname, params)
    }
    unsafe fn GetShaderInfoLog(&mut self, shader: GLuint) -> String {
        let mut length = 0;
        gles20::GetShaderiv(shader, gles20::INFO_LOG_LENGTH, &mut length);
        let mut log = vec![0u8; length.max(1) as usize];
        gles20::GetShaderInfoLog(
            shader,
            log.len() as GLsizei,
            std::ptr::null_mut(),
            log.as_mut_ptr() as *mut GLchar,
        );
        string_from_log(log)
    }
    unsafe fn DeleteShader(&mut self, shader: GLuint) {
        gles20::DeleteShader(shader)
    }
    unsafe fn CreateProgram(&mut self) -> GLuint {
        gles20::CreateProgram()
    }
    unsafe fn AttachShader(&mut self, program: GLuint, shader: GLuint) {
        gles20::AttachShader(program, shader)
    }
    unsafe fn BindAttribLocation(&mut self, program: GLuint, index: GLuint, name: &CStr) {
        gles20::BindAttribLocation(program, index, name.as_ptr())
    }
    unsafe fn LinkProgram(&mut self, program: GLuint) {
        gles20::LinkProgram(program)
    }
    unsafe fn GetProgramiv(&mut self, program: GLuint, pname: GLenum, params: *mut GLint) {
        gles20::GetProgramiv(program, pname, params)
    }
    unsafe fn GetProgramInfoLog(&mut self, program: GLuint) -> String {
        let mut length = 0;
        gles20::GetProgramiv(program, gles20::INFO_LOG_LENGTH, &mut length);
        let mut log = vec![0u8; length.max(1) as usize];
        gles20::GetProgramInfoLog(
            program,
            log.len() as GLsizei,
            std::ptr::null_mut(),
            log.as_mut_ptr() as *mut GLchar,
        );
        string_from_log(log)
    }
    unsafe fn UseProgram(&mut self, program: GLuint) {
        gles20::UseProgram(program)
    }
    unsafe fn GetUniformLocation(&mut self, program: GLuint, name: &CStr) -> GLint {
        gles20::GetUniformLocation(program, name.as_ptr())
    }
    unsafe fn Uniform1i(&mut self, location: GLint, x: GLint) {
        gles20::Uniform1i(location, x)
    }
    unsafe fn Uniform1f(&mut self, location: GLint, x: GLfloat) {
        gles20::Uniform1f(location, x)
    }
    unsafe fn UniformMatrix4fv(
        &mut self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    ) {
        gles20::UniformMatrix4fv(location, count, transpose, value)
    }
}
