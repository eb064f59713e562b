/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Generic OpenGL ES 2.0 interface: the subset of the target API that the
//! translation layer calls.
//!
//! Like with the raw bindings, import `GLES2` from here but the constants and
//! types from [super::gles20_raw].

use super::gles20_raw::types::*;
use std::ffi::CStr;

/// Trait representing an OpenGL ES 2.0 implementation and context.
///
/// Method names follow the C API without the `gl` prefix. A few methods that
/// take strings use Rust types rather than raw pointers, since the layer above
/// only ever passes its own strings.
///
/// # Safety
/// It is the caller's responsibility to make the context active before using
/// any of the `unsafe` methods of this trait, and to make sure any pointers
/// passed are valid for what the corresponding OpenGL ES function reads or
/// writes.
#[allow(clippy::upper_case_acronyms)]
#[allow(clippy::too_many_arguments)] // not our fault :(
pub trait GLES2 {
    /// Get a human-friendly description of this implementation.
    fn description(&self) -> &'static str;

    /// Get a human-friendly description of the underlying driver (version,
    /// vendor, renderer), for logging.
    unsafe fn driver_description(&mut self) -> String;

    // Generic state manipulation
    unsafe fn GetError(&mut self) -> GLenum;
    unsafe fn Enable(&mut self, cap: GLenum);
    unsafe fn Disable(&mut self, cap: GLenum);
    unsafe fn IsEnabled(&mut self, cap: GLenum) -> GLboolean;
    unsafe fn GetBooleanv(&mut self, pname: GLenum, params: *mut GLboolean);
    unsafe fn GetFloatv(&mut self, pname: GLenum, params: *mut GLfloat);
    unsafe fn GetIntegerv(&mut self, pname: GLenum, params: *mut GLint);
    unsafe fn GetString(&mut self, name: GLenum) -> *const GLubyte;
    unsafe fn Hint(&mut self, target: GLenum, mode: GLenum);

    // Other state manipulation
    unsafe fn BlendFunc(&mut self, sfactor: GLenum, dfactor: GLenum);
    unsafe fn ColorMask(
        &mut self,
        red: GLboolean,
        green: GLboolean,
        blue: GLboolean,
        alpha: GLboolean,
    );
    unsafe fn CullFace(&mut self, mode: GLenum);
    unsafe fn FrontFace(&mut self, mode: GLenum);
    unsafe fn DepthFunc(&mut self, func: GLenum);
    unsafe fn DepthMask(&mut self, flag: GLboolean);
    unsafe fn DepthRangef(&mut self, near: GLclampf, far: GLclampf);
    unsafe fn Scissor(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    unsafe fn Viewport(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);

    // Clearing
    unsafe fn Clear(&mut self, mask: GLbitfield);
    unsafe fn ClearColor(
        &mut self,
        red: GLclampf,
        green: GLclampf,
        blue: GLclampf,
        alpha: GLclampf,
    );
    unsafe fn ClearDepthf(&mut self, depth: GLclampf);
    unsafe fn ClearStencil(&mut self, s: GLint);

    // Textures
    unsafe fn PixelStorei(&mut self, pname: GLenum, param: GLint);
    unsafe fn GenTextures(&mut self, n: GLsizei, textures: *mut GLuint);
    unsafe fn DeleteTextures(&mut self, n: GLsizei, textures: *const GLuint);
    unsafe fn BindTexture(&mut self, target: GLenum, texture: GLuint);
    unsafe fn TexParameteri(&mut self, target: GLenum, pname: GLenum, param: GLint);
    unsafe fn TexParameterfv(&mut self, target: GLenum, pname: GLenum, params: *const GLfloat);
    unsafe fn TexParameteriv(&mut self, target: GLenum, pname: GLenum, params: *const GLint);
    unsafe fn GetTexParameterfv(&mut self, target: GLenum, pname: GLenum, params: *mut GLfloat);
    unsafe fn GetTexParameteriv(&mut self, target: GLenum, pname: GLenum, params: *mut GLint);
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
    );
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
    );

    // Buffers
    unsafe fn GenBuffers(&mut self, n: GLsizei, buffers: *mut GLuint);
    unsafe fn BindBuffer(&mut self, target: GLenum, buffer: GLuint);
    unsafe fn BufferData(
        &mut self,
        target: GLenum,
        size: GLsizeiptr,
        data: *const GLvoid,
        usage: GLenum,
    );

    // Vertex attributes
    unsafe fn VertexAttribPointer(
        &mut self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const GLvoid,
    );
    unsafe fn VertexAttrib4f(&mut self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    unsafe fn EnableVertexAttribArray(&mut self, index: GLuint);
    unsafe fn DisableVertexAttribArray(&mut self, index: GLuint);

    // Drawing
    unsafe fn DrawArrays(&mut self, mode: GLenum, first: GLint, count: GLsizei);
    unsafe fn DrawElements(
        &mut self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const GLvoid,
    );

    // Shaders and programs
    unsafe fn CreateShader(&mut self, type_: GLenum) -> GLuint;
    unsafe fn ShaderSource(&mut self, shader: GLuint, source: &str);
    unsafe fn CompileShader(&mut self, shader: GLuint);
    unsafe fn GetShaderiv(&mut self, shader: GLuint, pname: GLenum, params: *mut GLint);
    unsafe fn GetShaderInfoLog(&mut self, shader: GLuint) -> String;
    unsafe fn DeleteShader(&mut self, shader: GLuint);
    unsafe fn CreateProgram(&mut self) -> GLuint;
    unsafe fn AttachShader(&mut self, program: GLuint, shader: GLuint);
    unsafe fn BindAttribLocation(&mut self, program: GLuint, index: GLuint, name: &CStr);
    unsafe fn LinkProgram(&mut self, program: GLuint);
    unsafe fn GetProgramiv(&mut self, program: GLuint, pname: GLenum, params: *mut GLint);
    unsafe fn GetProgramInfoLog(&mut self, program: GLuint) -> String;
    unsafe fn UseProgram(&mut self, program: GLuint);
    unsafe fn GetUniformLocation(&mut self, program: GLuint, name: &CStr) -> GLint;
    unsafe fn Uniform1i(&mut self, location: GLint, x: GLint);
    unsafe fn Uniform1f(&mut self, location: GLint, x: GLfloat);
    unsafe fn UniformMatrix4fv(
        &mut self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
}
