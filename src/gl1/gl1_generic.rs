/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! The legacy OpenGL surface offered to callers.
//!
//! Only the subset with a translation (or a meaningful pass-through) has its
//! own method. The rest of the legacy API is a single catch-all,
//! [GL1::unsupported].

use crate::gles::gl21compat_raw::types::*;

/// Trait representing a legacy fixed-function OpenGL context.
///
/// Method names follow the C API without the `gl` prefix.
///
/// # Safety
/// As with [crate::gles::GLES2], the context must be current, and any pointer
/// passed must be valid for what the corresponding OpenGL function reads or
/// writes. Pointers given to the `*Pointer` functions must stay valid until
/// the last draw call that uses them has returned.
#[allow(clippy::upper_case_acronyms)]
#[allow(clippy::too_many_arguments)]
pub trait GL1 {
    /// Get a human-friendly description of this implementation.
    fn description(&self) -> &'static str;

    /// Any legacy entry point without a method here. The call is a no-op and
    /// is reported as a soft error under `name` (e.g. `"glLightfv"`).
    fn unsupported(&mut self, name: &str);

    // Generic state manipulation
    unsafe fn GetError(&mut self) -> GLenum;
    unsafe fn Enable(&mut self, cap: GLenum);
    unsafe fn Disable(&mut self, cap: GLenum);
    unsafe fn IsEnabled(&mut self, cap: GLenum) -> GLboolean;
    unsafe fn EnableClientState(&mut self, array: GLenum);
    unsafe fn DisableClientState(&mut self, array: GLenum);
    unsafe fn GetBooleanv(&mut self, pname: GLenum, params: *mut GLboolean);
    unsafe fn GetFloatv(&mut self, pname: GLenum, params: *mut GLfloat);
    unsafe fn GetIntegerv(&mut self, pname: GLenum, params: *mut GLint);
    unsafe fn GetString(&mut self, name: GLenum) -> *const GLubyte;
    unsafe fn Hint(&mut self, target: GLenum, mode: GLenum);

    // Other state manipulation
    unsafe fn AlphaFunc(&mut self, func: GLenum, ref_: GLclampf);
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
    unsafe fn DepthRange(&mut self, near: GLclampd, far: GLclampd);
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
    unsafe fn ClearDepth(&mut self, depth: GLclampd);
    unsafe fn ClearStencil(&mut self, s: GLint);

    // Matrix stack operations
    unsafe fn MatrixMode(&mut self, mode: GLenum);
    unsafe fn LoadIdentity(&mut self);
    unsafe fn LoadMatrixf(&mut self, m: *const GLfloat);
    unsafe fn LoadMatrixd(&mut self, m: *const GLdouble);
    unsafe fn MultMatrixf(&mut self, m: *const GLfloat);
    unsafe fn MultMatrixd(&mut self, m: *const GLdouble);
    unsafe fn Ortho(
        &mut self,
        left: GLdouble,
        right: GLdouble,
        bottom: GLdouble,
        top: GLdouble,
        near: GLdouble,
        far: GLdouble,
    );
    unsafe fn Frustum(
        &mut self,
        left: GLdouble,
        right: GLdouble,
        bottom: GLdouble,
        top: GLdouble,
        near: GLdouble,
        far: GLdouble,
    );
    unsafe fn PushMatrix(&mut self);
    unsafe fn PopMatrix(&mut self);

    // Array setup
    unsafe fn VertexPointer(
        &mut self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const GLvoid,
    );
    unsafe fn ColorPointer(
        &mut self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const GLvoid,
    );
    unsafe fn TexCoordPointer(
        &mut self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const GLvoid,
    );

    // Drawing
    unsafe fn DrawArrays(&mut self, mode: GLenum, first: GLint, count: GLsizei);
    unsafe fn DrawElements(
        &mut self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const GLvoid,
    );

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

    // Texture environment
    unsafe fn TexEnvf(&mut self, target: GLenum, pname: GLenum, param: GLfloat);
    unsafe fn TexEnvi(&mut self, target: GLenum, pname: GLenum, param: GLint);
    unsafe fn TexEnvfv(&mut self, target: GLenum, pname: GLenum, params: *const GLfloat);
    unsafe fn TexEnviv(&mut self, target: GLenum, pname: GLenum, params: *const GLint);
    unsafe fn GetTexEnviv(&mut self, target: GLenum, pname: GLenum, params: *mut GLint);
}
