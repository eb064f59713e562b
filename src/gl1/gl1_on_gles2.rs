/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Implementation of legacy fixed-function OpenGL on top of OpenGL ES 2.0.
//!
//! OpenGL ES 2.0 has no fixed-function pipeline: no matrix stacks, no client
//! state, no alpha test, no quads. Those are emulated here with shadow state,
//! a small shader program that applies it, and index buffers that turn quads
//! into triangles. State that OpenGL ES 2.0 does have is passed through.
//!
//! Only the parts of the legacy API that a typical 2D/3D engine of the era
//! actually uses are covered, and only with the argument values that this
//! emulation handles. Other arguments to supported functions are fatal (see
//! [FatalError]), since carrying on would just produce wrong rendering.

use super::client_arrays::{ArrayPointer, ClientArrays, Stream};
use super::diagnostics::{Diagnostics, FatalError};
use super::indices::{referenced_vertex_count, IndexType, NarrowedIndices, QuadIndexCache};
use super::program::{
    client_arrays_rejected, Program, ATTRIB_COLOR, ATTRIB_POSITION, ATTRIB_TEX_COORD,
};
use super::state::{AlphaFunc, Capability, ToggleState};
use super::transform::{MatrixMode, TransformState};
use super::GL1;
use crate::gles::gl21compat_raw as gl21;
use crate::gles::gl21compat_raw::types::*;
use crate::gles::gles20_raw as gles20;
use crate::gles::GLES2;
use crate::matrix::Matrix;
use crate::options::{ClientArrayUpload, Options};

/// Streams in the order they are set up for a draw.
const STREAMS: [Stream; 3] = [Stream::Position, Stream::TexCoord, Stream::Color];

fn attrib_index(stream: Stream) -> GLuint {
    match stream {
        Stream::Position => ATTRIB_POSITION,
        Stream::TexCoord => ATTRIB_TEX_COORD,
        Stream::Color => ATTRIB_COLOR,
    }
}

/// Position is always used. The others follow their client state.
fn stream_enabled(toggles: &ToggleState, stream: Stream) -> bool {
    match stream {
        Stream::Position => true,
        Stream::TexCoord => toggles.is_enabled(Capability::TextureCoordArray),
        Stream::Color => toggles.is_enabled(Capability::ColorArray),
    }
}

fn gl_bool(value: bool) -> GLboolean {
    if value {
        gles20::TRUE
    } else {
        gles20::FALSE
    }
}

unsafe fn read_indices<T: Copy>(indices: *const GLvoid, count: usize) -> impl Iterator<Item = T> {
    let indices = indices as *const T;
    (0..count).map(move |i| indices.add(i).read_unaligned())
}

pub struct GL1OnGLES2 {
    gles: Box<dyn GLES2>,
    diagnostics: Box<dyn Diagnostics>,
    /// See [Options::enable_draws].
    enable_draws: bool,
    /// Whether client arrays are copied into buffer objects for every draw
    /// rather than pointed to directly.
    copy_client_arrays: bool,
    program: Program,
    /// Indexed by [Stream].
    stream_buffers: [GLuint; 3],
    quad_index_buffer: GLuint,
    toggles: ToggleState,
    alpha_func: AlphaFunc,
    transform: TransformState,
    arrays: ClientArrays,
    quad_indices: QuadIndexCache,
    /// How much of [Self::quad_indices] is in [Self::quad_index_buffer].
    quad_indices_uploaded: usize,
    narrowed_indices: NarrowedIndices,
    /// Error raised by this layer rather than the target API, returned by the
    /// next `glGetError` in preference to the target's own.
    sticky_error: GLenum,
}

impl GL1OnGLES2 {
    /// Set up the translation on top of an OpenGL ES 2.0 context, which must be
    /// current. This builds the shader program and the buffer objects, and
    /// runs the client array probe if [Options::client_arrays] asks for it.
    pub unsafe fn new(
        mut gles: Box<dyn GLES2>,
        diagnostics: Box<dyn Diagnostics>,
        options: &Options,
    ) -> Result<Self, String> {
        log!(
            "Legacy OpenGL on {} ({})",
            gles.description(),
            gles.driver_description()
        );

        let program = Program::new(&mut *gles)?;

        let copy_client_arrays = match options.client_arrays {
            ClientArrayUpload::Auto => {
                let rejected = client_arrays_rejected(&mut *gles);
                log!(
                    "Driver {} client-side vertex arrays, vertex data will be {}.",
                    if rejected { "rejects" } else { "accepts" },
                    if rejected { "copied" } else { "passed directly" }
                );
                rejected
            }
            ClientArrayUpload::Copy => true,
            ClientArrayUpload::Direct => false,
        };

        program.make_current(&mut *gles);

        let mut buffers = [0; 4];
        gles.GenBuffers(buffers.len() as GLsizei, buffers.as_mut_ptr());
        let [position_buffer, color_buffer, tex_coord_buffer, quad_index_buffer] = buffers;

        let error = gles.GetError();
        if error != gles20::NO_ERROR {
            return Err(format!("Error {:#x} during setup", error));
        }

        if !options.enable_draws {
            log!("Draw calls will be validated but not forwarded.");
        }

        Ok(GL1OnGLES2 {
            gles,
            diagnostics,
            enable_draws: options.enable_draws,
            copy_client_arrays,
            program,
            stream_buffers: [position_buffer, color_buffer, tex_coord_buffer],
            quad_index_buffer,
            toggles: ToggleState::default(),
            alpha_func: AlphaFunc::default(),
            transform: TransformState::default(),
            arrays: ClientArrays::default(),
            quad_indices: QuadIndexCache::default(),
            quad_indices_uploaded: 0,
            narrowed_indices: NarrowedIndices::default(),
            sticky_error: gl21::NO_ERROR,
        })
    }

    /// Whether vertex data is copied into buffer objects for each draw.
    pub fn copies_client_arrays(&self) -> bool {
        self.copy_client_arrays
    }

    fn fatal(&mut self, result: Result<(), FatalError>) {
        if let Err(error) = result {
            self.diagnostics.blocking_error(&error);
        }
    }

    /// Check the stream types and alpha test configuration before touching
    /// anything on the target side.
    fn check_draw_state(&self) -> Result<(), FatalError> {
        for stream in STREAMS {
            if !stream_enabled(&self.toggles, stream) {
                continue;
            }
            let array = self.arrays.get(stream);
            if array.type_ != stream.required_type() {
                return Err(FatalError::UnsupportedComponentType {
                    stream: stream.name(),
                    type_: array.type_,
                });
            }
        }
        self.alpha_func.check()
    }

    /// Bind the attribute streams for `vertex_count` vertices and push the
    /// uniforms, call `draw`, then disable the streams again.
    unsafe fn draw_with_streams<F>(&mut self, vertex_count: usize, draw: F)
    where
        F: FnOnce(&mut dyn GLES2),
    {
        let gles = &mut *self.gles;

        for stream in STREAMS {
            if !stream_enabled(&self.toggles, stream) {
                continue;
            }
            let index = attrib_index(stream);
            let normalized = gl_bool(stream.normalized());
            let view = self.arrays.get(stream).view(vertex_count);
            let array = view.array;
            if self.copy_client_arrays {
                gles.BindBuffer(gles20::ARRAY_BUFFER, self.stream_buffers[stream as usize]);
                gles.BufferData(
                    gles20::ARRAY_BUFFER,
                    view.bytes.len() as GLsizeiptr,
                    view.bytes.as_ptr() as *const GLvoid,
                    gles20::STREAM_DRAW,
                );
                gles.VertexAttribPointer(
                    index,
                    array.size,
                    array.type_,
                    normalized,
                    array.stride,
                    std::ptr::null(),
                );
                gles.BindBuffer(gles20::ARRAY_BUFFER, 0);
            } else {
                gles.VertexAttribPointer(
                    index,
                    array.size,
                    array.type_,
                    normalized,
                    array.stride,
                    view.as_ptr(),
                );
            }
            gles.EnableVertexAttribArray(index);
        }

        let program = &self.program;
        let projection = self.transform.projection().to_gl_array();
        let model_view = self.transform.model_view().to_gl_array();
        gles.UniformMatrix4fv(program.proj_mat, 1, gles20::FALSE, projection.as_ptr());
        gles.UniformMatrix4fv(program.model_view_mat, 1, gles20::FALSE, model_view.as_ptr());
        let texture = self.toggles.is_enabled(Capability::Texture2D);
        let alpha_test = self.toggles.is_enabled(Capability::AlphaTest);
        gles.Uniform1f(program.enable_texture, if texture { 1.0 } else { 0.0 });
        gles.Uniform1f(program.enable_alpha_test, if alpha_test { 1.0 } else { 0.0 });

        draw(&mut *gles);

        for stream in STREAMS {
            if stream_enabled(&self.toggles, stream) {
                gles.DisableVertexAttribArray(attrib_index(stream));
            }
        }
    }

    unsafe fn draw_quads(
        &mut self,
        mode: GLenum,
        first: GLint,
        count: usize,
    ) -> Result<(), FatalError> {
        if mode != gl21::QUADS || first != 0 {
            return Err(FatalError::UnsupportedPrimitive {
                entry_point: "glDrawArrays",
                mode,
                first,
            });
        }

        let index_count = QuadIndexCache::triangle_index_count(count);
        self.quad_indices.ensure(index_count)?;
        self.check_draw_state()?;

        log_dbg!(
            "glDrawArrays(GL_QUADS, 0, {}) => {} triangle indices",
            count,
            index_count
        );
        if !self.enable_draws || index_count == 0 {
            return Ok(());
        }

        let quad_index_buffer = self.quad_index_buffer;
        let indices = self.quad_indices.indices();
        if indices.len() > self.quad_indices_uploaded {
            log_dbg!("Uploading {} quad indices", indices.len());
            self.gles.BindBuffer(gles20::ELEMENT_ARRAY_BUFFER, quad_index_buffer);
            self.gles.BufferData(
                gles20::ELEMENT_ARRAY_BUFFER,
                std::mem::size_of_val(indices) as GLsizeiptr,
                indices.as_ptr() as *const GLvoid,
                gles20::STATIC_DRAW,
            );
            self.gles.BindBuffer(gles20::ELEMENT_ARRAY_BUFFER, 0);
            self.quad_indices_uploaded = indices.len();
        }

        let vertex_count = index_count / 6 * 4;
        self.draw_with_streams(vertex_count, |gles| {
            gles.BindBuffer(gles20::ELEMENT_ARRAY_BUFFER, quad_index_buffer);
            gles.DrawElements(
                gles20::TRIANGLES,
                index_count as GLsizei,
                gles20::UNSIGNED_SHORT,
                std::ptr::null(),
            );
            gles.BindBuffer(gles20::ELEMENT_ARRAY_BUFFER, 0);
        });
        Ok(())
    }

    unsafe fn draw_indexed(
        &mut self,
        mode: GLenum,
        count: usize,
        type_: GLenum,
        indices: *const GLvoid,
    ) -> Result<(), FatalError> {
        if mode != gl21::TRIANGLES {
            return Err(FatalError::UnsupportedPrimitive {
                entry_point: "glDrawElements",
                mode,
                first: 0,
            });
        }
        let index_type = IndexType::from_gl_enum(type_)?;
        if indices.is_null() && count > 0 {
            return Err(FatalError::Unimplemented(
                "glDrawElements with an element array buffer",
            ));
        }

        let (vertex_count, indices, type_) = match index_type {
            IndexType::UnsignedByte => {
                let source = read_indices::<u8>(indices, count);
                (referenced_vertex_count(source), indices, gles20::UNSIGNED_BYTE)
            }
            IndexType::UnsignedShort => {
                let source = read_indices::<u16>(indices, count);
                (referenced_vertex_count(source), indices, gles20::UNSIGNED_SHORT)
            }
            IndexType::UnsignedInt => {
                let source = read_indices::<u32>(indices, count);
                let narrowed = self.narrowed_indices.narrow(source)?;
                (
                    referenced_vertex_count(narrowed.iter().copied()),
                    narrowed.as_ptr() as *const GLvoid,
                    gles20::UNSIGNED_SHORT,
                )
            }
        };
        self.check_draw_state()?;

        log_dbg!(
            "glDrawElements(GL_TRIANGLES, {}, {:#x}) => {} vertices",
            count,
            type_,
            vertex_count
        );
        if !self.enable_draws || count == 0 {
            return Ok(());
        }

        self.draw_with_streams(vertex_count, |gles| {
            gles.DrawElements(gles20::TRIANGLES, count as GLsizei, type_, indices);
        });
        Ok(())
    }

    fn set_array(
        &mut self,
        stream: Stream,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const GLvoid,
    ) {
        self.arrays.set(
            stream,
            ArrayPointer {
                size,
                type_,
                stride,
                pointer,
            },
        );
    }
}

impl GL1 for GL1OnGLES2 {
    fn description(&self) -> &'static str {
        "Legacy OpenGL on OpenGL ES 2.0"
    }

    fn unsupported(&mut self, name: &str) {
        self.diagnostics.report_error(name);
    }

    // Generic state manipulation
    unsafe fn GetError(&mut self) -> GLenum {
        let error = self.gles.GetError();
        if self.sticky_error != gl21::NO_ERROR {
            std::mem::replace(&mut self.sticky_error, gl21::NO_ERROR)
        } else {
            error
        }
    }
    unsafe fn Enable(&mut self, cap: GLenum) {
        match Capability::from_gl_enum(cap) {
            Some(capability) => {
                if capability.is_client_array() {
                    log_dbg!("glEnable({:#x}) used for a client array", cap);
                }
                self.toggles.set(capability, true);
            }
            None => self.gles.Enable(cap),
        }
    }
    unsafe fn Disable(&mut self, cap: GLenum) {
        match Capability::from_gl_enum(cap) {
            Some(capability) => {
                if capability.is_client_array() {
                    log_dbg!("glDisable({:#x}) used for a client array", cap);
                }
                self.toggles.set(capability, false);
            }
            None => self.gles.Disable(cap),
        }
    }
    unsafe fn IsEnabled(&mut self, cap: GLenum) -> GLboolean {
        match Capability::from_gl_enum(cap) {
            Some(capability) => gl_bool(self.toggles.is_enabled(capability)),
            None => self.gles.IsEnabled(cap),
        }
    }
    unsafe fn EnableClientState(&mut self, array: GLenum) {
        match Capability::from_gl_enum(array) {
            Some(capability) if capability.is_client_array() => self.toggles.set(capability, true),
            _ => self.diagnostics.report_error("glEnableClientState"),
        }
    }
    unsafe fn DisableClientState(&mut self, array: GLenum) {
        match Capability::from_gl_enum(array) {
            Some(capability) if capability.is_client_array() => {
                self.toggles.set(capability, false)
            }
            _ => self.diagnostics.report_error("glDisableClientState"),
        }
    }
    unsafe fn GetBooleanv(&mut self, pname: GLenum, params: *mut GLboolean) {
        if params.is_null() {
            return;
        }
        match Capability::from_gl_enum(pname) {
            Some(capability) => params.write(gl_bool(self.toggles.is_enabled(capability))),
            None => self.gles.GetBooleanv(pname, params),
        }
    }
    unsafe fn GetFloatv(&mut self, pname: GLenum, params: *mut GLfloat) {
        if params.is_null() {
            return;
        }
        let matrix = match pname {
            gl21::MODELVIEW_MATRIX => self.transform.model_view(),
            gl21::PROJECTION_MATRIX => self.transform.projection(),
            _ => return self.gles.GetFloatv(pname, params),
        };
        let values = matrix.to_gl_array();
        params.copy_from_nonoverlapping(values.as_ptr(), values.len());
    }
    unsafe fn GetIntegerv(&mut self, pname: GLenum, params: *mut GLint) {
        if params.is_null() {
            return;
        }
        match pname {
            gl21::MATRIX_MODE => params.write(self.transform.mode().gl_enum() as GLint),
            _ => self.gles.GetIntegerv(pname, params),
        }
    }
    unsafe fn GetString(&mut self, name: GLenum) -> *const GLubyte {
        self.gles.GetString(name)
    }
    unsafe fn Hint(&mut self, target: GLenum, mode: GLenum) {
        self.gles.Hint(target, mode)
    }

    // Other state manipulation
    unsafe fn AlphaFunc(&mut self, func: GLenum, ref_: GLclampf) {
        // Checked at draw time, so that a temporary unsupported value is fine.
        self.alpha_func = AlphaFunc { func, ref_ };
    }
    unsafe fn BlendFunc(&mut self, sfactor: GLenum, dfactor: GLenum) {
        self.gles.BlendFunc(sfactor, dfactor)
    }
    unsafe fn ColorMask(
        &mut self,
        red: GLboolean,
        green: GLboolean,
        blue: GLboolean,
        alpha: GLboolean,
    ) {
        self.gles.ColorMask(red, green, blue, alpha)
    }
    unsafe fn CullFace(&mut self, mode: GLenum) {
        self.gles.CullFace(mode)
    }
    unsafe fn FrontFace(&mut self, mode: GLenum) {
        self.gles.FrontFace(mode)
    }
    unsafe fn DepthFunc(&mut self, func: GLenum) {
        self.gles.DepthFunc(func)
    }
    unsafe fn DepthMask(&mut self, flag: GLboolean) {
        self.gles.DepthMask(flag)
    }
    unsafe fn DepthRange(&mut self, near: GLclampd, far: GLclampd) {
        self.gles.DepthRangef(near as GLclampf, far as GLclampf)
    }
    unsafe fn Scissor(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.gles.Scissor(x, y, width, height)
    }
    unsafe fn Viewport(&mut self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.gles.Viewport(x, y, width, height)
    }

    // Clearing
    unsafe fn Clear(&mut self, mask: GLbitfield) {
        self.gles.Clear(mask)
    }
    unsafe fn ClearColor(
        &mut self,
        red: GLclampf,
        green: GLclampf,
        blue: GLclampf,
        alpha: GLclampf,
    ) {
        self.gles.ClearColor(red, green, blue, alpha)
    }
    unsafe fn ClearDepth(&mut self, depth: GLclampd) {
        self.gles.ClearDepthf(depth as GLclampf)
    }
    unsafe fn ClearStencil(&mut self, s: GLint) {
        self.gles.ClearStencil(s)
    }

    // Matrix stack operations
    unsafe fn MatrixMode(&mut self, mode: GLenum) {
        match mode {
            gl21::MODELVIEW => self.transform.select(MatrixMode::ModelView),
            gl21::PROJECTION => self.transform.select(MatrixMode::Projection),
            gl21::TEXTURE | gl21::COLOR => self.diagnostics.report_error("glMatrixMode"),
            _ => self.sticky_error = gl21::INVALID_ENUM,
        }
    }
    unsafe fn LoadIdentity(&mut self) {
        self.transform.load_identity();
    }
    unsafe fn LoadMatrixf(&mut self, m: *const GLfloat) {
        self.transform
            .load(Matrix::from_gl_array(&*(m as *const [GLfloat; 16])));
    }
    unsafe fn LoadMatrixd(&mut self, m: *const GLdouble) {
        self.transform
            .load(Matrix::from_gl_array_f64(&*(m as *const [GLdouble; 16])));
    }
    unsafe fn MultMatrixf(&mut self, m: *const GLfloat) {
        self.transform
            .multiply(&Matrix::from_gl_array(&*(m as *const [GLfloat; 16])));
    }
    unsafe fn MultMatrixd(&mut self, m: *const GLdouble) {
        self.transform
            .multiply(&Matrix::from_gl_array_f64(&*(m as *const [GLdouble; 16])));
    }
    unsafe fn Ortho(
        &mut self,
        left: GLdouble,
        right: GLdouble,
        bottom: GLdouble,
        top: GLdouble,
        near: GLdouble,
        far: GLdouble,
    ) {
        self.transform
            .multiply(&Matrix::ortho(left, right, bottom, top, near, far));
    }
    unsafe fn Frustum(
        &mut self,
        left: GLdouble,
        right: GLdouble,
        bottom: GLdouble,
        top: GLdouble,
        near: GLdouble,
        far: GLdouble,
    ) {
        self.transform
            .multiply(&Matrix::frustum(left, right, bottom, top, near, far));
    }
    unsafe fn PushMatrix(&mut self) {
        self.fatal(Err(FatalError::Unimplemented("glPushMatrix")));
    }
    unsafe fn PopMatrix(&mut self) {
        self.fatal(Err(FatalError::Unimplemented("glPopMatrix")));
    }

    // Array setup
    unsafe fn VertexPointer(
        &mut self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const GLvoid,
    ) {
        self.set_array(Stream::Position, size, type_, stride, pointer);
    }
    unsafe fn ColorPointer(
        &mut self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const GLvoid,
    ) {
        self.set_array(Stream::Color, size, type_, stride, pointer);
    }
    unsafe fn TexCoordPointer(
        &mut self,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        pointer: *const GLvoid,
    ) {
        self.set_array(Stream::TexCoord, size, type_, stride, pointer);
    }

    // Drawing
    unsafe fn DrawArrays(&mut self, mode: GLenum, first: GLint, count: GLsizei) {
        let Ok(count) = usize::try_from(count) else {
            self.sticky_error = gl21::INVALID_VALUE;
            return;
        };
        if !self.toggles.is_enabled(Capability::VertexArray) {
            log_dbg!("Skipping glDrawArrays, GL_VERTEX_ARRAY is disabled");
            return;
        }
        let result = self.draw_quads(mode, first, count);
        self.fatal(result);
    }
    unsafe fn DrawElements(
        &mut self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const GLvoid,
    ) {
        let Ok(count) = usize::try_from(count) else {
            self.sticky_error = gl21::INVALID_VALUE;
            return;
        };
        if !self.toggles.is_enabled(Capability::VertexArray) {
            log_dbg!("Skipping glDrawElements, GL_VERTEX_ARRAY is disabled");
            return;
        }
        let result = self.draw_indexed(mode, count, type_, indices);
        self.fatal(result);
    }

    // Textures
    unsafe fn PixelStorei(&mut self, pname: GLenum, param: GLint) {
        self.gles.PixelStorei(pname, param)
    }
    unsafe fn GenTextures(&mut self, n: GLsizei, textures: *mut GLuint) {
        self.gles.GenTextures(n, textures)
    }
    unsafe fn DeleteTextures(&mut self, n: GLsizei, textures: *const GLuint) {
        self.gles.DeleteTextures(n, textures)
    }
    unsafe fn BindTexture(&mut self, target: GLenum, texture: GLuint) {
        self.gles.BindTexture(target, texture)
    }
    unsafe fn TexParameteri(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        // GL_CLAMP samples the border color, which OpenGL ES doesn't have.
        let param = if target == gl21::TEXTURE_2D
            && (pname == gl21::TEXTURE_WRAP_S || pname == gl21::TEXTURE_WRAP_T)
            && param == gl21::CLAMP as GLint
        {
            gl21::CLAMP_TO_EDGE as GLint
        } else {
            param
        };
        self.gles.TexParameteri(target, pname, param)
    }
    unsafe fn TexParameterfv(&mut self, target: GLenum, pname: GLenum, params: *const GLfloat) {
        self.gles.TexParameterfv(target, pname, params)
    }
    unsafe fn TexParameteriv(&mut self, target: GLenum, pname: GLenum, params: *const GLint) {
        self.gles.TexParameteriv(target, pname, params)
    }
    unsafe fn GetTexParameterfv(&mut self, target: GLenum, pname: GLenum, params: *mut GLfloat) {
        self.gles.GetTexParameterfv(target, pname, params)
    }
    unsafe fn GetTexParameteriv(&mut self, target: GLenum, pname: GLenum, params: *mut GLint) {
        self.gles.GetTexParameteriv(target, pname, params)
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
        // OpenGL ES requires the internal format to match the format.
        if internalformat != format as GLint {
            log_dbg!(
                "glTexImage2D: internal format {:#x} replaced with {:#x}",
                internalformat,
                format
            );
        }
        self.gles.TexImage2D(
            target,
            level,
            format as GLint,
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
        self.gles.TexSubImage2D(
            target, level, xoffset, yoffset, width, height, format, type_, pixels,
        )
    }

    // Texture environment: the shader always modulates.
    unsafe fn TexEnvf(&mut self, _target: GLenum, _pname: GLenum, _param: GLfloat) {
        self.diagnostics.report_error("glTexEnvf");
    }
    unsafe fn TexEnvi(&mut self, _target: GLenum, _pname: GLenum, _param: GLint) {
        self.diagnostics.report_error("glTexEnvi");
    }
    unsafe fn TexEnvfv(&mut self, _target: GLenum, _pname: GLenum, _params: *const GLfloat) {
        self.diagnostics.report_error("glTexEnvfv");
    }
    unsafe fn TexEnviv(&mut self, _target: GLenum, _pname: GLenum, _params: *const GLint) {
        self.diagnostics.report_error("glTexEnviv");
    }
    unsafe fn GetTexEnviv(&mut self, target: GLenum, pname: GLenum, params: *mut GLint) {
        if params.is_null() {
            return;
        }
        if target == gl21::TEXTURE_ENV && pname == gl21::TEXTURE_ENV_MODE {
            params.write(gl21::MODULATE as GLint);
        } else {
            self.diagnostics.report_error("glGetTexEnviv");
        }
    }
}
