/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! The shader program that stands in for the fixed-function pipeline, and the
//! one-time setup around it.

use crate::gles::gles20_raw as gles20;
use crate::gles::gles20_raw::types::*;
use crate::gles::GLES2;
use std::ffi::CStr;

/// Attribute slots bound before linking.
pub const ATTRIB_POSITION: GLuint = 1;
pub const ATTRIB_NORMAL: GLuint = 2;
pub const ATTRIB_COLOR: GLuint = 3;
pub const ATTRIB_TEX_COORD: GLuint = 4;

const VERTEX_SHADER: &str = "\
precision highp float;

attribute vec3 position;
attribute vec3 normal;
attribute vec4 color;
attribute vec4 textureCoord;

uniform mat4 projMat;
uniform mat4 modelViewMat;

varying vec4 vColor;
varying vec2 vTexCoord;

void main() {
    gl_Position = projMat * modelViewMat * vec4(position, 1.0);
    vColor = color;
    vTexCoord = textureCoord.xy;
}
";

// Alpha test is GL_GEQUAL against 0.5, the only supported configuration.
const FRAGMENT_SHADER: &str = "\
precision highp float;

uniform sampler2D mainTexture;
uniform float enableTexture;
uniform float enableAlphaTest;

varying vec4 vColor;
varying vec2 vTexCoord;

void main() {
    vec4 color = vColor;
    if (enableTexture > 0.5) {
        color *= texture2D(mainTexture, vTexCoord);
    }
    if (enableAlphaTest > 0.5 && color.a < 0.5) {
        discard;
    }
    gl_FragColor = color;
}
";

const ATTRIBUTES: &[(GLuint, &CStr)] = &[
    (ATTRIB_POSITION, c"position"),
    (ATTRIB_NORMAL, c"normal"),
    (ATTRIB_COLOR, c"color"),
    (ATTRIB_TEX_COORD, c"textureCoord"),
];

/// The linked program and its uniform locations.
#[derive(Debug)]
pub struct Program {
    pub name: GLuint,
    pub proj_mat: GLint,
    pub model_view_mat: GLint,
    pub main_texture: GLint,
    pub enable_texture: GLint,
    pub enable_alpha_test: GLint,
}

unsafe fn compile_shader(
    gles: &mut dyn GLES2,
    type_: GLenum,
    label: &str,
    source: &str,
) -> Result<GLuint, String> {
    let shader = gles.CreateShader(type_);
    if shader == 0 {
        return Err(format!("Couldn't create {}", label));
    }
    gles.ShaderSource(shader, source);
    gles.CompileShader(shader);
    let mut success = 0;
    gles.GetShaderiv(shader, gles20::COMPILE_STATUS, &mut success);
    if success == 0 {
        let log = gles.GetShaderInfoLog(shader);
        gles.DeleteShader(shader);
        return Err(format!("Couldn't compile {}: {}", label, log.trim_end()));
    }
    Ok(shader)
}

impl Program {
    /// Compile and link the program. The program is not made current.
    pub unsafe fn new(gles: &mut dyn GLES2) -> Result<Self, String> {
        let vertex_shader =
            compile_shader(gles, gles20::VERTEX_SHADER, "vertex shader", VERTEX_SHADER)?;
        let fragment_shader = compile_shader(
            gles,
            gles20::FRAGMENT_SHADER,
            "fragment shader",
            FRAGMENT_SHADER,
        )?;

        let name = gles.CreateProgram();
        if name == 0 {
            return Err("Couldn't create program".to_string());
        }
        gles.AttachShader(name, vertex_shader);
        gles.AttachShader(name, fragment_shader);
        for &(index, attribute) in ATTRIBUTES {
            gles.BindAttribLocation(name, index, attribute);
        }
        gles.LinkProgram(name);
        // Marked for deletion, freed together with the program.
        gles.DeleteShader(vertex_shader);
        gles.DeleteShader(fragment_shader);

        let mut success = 0;
        gles.GetProgramiv(name, gles20::LINK_STATUS, &mut success);
        if success == 0 {
            let log = gles.GetProgramInfoLog(name);
            return Err(format!("Couldn't link program: {}", log.trim_end()));
        }
        let error = gles.GetError();
        if error != gles20::NO_ERROR {
            return Err(format!("Error {:#x} while building program", error));
        }

        Ok(Program {
            name,
            proj_mat: gles.GetUniformLocation(name, c"projMat"),
            model_view_mat: gles.GetUniformLocation(name, c"modelViewMat"),
            main_texture: gles.GetUniformLocation(name, c"mainTexture"),
            enable_texture: gles.GetUniformLocation(name, c"enableTexture"),
            enable_alpha_test: gles.GetUniformLocation(name, c"enableAlphaTest"),
        })
    }

    /// Make the program current and set the uniforms that never change.
    pub unsafe fn make_current(&self, gles: &mut dyn GLES2) {
        gles.UseProgram(self.name);
        gles.Uniform1i(self.main_texture, 0);
        // The legacy current color is white when no color array is used, but
        // a generic attribute defaults to black.
        gles.VertexAttrib4f(ATTRIB_COLOR, 1.0, 1.0, 1.0, 1.0);
    }
}

/// Find out whether the driver rejects attribute pointers into client memory,
/// in which case vertex data must be copied into buffer objects. Some OpenGL ES
/// 2.0 implementations (e.g. WebGL-backed ones) only accept buffer objects.
pub unsafe fn client_arrays_rejected(gles: &mut dyn GLES2) -> bool {
    let dummy = [0f32; 4];
    gles.BindBuffer(gles20::ARRAY_BUFFER, 0);
    gles.VertexAttribPointer(
        ATTRIB_POSITION,
        1,
        gles20::FLOAT,
        gles20::FALSE,
        0,
        dummy.as_ptr() as *const GLvoid,
    );
    gles.EnableVertexAttribArray(ATTRIB_POSITION);
    gles.DrawArrays(gles20::TRIANGLES, 0, 0);
    let rejected = gles.GetError() != gles20::NO_ERROR;
    gles.DisableVertexAttribArray(ATTRIB_POSITION);
    gles.VertexAttribPointer(
        ATTRIB_POSITION,
        1,
        gles20::FLOAT,
        gles20::FALSE,
        0,
        std::ptr::null(),
    );
    rejected
}
