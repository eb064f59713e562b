/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Demo of the translation layer: draws textured quads and indexed triangles
//! using only legacy OpenGL calls, on an OpenGL ES 2.0 context.

use gles_adapter::gles::gl21compat_raw as gl;
use gles_adapter::gles::gl21compat_raw::types::*;
use gles_adapter::window::Window;
use gles_adapter::{options, GL1OnGLES2, GLES2Native, LogDiagnostics, Options, GL1};

const USAGE: &str = "\
Usage:
    gles_adapter_demo [options]

General options:
    --help
        Print this help text.

    --frames=N
        Quit after drawing N frames.

Options can also be passed in the GLES_ADAPTER_OPTIONS environment variable.
";

const TEXTURE_SIZE: usize = 8;

const TINTS: [[u8; 4]; 4] = [
    [255, 128, 128, 255],
    [128, 255, 128, 255],
    [128, 128, 255, 255],
    [255, 255, 128, 255],
];

fn main() -> Result<(), String> {
    let mut options = Options::from_env()?;
    let mut frames: Option<u64> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--help" {
            println!("{}", USAGE);
            println!("{}", options::DOCUMENTATION);
            return Ok(());
        } else if let Some(value) = arg.strip_prefix("--frames=") {
            frames = Some(
                value
                    .parse()
                    .map_err(|_| format!("Invalid frame count: {:?}", value))?,
            );
        } else if !options.parse_argument(&arg)? {
            eprintln!("{}", USAGE);
            return Err(format!("Unexpected argument: {:?}", arg));
        }
    }
    options.apply_logging();

    let mut window = Window::new("gles_adapter demo", 640, 480)?;
    let gles = GLES2Native::new(|name| window.gl_get_proc_address(name))?;
    let mut gl = unsafe {
        GL1OnGLES2::new(
            Box::new(gles),
            Box::new(LogDiagnostics::new()),
            &options,
        )?
    };
    let texture = unsafe { upload_checkerboard(&mut gl) };

    let mut frame = 0;
    while window.poll_for_events() && frames.map_or(true, |limit| frame < limit) {
        let (width, height) = window.size_in_pixels();
        unsafe { draw_frame(&mut gl, texture, width, height, frame) };
        window.swap_window();
        frame += 1;
    }
    Ok(())
}

/// Opaque white and fully transparent squares, so the alpha test shows.
unsafe fn upload_checkerboard(gl: &mut dyn GL1) -> GLuint {
    let mut pixels = [0u8; TEXTURE_SIZE * TEXTURE_SIZE * 4];
    for (i, pixel) in pixels.chunks_mut(4).enumerate() {
        let (x, y) = (i % TEXTURE_SIZE, i / TEXTURE_SIZE);
        if (x + y) % 2 == 0 {
            pixel.copy_from_slice(&[255, 255, 255, 255]);
        }
    }

    let mut texture = 0;
    gl.GenTextures(1, &mut texture);
    gl.BindTexture(gl::TEXTURE_2D, texture);
    gl.TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as _);
    gl.TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as _);
    gl.TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP as _);
    gl.TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP as _);
    gl.TexImage2D(
        gl::TEXTURE_2D,
        0,
        gl::RGBA8 as _,
        TEXTURE_SIZE as _,
        TEXTURE_SIZE as _,
        0,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        pixels.as_ptr() as *const _,
    );
    texture
}

unsafe fn draw_frame(gl: &mut dyn GL1, texture: GLuint, width: u32, height: u32, frame: u64) {
    let t = frame as f32 / 60.0;

    gl.Viewport(0, 0, width as _, height as _);
    gl.ClearColor(0.1, 0.1, 0.15, 1.0);
    gl.Clear(gl::COLOR_BUFFER_BIT);

    gl.MatrixMode(gl::PROJECTION);
    gl.LoadIdentity();
    gl.Ortho(0.0, width.into(), height.into(), 0.0, -1.0, 1.0);
    gl.MatrixMode(gl::MODELVIEW);
    gl.LoadIdentity();

    // A row of textured, tinted quads.
    let mut positions: Vec<f32> = Vec::new();
    let mut tex_coords: Vec<f32> = Vec::new();
    let mut colors: Vec<u8> = Vec::new();
    for i in 0..4 {
        let x = 40.0 + i as f32 * 140.0;
        let y = 60.0 + (t + i as f32).sin() * 20.0;
        let size = 120.0;
        positions.extend_from_slice(&[
            x,
            y,
            0.0,
            x + size,
            y,
            0.0,
            x + size,
            y + size,
            0.0,
            x,
            y + size,
            0.0,
        ]);
        tex_coords.extend_from_slice(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
        let tint = TINTS[i];
        for _ in 0..4 {
            colors.extend_from_slice(&tint);
        }
    }

    gl.Enable(gl::TEXTURE_2D);
    gl.BindTexture(gl::TEXTURE_2D, texture);
    gl.Enable(gl::ALPHA_TEST);
    gl.AlphaFunc(gl::GEQUAL, 0.5);
    gl.EnableClientState(gl::VERTEX_ARRAY);
    gl.EnableClientState(gl::TEXTURE_COORD_ARRAY);
    gl.EnableClientState(gl::COLOR_ARRAY);
    gl.VertexPointer(3, gl::FLOAT, 0, positions.as_ptr() as *const _);
    gl.TexCoordPointer(2, gl::FLOAT, 0, tex_coords.as_ptr() as *const _);
    gl.ColorPointer(4, gl::UNSIGNED_BYTE, 0, colors.as_ptr() as *const _);
    gl.DrawArrays(gl::QUADS, 0, (positions.len() / 3) as _);

    // A spinning square from indexed triangles with 32-bit indices, using an
    // interleaved position + color array.
    gl.Disable(gl::TEXTURE_2D);
    gl.Disable(gl::ALPHA_TEST);
    gl.DisableClientState(gl::TEXTURE_COORD_ARRAY);

    let (sin, cos) = t.sin_cos();
    let (cx, cy) = (width as f32 / 2.0, height as f32 * 0.7);
    #[rustfmt::skip]
    let transform: [f32; 16] = [
        cos, sin, 0.0, 0.0,
        -sin, cos, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        cx, cy, 0.0, 1.0,
    ];
    gl.MultMatrixf(transform.as_ptr());

    #[repr(C)]
    struct Vertex {
        position: [f32; 3],
        color: [u8; 4],
    }
    let vertices = [
        Vertex { position: [-60.0, -60.0, 0.0], color: [255, 0, 0, 255] },
        Vertex { position: [60.0, -60.0, 0.0], color: [0, 255, 0, 255] },
        Vertex { position: [60.0, 60.0, 0.0], color: [0, 0, 255, 255] },
        Vertex { position: [-60.0, 60.0, 0.0], color: [255, 255, 255, 255] },
    ];
    let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];
    let stride = std::mem::size_of::<Vertex>() as GLsizei;
    gl.VertexPointer(3, gl::FLOAT, stride, vertices[0].position.as_ptr() as *const _);
    gl.ColorPointer(4, gl::UNSIGNED_BYTE, stride, vertices[0].color.as_ptr() as *const _);
    gl.DrawElements(
        gl::TRIANGLES,
        indices.len() as _,
        gl::UNSIGNED_INT,
        indices.as_ptr() as *const _,
    );

    gl.DisableClientState(gl::COLOR_ARRAY);
    gl.DisableClientState(gl::VERTEX_ARRAY);
}
