/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Client-side vertex arrays (`glVertexPointer` and friends).
//!
//! The pointers are only recorded when they are set. Nothing is read until a
//! draw call, which is the only time the caller guarantees the memory is valid.

use crate::gles::gl21compat_raw as gl21;
use crate::gles::gl21compat_raw::types::*;

/// The attribute streams the translation shader consumes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stream {
    Position,
    Color,
    TexCoord,
}

impl Stream {
    pub fn name(self) -> &'static str {
        match self {
            Stream::Position => "vertex",
            Stream::Color => "color",
            Stream::TexCoord => "texture coordinate",
        }
    }

    /// The only component type the shader path handles for this stream.
    pub fn required_type(self) -> GLenum {
        match self {
            Stream::Position | Stream::TexCoord => gl21::FLOAT,
            Stream::Color => gl21::UNSIGNED_BYTE,
        }
    }

    /// Colors are bytes that the shader expects in `0.0..=1.0`.
    pub fn normalized(self) -> bool {
        self == Stream::Color
    }
}

/// Arguments of the most recent `gl*Pointer` call for one stream.
///
/// The pointer is not owned and is only valid during the draw call that
/// consumes it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrayPointer {
    pub size: GLint,
    pub type_: GLenum,
    pub stride: GLsizei,
    pub pointer: *const GLvoid,
}

impl ArrayPointer {
    /// Initial values of the legacy client array state.
    const INITIAL: ArrayPointer = ArrayPointer {
        size: 4,
        type_: gl21::FLOAT,
        stride: 0,
        pointer: std::ptr::null(),
    };

    pub fn component_size(&self) -> Option<usize> {
        match self.type_ {
            gl21::BYTE | gl21::UNSIGNED_BYTE => Some(1),
            gl21::SHORT | gl21::UNSIGNED_SHORT => Some(2),
            gl21::INT | gl21::UNSIGNED_INT | gl21::FLOAT => Some(4),
            gl21::DOUBLE => Some(8),
            _ => None,
        }
    }

    /// Size in bytes of one vertex's worth of this attribute.
    pub fn element_size(&self) -> usize {
        self.size.max(0) as usize * self.component_size().unwrap_or(0)
    }

    /// Distance between vertices, with stride 0 meaning tightly packed.
    pub fn effective_stride(&self) -> usize {
        if self.stride > 0 {
            self.stride as usize
        } else {
            self.element_size()
        }
    }

    /// Number of bytes that `vertex_count` vertices span. The last vertex only
    /// contributes its own size, not a whole stride.
    pub fn byte_len(&self, vertex_count: usize) -> usize {
        match vertex_count {
            0 => 0,
            n => self.effective_stride() * (n - 1) + self.element_size(),
        }
    }

    /// Borrow the caller's data for `vertex_count` vertices.
    ///
    /// # Safety
    /// The pointer must be valid for reads of [Self::byte_len] bytes for as
    /// long as the view is alive. The view must not outlive the draw call.
    pub unsafe fn view(&self, vertex_count: usize) -> AttributeView<'_> {
        let len = self.byte_len(vertex_count);
        let bytes: &[u8] = if self.pointer.is_null() || len == 0 {
            &[]
        } else {
            std::slice::from_raw_parts(self.pointer as *const u8, len)
        };
        AttributeView {
            array: self,
            bytes,
        }
    }
}

/// Borrowed attribute data for a single draw call.
#[derive(Copy, Clone, Debug)]
pub struct AttributeView<'a> {
    pub array: &'a ArrayPointer,
    pub bytes: &'a [u8],
}

impl AttributeView<'_> {
    /// Pointer to hand to `glVertexAttribPointer` when not copying. Keeps the
    /// caller's pointer even when the view is empty.
    pub fn as_ptr(&self) -> *const GLvoid {
        if self.bytes.is_empty() {
            self.array.pointer
        } else {
            self.bytes.as_ptr() as *const GLvoid
        }
    }
}

/// The pointer cache: the latest [ArrayPointer] for each [Stream].
#[derive(Clone, Debug)]
pub struct ClientArrays {
    position: ArrayPointer,
    color: ArrayPointer,
    tex_coord: ArrayPointer,
}

impl Default for ClientArrays {
    fn default() -> Self {
        ClientArrays {
            position: ArrayPointer::INITIAL,
            color: ArrayPointer::INITIAL,
            tex_coord: ArrayPointer::INITIAL,
        }
    }
}

impl ClientArrays {
    pub fn get(&self, stream: Stream) -> &ArrayPointer {
        match stream {
            Stream::Position => &self.position,
            Stream::Color => &self.color,
            Stream::TexCoord => &self.tex_coord,
        }
    }

    pub fn set(&mut self, stream: Stream, array: ArrayPointer) {
        *match stream {
            Stream::Position => &mut self.position,
            Stream::Color => &mut self.color,
            Stream::TexCoord => &mut self.tex_coord,
        } = array;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(size: GLint, type_: GLenum, stride: GLsizei, data: &[u8]) -> ArrayPointer {
        ArrayPointer {
            size,
            type_,
            stride,
            pointer: data.as_ptr() as *const GLvoid,
        }
    }

    #[test]
    fn byte_len_tightly_packed() {
        let data = [0u8; 48];
        let positions = array(3, gl21::FLOAT, 0, &data);
        assert_eq!(positions.effective_stride(), 12);
        assert_eq!(positions.byte_len(0), 0);
        assert_eq!(positions.byte_len(1), 12);
        assert_eq!(positions.byte_len(4), 48);
    }

    #[test]
    fn byte_len_interleaved() {
        // xyz + rgba8 + uv per vertex, reading the colors.
        let data = [0u8; 24 * 4];
        let colors = array(4, gl21::UNSIGNED_BYTE, 24, &data[12..]);
        assert_eq!(colors.byte_len(4), 24 * 3 + 4);
        let view = unsafe { colors.view(4) };
        assert_eq!(view.bytes.len(), 76);
        assert_eq!(view.as_ptr(), data[12..].as_ptr() as *const GLvoid);
    }

    #[test]
    fn null_pointer_gives_empty_view() {
        let arrays = ClientArrays::default();
        let view = unsafe { arrays.get(Stream::Position).view(4) };
        assert!(view.bytes.is_empty());
        assert!(view.as_ptr().is_null());
    }

    #[test]
    fn latest_pointer_wins() {
        let first = [1u8; 16];
        let second = [2u8; 16];
        let mut arrays = ClientArrays::default();
        arrays.set(Stream::TexCoord, array(2, gl21::FLOAT, 0, &first));
        arrays.set(Stream::Color, array(4, gl21::UNSIGNED_BYTE, 0, &first));
        arrays.set(Stream::TexCoord, array(2, gl21::FLOAT, 8, &second));
        let tex_coord = arrays.get(Stream::TexCoord);
        assert_eq!(tex_coord.stride, 8);
        assert_eq!(tex_coord.pointer, second.as_ptr() as *const GLvoid);
        assert_eq!(arrays.get(Stream::Color).size, 4);
        assert!(arrays.get(Stream::Position).pointer.is_null());
    }
}
