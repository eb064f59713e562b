/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Index data the target API can draw: synthesized quad indices, and 32-bit
//! indices narrowed to 16 bits.

use super::diagnostics::FatalError;
use crate::gles::gl21compat_raw as gl21;
use crate::gles::gl21compat_raw::types::*;

/// Two triangles per quad, relative to the quad's first vertex.
const QUAD_WINDING: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Quads addressable with 16-bit indices.
const MAX_QUADS: usize = (u16::MAX as usize + 1) / 4;

/// Triangle indices for drawing quads, shared by every `GL_QUADS` draw.
///
/// The indices don't depend on any vertex data, so the cache only ever grows:
/// once an index has been generated it stays valid for all later draws.
#[derive(Clone, Debug, Default)]
pub struct QuadIndexCache {
    indices: Vec<u16>,
}

impl QuadIndexCache {
    /// Number of triangle indices needed to draw `vertex_count` vertices as
    /// quads. Trailing vertices that don't make a full quad are dropped.
    pub fn triangle_index_count(vertex_count: usize) -> usize {
        (vertex_count / 4) * 6
    }

    /// Grow the cache to at least `index_count` indices. Returns `true` if it
    /// grew, in which case the copy held by the target API is stale.
    pub fn ensure(&mut self, index_count: usize) -> Result<bool, FatalError> {
        if index_count <= self.indices.len() {
            return Ok(false);
        }
        let quads = index_count.div_ceil(6);
        if quads > MAX_QUADS {
            return Err(FatalError::IndexOverflow {
                position: index_count - 1,
                value: (quads * 4 - 1) as u32,
            });
        }
        let first_new_quad = self.indices.len() / 6;
        self.indices.reserve((quads - first_new_quad) * 6);
        for quad in first_new_quad..quads {
            let base = (quad * 4) as u16;
            self.indices.extend(QUAD_WINDING.iter().map(|&i| base + i));
        }
        Ok(true)
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}

/// Element types accepted by `glDrawElements`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IndexType {
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
}

impl IndexType {
    pub fn from_gl_enum(type_: GLenum) -> Result<Self, FatalError> {
        match type_ {
            gl21::UNSIGNED_BYTE => Ok(IndexType::UnsignedByte),
            gl21::UNSIGNED_SHORT => Ok(IndexType::UnsignedShort),
            gl21::UNSIGNED_INT => Ok(IndexType::UnsignedInt),
            _ => Err(FatalError::InvalidIndexType(type_)),
        }
    }
}

/// The number of vertices an index list references: the highest index plus
/// one, or zero if the list is empty.
pub fn referenced_vertex_count<I>(indices: I) -> usize
where
    I: IntoIterator,
    I::Item: Into<u32>,
{
    indices
        .into_iter()
        .map(|i| Into::<u32>::into(i) as usize + 1)
        .max()
        .unwrap_or(0)
}

/// Scratch space for 32-bit indices converted to 16-bit ones, because the
/// target API has no `GL_UNSIGNED_INT` indices. Rewritten on every use.
#[derive(Clone, Debug, Default)]
pub struct NarrowedIndices {
    indices: Vec<u16>,
}

impl NarrowedIndices {
    /// Convert `wide` into the scratch buffer. Any index above 65535 is fatal,
    /// and no partial result is returned in that case.
    pub fn narrow<I>(&mut self, wide: I) -> Result<&[u16], FatalError>
    where
        I: IntoIterator<Item = u32>,
    {
        self.indices.clear();
        for (position, value) in wide.into_iter().enumerate() {
            let narrow =
                u16::try_from(value).map_err(|_| FatalError::IndexOverflow { position, value })?;
            self.indices.push(narrow);
        }
        Ok(&self.indices[..])
    }
}
