/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! OpenGL ES 2.0 abstraction and implementations. This is the API that legacy
//! calls are translated onto.
//!
//! - [gles2_generic] provides an abstraction over OpenGL ES 2.0
//!   implementations, so that the translation layer can be run against
//!   something other than a real driver (e.g. a recording mock in tests).
//! - [gles2_native] passes through to a native OpenGL ES 2.0 driver.
//! - [gles20_raw] provides raw bindings for OpenGL ES 2.0 generated from the
//!   Khronos API headers. **The function bindings are only for use within this
//!   module.** The constants and types can be used outside it, however.
//!   - [gl21compat_raw] is the same thing, but for OpenGL 2.1 compatibility
//!     profile. It is only used for the legacy enumerants and types (e.g.
//!     `GL_QUADS`, `GL_MODELVIEW`) accepted by the legacy API, its functions
//!     are never loaded.
//!
//! Useful resources for OpenGL ES 2.0:
//! - [Reference pages](https://registry.khronos.org/OpenGL-Refpages/es2.0/)
//! - [Specification](https://registry.khronos.org/OpenGL/specs/es/2.0/es_full_spec_2.0.pdf)
//! - [Shading language](https://registry.khronos.org/OpenGL/specs/es/2.0/GLSL_ES_Specification_1.00.pdf)
//!
//! Useful resources for OpenGL 2.1:
//! - [Reference pages](https://registry.khronos.org/OpenGL-Refpages/gl2.1/)
//! - [Specification](https://registry.khronos.org/OpenGL/specs/gl/glspec21.pdf)

mod gles2_generic;
pub mod gles2_native;

pub use gles_adapter_gl_bindings::gl21compat as gl21compat_raw;
pub use gles_adapter_gl_bindings::gles20 as gles20_raw;

pub use gles2_generic::GLES2;
pub use gles2_native::GLES2Native;
