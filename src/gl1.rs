/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! The legacy fixed-function OpenGL surface and its translation onto OpenGL ES
//! 2.0.
//!
//! - [gl1_generic] is the legacy API as a trait, [GL1].
//! - [gl1_on_gles2] implements it on top of any [crate::gles::GLES2].
//! - The rest are the pieces of state the translation keeps:
//!   - [state]: toggles that only exist in the legacy API.
//!   - [transform]: the model-view and projection matrices.
//!   - [client_arrays]: vertex array pointers, read at draw time.
//!   - [indices]: quad emulation and index narrowing.
//!   - [program]: the shader program replacing the fixed-function pipeline.
//! - [diagnostics] is how unsupported usage is reported.
//!
//! Legacy enumerants come from [crate::gles::gl21compat_raw], which matches
//! the legacy API's headers.

pub mod client_arrays;
pub mod diagnostics;
mod gl1_generic;
pub mod gl1_on_gles2;
pub mod indices;
pub mod program;
pub mod state;
pub mod transform;

pub use diagnostics::{Diagnostics, FatalError, LogDiagnostics};
pub use gl1_generic::GL1;
pub use gl1_on_gles2::GL1OnGLES2;
