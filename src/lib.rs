/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! gles_adapter runs code written against legacy fixed-function OpenGL
//! (matrix modes, client-side vertex arrays, alpha test, `GL_QUADS`) on
//! platforms that only offer OpenGL ES 2.0.
//!
//! The terms "legacy" and "target" are used to distinguish the two APIs:
//! - The legacy API is what the calling engine uses, see [gl1::GL1].
//! - The target API is what actually draws, see [gles::GLES2].
//!
//! A typical setup, with an OpenGL ES 2.0 context already current:
//!
//! ```ignore
//! let options = gles_adapter::Options::from_env()?;
//! options.apply_logging();
//! let gles = gles_adapter::GLES2Native::new(|name| get_proc_address(name))?;
//! let mut gl = unsafe {
//!     gles_adapter::GL1OnGLES2::new(
//!         Box::new(gles),
//!         Box::new(gles_adapter::LogDiagnostics::new()),
//!         &options,
//!     )?
//! };
//! ```

// GL-style function names.
#![allow(non_snake_case)]
// rustdoc complains about some public macros that link to private items, but
// we're forced to make those macros public by the weird macro scoping rules,
// so this warning is unhelpful.
#![allow(rustdoc::private_intra_doc_links)]

#[macro_use]
mod log;
pub mod gl1;
pub mod gles;
mod matrix;
pub mod options;
#[cfg(feature = "window")]
pub mod window;

pub use gl1::{Diagnostics, FatalError, LogDiagnostics, GL1OnGLES2, GL1};
pub use gles::{GLES2Native, GLES2};
pub use matrix::Matrix;
pub use options::{ClientArrayUpload, Options};
