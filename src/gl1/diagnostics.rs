/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Error reporting for the translation layer.
//!
//! There are two severities. Calls to legacy entry points that simply aren't
//! implemented are soft errors: they're reported by name and the call does
//! nothing. Supported entry points called with arguments the translation can't
//! handle are fatal: continuing would render garbage.

use crate::gles::gl21compat_raw::types::*;
use std::collections::HashSet;
use std::fmt;

/// An argument combination that reached a supported entry point but that the
/// translation layer can't handle.
#[derive(Clone, Debug, PartialEq)]
pub enum FatalError {
    /// Primitive mode (and start offset, for array draws) that isn't emulated.
    UnsupportedPrimitive {
        entry_point: &'static str,
        mode: GLenum,
        first: GLint,
    },
    /// An attribute stream whose component type can't be passed to the shader.
    UnsupportedComponentType { stream: &'static str, type_: GLenum },
    /// `glAlphaFunc` state other than `(GL_GEQUAL, 0.5)`, which is the only
    /// configuration the fragment shader implements.
    UnsupportedAlphaFunc { func: GLenum, ref_: GLclampf },
    /// A 32-bit index that doesn't fit into 16 bits.
    IndexOverflow { position: usize, value: u32 },
    /// `glDrawElements` index type that isn't byte, short or int.
    InvalidIndexType(GLenum),
    /// An entry point that is part of the supported surface in name only.
    Unimplemented(&'static str),
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::UnsupportedPrimitive {
                entry_point,
                mode,
                first,
            } => write!(
                f,
                "{} with unsupported mode {:#x} (first: {})",
                entry_point, mode, first
            ),
            FatalError::UnsupportedComponentType { stream, type_ } => {
                write!(f, "unsupported {} array type {:#x}", stream, type_)
            }
            FatalError::UnsupportedAlphaFunc { func, ref_ } => {
                write!(
                    f,
                    "glAlphaFunc with unsupported arguments {:#x}, {} (only GL_GEQUAL, 0.5 is implemented)",
                    func, ref_
                )
            }
            FatalError::IndexOverflow { position, value } => write!(
                f,
                "index {} at position {} does not fit into GL_UNSIGNED_SHORT",
                value, position
            ),
            FatalError::InvalidIndexType(type_) => {
                write!(f, "glDrawElements with invalid index type {:#x}", type_)
            }
            FatalError::Unimplemented(entry_point) => write!(f, "{} is unimplemented", entry_point),
        }
    }
}

/// Receiver for errors raised by the translation layer.
pub trait Diagnostics {
    /// A legacy entry point that isn't implemented was called. The call is a
    /// no-op, so rendering continues (possibly incorrectly).
    fn report_error(&mut self, name: &str);

    /// A supported entry point got arguments that can't be translated.
    /// Implementations are expected not to return; if one does, the call that
    /// raised the error is abandoned without touching the target API any
    /// further.
    fn blocking_error(&mut self, error: &FatalError);
}

/// The default [Diagnostics]: soft errors are logged (once per entry point, so
/// a per-frame call doesn't flood the output), fatal errors panic.
#[derive(Default)]
pub struct LogDiagnostics {
    reported: HashSet<String>,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Diagnostics for LogDiagnostics {
    fn report_error(&mut self, name: &str) {
        if self.reported.insert(name.to_string()) {
            log!(
                "Warning: {} is not supported, ignoring (further calls will not be logged)",
                name
            );
        } else {
            log_dbg!("Ignoring call to unsupported {}", name);
        }
    }

    fn blocking_error(&mut self, error: &FatalError) {
        panic!("Unsupported use of legacy OpenGL: {}", error);
    }
}
