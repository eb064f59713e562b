/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Logging and terminal output macros.

use std::sync::RwLock;

/// Prints a log message unconditionally. Use this for errors or warnings.
///
/// The message is prefixed with the module path, so it is clear where it comes
/// from.
macro_rules! log {
    ($($arg:tt)+) => {
        echo!("{}: {}", module_path!(), format_args!($($arg)+));
    }
}

/// Like [log], but prints the message only if debugging is enabled for the
/// module where it is used. This can be used for verbose things only needed
/// when debugging, e.g. per-draw-call traces.
macro_rules! log_dbg {
    ($($arg:tt)+) => {
        if $crate::log::debug_enabled(module_path!()) {
            log!($($arg)*);
        }
    }
}

/// Print a message (with implicit newline). This should be used for all
/// output of this crate.
///
/// Prefer use [log] or [log_dbg] for errors and warnings.
macro_rules! echo {
    ($($arg:tt)+) => {
        eprintln!($($arg)+)
    };
    () => {
        eprintln!("")
    }
}

/// Put modules to enable [log_dbg] for here, e.g.
/// "gles_adapter::gl1::gl1_on_gles2" to see every draw call that is translated.
pub const ENABLED_MODULES: &[&str] = &[];

/// Modules enabled at runtime, see [crate::options::Options::debug_modules].
static RUNTIME_ENABLED_MODULES: RwLock<Vec<String>> = RwLock::new(Vec::new());

/// Enable [log_dbg] output for a module path without recompiling.
pub fn enable_module(module: &str) {
    let mut modules = RUNTIME_ENABLED_MODULES
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if !modules.iter().any(|m| m == module) {
        modules.push(module.to_string());
    }
}

/// Only for internal use by the logging macros.
pub fn debug_enabled(module: &str) -> bool {
    ENABLED_MODULES.contains(&module)
        || RUNTIME_ENABLED_MODULES
            .read()
            .map(|modules| modules.iter().any(|m| m == module))
            .unwrap_or(false)
}
