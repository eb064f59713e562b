/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Parsing and management of user-configurable options.

/// Environment variable read by [Options::from_env].
pub const ENV_VAR: &str = "GLES_ADAPTER_OPTIONS";

pub const DOCUMENTATION: &str = "\
Rendering options:
    --disable-draws
        Validate and transcode draw calls as usual, but never forward them to
        OpenGL ES. Fatal argument checks still happen. This is useful for
        headless or validation-only runs.

    --client-arrays=...
        Choose how vertex data owned by the caller reaches OpenGL ES.

        auto    Probe the driver once at startup (default). If it rejects
                client-side attribute pointers, vertex data is copied into
                buffer objects for each draw.
        copy    Always copy vertex data into buffer objects.
        direct  Always pass client-side pointers directly.

Debugging options:
    --debug-module=...
        Print debug logging for a module, e.g.
        --debug-module=gles_adapter::gl1::gl1_on_gles2. May be given more than
        once.
";

/// How attribute data owned by the caller is handed to the target API.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ClientArrayUpload {
    /// Decide at startup by probing whether client-side pointers are accepted.
    Auto,
    /// Copy into a buffer object on every draw (`USE_BUFFER_DATA`).
    Copy,
    /// Pass the caller's memory directly.
    Direct,
}

/// Struct containing all user-configurable options.
#[derive(Clone, Debug)]
pub struct Options {
    pub enable_draws: bool,
    pub client_arrays: ClientArrayUpload,
    pub debug_modules: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            enable_draws: true,
            client_arrays: ClientArrayUpload::Auto,
            debug_modules: Vec::new(),
        }
    }
}

impl Options {
    /// Parse the command-line argument syntax for an option. Returns `Ok(true)`
    /// if the option was valid and has been applied, and `Ok(false)` if the
    /// option was not recognized.
    pub fn parse_argument(&mut self, arg: &str) -> Result<bool, String> {
        if arg == "--disable-draws" {
            self.enable_draws = false;
        } else if let Some(value) = arg.strip_prefix("--client-arrays=") {
            self.client_arrays = match value {
                "auto" => ClientArrayUpload::Auto,
                "copy" => ClientArrayUpload::Copy,
                "direct" => ClientArrayUpload::Direct,
                _ => return Err(format!("Invalid client array mode: {}", value)),
            };
        } else if let Some(module) = arg.strip_prefix("--debug-module=") {
            if module.is_empty() {
                return Err("Empty module name for --debug-module".to_string());
            }
            self.debug_modules.push(module.to_string());
        } else {
            return Ok(false);
        };
        Ok(true)
    }

    /// Build options from the whitespace-separated arguments in [ENV_VAR].
    /// Unrecognized arguments are an error here, since nothing else could
    /// consume them.
    pub fn from_env() -> Result<Self, String> {
        let mut options = Options::default();
        if let Ok(args) = std::env::var(ENV_VAR) {
            for arg in args.split_whitespace() {
                if !options.parse_argument(arg)? {
                    return Err(format!("Unrecognized option in {}: {}", ENV_VAR, arg));
                }
            }
        }
        Ok(options)
    }

    /// Turn on the runtime logging requested by these options.
    pub fn apply_logging(&self) {
        for module in &self.debug_modules {
            crate::log::enable_module(module);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let mut options = Options::default();
        assert!(options.enable_draws);
        assert_eq!(options.client_arrays, ClientArrayUpload::Auto);

        assert_eq!(options.parse_argument("--disable-draws"), Ok(true));
        assert!(!options.enable_draws);

        assert_eq!(options.parse_argument("--client-arrays=copy"), Ok(true));
        assert_eq!(options.client_arrays, ClientArrayUpload::Copy);
        assert_eq!(options.parse_argument("--client-arrays=direct"), Ok(true));
        assert_eq!(options.client_arrays, ClientArrayUpload::Direct);
        assert!(options.parse_argument("--client-arrays=sometimes").is_err());

        assert_eq!(options.parse_argument("--debug-module=foo::bar"), Ok(true));
        assert_eq!(options.debug_modules, vec!["foo::bar".to_string()]);
        assert!(options.parse_argument("--debug-module=").is_err());

        assert_eq!(options.parse_argument("--landscape-left"), Ok(false));
    }
}
