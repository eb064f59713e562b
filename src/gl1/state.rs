/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Shadow state for fixed-function toggles that OpenGL ES 2.0 doesn't have.

use super::diagnostics::FatalError;
use crate::gles::gl21compat_raw as gl21;
use crate::gles::gl21compat_raw::types::*;

/// Capabilities that are emulated rather than passed through. Anything else
/// given to `glEnable`/`glDisable` goes straight to the target API.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Capability {
    Texture2D,
    AlphaTest,
    VertexArray,
    NormalArray,
    ColorArray,
    TextureCoordArray,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Texture2D,
        Capability::AlphaTest,
        Capability::VertexArray,
        Capability::NormalArray,
        Capability::ColorArray,
        Capability::TextureCoordArray,
    ];

    pub fn from_gl_enum(cap: GLenum) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.gl_enum() == cap)
    }

    pub fn gl_enum(self) -> GLenum {
        match self {
            Capability::Texture2D => gl21::TEXTURE_2D,
            Capability::AlphaTest => gl21::ALPHA_TEST,
            Capability::VertexArray => gl21::VERTEX_ARRAY,
            Capability::NormalArray => gl21::NORMAL_ARRAY,
            Capability::ColorArray => gl21::COLOR_ARRAY,
            Capability::TextureCoordArray => gl21::TEXTURE_COORD_ARRAY,
        }
    }

    /// Whether this is one of the arrays toggled by `glEnableClientState`.
    pub fn is_client_array(self) -> bool {
        !matches!(self, Capability::Texture2D | Capability::AlphaTest)
    }
}

/// One flag per [Capability], all initially off.
#[derive(Clone, Debug, Default)]
pub struct ToggleState {
    flags: [bool; Capability::ALL.len()],
}

impl ToggleState {
    pub fn set(&mut self, cap: Capability, enabled: bool) {
        self.flags[cap as usize] = enabled;
    }

    pub fn is_enabled(&self, cap: Capability) -> bool {
        self.flags[cap as usize]
    }
}

/// `glAlphaFunc` state. Only recorded when set, checked at draw time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AlphaFunc {
    pub func: GLenum,
    pub ref_: GLclampf,
}

impl AlphaFunc {
    /// The only configuration the fragment shader implements. It's also the
    /// initial state, so that drawing works without a `glAlphaFunc` call.
    pub const SUPPORTED: AlphaFunc = AlphaFunc {
        func: gl21::GEQUAL,
        ref_: 0.5,
    };

    pub fn check(&self) -> Result<(), FatalError> {
        if *self == Self::SUPPORTED {
            Ok(())
        } else {
            Err(FatalError::UnsupportedAlphaFunc {
                func: self.func,
                ref_: self.ref_,
            })
        }
    }
}

impl Default for AlphaFunc {
    fn default() -> Self {
        Self::SUPPORTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_are_independent() {
        let mut state = ToggleState::default();
        for cap in Capability::ALL {
            assert!(!state.is_enabled(cap));
        }
        for cap in Capability::ALL {
            state.set(cap, true);
            assert!(state.is_enabled(cap));
            for other in Capability::ALL.into_iter().filter(|&o| o != cap) {
                assert!(!state.is_enabled(other), "{:?} leaked into {:?}", cap, other);
            }
            state.set(cap, false);
            assert!(!state.is_enabled(cap));
        }

        // And with everything else on.
        for cap in Capability::ALL {
            state.set(cap, true);
        }
        state.set(Capability::AlphaTest, false);
        assert!(!state.is_enabled(Capability::AlphaTest));
        assert!(state.is_enabled(Capability::Texture2D));
        assert!(state.is_enabled(Capability::ColorArray));
    }

    #[test]
    fn gl_enum_mapping() {
        for cap in Capability::ALL {
            assert_eq!(Capability::from_gl_enum(cap.gl_enum()), Some(cap));
        }
        assert_eq!(Capability::from_gl_enum(gl21::BLEND), None);
        assert!(Capability::VertexArray.is_client_array());
        assert!(!Capability::Texture2D.is_client_array());
    }

    #[test]
    fn alpha_func_preset() {
        assert_eq!(AlphaFunc::default().check(), Ok(()));
        let other = AlphaFunc {
            func: gl21::GREATER,
            ref_: 0.5,
        };
        assert_eq!(
            other.check(),
            Err(FatalError::UnsupportedAlphaFunc {
                func: gl21::GREATER,
                ref_: 0.5
            })
        );
        let other = AlphaFunc {
            func: gl21::GEQUAL,
            ref_: 0.25,
        };
        assert!(other.check().is_err());
    }
}
