/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use std::fs::File;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let no_extensions: [&str; 0] = [];

    let mut file = File::create(out_dir.join("gles20.rs")).unwrap();
    Registry::new(
        Api::Gles2,
        (2, 0),
        Profile::Core,
        Fallbacks::None,
        no_extensions,
    )
    .write_bindings(GlobalGenerator, &mut file)
    .unwrap();

    // Only the constants and types of this one are used, for the enumerants of
    // the legacy API that OpenGL ES 2.0 doesn't have.
    let mut file = File::create(out_dir.join("gl21compat.rs")).unwrap();
    Registry::new(
        Api::Gl,
        (2, 1),
        Profile::Compatibility,
        Fallbacks::None,
        no_extensions,
    )
    .write_bindings(GlobalGenerator, &mut file)
    .unwrap();
}
