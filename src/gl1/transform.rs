/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Shadow model-view and projection matrices.
//!
//! There are no stacks: each mode has exactly one matrix.

use crate::gles::gl21compat_raw as gl21;
use crate::gles::gl21compat_raw::types::*;
use crate::matrix::Matrix;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MatrixMode {
    ModelView,
    Projection,
}

impl MatrixMode {
    pub fn gl_enum(self) -> GLenum {
        match self {
            MatrixMode::ModelView => gl21::MODELVIEW,
            MatrixMode::Projection => gl21::PROJECTION,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TransformState {
    model_view: Matrix<4>,
    projection: Matrix<4>,
    mode: MatrixMode,
}

impl Default for TransformState {
    fn default() -> Self {
        TransformState {
            model_view: Matrix::identity(),
            projection: Matrix::identity(),
            mode: MatrixMode::ModelView,
        }
    }
}

impl TransformState {
    pub fn mode(&self) -> MatrixMode {
        self.mode
    }
    pub fn select(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    pub fn model_view(&self) -> &Matrix<4> {
        &self.model_view
    }
    pub fn projection(&self) -> &Matrix<4> {
        &self.projection
    }

    fn current_mut(&mut self) -> &mut Matrix<4> {
        match self.mode {
            MatrixMode::ModelView => &mut self.model_view,
            MatrixMode::Projection => &mut self.projection,
        }
    }

    pub fn load_identity(&mut self) {
        *self.current_mut() = Matrix::identity();
    }
    pub fn load(&mut self, matrix: Matrix<4>) {
        *self.current_mut() = matrix;
    }
    /// `current = current * matrix`
    pub fn multiply(&mut self, matrix: &Matrix<4>) {
        let current = self.current_mut();
        *current = current.multiply(matrix);
    }
}
