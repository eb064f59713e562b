/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Enough of a matrix implementation to emulate the legacy transform state.

/// Column-major, like OpenGL: `self.0[column][row]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix<const N: usize>([[f32; N]; N]);

impl<const N: usize> Matrix<N> {
    pub fn identity() -> Self {
        let mut matrix = [[0f32; N]; N];
        #[allow(clippy::needless_range_loop)]
        for i in 0..N {
            matrix[i][i] = 1f32;
        }
        Matrix(matrix)
    }

    pub fn from_columns(columns: [[f32; N]; N]) -> Self {
        Matrix(columns)
    }

    pub fn columns(&self) -> &[[f32; N]; N] {
        &self.0
    }

    /// Post-multiply: returns `self * other` in the usual mathematical sense,
    /// i.e. `other` is applied to vectors first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut res = [[0f32; N]; N];
        #[allow(clippy::needless_range_loop)]
        for col in 0..N {
            for row in 0..N {
                for k in 0..N {
                    res[col][row] += self.0[k][row] * other.0[col][k];
                }
            }
        }
        Matrix(res)
    }

    /// Transform a vector using the matrix.
    pub fn transform(&self, vector: [f32; N]) -> [f32; N] {
        let mut new = [0f32; N];
        for (i, basis_vector) in self.columns().iter().enumerate() {
            for j in 0..N {
                new[j] += basis_vector[j] * vector[i];
            }
        }
        new
    }
}

impl Matrix<4> {
    /// Read 16 values in OpenGL's column-major order, as taken by
    /// `glLoadMatrixf`.
    pub fn from_gl_array(m: &[f32; 16]) -> Self {
        let mut columns = [[0f32; 4]; 4];
        for (i, column) in columns.iter_mut().enumerate() {
            column.copy_from_slice(&m[i * 4..][..4]);
        }
        Matrix(columns)
    }

    /// Like [Self::from_gl_array], for `glLoadMatrixd`.
    pub fn from_gl_array_f64(m: &[f64; 16]) -> Self {
        let mut narrowed = [0f32; 16];
        for (dst, &src) in narrowed.iter_mut().zip(m.iter()) {
            *dst = src as f32;
        }
        Self::from_gl_array(&narrowed)
    }

    /// Values in OpenGL's column-major order, as taken by
    /// `glUniformMatrix4fv` with `transpose` set to `GL_FALSE`.
    pub fn to_gl_array(&self) -> [f32; 16] {
        let mut m = [0f32; 16];
        for (i, column) in self.0.iter().enumerate() {
            m[i * 4..][..4].copy_from_slice(column);
        }
        m
    }

    /// The matrix `glOrtho` multiplies onto the current matrix.
    pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let tx = -(right + left) / (right - left);
        let ty = -(top + bottom) / (top - bottom);
        let tz = -(far + near) / (far - near);
        Matrix([
            [(2.0 / (right - left)) as f32, 0.0, 0.0, 0.0],
            [0.0, (2.0 / (top - bottom)) as f32, 0.0, 0.0],
            [0.0, 0.0, (-2.0 / (far - near)) as f32, 0.0],
            [tx as f32, ty as f32, tz as f32, 1.0],
        ])
    }

    /// The matrix `glFrustum` multiplies onto the current matrix.
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        let a = (right + left) / (right - left);
        let b = (top + bottom) / (top - bottom);
        let c = -(far + near) / (far - near);
        let d = -(2.0 * far * near) / (far - near);
        Matrix([
            [(2.0 * near / (right - left)) as f32, 0.0, 0.0, 0.0],
            [0.0, (2.0 * near / (top - bottom)) as f32, 0.0, 0.0],
            [a as f32, b as f32, c as f32, -1.0],
            [0.0, 0.0, d as f32, 0.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;

    fn sample() -> Matrix<4> {
        let mut m = [0f32; 16];
        for (i, cell) in m.iter_mut().enumerate() {
            *cell = (i as f32) * 0.5 - 3.0;
        }
        Matrix::from_gl_array(&m)
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample();
        assert_eq!(Matrix::identity().multiply(&m), m);
        assert_eq!(m.multiply(&Matrix::identity()), m);
    }

    #[test]
    fn gl_array_layout() {
        let m = sample();
        let array = m.to_gl_array();
        assert_eq!(Matrix::from_gl_array(&array), m);
        // Element 12..15 is the fourth column (the translation in GL terms).
        assert_eq!(m.columns()[3], [3.0, 3.5, 4.0, 4.5]);
    }

    #[test]
    fn post_multiplication_order() {
        let translate = Matrix::from_columns([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [5.0, 0.0, 0.0, 1.0],
        ]);
        let scale = Matrix::from_columns([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        // translate * scale: scale first, then translate.
        let m = translate.multiply(&scale);
        assert_eq!(m.transform([1.0, 1.0, 1.0, 1.0]), [7.0, 2.0, 2.0, 1.0]);
        let m = scale.multiply(&translate);
        assert_eq!(m.transform([1.0, 1.0, 1.0, 1.0]), [12.0, 2.0, 2.0, 1.0]);
    }

    fn assert_close(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn ortho_maps_box_to_clip_space() {
        let m = Matrix::ortho(0.0, 512.0, 256.0, 0.0, -1.0, 1.0);
        let [x, y, z, _] = m.transform([0.0, 0.0, 0.0, 1.0]);
        assert_close([x, y, z], [-1.0, 1.0, 0.0]);
        let [x, y, z, _] = m.transform([512.0, 256.0, 0.0, 1.0]);
        assert_close([x, y, z], [1.0, -1.0, 0.0]);
    }

    #[test]
    fn frustum_near_and_far_planes() {
        let m = Matrix::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let [x, y, z, w] = m.transform([1.0, 1.0, -1.0, 1.0]);
        assert_close([x / w, y / w, z / w], [1.0, 1.0, -1.0]);
        let [_, _, z, w] = m.transform([0.0, 0.0, -10.0, 1.0]);
        assert!((z / w - 1.0).abs() < 1e-5);
    }
}
