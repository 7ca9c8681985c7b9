use std::ops::Mul;

use crate::error::WarpError;

/// A 3x3 homogeneous transformation matrix acting on column vectors `(x, y, 1)`.
///
/// The values are stored row-major:
///
/// | m0 m1 m2 |
/// | m3 m4 m5 |
/// | m6 m7 m8 |
///
/// The matrices built by this crate are affine (bottom row `(0, 0, 1)`), but composition,
/// inversion and point mapping are general 3x3 operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix([f32; 9]);

#[rustfmt::skip]
fn determinant3x3(m: &[f32; 9]) -> f32 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) -
    m[1] * (m[3] * m[8] - m[5] * m[6]) +
    m[2] * (m[3] * m[7] - m[4] * m[6])
}

#[rustfmt::skip]
fn adjugate3x3(m: &[f32; 9]) -> [f32; 9] {
    [
        m[4] * m[8] - m[5] * m[7],  // [0, 0]
        m[2] * m[7] - m[1] * m[8],  // [0, 1]
        m[1] * m[5] - m[2] * m[4],  // [0, 2]
        m[5] * m[6] - m[3] * m[8],  // [1, 0]
        m[0] * m[8] - m[2] * m[6],  // [1, 1]
        m[2] * m[3] - m[0] * m[5],  // [1, 2]
        m[3] * m[7] - m[4] * m[6],  // [2, 0]
        m[1] * m[6] - m[0] * m[7],  // [2, 1]
        m[0] * m[4] - m[1] * m[3],  // [2, 2]
    ]
}

impl AffineMatrix {
    /// The identity transform.
    #[rustfmt::skip]
    pub const IDENTITY: AffineMatrix = AffineMatrix([
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    ]);

    /// Creates a matrix from its nine row-major values.
    pub fn new(m: [f32; 9]) -> Self {
        Self(m)
    }

    /// Scaling by `sx` along x and `sy` along y.
    #[rustfmt::skip]
    pub fn from_scale(sx: f32, sy: f32) -> Self {
        Self([
            sx,  0.0, 0.0,
            0.0, sy,  0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about the origin by `angle` degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use rewarp_imgproc::warp::AffineMatrix;
    ///
    /// let (x, y) = AffineMatrix::from_rotation(90.0).transform_point(1.0, 0.0);
    ///
    /// assert!(x.abs() < 1e-6);
    /// assert!((y - 1.0).abs() < 1e-6);
    /// ```
    #[rustfmt::skip]
    pub fn from_rotation(angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self([
            cos, -sin, 0.0,
            sin,  cos, 0.0,
            0.0,  0.0, 1.0,
        ])
    }

    /// Translation by `(dx, dy)`.
    #[rustfmt::skip]
    pub fn from_translation(dx: f32, dy: f32) -> Self {
        Self([
            1.0, 0.0, dx,
            0.0, 1.0, dy,
            0.0, 0.0, 1.0,
        ])
    }

    /// The nine row-major values.
    pub fn as_array(&self) -> &[f32; 9] {
        &self.0
    }

    /// The translation column `(m2, m5)`.
    pub fn translation(&self) -> (f32, f32) {
        (self.0[2], self.0[5])
    }

    /// Returns true if the bottom row is `(0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.0[6] == 0.0 && self.0[7] == 0.0 && self.0[8] == 1.0
    }

    /// Determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        determinant3x3(&self.0)
    }

    /// Inverts the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::SingularMatrix`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self, WarpError> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(WarpError::SingularMatrix(det));
        }

        let inv_det = 1.0 / det;
        Ok(Self(adjugate3x3(&self.0).map(|v| v * inv_det)))
    }

    /// Applies the transform after this one, i.e. returns `other · self`.
    pub fn then(&self, other: &AffineMatrix) -> Self {
        *other * *self
    }

    /// Maps the point `(x, y)`, dividing by the homogeneous coordinate.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.0;
        let u = m[0] * x + m[1] * y + m[2];
        let v = m[3] * x + m[4] * y + m[5];
        let w = m[6] * x + m[7] * y + m[8];
        if w == 1.0 {
            (u, v)
        } else {
            (u / w, v / w)
        }
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for AffineMatrix {
    type Output = AffineMatrix;

    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        let (a, b) = (&self.0, &rhs.0);
        let mut out = [0.0; 9];
        for r in 0..3 {
            for c in 0..3 {
                out[r * 3 + c] = (0..3).map(|k| a[r * 3 + k] * b[k * 3 + c]).sum();
            }
        }
        AffineMatrix(out)
    }
}

impl std::fmt::Display for AffineMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let m = &self.0;
        write!(
            f,
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]
        )
    }
}
