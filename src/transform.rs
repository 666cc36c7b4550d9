//! Affine transformations of homogeneous 2D and 3D points
//!
//! ```text
//! let mut t = AffineTransform::new_3d();
//! t.rotation_x(PI).translate_3d(1.0, 1.0, 1.0);
//! let p = t.apply_to(&Point3::new(1.0, 1.0, 1.0))?;
//! ```
//!
//! Each builder call left-multiplies its matrix onto the accumulated one, so
//! transforms apply in call order: above, `p` is first rotated about x and
//! then translated, i.e. `translate · rotation_x · p`.

use crate::errors::MathError;
use crate::float_types::Real;
use crate::line::Line;
use crate::matrix::Matrix;
use crate::point::{Point2, Point3};
use crate::traits::{Homogeneous, NumericTuple};
use crate::vector::Vector;
use nalgebra::DMatrix;
use std::fmt::Display;

/// The axis of a 3D rotation. The rotation axis passes through the origin;
/// for a [`Line`] only its direction is used.
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    Vector(Vector),
    Point(Point3),
    Line(Line),
    Array([Real; 3]),
}

impl Axis {
    fn direction(&self) -> Result<Vector, MathError> {
        let v = match self {
            Axis::Vector(v) => v.clone(),
            Axis::Point(p) => p.to_vector(),
            Axis::Line(line) => line.direction().to_vector(),
            Axis::Array(a) => Vector::from(*a),
        };
        if v.dimension() != 3 {
            return Err(MathError::UnsupportedDimension(v.dimension()));
        }
        v.normalize()
    }
}

impl From<Vector> for Axis {
    fn from(v: Vector) -> Self {
        Axis::Vector(v)
    }
}

impl From<Point3> for Axis {
    fn from(p: Point3) -> Self {
        Axis::Point(p)
    }
}

impl From<Line> for Axis {
    fn from(line: Line) -> Self {
        Axis::Line(line)
    }
}

impl From<&Line> for Axis {
    fn from(line: &Line) -> Self {
        Axis::Line(line.clone())
    }
}

impl From<[Real; 3]> for Axis {
    fn from(a: [Real; 3]) -> Self {
        Axis::Array(a)
    }
}

/// A homogeneous transform in 2 or 3 euclidean dimensions.
///
/// The matrix is always `(dim + 1) x (dim + 1)` with a last row of
/// `[0, ..., 0, 1]`. Builder methods mutate in place and return `&mut Self`;
/// use [`dup`](Self::dup) to snapshot an intermediate stage.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransform {
    dim: usize,
    matrix: Matrix,
}

impl AffineTransform {
    /// The identity transform in `dim` (2 or 3) dimensions.
    pub fn new(dim: usize) -> Result<Self, MathError> {
        match dim {
            2 | 3 => Ok(AffineTransform {
                dim,
                matrix: Matrix::identity(dim + 1),
            }),
            n => Err(MathError::UnsupportedDimension(n)),
        }
    }

    pub fn new_2d() -> Self {
        AffineTransform {
            dim: 2,
            matrix: Matrix::identity(3),
        }
    }

    pub fn new_3d() -> Self {
        AffineTransform {
            dim: 3,
            matrix: Matrix::identity(4),
        }
    }

    /// Euclidean dimension (the matrix is one larger).
    pub const fn dimension(&self) -> usize {
        self.dim
    }

    pub const fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Switching between 2D and 3D operations discards what was built so far.
    fn ensure_dimension(&mut self, dim: usize) {
        if self.dim != dim {
            tracing::debug!(from = self.dim, to = dim, "affine transform reset to identity");
            self.dim = dim;
            self.matrix = Matrix::identity(dim + 1);
        }
    }

    /// Snaps `m` to 0 and left-multiplies it onto the accumulated matrix.
    fn compose(&mut self, m: Matrix) {
        let m = m.snap_to(0.0);
        self.matrix = Matrix::from(m.as_dmatrix() * self.matrix.as_dmatrix());
    }

    /// Adds `offsets` into the last column, so repeated translations accumulate.
    fn add_translation(&mut self, offsets: &[Real]) {
        let n = self.dim;
        let data = self.matrix.as_dmatrix_mut();
        for (i, d) in offsets.iter().enumerate() {
            data[(i, n)] += d;
        }
    }

    pub fn translate_2d(&mut self, dx: Real, dy: Real) -> &mut Self {
        self.ensure_dimension(2);
        self.add_translation(&[dx, dy]);
        self
    }

    pub fn translate_3d(&mut self, dx: Real, dy: Real, dz: Real) -> &mut Self {
        self.ensure_dimension(3);
        self.add_translation(&[dx, dy, dz]);
        self
    }

    /// Counter-clockwise rotation by `theta` in the xy-plane.
    pub fn rotate_2d(&mut self, theta: Real) -> &mut Self {
        let (s, c) = theta.sin_cos();
        let m = DMatrix::from_row_slice(3, 3, &[
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        ]);
        self.ensure_dimension(2);
        self.compose(Matrix::from(m));
        self
    }

    /// Right-handed rotation by `phi` about the x-axis.
    pub fn rotation_x(&mut self, phi: Real) -> &mut Self {
        let (s, c) = phi.sin_cos();
        let m = DMatrix::from_row_slice(4, 4, &[
            1.0, 0.0, 0.0, 0.0,
            0.0, c, -s, 0.0,
            0.0, s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.ensure_dimension(3);
        self.compose(Matrix::from(m));
        self
    }

    /// Right-handed rotation by `theta` about the y-axis.
    pub fn rotation_y(&mut self, theta: Real) -> &mut Self {
        let (s, c) = theta.sin_cos();
        let m = DMatrix::from_row_slice(4, 4, &[
            c, 0.0, s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.ensure_dimension(3);
        self.compose(Matrix::from(m));
        self
    }

    /// Right-handed rotation by `psi` about the z-axis.
    pub fn rotation_z(&mut self, psi: Real) -> &mut Self {
        let (s, c) = psi.sin_cos();
        let m = DMatrix::from_row_slice(4, 4, &[
            c, -s, 0.0, 0.0,
            s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.ensure_dimension(3);
        self.compose(Matrix::from(m));
        self
    }

    /// Right-handed rotation by `theta` about an arbitrary axis through the
    /// origin (Rodrigues' formula). Without an axis this is [`rotate_2d`](Self::rotate_2d).
    ///
    /// Fails when the axis is not three dimensional or has zero length.
    pub fn rotation(&mut self, theta: Real, axis: Option<Axis>) -> Result<&mut Self, MathError> {
        let Some(axis) = axis else {
            return Ok(self.rotate_2d(theta));
        };
        let u = axis.direction()?;
        let (x, y, z) = (u.as_slice()[0], u.as_slice()[1], u.as_slice()[2]);
        let (s, c) = theta.sin_cos();
        let t = 1.0 - c;
        let m = DMatrix::from_row_slice(4, 4, &[
            t * x * x + c, t * x * y - s * z, t * x * z + s * y, 0.0,
            t * x * y + s * z, t * y * y + c, t * y * z - s * x, 0.0,
            t * x * z - s * y, t * y * z + s * x, t * z * z + c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.ensure_dimension(3);
        self.compose(Matrix::from(m));
        Ok(self)
    }

    /// Change of basis to a viewing frame, without rotating the object.
    ///
    /// The new x-axis points along the direction given by `theta` (from `+x`
    /// in the xy-plane) and `phi` (from `+z`); y and z span the plane through
    /// the origin normal to it:
    ///
    /// ```text
    /// [ cosθ·sinφ   sinθ·sinφ   cosφ  0 ]
    /// [ -sinθ       cosθ        0     0 ]
    /// [ -cosθ·cosφ  -sinθ·cosφ  sinφ  0 ]
    /// [ 0           0           0     1 ]
    /// ```
    pub fn new_coordinates(&mut self, theta: Real, phi: Real) -> &mut Self {
        let (st, ct) = theta.sin_cos();
        let (sp, cp) = phi.sin_cos();
        let m = DMatrix::from_row_slice(4, 4, &[
            ct * sp, st * sp, cp, 0.0,
            -st, ct, 0.0, 0.0,
            -ct * cp, -st * cp, sp, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.ensure_dimension(3);
        self.compose(Matrix::from(m));
        self
    }

    /// Applies the transform to a point of the same dimension.
    pub fn apply_to<P: Homogeneous>(&self, point: &P) -> Result<P, MathError> {
        if P::DIM != self.dim {
            return Err(MathError::mismatch(self.dim, P::DIM));
        }
        let v = self.apply_to_vector(&point.homogeneous())?;
        P::from_homogeneous(&v)
    }

    /// Multiplies a raw homogeneous column vector (length `dim + 1`).
    pub fn apply_to_vector(&self, v: &Vector) -> Result<Vector, MathError> {
        self.matrix.multiply_vector(v)
    }

    /// Crate-internal fast path for transforms built by `new_2d`.
    pub(crate) fn apply_to_point2(&self, p: &Point2) -> Point2 {
        debug_assert_eq!(self.dim, 2);
        let m = self.matrix.as_dmatrix();
        let row = |i: usize| m[(i, 0)] * p.x + m[(i, 1)] * p.y + m[(i, 2)];
        Point2::new(row(0), row(1))
    }

    /// Crate-internal fast path for transforms built by `new_3d`.
    pub(crate) fn apply_to_point3(&self, p: &Point3) -> Point3 {
        debug_assert_eq!(self.dim, 3);
        let m = self.matrix.as_dmatrix();
        let row = |i: usize| m[(i, 0)] * p.x + m[(i, 1)] * p.y + m[(i, 2)] * p.z + m[(i, 3)];
        Point3::new(row(0), row(1), row(2))
    }

    /// The top-left `dim x dim` linear block.
    fn linear_block(&self) -> Result<Matrix, MathError> {
        self.matrix.minor(1, 1, self.dim, self.dim)
    }

    /// True when the linear block is invertible.
    pub fn invertible(&self) -> bool {
        self.linear_block().is_ok_and(|m| m.invertible())
    }

    /// The inverse transform as a new `AffineTransform`.
    ///
    /// This is not the plain matrix inverse: for `x -> A·x + b` it builds
    /// `x -> A⁻¹·x - A⁻¹·b`, reassembled with a `[0, ..., 0, 1]` bottom row.
    pub fn invert(&self) -> Result<AffineTransform, MathError> {
        let n = self.dim;
        let inverse = self.linear_block()?.invert()?;
        let shift = self.matrix.minor(1, n + 1, n, 1)?.to_vector()?;
        let shift = inverse.multiply_vector(&shift)?.negative();
        let top = inverse.augment(&shift.to_column_matrix());

        let mut rows = (1..=n).map(|i| top.row(i)).collect::<Result<Vec<_>, _>>()?;
        let mut bottom = vec![0.0; n + 1];
        bottom[n] = 1.0;
        rows.push(Vector::new(bottom));

        Ok(AffineTransform {
            dim: n,
            matrix: Matrix::from_row_vectors(&rows)?,
        })
    }

    /// Deep copy, handy for saving an intermediate stage of a chain.
    pub fn dup(&self) -> AffineTransform {
        self.clone()
    }
}

impl Display for AffineTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.matrix.fmt(f)
    }
}
