// src/numerics/types/matrix.rs
// Dense row-major matrix with elementary row/column transforms and
// cofactor-based determinant / adjoint / inverse.

use core::mem;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use serde::{Deserialize, Serialize};

use super::error::MatrixError;
use super::traits::Numeric;

/// Dense two-dimensional matrix over a numeric element type.
///
/// Elements live in one flat row-major buffer: element `(i, j)` is at
/// offset `i * cols + j`. The buffer length always equals
/// `rows * cols`, and `rows == 0` only together with `cols == 0` (the
/// canonical empty matrix produced by [`Matrix::new`]).
///
/// `Clone` deep-copies the buffer. A moved-from binding is gone in
/// Rust; to reproduce the "source is reset to empty" move contract,
/// take the value out with [`core::mem::take`], which leaves the 0 x 0
/// empty matrix behind.
///
/// The determinant / adjoint / inverse family uses Laplace (cofactor)
/// expansion, whose cost grows factorially with the matrix order.
/// That is a property of the chosen algorithm, not an accident; large
/// matrices are out of scope for this type.
#[derive(Debug, Clone)]
pub struct Matrix<T: Numeric = f32> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Numeric> Matrix<T> {
    /// The 0 x 0 empty matrix.
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Largest representable row count, derived from the buffer's
    /// maximum addressable length in bytes.
    pub fn max_rows() -> usize {
        isize::MAX as usize / mem::size_of::<T>().max(1)
    }

    fn check_shape(rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows >= Self::max_rows() {
            return Err(MatrixError::InvalidRows { rows });
        }
        if rows == 0 {
            if cols != 0 {
                return Err(MatrixError::InvalidCols { cols });
            }
        } else if cols == 0 || cols >= Self::max_rows() / rows {
            return Err(MatrixError::InvalidCols { cols });
        }
        Ok(())
    }

    /// Matrix of the given shape with every element set to zero.
    ///
    /// Shape `(0, 0)` is permitted and yields the empty matrix; zero
    /// rows with non-zero columns (or the reverse) is rejected.
    pub fn with_shape(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::check_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    /// Matrix of the given shape with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, MatrixError> {
        Self::check_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Matrix of the given shape taking its elements, in row-major
    /// order, from `data`. The length must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        Self::check_shape(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrixError::LengthMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Matrix built from nested rows. The first row fixes the column
    /// count; a row of any other length is rejected as ragged.
    ///
    /// ```
    /// use linalg::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        Self::check_shape(n_rows, n_cols)?;
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as a `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for the 0 x 0 empty matrix.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when every element equals zero under the element type's
    /// tolerance rule.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x.approx_eq(T::zero()))
    }

    /// Underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_row(&self, row: usize) -> Result<(), MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), MatrixError> {
        if col >= self.cols {
            return Err(MatrixError::ColOutOfRange {
                col,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn require_square(&self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Checked element access.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&self.data[row * self.cols + col])
    }

    /// Checked mutable element access; the in-place edit side-channel
    /// (`*m.at_mut(i, j)? = x`).
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&mut self.data[row * self.cols + col])
    }

    /// Every element scaled by `value`.
    pub fn mul_scalar(&self, value: T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x * value).collect(),
        }
    }

    /// Every element divided by `value`; a zero divisor is rejected.
    pub fn div_scalar(&self, value: T) -> Result<Self, MatrixError> {
        if value == T::zero() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x / value).collect(),
        })
    }

    /// Elementwise sum; the shapes must match.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a + b)
                .collect(),
        })
    }

    /// Elementwise difference; the shapes must match.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| a - b)
                .collect(),
        })
    }

    /// Matrix product via the standard triple loop; requires
    /// `self.cols == other.rows`, yields `self.rows x other.cols`.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::IncompatibleProduct {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut data = vec![T::zero(); self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = acc;
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Turns a square matrix into the identity.
    pub fn set_identity(&mut self) -> Result<(), MatrixError> {
        self.require_square()?;
        self.set_zero();
        for i in 0..self.rows {
            self.data[i * self.cols + i] = T::one();
        }
        Ok(())
    }

    /// Resets every element to zero, keeping the shape.
    pub fn set_zero(&mut self) {
        for x in &mut self.data {
            *x = T::zero();
        }
    }

    /// Zeroes the matrix, then writes `values` along the main
    /// diagonal. Requires a square shape and `values.len() == rows`.
    pub fn set_diag(&mut self, values: &[T]) -> Result<(), MatrixError> {
        self.require_square()?;
        if values.len() != self.rows {
            return Err(MatrixError::SequenceLength {
                expected: self.rows,
                len: values.len(),
            });
        }
        self.set_zero();
        for (i, &v) in values.iter().enumerate() {
            self.data[i * self.cols + i] = v;
        }
        Ok(())
    }

    /// Broadcasts `value` across a row.
    pub fn fill_row(&mut self, row: usize, value: T) -> Result<(), MatrixError> {
        self.check_row(row)?;
        for x in &mut self.data[row * self.cols..(row + 1) * self.cols] {
            *x = value;
        }
        Ok(())
    }

    /// Overwrites a row with `values`; the length must equal the
    /// column count.
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<(), MatrixError> {
        self.check_row(row)?;
        if values.len() != self.cols {
            return Err(MatrixError::SequenceLength {
                expected: self.cols,
                len: values.len(),
            });
        }
        self.data[row * self.cols..(row + 1) * self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Broadcasts `value` down a column.
    pub fn fill_col(&mut self, col: usize, value: T) -> Result<(), MatrixError> {
        self.check_col(col)?;
        for i in 0..self.rows {
            self.data[i * self.cols + col] = value;
        }
        Ok(())
    }

    /// Overwrites a column with `values`; the length must equal the
    /// row count.
    pub fn set_col(&mut self, col: usize, values: &[T]) -> Result<(), MatrixError> {
        self.check_col(col)?;
        if values.len() != self.rows {
            return Err(MatrixError::SequenceLength {
                expected: self.rows,
                len: values.len(),
            });
        }
        for (i, &v) in values.iter().enumerate() {
            self.data[i * self.cols + col] = v;
        }
        Ok(())
    }

    /// Copy of a row as a `Vec`.
    pub fn row(&self, row: usize) -> Result<Vec<T>, MatrixError> {
        self.check_row(row)?;
        Ok(self.data[row * self.cols..(row + 1) * self.cols].to_vec())
    }

    /// Copy of a column as a `Vec`.
    pub fn col(&self, col: usize) -> Result<Vec<T>, MatrixError> {
        self.check_col(col)?;
        Ok((0..self.rows)
            .map(|i| self.data[i * self.cols + col])
            .collect())
    }

    /// Exchanges two rows elementwise; a no-op when `a == b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        self.check_row(a)?;
        self.check_row(b)?;
        if a != b {
            for j in 0..self.cols {
                self.data.swap(a * self.cols + j, b * self.cols + j);
            }
        }
        Ok(())
    }

    /// Exchanges two columns elementwise; a no-op when `a == b`.
    pub fn swap_cols(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        self.check_col(a)?;
        self.check_col(b)?;
        if a != b {
            for i in 0..self.rows {
                self.data.swap(i * self.cols + a, i * self.cols + b);
            }
        }
        Ok(())
    }

    /// Scales every element of a row in place.
    pub fn scale_row(&mut self, row: usize, value: T) -> Result<(), MatrixError> {
        self.check_row(row)?;
        for x in &mut self.data[row * self.cols..(row + 1) * self.cols] {
            *x *= value;
        }
        Ok(())
    }

    /// Scales every element of a column in place.
    pub fn scale_col(&mut self, col: usize, value: T) -> Result<(), MatrixError> {
        self.check_col(col)?;
        for i in 0..self.rows {
            self.data[i * self.cols + col] *= value;
        }
        Ok(())
    }

    /// `row[target] += value * row[source]`. A zero `value` is a
    /// no-op; `target == source` collapses to scaling the row by
    /// `value + 1`, so the row is never read while being written.
    pub fn add_row_multiple(
        &mut self,
        target: usize,
        source: usize,
        value: T,
    ) -> Result<(), MatrixError> {
        self.check_row(target)?;
        self.check_row(source)?;
        if value == T::zero() {
            return Ok(());
        }
        if target == source {
            return self.scale_row(target, value + T::one());
        }
        for j in 0..self.cols {
            let s = self.data[source * self.cols + j];
            self.data[target * self.cols + j] += value * s;
        }
        Ok(())
    }

    /// `col[target] += value * col[source]`, with the same special
    /// cases as [`Matrix::add_row_multiple`].
    pub fn add_col_multiple(
        &mut self,
        target: usize,
        source: usize,
        value: T,
    ) -> Result<(), MatrixError> {
        self.check_col(target)?;
        self.check_col(source)?;
        if value == T::zero() {
            return Ok(());
        }
        if target == source {
            return self.scale_col(target, value + T::one());
        }
        for i in 0..self.rows {
            let s = self.data[i * self.cols + source];
            self.data[i * self.cols + target] += value * s;
        }
        Ok(())
    }

    /// In-place transpose: swaps the shape and rebuilds the buffer
    /// through a scratch vector.
    pub fn transpose(&mut self) {
        let mut scratch = vec![T::zero(); self.data.len()];
        mem::swap(&mut self.rows, &mut self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                scratch[i * self.cols + j] = self.data[j * self.rows + i];
            }
        }
        self.data = scratch;
    }
}

impl<T: Numeric + Neg<Output = T>> Matrix<T> {
    /// Submatrix with `row` and `col` removed. Requires a square
    /// shape and in-range indices.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        self.require_square()?;
        self.check_row(row)?;
        self.check_col(col)?;
        let n = self.rows - 1;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self::from_vec(n, n, data)
    }

    /// `(-1)^(row+col) * det(minor(row, col))`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let det = self.minor(row, col)?.determinant()?;
        if (row + col) % 2 == 0 {
            Ok(det)
        } else {
            Ok(-det)
        }
    }

    /// Determinant by Laplace expansion along row 0, with 1 x 1 and
    /// 2 x 2 base cases. Cost grows factorially with the order.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.require_square()?;
        match self.rows {
            1 => Ok(self.data[0]),
            2 => Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            _ => {
                let mut total = T::zero();
                for j in 0..self.cols {
                    total += self.data[j] * self.cofactor(0, j)?;
                }
                Ok(total)
            }
        }
    }

    /// Adjugate: the transposed cofactor matrix, with closed forms
    /// for the 1 x 1 and 2 x 2 cases.
    pub fn adjoint(&self) -> Result<Self, MatrixError> {
        self.require_square()?;
        match self.rows {
            1 => Self::from_vec(1, 1, vec![T::one()]),
            2 => Self::from_vec(
                2,
                2,
                vec![self.data[3], -self.data[1], -self.data[2], self.data[0]],
            ),
            _ => {
                let mut adj = Self::with_shape(self.rows, self.cols)?;
                for i in 0..self.rows {
                    for j in 0..self.cols {
                        adj.data[i * self.cols + j] = self.cofactor(i, j)?;
                    }
                }
                adj.transpose();
                Ok(adj)
            }
        }
    }

    /// Inverse via the adjugate, `adjoint() / determinant()`. A zero
    /// determinant raises the distinct [`MatrixError::Singular`]
    /// condition.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        self.require_square()?;
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(MatrixError::Singular);
        }
        self.adjoint()?.div_scalar(det)
    }

    /// `self * other.inverse()`; inherits the squareness and
    /// singularity failure modes of [`Matrix::inverse`].
    pub fn matdiv(&self, other: &Self) -> Result<Self, MatrixError> {
        self.matmul(&other.inverse()?)
    }

    /// Integer power of a square matrix: zero gives the identity,
    /// positive powers repeat self-multiplication, negative powers
    /// repeat multiplication by the inverse.
    pub fn pow(&self, power: i32) -> Result<Self, MatrixError> {
        self.require_square()?;
        if power == 0 {
            let mut out = Self::with_shape(self.rows, self.cols)?;
            out.set_identity()?;
            return Ok(out);
        }
        let base = if power > 0 {
            self.clone()
        } else {
            self.inverse()?
        };
        let mut out = base.clone();
        for _ in 1..power.unsigned_abs() {
            out = out.matmul(&base)?;
        }
        Ok(out)
    }
}

impl<T: Numeric> Default for Matrix<T> {
    /// The empty matrix; also what [`core::mem::take`] leaves behind
    /// when a matrix is moved out of a binding.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> PartialEq for Matrix<T> {
    /// Shape equality plus elementwise [`Numeric::approx_eq`], with a
    /// reference-identity short-circuit.
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        if self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| a.approx_eq(b))
    }
}

/// Unchecked row-major access; staying within the shape is the
/// caller's responsibility.
impl<T: Numeric> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T: Numeric> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

// Binary operators delegate to the checked methods and panic with the
// error's message on a contract violation; callers that want to
// recover use the checked methods directly.

impl<T: Numeric> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Numeric> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Numeric> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.checked_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Numeric> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Numeric> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Numeric> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Numeric + Neg<Output = T>> Div<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.matdiv(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Numeric + Neg<Output = T>> Div for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: Matrix<T>) -> Matrix<T> {
        &self / &rhs
    }
}

impl<T: Numeric> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, value: T) -> Matrix<T> {
        self.mul_scalar(value)
    }
}

impl<T: Numeric> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, value: T) -> Matrix<T> {
        &self * value
    }
}

impl<T: Numeric> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, value: T) -> Matrix<T> {
        self.div_scalar(value).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Numeric> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, value: T) -> Matrix<T> {
        &self / value
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| -x).collect(),
        }
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

// Compound assignment is compute-then-replace; self-assignment through
// a clone leaves the matrix unchanged.

impl<T: Numeric> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Numeric> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Numeric> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self - rhs;
    }
}

impl<T: Numeric> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

impl<T: Numeric> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Numeric> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Matrix<T>) {
        *self *= &rhs;
    }
}

impl<T: Numeric + Neg<Output = T>> DivAssign<&Matrix<T>> for Matrix<T> {
    fn div_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self / rhs;
    }
}

impl<T: Numeric + Neg<Output = T>> DivAssign for Matrix<T> {
    fn div_assign(&mut self, rhs: Matrix<T>) {
        *self /= &rhs;
    }
}

impl<T: Numeric> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, value: T) {
        for x in &mut self.data {
            *x *= value;
        }
    }
}

impl<T: Numeric> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, value: T) {
        if value == T::zero() {
            panic!("{}", MatrixError::DivisionByZero);
        }
        for x in &mut self.data {
            *x /= value;
        }
    }
}

// `value * matrix` cannot be written generically over foreign scalar
// types, so the commutative wrapper is expanded per primitive.
macro_rules! scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {$(
        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                rhs.mul_scalar(self)
            }
        }

        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                rhs.mul_scalar(self)
            }
        }
    )*};
}

scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// Serde support mirrors the shape-validated constructor: the payload
// is the (rows, cols, buffer) triple and deserialization re-checks it.

impl<T> Serialize for Matrix<T>
where
    T: Numeric + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.rows, self.cols, &self.data).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: Numeric + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (rows, cols, data) = <(usize, usize, Vec<T>)>::deserialize(deserializer)?;
        Matrix::from_vec(rows, cols, data).map_err(serde::de::Error::custom)
    }
}
