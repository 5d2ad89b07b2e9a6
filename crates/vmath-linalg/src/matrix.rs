use std::{array, cmp::Ordering, fmt};

use crate::{
    approx::ApproxEq,
    error::{canonical_index, Error},
    traits::{Cast, Float, Scalar},
    Vector, Zero,
};

mod decompose;
mod ops;
mod transform;

pub use transform::{align_z_axis_with_target_dir, rotation_matrix, rotation_matrix_with_up_dir};

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix, also used for 2D affine transforms.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix, also used for 3D affine and projective transforms.
pub type Mat4<T> = Matrix<T, 4, 4>;

pub type Mat2f = Mat2<f32>;
pub type Mat2d = Mat2<f64>;
pub type Mat3f = Mat3<f32>;
pub type Mat3d = Mat3<f64>;
pub type Mat4f = Mat4<f32>;
pub type Mat4d = Mat4<f64>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Conventions
///
/// Vectors are row vectors that multiply matrices from the left (`v * m`). Affine transforms
/// therefore keep their translation in the *last row*, and `a * b` applies `a` first, then `b`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix with raw elements.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::splat`] copies one value into every element.
/// - [`Matrix::identity`] and the [`Default`] impl of square matrices create the identity matrix.
/// - The affine builders in `transform` (`set_scale`, `translate`, `rotate`, ...) modify a
///   matrix in place and can be chained.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. [`Matrix::try_get`]
/// and [`Matrix::try_set`] accept negative indices counting from the end and fail instead of
/// panicking.
///
/// ```
/// # use vmath_linalg::*;
/// let mut mat = Mat3f::identity();
/// mat[(2, 0)] = 4.0;
/// assert_eq!(mat.try_get(-1, 0), Ok(4.0));
/// assert!(mat.try_get(-4, 0).is_err());
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::from_columns(rows).transposed()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns the matrix with its rows and columns swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transposed();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transposed(self) -> Matrix<T, C, R> {
        let mut rows = self.0.map(|column| column.map(Some));
        Matrix::from_fn(|row, col| match rows[row][col].take() {
            Some(elem) => elem,
            None => unreachable!("each element is moved exactly once"),
        })
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the element at `(row, col)`; negative indices count from the end.
    pub fn try_get(&self, row: isize, col: isize) -> Result<T, Error>
    where
        T: Copy,
    {
        let (row, col) = (canonical_index(row, R)?, canonical_index(col, C)?);
        Ok(self.0[col][row])
    }

    /// Replaces the element at `(row, col)`; negative indices count from the end.
    pub fn try_set(&mut self, row: isize, col: isize, value: T) -> Result<(), Error> {
        let (row, col) = (canonical_index(row, R)?, canonical_index(col, C)?);
        self.0[col][row] = value;
        Ok(())
    }

    /// Returns row `row` as a vector.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.0[col][row])
    }

    pub fn set_row(&mut self, row: usize, values: Vector<T, C>) {
        for (col, value) in values.into_array().into_iter().enumerate() {
            self.0[col][row] = value;
        }
    }

    /// Returns column `col` as a vector.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from(self.0[col])
    }

    /// Creates a matrix with every element set to `elem`.
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; R]; C])
    }

    /// Converts each element to `U` with `as` semantics.
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Iterates over all elements in row-major order.
    pub fn iter_row_major(&self) -> impl Iterator<Item = &T> + '_ {
        (0..R).flat_map(move |row| (0..C).map(move |col| &self.0[col][row]))
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn base_type_epsilon() -> T {
        T::EPSILON
    }

    /// Negates every element in place.
    pub fn negate(&mut self) -> &mut Self
    where
        T: std::ops::Neg<Output = T>,
    {
        *self = self.map(|e| -e);
        self
    }

    /// Returns whether `|self[i][j] - other[i][j]| <= e` holds for every element.
    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.abs_diff_eq(other, e)
    }

    /// Returns whether `|self[i][j] - other[i][j]| <= e * |self[i][j]|` holds for every element.
    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.rel_diff_eq(other, e)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix: 1 on the diagonal, 0 everywhere else.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    pub fn make_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Creates a square matrix from its diagonal, with zeroes everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// assert_eq!(diag.diagonal(), [1, 2, 3]);
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the sum of the diagonal elements.
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Sets `self` to the outer product `a ⊗ b`, so that `self[(i, j)] == a[i] * b[j]`.
    pub fn outer_product(&mut self, a: Vector<T, N>, b: Vector<T, N>) -> &mut Self {
        *self = Self::from_fn(|row, col| a[row] * b[col]);
        self
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }
}

impl<T: Scalar> Matrix<T, 3, 3> {
    pub fn determinant(&self) -> T {
        let m = |r: usize, c: usize| self[(r, c)];
        m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
            + m(0, 1) * (m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2))
            + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
    }

    /// Determinant of the 2x2 submatrix made of rows `r0`, `r1` and columns `c0`, `c1`.
    pub fn fast_minor(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> T {
        self[(r0, c0)] * self[(r1, c1)] - self[(r0, c1)] * self[(r1, c0)]
    }

    /// Determinant of the submatrix that remains after removing row `r` and column `c`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let a = Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(a.minor_of(0, 0), a.fast_minor(1, 2, 1, 2));
    /// assert_eq!(a.minor_of(2, 1), a.fast_minor(0, 1, 0, 2));
    /// ```
    pub fn minor_of(&self, r: usize, c: usize) -> T {
        let [r0, r1] = others::<3, 2>(r);
        let [c0, c1] = others::<3, 2>(c);
        self.fast_minor(r0, r1, c0, c1)
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// Determinant of the 3x3 submatrix made of rows `r0..r2` and columns `c0..c2`.
    pub fn fast_minor(
        &self,
        r0: usize,
        r1: usize,
        r2: usize,
        c0: usize,
        c1: usize,
        c2: usize,
    ) -> T {
        let m = |r: usize, c: usize| self[(r, c)];
        m(r0, c0) * (m(r1, c1) * m(r2, c2) - m(r1, c2) * m(r2, c1))
            + m(r0, c1) * (m(r1, c2) * m(r2, c0) - m(r1, c0) * m(r2, c2))
            + m(r0, c2) * (m(r1, c0) * m(r2, c1) - m(r1, c1) * m(r2, c0))
    }

    /// Determinant of the submatrix that remains after removing row `r` and column `c`.
    pub fn minor_of(&self, r: usize, c: usize) -> T {
        let [r0, r1, r2] = others::<4, 3>(r);
        let [c0, c1, c2] = others::<4, 3>(c);
        self.fast_minor(r0, r1, r2, c0, c1, c2)
    }

    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| {
            let term = self[(0, col)] * self.minor_of(0, col);
            if col % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        })
    }
}

/// The `M` indices in `0..N` other than `skip`, in ascending order.
fn others<const N: usize, const M: usize>(skip: usize) -> [usize; M] {
    let mut out = [0; M];
    let mut next = 0;
    for (slot, i) in out.iter_mut().zip((0..N).filter(|&i| i != skip)) {
        *slot = i;
        next += 1;
    }
    debug_assert_eq!(next, M);
    out
}

/// Divides the cofactor matrix `s` by `det`, guarding against overflow for tiny determinants.
fn scale_by_determinant<T: Float, const N: usize>(
    s: &mut Matrix<T, N, N>,
    det: T,
) -> Result<(), Error> {
    if det.abs() >= T::ONE {
        *s = s.map(|e| e / det);
        return Ok(());
    }
    let mr = det.abs() / T::SMALLEST;
    for e in s.0.iter_mut().flatten() {
        if mr > e.abs() {
            *e = *e / det;
        } else {
            return Err(Error::Singular);
        }
    }
    Ok(())
}

macro_rules! inverse_methods {
    () => {
        /// Returns the inverse, or the identity matrix if `self` is singular.
        pub fn inverse(&self) -> Self {
            self.try_inverse().unwrap_or_else(|err| {
                log::debug!("inverse of {:?} failed: {}", self, err);
                Self::identity()
            })
        }

        /// Inverts `self` in place. A singular matrix becomes the identity.
        pub fn invert(&mut self) -> &mut Self {
            *self = self.inverse();
            self
        }

        /// Inverts `self` in place, failing with [`Error::Singular`] and leaving `self` untouched
        /// if it is singular.
        pub fn try_invert(&mut self) -> Result<&mut Self, Error> {
            *self = self.try_inverse()?;
            Ok(self)
        }
    };
}

impl<T: Float> Matrix<T, 2, 2> {
    /// Computes the inverse using cofactors.
    ///
    /// Fails with [`Error::Singular`] if `self` is not invertible.
    pub fn try_inverse(&self) -> Result<Self, Error> {
        let [[a, c], [b, d]] = self.0;
        let mut s = Matrix([[d, -c], [-b, a]]);
        scale_by_determinant(&mut s, self.determinant())?;
        Ok(s)
    }

    inverse_methods!();
}

impl<T: Float> Matrix<T, 3, 3> {
    /// Computes the inverse using cofactors.
    ///
    /// Fails with [`Error::Singular`] if `self` is not invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let mut m = Mat3d::identity();
    /// m.set_translation(vec2(1.0, 2.0));
    /// assert_eq!(m * m.try_inverse().unwrap(), Mat3d::identity());
    /// assert_eq!(Mat3d::ZERO.try_inverse(), Err(Error::Singular));
    /// ```
    pub fn try_inverse(&self) -> Result<Self, Error> {
        let x = |r: usize, c: usize| self[(r, c)];
        #[rustfmt::skip]
        let mut s = Matrix::from_rows([
            [
                x(1, 1) * x(2, 2) - x(2, 1) * x(1, 2),
                x(2, 1) * x(0, 2) - x(0, 1) * x(2, 2),
                x(0, 1) * x(1, 2) - x(1, 1) * x(0, 2),
            ],
            [
                x(2, 0) * x(1, 2) - x(1, 0) * x(2, 2),
                x(0, 0) * x(2, 2) - x(2, 0) * x(0, 2),
                x(1, 0) * x(0, 2) - x(0, 0) * x(1, 2),
            ],
            [
                x(1, 0) * x(2, 1) - x(2, 0) * x(1, 1),
                x(2, 0) * x(0, 1) - x(0, 0) * x(2, 1),
                x(0, 0) * x(1, 1) - x(1, 0) * x(0, 1),
            ],
        ]);
        let det = x(0, 0) * s[(0, 0)] + x(0, 1) * s[(1, 0)] + x(0, 2) * s[(2, 0)];
        scale_by_determinant(&mut s, det)?;
        Ok(s)
    }

    inverse_methods!();
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Computes the inverse.
    ///
    /// Affine matrices (last column `(0, 0, 0, 1)`) are inverted through the cofactors of their
    /// upper 3x3 part, everything else goes through [`Matrix::try_gj_inverse`].
    pub fn try_inverse(&self) -> Result<Self, Error> {
        let affine = self[(0, 3)] == T::ZERO
            && self[(1, 3)] == T::ZERO
            && self[(2, 3)] == T::ZERO
            && self[(3, 3)] == T::ONE;
        if !affine {
            return self.try_gj_inverse();
        }

        let upper = Mat3::from_fn(|r, c| self[(r, c)]);
        let inv = upper.try_inverse()?;
        let mut s = Self::identity();
        for r in 0..3 {
            for c in 0..3 {
                s[(r, c)] = inv[(r, c)];
            }
        }
        for c in 0..3 {
            s[(3, c)] = -(self[(3, 0)] * inv[(0, c)]
                + self[(3, 1)] * inv[(1, c)]
                + self[(3, 2)] * inv[(2, c)]);
        }
        Ok(s)
    }

    inverse_methods!();
}

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Computes the inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Fails with [`Error::Singular`] if `self` is not invertible.
    pub fn try_gj_inverse(&self) -> Result<Self, Error> {
        let mut t = *self;
        let mut s = Self::identity();

        // Forward elimination.
        for i in 0..N.saturating_sub(1) {
            let mut pivot = i;
            let mut pivot_size = t[(i, i)].abs();
            for j in i + 1..N {
                let size = t[(j, i)].abs();
                if size > pivot_size {
                    pivot = j;
                    pivot_size = size;
                }
            }

            if pivot_size == T::ZERO {
                return Err(Error::Singular);
            }

            if pivot != i {
                for k in 0..N {
                    t.swap((i, k), (pivot, k));
                    s.swap((i, k), (pivot, k));
                }
            }

            for j in i + 1..N {
                let f = t[(j, i)] / t[(i, i)];
                for k in 0..N {
                    t[(j, k)] = t[(j, k)] - f * t[(i, k)];
                    s[(j, k)] = s[(j, k)] - f * s[(i, k)];
                }
            }
        }

        // Backward substitution.
        for i in (0..N).rev() {
            let f = t[(i, i)];
            if f == T::ZERO {
                return Err(Error::Singular);
            }
            for k in 0..N {
                t[(i, k)] = t[(i, k)] / f;
                s[(i, k)] = s[(i, k)] / f;
            }
            for j in 0..i {
                let f = t[(j, i)];
                for k in 0..N {
                    t[(j, k)] = t[(j, k)] - f * t[(i, k)];
                    s[(j, k)] = s[(j, k)] - f * s[(i, k)];
                }
            }
        }

        Ok(s)
    }

    /// Returns the Gauss-Jordan inverse, or the identity matrix if `self` is singular.
    pub fn gj_inverse(&self) -> Self {
        self.try_gj_inverse().unwrap_or_else(|err| {
            log::debug!("gauss-jordan inverse of {:?} failed: {}", self, err);
            Self::identity()
        })
    }

    pub fn gj_invert(&mut self) -> &mut Self {
        *self = self.gj_inverse();
        self
    }

    pub fn try_gj_invert(&mut self) -> Result<&mut Self, Error> {
        *self = self.try_gj_inverse()?;
        Ok(self)
    }

    fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let tmp = self[a];
        self[a] = self[b];
        self[b] = tmp;
    }
}

/// Same partial order as [`Vector`]: `a <= b` if every element is `<=`.
impl<T: PartialOrd, const R: usize, const C: usize> PartialOrd for Matrix<T, R, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let pairs = || self.0.iter().flatten().zip(other.0.iter().flatten());
        if pairs().all(|(a, b)| a == b) {
            Some(Ordering::Equal)
        } else if pairs().all(|(a, b)| a <= b) {
            Some(Ordering::Less)
        } else if pairs().all(|(a, b)| a >= b) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0 .0[col][self.1])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, error::ErrorKind, vec2};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn defaults_to_identity() {
        let m = Mat3f::default();
        assert_eq!(m, Mat3f::from_diagonal([1.0, 1.0, 1.0]));
        assert_eq!(Mat4d::default().trace(), 4.0);

        let mut m = Mat3f::splat(2.0);
        m.make_identity();
        assert_eq!(m, Mat3f::identity());
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
    }

    #[test]
    fn checked_access() {
        let mut m = Mat3i::identity();
        m.try_set(0, 0, 10).unwrap();
        m.try_set(1, -1, 11).unwrap();
        assert_eq!(m[(0, 0)], 10);
        assert_eq!(m[(1, 2)], 11);
        assert_eq!(m.try_get(-4, 0).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(m.try_set(0, 3, 0).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(m.row(1), [0, 1, 11]);
        assert_eq!(m.column(2), [0, 11, 1]);
    }

    type Mat3i = Mat3<i32>;

    #[test]
    fn partial_order() {
        let mut m1 = Mat3f::identity();
        m1[(1, 1)] = 2.0;
        let m2 = m1;
        let mut m3 = Mat3f::identity();
        m3[(1, 1)] = 3.0;

        assert!(m1 == m2);
        assert!(m1 != m3);
        assert!(!(m1 < m2));
        assert!(m1 < m3);
        assert!(m1 <= m3);
        assert!(!(m3 <= m1));
        assert!(m3 > m1);
        assert!(!(m1 >= m3));
    }

    #[test]
    fn transpose() {
        let mut m = Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.transposed(), Mat3::from_rows([[1, 4, 7], [2, 5, 8], [3, 6, 9]]));
        m.transpose();
        assert_eq!(m, Mat3::from_rows([[1, 4, 7], [2, 5, 8], [3, 6, 9]]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::identity().determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transposed().determinant(), 54);

        let diag = Mat4::from_diagonal([2, 3, 4, 5]);
        assert_eq!(diag.determinant(), 120);
    }

    #[test]
    fn determinant_of_decomposition() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..20 {
            let mut u = Mat3d::identity();
            u.set_rotation(rng.f64());
            let mut v = Mat3d::identity();
            v.set_rotation(rng.f64());
            let s = Mat3d::from_diagonal([rng.f64(), rng.f64(), rng.f64()]);
            let c = u * s * v.transposed();
            assert_approx_eq!(c.determinant(), s.diagonal().into_array().iter().product::<f64>())
                .abs(1e-12);
        }
    }

    #[test]
    fn minors() {
        let a = Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(a.minor_of(0, 1), a.fast_minor(1, 2, 0, 2));
        assert_eq!(a.minor_of(1, 1), a.fast_minor(0, 2, 0, 2));
        assert_eq!(a.minor_of(2, 2), a.fast_minor(0, 1, 0, 1));

        let a = Mat4::from_fn(|r, c| (r * 4 + c) as i32 + 1);
        assert_eq!(a.minor_of(0, 0), a.fast_minor(1, 2, 3, 1, 2, 3));
        assert_eq!(a.minor_of(3, 1), a.fast_minor(0, 1, 2, 0, 2, 3));
    }

    #[test]
    fn inverse() {
        let mut m = Mat3d::identity();
        m.set_translation(vec2(1.0, 2.0));
        assert_eq!(m * m.inverse(), Mat3d::identity());
        assert_eq!(m * m.gj_inverse(), Mat3d::identity());

        let mut m2 = m;
        m2.invert();
        assert_eq!(m * m2, Mat3d::identity());
        let mut m2 = m;
        m2.gj_invert();
        assert_eq!(m * m2, Mat3d::identity());

        #[rustfmt::skip]
        let p = Mat4d::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0],
            [1.0, 0.0, -1.0, 0.0],
        ]);
        assert_approx_eq!(p * p.inverse(), Mat4d::identity()).abs(1e-12);

        let r = Mat2f::from_rows([[0.0, 1.0], [-1.0, 0.0]]);
        assert_eq!(r.inverse(), r.transposed());
    }

    #[test]
    fn singular() {
        let m = Mat4f::splat(1.0);
        assert_eq!(m.try_inverse(), Err(Error::Singular));
        assert_eq!(m.try_gj_inverse().unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(m.inverse(), Mat4f::identity());

        let mut z = Mat3f::ZERO;
        assert!(z.try_invert().is_err());
        assert_eq!(z, Mat3f::ZERO);
        z.invert();
        assert_eq!(z, Mat3f::identity());
    }

    #[test]
    fn outer_product() {
        let a = crate::vec3(1, 2, 3);
        let b = crate::vec3(4, 5, 6);
        let mut p = Mat3::identity();
        p.outer_product(a, b);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(p[(i, j)], a[i] * b[j]);
            }
        }
    }
}
