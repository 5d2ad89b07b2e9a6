//! Operator implementations.
//!
//! Vectors multiply matrices from the left. There is deliberately no `Matrix * Vector` impl.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, traits::Scalar, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

/// Row Vector * Matrix.
impl<T, const N: usize, const M: usize> Mul<Matrix<T, N, M>> for Vector<T, N>
where
    T: Scalar,
{
    type Output = Vector<T, M>;

    fn mul(self, rhs: Matrix<T, N, M>) -> Self::Output {
        Vector::from_fn(|col| (0..N).fold(T::ZERO, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

impl<T, const N: usize> MulAssign<Matrix<T, N, N>> for Vector<T, N>
where
    T: Scalar,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

macro_rules! homogeneous_mul {
    ($n:literal => $m:literal) => {
        /// Transforms a point by a homogeneous matrix, including the projective divide.
        impl<T: Scalar> Mul<Matrix<T, $m, $m>> for Vector<T, $n> {
            type Output = Vector<T, $n>;

            fn mul(self, rhs: Matrix<T, $m, $m>) -> Self::Output {
                let mut point = [T::ZERO; $n];
                let mut w = rhs[($n, $n)];
                for row in 0..$n {
                    w += self[row] * rhs[(row, $n)];
                }
                for (col, out) in point.iter_mut().enumerate() {
                    let mut acc = rhs[($n, col)];
                    for row in 0..$n {
                        acc += self[row] * rhs[(row, col)];
                    }
                    *out = acc / w;
                }
                Vector::from(point)
            }
        }

        impl<T: Scalar> MulAssign<Matrix<T, $m, $m>> for Vector<T, $n> {
            fn mul_assign(&mut self, rhs: Matrix<T, $m, $m>) {
                *self = *self * rhs;
            }
        }
    };
}

homogeneous_mul!(2 => 3);
homogeneous_mul!(3 => 4);

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Scalar,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

impl<T: Neg + Copy, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        /// Element-wise operation.
        impl<T: Scalar, const R: usize, const C: usize> $trait for Matrix<T, R, C> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Matrix::from_fn(|r, c| self[(r, c)] $op rhs[(r, c)])
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $assign_trait for Matrix<T, R, C> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

elementwise!(Add, add, AddAssign, add_assign, +);
elementwise!(Sub, sub, SubAssign, sub_assign, -);

macro_rules! broadcast {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        /// Applies the scalar `rhs` to every element.
        impl<T: Scalar, const R: usize, const C: usize> $trait<T> for Matrix<T, R, C> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                self.map(|elem| elem $op rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $assign_trait<T> for Matrix<T, R, C> {
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

broadcast!(Add, add, AddAssign, add_assign, +);
broadcast!(Sub, sub, SubAssign, sub_assign, -);
broadcast!(Mul, mul, MulAssign, mul_assign, *);
broadcast!(Div, div, DivAssign, div_assign, /);

// Scalar on the left. Division is left out: `s / m` has no agreed-upon meaning.
macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Add<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn add(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs + self
                }
            }

            impl<const R: usize, const C: usize> Sub<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn sub(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat3, Mat3f, Mat4f, Matrix};

    #[test]
    fn matrix_product() {
        let mut m2 = Mat3f::identity();
        m2.set_scale(vec2(3.0, 4.0));
        let mut m3 = Mat3f::identity();
        m3.set_translation(vec2(1.0, 2.0));
        assert_eq!(
            m2 * m3,
            Mat3f::from_rows([[3.0, 0.0, 0.0], [0.0, 4.0, 0.0], [1.0, 2.0, 1.0]])
        );
        m2 *= m3;
        assert_eq!(m2.row(2), [1.0, 2.0, 1.0]);

        let a = Matrix::from_rows([[1, 2, 3]]);
        let b = Matrix::from_rows([[1], [2], [3]]);
        assert_eq!(a * b, Matrix::from_rows([[14]]));
    }

    #[test]
    fn row_vector_product() {
        let m = Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(vec3(1, 0, 0) * m, vec3(1, 2, 3));
        assert_eq!(vec3(0, 1, 1) * m, vec3(11, 13, 15));

        let mut v = vec3(0, 0, 1);
        v *= m;
        assert_eq!(v, [7, 8, 9]);
    }

    #[test]
    fn homogeneous_product() {
        let mut m = Mat4f::identity();
        m.set_translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(vec3(1.0, 1.0, 1.0) * m, vec3(2.0, 3.0, 4.0));

        m[(3, 3)] = 2.0;
        assert_eq!(vec3(1.0, 1.0, 1.0) * m, vec3(1.0, 1.5, 2.0));

        let mut m = Mat3f::identity();
        m.set_translation(vec2(3.0, 2.0));
        let mut v = vec2(1.0, 0.0);
        v *= m;
        assert_eq!(v, vec2(4.0, 2.0));
    }

    #[test]
    fn scalar_ops() {
        let m = Mat3f::identity();
        assert_eq!((m * 2.0)[(1, 1)], 2.0);
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!((m + 1.0)[(0, 1)], 1.0);
        assert_eq!(1.0 + m, m + 1.0);
        assert_eq!((1.0 - m)[(0, 0)], 0.0);
        assert_eq!((m - 1.0)[(0, 0)], 0.0);
        assert_eq!((m / 2.0)[(2, 2)], 0.5);
        assert_eq!(-m, m * -1.0);

        let mut n = m;
        n += m;
        n -= 0.5;
        n *= 2.0;
        n /= 4.0;
        assert_eq!(n[(0, 0)], 0.75);
        assert_eq!(n[(0, 1)], -0.25);
        assert_eq!(m + m - m, m);
    }
}
