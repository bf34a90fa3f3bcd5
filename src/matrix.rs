use crate::math::EPSILON;
use crate::*;
use approx::AbsDiffEq;
use nalgebra::DMatrix;
use std::ops::Mul;

/// General `rows x cols` matrix of doubles. 4x4 matrices carry affine transforms.
#[derive(Clone, Debug)]
pub struct Matrix {
    m: DMatrix<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            m: DMatrix::zeros(rows, cols),
        }
    }

    pub fn identity(n: usize) -> Self {
        Matrix {
            m: DMatrix::identity(n, n),
        }
    }

    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == ncols),
            "ragged matrix rows"
        );
        Matrix {
            m: DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]),
        }
    }

    pub fn rows(&self) -> usize {
        self.m.nrows()
    }

    pub fn cols(&self) -> usize {
        self.m.ncols()
    }

    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.m[(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.m[(row, col)] = value;
    }

    pub fn transpose(&self) -> Self {
        Matrix {
            m: self.m.transpose(),
        }
    }

    /// Copy with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        assert!(row < self.rows() && col < self.cols());
        Matrix {
            m: DMatrix::from_fn(self.rows() - 1, self.cols() - 1, |i, j| {
                let si = if i >= row { i + 1 } else { i };
                let sj = if j >= col { j + 1 } else { j };
                self.m[(si, sj)]
            }),
        }
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 1 {
            -minor
        } else {
            minor
        }
    }

    //cofactor expansion along the first row
    pub fn determinant(&self) -> f64 {
        assert_eq!(self.rows(), self.cols(), "determinant of a non-square matrix");
        match self.rows() {
            0 => 1.0,
            1 => self.m[(0, 0)],
            2 => self.m[(0, 0)] * self.m[(1, 1)] - self.m[(0, 1)] * self.m[(1, 0)],
            n => (0..n).map(|c| self.m[(0, c)] * self.cofactor(0, c)).sum(),
        }
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > EPSILON
    }

    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() <= EPSILON {
            return Err(Error::NotInvertible(det));
        }
        let n = self.rows();
        //adjugate: cofactor (row, col) lands at (col, row)
        Ok(Matrix {
            m: DMatrix::from_fn(n, n, |i, j| self.cofactor(j, i) / det),
        })
    }

    /// Panics when the matrix is singular; callers are expected to only build invertible transforms.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(inv) => inv,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a> Mul<&'a Matrix> for &'a Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &'a Matrix) -> Matrix {
        assert_eq!(
            self.cols(),
            rhs.rows(),
            "incompatible matrix dimensions {}x{} * {}x{}",
            self.rows(),
            self.cols(),
            rhs.rows(),
            rhs.cols()
        );
        Matrix { m: &self.m * &rhs.m }
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

//the tuple is treated as a column
impl<'a> Mul<Tuple> for &'a Matrix {
    type Output = Tuple;
    fn mul(self, rhs: Tuple) -> Tuple {
        assert!(self.rows() == 4 && self.cols() == 4, "tuple needs a 4x4 matrix");
        let row = |i: usize| (0..4).map(|j| self.m[(i, j)] * rhs[j]).sum::<f64>();
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Tuple> for Matrix {
    type Output = Tuple;
    fn mul(self, rhs: Tuple) -> Tuple {
        &self * rhs
    }
}

//the tuple is treated as a row
impl<'a> Mul<&'a Matrix> for Tuple {
    type Output = Tuple;
    fn mul(self, rhs: &'a Matrix) -> Tuple {
        assert!(rhs.rows() == 4 && rhs.cols() == 4, "tuple needs a 4x4 matrix");
        let col = |j: usize| (0..4).map(|i| self[i] * rhs.m[(i, j)]).sum::<f64>();
        Tuple::new(col(0), col(1), col(2), col(3))
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m.shape() == other.m.shape()
            && self
                .m
                .iter()
                .zip(other.m.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}
