use crate::*;

pub const EPSILON: f64 = 1e-5;

pub fn near_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 3, x);
    m.set(1, 3, y);
    m.set(2, 3, z);
    m
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 0, x);
    m.set(1, 1, y);
    m.set(2, 2, z);
    m
}

pub fn rotation_x(rad: f64) -> Matrix {
    let (s, c) = rad.sin_cos();
    Matrix::from_rows(&[
        &[1.0, 0.0, 0.0, 0.0],
        &[0.0, c, -s, 0.0],
        &[0.0, s, c, 0.0],
        &[0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(rad: f64) -> Matrix {
    let (s, c) = rad.sin_cos();
    Matrix::from_rows(&[
        &[c, 0.0, s, 0.0],
        &[0.0, 1.0, 0.0, 0.0],
        &[-s, 0.0, c, 0.0],
        &[0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(rad: f64) -> Matrix {
    let (s, c) = rad.sin_cos();
    Matrix::from_rows(&[
        &[c, -s, 0.0, 0.0],
        &[s, c, 0.0, 0.0],
        &[0.0, 0.0, 1.0, 0.0],
        &[0.0, 0.0, 0.0, 1.0],
    ])
}

/// Each coefficient moves one axis in proportion to another, e.g. `xy` moves x by y.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    Matrix::from_rows(&[
        &[1.0, xy, xz, 0.0],
        &[yx, 1.0, yz, 0.0],
        &[zx, zy, 1.0, 0.0],
        &[0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn view_transform(from: &Tuple, to: &Tuple, up: &Tuple) -> Matrix {
    let forward = (*to - *from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);
    let orientation = Matrix::from_rows(&[
        &[left.x(), left.y(), left.z(), 0.0],
        &[true_up.x(), true_up.y(), true_up.z(), 0.0],
        &[-forward.x(), -forward.y(), -forward.z(), 0.0],
        &[0.0, 0.0, 0.0, 1.0],
    ]);
    orientation * translation(-from.x(), -from.y(), -from.z())
}

/// Local-to-world transform with its inverse and inverse transpose computed once.
#[derive(Clone, Debug)]
pub struct Transform {
    l2w: Matrix,
    w2l: Matrix,
    w2l_t: Matrix,
}

impl Transform {
    pub fn new(l2w: Matrix) -> Self {
        let w2l = l2w.inverse();
        let w2l_t = w2l.transpose();
        Transform { l2w, w2l, w2l_t }
    }

    pub fn try_new(l2w: Matrix) -> Result<Self> {
        let w2l = l2w.try_inverse()?;
        let w2l_t = w2l.transpose();
        Ok(Transform { l2w, w2l, w2l_t })
    }

    //local to world
    pub fn l2w(&self) -> &Matrix {
        &self.l2w
    }

    //world to local
    pub fn w2l(&self) -> &Matrix {
        &self.w2l
    }

    //carries local normals to the parent frame
    pub fn w2l_t(&self) -> &Matrix {
        &self.w2l_t
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            l2w: Matrix::identity(4),
            w2l: Matrix::identity(4),
            w2l_t: Matrix::identity(4),
        }
    }
}

impl From<Matrix> for Transform {
    fn from(m: Matrix) -> Self {
        Transform::new(m)
    }
}
