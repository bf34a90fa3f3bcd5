use crate::*;

#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: Tuple,
    pub dir: Tuple,
}

impl Ray {
    pub fn new(origin: Tuple, dir: Tuple) -> Self {
        Ray { origin, dir }
    }

    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.dir * t
    }

    pub fn transform(&self, m: &Matrix) -> Self {
        Ray {
            origin: m * self.origin,
            dir: m * self.dir,
        }
    }
}
