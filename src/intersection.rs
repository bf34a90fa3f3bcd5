use crate::math::EPSILON;
use crate::object::{ObjectArena, ObjectId};
use crate::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub t: f64,
    pub object: ObjectId,
}

impl Intersection {
    pub fn new(t: f64, object: ObjectId) -> Self {
        Intersection { t, object }
    }
}

pub fn sort(xs: &mut [Intersection]) {
    xs.sort_by(|a, b| a.t.total_cmp(&b.t));
}

/// Nearest intersection in front of the ray origin. `xs` does not need to be sorted.
pub fn hit(xs: &[Intersection]) -> Option<&Intersection> {
    xs.iter()
        .filter(|i| i.t >= 0.0)
        .min_by(|a, b| a.t.total_cmp(&b.t))
}

/// Shading data for a single hit.
#[derive(Clone, Debug)]
pub struct Computations {
    pub t: f64,
    pub object: ObjectId,
    pub point: Tuple,
    pub over_point: Tuple,
    pub under_point: Tuple,
    pub eyev: Tuple,
    pub normalv: Tuple,
    pub reflectv: Tuple,
    pub inside: bool,
    pub n1: f64,
    pub n2: f64,
}

impl Computations {
    /// `hit` must be one of `xs`, which must be sorted; the refractive indices are
    /// found by replaying `xs` up to the hit.
    pub fn prepare(
        hit: &Intersection,
        ray: &Ray,
        xs: &[Intersection],
        objects: &ObjectArena,
    ) -> Result<Self> {
        let point = ray.position(hit.t);
        let eyev = -ray.dir;
        let mut normalv = objects.normal_at(hit.object, &point)?;
        let inside = normalv.dot(&eyev) < 0.0;
        if inside {
            normalv = -normalv;
        }
        let reflectv = ray.dir.reflect(&normalv);
        let (n1, n2) = refractive_indices(hit, xs, objects);

        Ok(Computations {
            t: hit.t,
            object: hit.object,
            point,
            over_point: point + normalv * EPSILON,
            under_point: point - normalv * EPSILON,
            eyev,
            normalv,
            reflectv,
            inside,
            n1,
            n2,
        })
    }

    /// Schlick's approximation of the fraction of light reflected at this hit.
    pub fn schlick(&self) -> f64 {
        let mut cos = self.eyev.dot(&self.normalv);
        if self.n1 > self.n2 {
            let n = self.n1 / self.n2;
            let sin2_t = n * n * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                //total internal reflection
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }
        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}

//n1 is the medium being left, n2 the one being entered
fn refractive_indices(hit: &Intersection, xs: &[Intersection], objects: &ObjectArena) -> (f64, f64) {
    let index_of = |containers: &Vec<ObjectId>| {
        containers
            .last()
            .map_or(1.0, |id| objects[*id].material.refractive_index)
    };
    let mut containers: Vec<ObjectId> = vec![];
    let mut n1 = 1.0;
    for i in xs.iter() {
        let is_hit = i == hit;
        if is_hit {
            n1 = index_of(&containers);
        }
        match containers.iter().position(|o| *o == i.object) {
            Some(pos) => {
                containers.remove(pos);
            }
            None => containers.push(i.object),
        }
        if is_hit {
            return (n1, index_of(&containers));
        }
    }
    (n1, 1.0)
}
