use crate::intersection::{self, Intersection};
use crate::math::EPSILON;
use crate::object::{ObjectArena, ObjectId};
use crate::*;

trait ShapeImpl {
    //pushes object-space hits of `ray`; ordering is fixed up by the caller
    fn local_intersect(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>);
    fn local_normal_at(&self, p: &Tuple) -> Tuple;
}

pub mod shapes {
    use super::*;

    /// Unit sphere at the origin.
    #[derive(Debug, Default)]
    pub struct Sphere;

    impl ShapeImpl for Sphere {
        fn local_intersect(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            let sphere_to_ray = ray.origin - Tuple::origin();
            let a = ray.dir.dot(&ray.dir);
            let b = 2.0 * ray.dir.dot(&sphere_to_ray);
            let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;
            let discriminant = b * b - 4.0 * a * c;
            if discriminant < 0.0 {
                return;
            }
            let sqrt_d = discriminant.sqrt();
            xs.push(Intersection::new((-b - sqrt_d) / (2.0 * a), id));
            xs.push(Intersection::new((-b + sqrt_d) / (2.0 * a), id));
        }

        fn local_normal_at(&self, p: &Tuple) -> Tuple {
            *p - Tuple::origin()
        }
    }

    /// The xz plane, y = 0.
    #[derive(Debug, Default)]
    pub struct Plane;

    impl ShapeImpl for Plane {
        fn local_intersect(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            if ray.dir.y().abs() < EPSILON {
                return;
            }
            xs.push(Intersection::new(-ray.origin.y() / ray.dir.y(), id));
        }

        fn local_normal_at(&self, _p: &Tuple) -> Tuple {
            Tuple::vector(0.0, 1.0, 0.0)
        }
    }

    /// Axis aligned cube spanning -1..1 on every axis.
    #[derive(Debug, Default)]
    pub struct Cube;

    impl Cube {
        fn check_axis(origin: f64, dir: f64) -> (f64, f64) {
            let tmin_numerator = -1.0 - origin;
            let tmax_numerator = 1.0 - origin;
            let (tmin, tmax) = if dir.abs() >= EPSILON {
                (tmin_numerator / dir, tmax_numerator / dir)
            } else {
                (
                    tmin_numerator * std::f64::INFINITY,
                    tmax_numerator * std::f64::INFINITY,
                )
            };
            if tmin > tmax {
                (tmax, tmin)
            } else {
                (tmin, tmax)
            }
        }
    }

    impl ShapeImpl for Cube {
        fn local_intersect(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            let (xtmin, xtmax) = Self::check_axis(ray.origin.x(), ray.dir.x());
            let (ytmin, ytmax) = Self::check_axis(ray.origin.y(), ray.dir.y());
            let (ztmin, ztmax) = Self::check_axis(ray.origin.z(), ray.dir.z());

            let tmin = xtmin.max(ytmin).max(ztmin);
            let tmax = xtmax.min(ytmax).min(ztmax);
            if tmin > tmax {
                return;
            }
            xs.push(Intersection::new(tmin, id));
            xs.push(Intersection::new(tmax, id));
        }

        fn local_normal_at(&self, p: &Tuple) -> Tuple {
            let ax = p.x().abs();
            let ay = p.y().abs();
            let az = p.z().abs();
            let maxc = ax.max(ay).max(az);
            if maxc == ax {
                Tuple::vector(p.x(), 0.0, 0.0)
            } else if maxc == ay {
                Tuple::vector(0.0, p.y(), 0.0)
            } else {
                Tuple::vector(0.0, 0.0, p.z())
            }
        }
    }

    //true when (x, z) at parameter t lies within `radius` of the y axis
    fn check_cap(ray: &Ray, t: f64, radius: f64) -> bool {
        let x = ray.origin.x() + t * ray.dir.x();
        let z = ray.origin.z() + t * ray.dir.z();
        x * x + z * z <= radius * radius
    }

    /// Unit radius cylinder around the y axis, cut at `minimum < y < maximum`.
    #[derive(Debug)]
    pub struct Cylinder {
        pub minimum: f64,
        pub maximum: f64,
        pub closed: bool,
    }

    impl Default for Cylinder {
        fn default() -> Self {
            Cylinder {
                minimum: std::f64::NEG_INFINITY,
                maximum: std::f64::INFINITY,
                closed: false,
            }
        }
    }

    impl Cylinder {
        pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
            Cylinder {
                minimum,
                maximum,
                closed,
            }
        }

        fn in_range(&self, y: f64) -> bool {
            self.minimum < y && y < self.maximum
        }

        fn intersect_caps(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            if !self.closed || ray.dir.y().abs() < EPSILON {
                return;
            }
            for &cap in [self.minimum, self.maximum].iter() {
                let t = (cap - ray.origin.y()) / ray.dir.y();
                if check_cap(ray, t, 1.0) {
                    xs.push(Intersection::new(t, id));
                }
            }
        }
    }

    impl ShapeImpl for Cylinder {
        fn local_intersect(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            let a = ray.dir.x() * ray.dir.x() + ray.dir.z() * ray.dir.z();
            //parallel to the y axis: only the caps can be hit
            if a.abs() >= EPSILON {
                let b = 2.0 * (ray.origin.x() * ray.dir.x() + ray.origin.z() * ray.dir.z());
                let c = ray.origin.x() * ray.origin.x() + ray.origin.z() * ray.origin.z() - 1.0;
                let discriminant = b * b - 4.0 * a * c;
                if discriminant < 0.0 {
                    return;
                }
                let sqrt_d = discriminant.sqrt();
                let t0 = (-b - sqrt_d) / (2.0 * a);
                let t1 = (-b + sqrt_d) / (2.0 * a);
                for &t in [t0.min(t1), t0.max(t1)].iter() {
                    if self.in_range(ray.origin.y() + t * ray.dir.y()) {
                        xs.push(Intersection::new(t, id));
                    }
                }
            }
            self.intersect_caps(ray, id, xs);
        }

        fn local_normal_at(&self, p: &Tuple) -> Tuple {
            let dist = p.x() * p.x() + p.z() * p.z();
            if dist < 1.0 && p.y() >= self.maximum - EPSILON {
                Tuple::vector(0.0, 1.0, 0.0)
            } else if dist < 1.0 && p.y() <= self.minimum + EPSILON {
                Tuple::vector(0.0, -1.0, 0.0)
            } else {
                Tuple::vector(p.x(), 0.0, p.z())
            }
        }
    }

    /// Double napped cone x^2 + z^2 = y^2, cut like `Cylinder`.
    #[derive(Debug)]
    pub struct Cone {
        pub minimum: f64,
        pub maximum: f64,
        pub closed: bool,
    }

    impl Default for Cone {
        fn default() -> Self {
            Cone {
                minimum: std::f64::NEG_INFINITY,
                maximum: std::f64::INFINITY,
                closed: false,
            }
        }
    }

    impl Cone {
        pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
            Cone {
                minimum,
                maximum,
                closed,
            }
        }

        fn in_range(&self, y: f64) -> bool {
            self.minimum < y && y < self.maximum
        }

        fn intersect_caps(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            if !self.closed || ray.dir.y().abs() < EPSILON {
                return;
            }
            for &cap in [self.minimum, self.maximum].iter() {
                let t = (cap - ray.origin.y()) / ray.dir.y();
                //radius of a cone slice is |y|
                if check_cap(ray, t, cap.abs()) {
                    xs.push(Intersection::new(t, id));
                }
            }
        }
    }

    impl ShapeImpl for Cone {
        fn local_intersect(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            let (o, d) = (&ray.origin, &ray.dir);
            let a = d.x() * d.x() - d.y() * d.y() + d.z() * d.z();
            let b = 2.0 * (o.x() * d.x() - o.y() * d.y() + o.z() * d.z());
            let c = o.x() * o.x() - o.y() * o.y() + o.z() * o.z();

            if a.abs() < EPSILON {
                //parallel to one slope: at most one hit on the other nappe
                if b.abs() >= EPSILON {
                    let t = -c / (2.0 * b);
                    if self.in_range(o.y() + t * d.y()) {
                        xs.push(Intersection::new(t, id));
                    }
                }
            } else {
                let discriminant = b * b - 4.0 * a * c;
                if discriminant < 0.0 {
                    return;
                }
                let sqrt_d = discriminant.sqrt();
                let t0 = (-b - sqrt_d) / (2.0 * a);
                let t1 = (-b + sqrt_d) / (2.0 * a);
                for &t in [t0.min(t1), t0.max(t1)].iter() {
                    if self.in_range(o.y() + t * d.y()) {
                        xs.push(Intersection::new(t, id));
                    }
                }
            }
            self.intersect_caps(ray, id, xs);
        }

        fn local_normal_at(&self, p: &Tuple) -> Tuple {
            let dist = p.x() * p.x() + p.z() * p.z();
            if dist < self.maximum * self.maximum && p.y() >= self.maximum - EPSILON {
                return Tuple::vector(0.0, 1.0, 0.0);
            }
            if dist < self.minimum * self.minimum && p.y() <= self.minimum + EPSILON {
                return Tuple::vector(0.0, -1.0, 0.0);
            }
            let y = dist.sqrt();
            let y = if p.y() > 0.0 { -y } else { y };
            Tuple::vector(p.x(), y, p.z())
        }
    }

    #[derive(Debug)]
    pub struct Triangle {
        p1: Tuple,
        p2: Tuple,
        p3: Tuple,
        e1: Tuple,
        e2: Tuple,
        normal: Tuple,
    }

    impl Triangle {
        pub fn new(p1: Tuple, p2: Tuple, p3: Tuple) -> Self {
            let e1 = p2 - p1;
            let e2 = p3 - p1;
            let normal = e2.cross(&e1).normalize();
            Triangle {
                p1,
                p2,
                p3,
                e1,
                e2,
                normal,
            }
        }

        pub fn vertices(&self) -> [Tuple; 3] {
            [self.p1, self.p2, self.p3]
        }

        pub fn edges(&self) -> (Tuple, Tuple) {
            (self.e1, self.e2)
        }

        pub fn normal(&self) -> Tuple {
            self.normal
        }
    }

    impl ShapeImpl for Triangle {
        //moller-trumbore
        fn local_intersect(&self, ray: &Ray, id: ObjectId, xs: &mut Vec<Intersection>) {
            let dir_cross_e2 = ray.dir.cross(&self.e2);
            let det = self.e1.dot(&dir_cross_e2);
            if det.abs() < EPSILON {
                return;
            }
            let f = 1.0 / det;
            let p1_to_origin = ray.origin - self.p1;
            let u = f * p1_to_origin.dot(&dir_cross_e2);
            if u < 0.0 || u > 1.0 {
                return;
            }
            let origin_cross_e1 = p1_to_origin.cross(&self.e1);
            let v = f * ray.dir.dot(&origin_cross_e1);
            if v < 0.0 || u + v > 1.0 {
                return;
            }
            xs.push(Intersection::new(f * self.e2.dot(&origin_cross_e1), id));
        }

        fn local_normal_at(&self, _p: &Tuple) -> Tuple {
            self.normal
        }
    }

    /// Owns its children through the arena; children point back via `Object::parent`.
    #[derive(Debug, Default)]
    pub struct Group {
        children: Vec<ObjectId>,
    }

    impl Group {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn children(&self) -> &[ObjectId] {
            &self.children
        }

        pub(crate) fn push_child(&mut self, child: ObjectId) {
            self.children.push(child);
        }

        pub(crate) fn local_intersect(
            &self,
            objects: &ObjectArena,
            ray: &Ray,
            xs: &mut Vec<Intersection>,
        ) {
            for &child in self.children.iter() {
                objects.intersect_into(child, ray, xs);
            }
        }
    }
}

#[derive(Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
    Plane(shapes::Plane),
    Cube(shapes::Cube),
    Cylinder(shapes::Cylinder),
    Cone(shapes::Cone),
    Triangle(shapes::Triangle),
    Group(shapes::Group),
}

impl_wrap_from_many! {Shape, shapes, [Sphere, Plane, Cube, Cylinder, Cone, Triangle, Group]}

impl Shape {
    /// Appends the hits of an object-space `ray`, ascending by t; groups recurse into their children.
    pub fn local_intersect(
        &self,
        objects: &ObjectArena,
        id: ObjectId,
        ray: &Ray,
        xs: &mut Vec<Intersection>,
    ) {
        use Shape::*;
        let start = xs.len();
        match self {
            Sphere(s) => s.local_intersect(ray, id, xs),
            Plane(s) => s.local_intersect(ray, id, xs),
            Cube(s) => s.local_intersect(ray, id, xs),
            Cylinder(s) => s.local_intersect(ray, id, xs),
            Cone(s) => s.local_intersect(ray, id, xs),
            Triangle(s) => s.local_intersect(ray, id, xs),
            Group(g) => g.local_intersect(objects, ray, xs),
        }
        intersection::sort(&mut xs[start..]);
    }

    pub fn local_normal_at(&self, p: &Tuple) -> Result<Tuple> {
        use Shape::*;
        match self {
            Sphere(s) => Ok(s.local_normal_at(p)),
            Plane(s) => Ok(s.local_normal_at(p)),
            Cube(s) => Ok(s.local_normal_at(p)),
            Cylinder(s) => Ok(s.local_normal_at(p)),
            Cone(s) => Ok(s.local_normal_at(p)),
            Triangle(s) => Ok(s.local_normal_at(p)),
            Group(_) => Err(Error::InvalidOperation(
                "a group has no surface; its local normal must never be requested",
            )),
        }
    }

    pub fn as_group(&self) -> Option<&shapes::Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    pub(crate) fn as_group_mut(&mut self) -> Option<&mut shapes::Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::shapes::{Cone, Cube, Cylinder, Group, Plane, Sphere, Triangle};
    use super::*;
    use crate::object::Object;
    use approx::assert_abs_diff_eq;

    //intersects a lone shape placed at the arena root with an object-space ray
    fn local_ts<S: Into<Shape>>(shape: S, origin: Tuple, dir: Tuple) -> Vec<f64> {
        let mut objects = ObjectArena::new();
        let id = objects.insert(Object::new(shape));
        let ray = Ray::new(origin, dir);
        objects
            .intersect(id, &ray)
            .into_iter()
            .map(|i| i.t)
            .collect()
    }

    fn assert_ts(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *e, epsilon = 1e-5);
        }
    }

    fn p(x: f64, y: f64, z: f64) -> Tuple {
        Tuple::point(x, y, z)
    }
    fn v(x: f64, y: f64, z: f64) -> Tuple {
        Tuple::vector(x, y, z)
    }

    #[test]
    fn sphere_hits() {
        assert_ts(&local_ts(Sphere, p(0.0, 0.0, -5.0), v(0.0, 0.0, 1.0)), &[4.0, 6.0]);
        assert_ts(&local_ts(Sphere, p(0.0, 1.0, -5.0), v(0.0, 0.0, 1.0)), &[5.0, 5.0]);
        assert_ts(&local_ts(Sphere, p(0.0, 2.0, -5.0), v(0.0, 0.0, 1.0)), &[]);
        assert_ts(&local_ts(Sphere, p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)), &[-1.0, 1.0]);
        assert_ts(&local_ts(Sphere, p(0.0, 0.0, 5.0), v(0.0, 0.0, 1.0)), &[-6.0, -4.0]);
    }

    #[test]
    fn sphere_normals() {
        let s = Sphere;
        assert_eq!(s.local_normal_at(&p(1.0, 0.0, 0.0)), v(1.0, 0.0, 0.0));
        assert_eq!(s.local_normal_at(&p(0.0, 0.0, 1.0)), v(0.0, 0.0, 1.0));
        let k = 3f64.sqrt() / 3.0;
        let n = s.local_normal_at(&p(k, k, k));
        assert_eq!(n, v(k, k, k));
        assert_eq!(n, n.normalize());
    }

    #[test]
    fn plane_hits_and_normal() {
        assert_ts(&local_ts(Plane, p(0.0, 10.0, 0.0), v(0.0, 0.0, 1.0)), &[]);
        assert_ts(&local_ts(Plane, p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)), &[]);
        assert_ts(&local_ts(Plane, p(0.0, 1.0, 0.0), v(0.0, -1.0, 0.0)), &[1.0]);
        assert_ts(&local_ts(Plane, p(0.0, -1.0, 0.0), v(0.0, 1.0, 0.0)), &[1.0]);
        for pt in [p(0.0, 0.0, 0.0), p(10.0, 0.0, -10.0), p(-5.0, 0.0, 150.0)].iter() {
            assert_eq!(Plane.local_normal_at(pt), v(0.0, 1.0, 0.0));
        }
    }

    #[test]
    fn cube_hits_from_every_side() {
        let cases = [
            (p(5.0, 0.5, 0.0), v(-1.0, 0.0, 0.0), 4.0, 6.0),
            (p(-5.0, 0.5, 0.0), v(1.0, 0.0, 0.0), 4.0, 6.0),
            (p(0.5, 5.0, 0.0), v(0.0, -1.0, 0.0), 4.0, 6.0),
            (p(0.5, -5.0, 0.0), v(0.0, 1.0, 0.0), 4.0, 6.0),
            (p(0.5, 0.0, 5.0), v(0.0, 0.0, -1.0), 4.0, 6.0),
            (p(0.5, 0.0, -5.0), v(0.0, 0.0, 1.0), 4.0, 6.0),
            (p(0.0, 0.5, 0.0), v(0.0, 0.0, 1.0), -1.0, 1.0),
        ];
        for (origin, dir, t1, t2) in cases.iter() {
            assert_ts(&local_ts(Cube, *origin, *dir), &[*t1, *t2]);
        }
    }

    #[test]
    fn cube_misses() {
        let cases = [
            (p(-2.0, 0.0, 0.0), v(0.2673, 0.5345, 0.8018)),
            (p(0.0, -2.0, 0.0), v(0.8018, 0.2673, 0.5345)),
            (p(0.0, 0.0, -2.0), v(0.5345, 0.8018, 0.2673)),
            (p(2.0, 0.0, 2.0), v(0.0, 0.0, -1.0)),
            (p(0.0, 2.0, 2.0), v(0.0, -1.0, 0.0)),
            (p(2.0, 2.0, 0.0), v(-1.0, 0.0, 0.0)),
        ];
        for (origin, dir) in cases.iter() {
            assert_ts(&local_ts(Cube, *origin, *dir), &[]);
        }
    }

    #[test]
    fn cube_normals() {
        let cases = [
            (p(1.0, 0.5, -0.8), v(1.0, 0.0, 0.0)),
            (p(-1.0, -0.2, 0.9), v(-1.0, 0.0, 0.0)),
            (p(-0.4, 1.0, -0.1), v(0.0, 1.0, 0.0)),
            (p(0.3, -1.0, -0.7), v(0.0, -1.0, 0.0)),
            (p(-0.6, 0.3, 1.0), v(0.0, 0.0, 1.0)),
            (p(0.4, 0.4, -1.0), v(0.0, 0.0, -1.0)),
            (p(1.0, 1.0, 1.0), v(1.0, 0.0, 0.0)),
            (p(-1.0, -1.0, -1.0), v(-1.0, 0.0, 0.0)),
        ];
        for (pt, n) in cases.iter() {
            assert_eq!(Cube.local_normal_at(pt), *n);
        }
    }

    #[test]
    fn cylinder_misses_and_hits() {
        let misses = [
            (p(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)),
            (p(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0)),
            (p(0.0, 0.0, -5.0), v(1.0, 1.0, 1.0)),
        ];
        for (origin, dir) in misses.iter() {
            assert_ts(&local_ts(Cylinder::default(), *origin, dir.normalize()), &[]);
        }
        let hits = [
            (p(1.0, 0.0, -5.0), v(0.0, 0.0, 1.0), 5.0, 5.0),
            (p(0.0, 0.0, -5.0), v(0.0, 0.0, 1.0), 4.0, 6.0),
            (p(0.5, 0.0, -5.0), v(0.1, 1.0, 1.0), 6.80798, 7.08872),
        ];
        for (origin, dir, t0, t1) in hits.iter() {
            assert_ts(
                &local_ts(Cylinder::default(), *origin, dir.normalize()),
                &[*t0, *t1],
            );
        }
    }

    #[test]
    fn truncated_cylinder_bounds_are_exclusive() {
        let cases = [
            (p(0.0, 1.5, 0.0), v(0.1, 1.0, 0.0), 0),
            (p(0.0, 3.0, -5.0), v(0.0, 0.0, 1.0), 0),
            (p(0.0, 0.0, -5.0), v(0.0, 0.0, 1.0), 0),
            (p(0.0, 2.0, -5.0), v(0.0, 0.0, 1.0), 0),
            (p(0.0, 1.0, -5.0), v(0.0, 0.0, 1.0), 0),
            (p(0.0, 1.5, -2.0), v(0.0, 0.0, 1.0), 2),
        ];
        for (origin, dir, count) in cases.iter() {
            let ts = local_ts(Cylinder::new(1.0, 2.0, false), *origin, dir.normalize());
            assert_eq!(ts.len(), *count, "{:?} {:?}", origin, dir);
        }
    }

    #[test]
    fn capped_cylinder() {
        let cases = [
            (p(0.0, 3.0, 0.0), v(0.0, -1.0, 0.0)),
            (p(0.0, 3.0, -2.0), v(0.0, -1.0, 2.0)),
            (p(0.0, 4.0, -2.0), v(0.0, -1.0, 1.0)),
            (p(0.0, 0.0, -2.0), v(0.0, 1.0, 2.0)),
            (p(0.0, -1.0, -2.0), v(0.0, 1.0, 1.0)),
        ];
        for (origin, dir) in cases.iter() {
            let ts = local_ts(Cylinder::new(1.0, 2.0, true), *origin, dir.normalize());
            assert_eq!(ts.len(), 2, "{:?} {:?}", origin, dir);
            assert!(ts[0] <= ts[1]);
        }
    }

    #[test]
    fn cylinder_normals() {
        let open = Cylinder::default();
        assert_eq!(open.local_normal_at(&p(1.0, 0.0, 0.0)), v(1.0, 0.0, 0.0));
        assert_eq!(open.local_normal_at(&p(0.0, 5.0, -1.0)), v(0.0, 0.0, -1.0));
        assert_eq!(open.local_normal_at(&p(0.0, -2.0, 1.0)), v(0.0, 0.0, 1.0));
        assert_eq!(open.local_normal_at(&p(-1.0, 1.0, 0.0)), v(-1.0, 0.0, 0.0));

        let capped = Cylinder::new(1.0, 2.0, true);
        assert_eq!(capped.local_normal_at(&p(0.0, 1.0, 0.0)), v(0.0, -1.0, 0.0));
        assert_eq!(capped.local_normal_at(&p(0.5, 1.0, 0.0)), v(0.0, -1.0, 0.0));
        assert_eq!(capped.local_normal_at(&p(0.0, 1.0, 0.5)), v(0.0, -1.0, 0.0));
        assert_eq!(capped.local_normal_at(&p(0.0, 2.0, 0.0)), v(0.0, 1.0, 0.0));
        assert_eq!(capped.local_normal_at(&p(0.5, 2.0, 0.0)), v(0.0, 1.0, 0.0));
        assert_eq!(capped.local_normal_at(&p(0.0, 2.0, 0.5)), v(0.0, 1.0, 0.0));
    }

    #[test]
    fn cone_hits() {
        let cases = [
            (p(0.0, 0.0, -5.0), v(0.0, 0.0, 1.0), 5.0, 5.0),
            (p(0.0, 0.0, -5.0), v(1.0, 1.0, 1.0), 8.66025, 8.66025),
            (p(1.0, 1.0, -5.0), v(-0.5, -1.0, 1.0), 4.55006, 49.44994),
        ];
        for (origin, dir, t0, t1) in cases.iter() {
            assert_ts(&local_ts(Cone::default(), *origin, dir.normalize()), &[*t0, *t1]);
        }
    }

    #[test]
    fn cone_ray_parallel_to_a_slope() {
        let ts = local_ts(
            Cone::default(),
            p(0.0, 0.0, -1.0),
            v(0.0, 1.0, 1.0).normalize(),
        );
        assert_ts(&ts, &[0.35355]);
    }

    #[test]
    fn cone_caps() {
        let cases = [
            (p(0.0, 0.0, -5.0), v(0.0, 1.0, 0.0), 0),
            (p(0.0, 0.0, -0.25), v(0.0, 1.0, 1.0), 2),
            (p(0.0, 0.0, -0.25), v(0.0, 1.0, 0.0), 4),
        ];
        for (origin, dir, count) in cases.iter() {
            let ts = local_ts(Cone::new(-0.5, 0.5, true), *origin, dir.normalize());
            assert_eq!(ts.len(), *count, "{:?} {:?}", origin, dir);
        }
    }

    #[test]
    fn cone_normals() {
        let c = Cone::default();
        assert_eq!(c.local_normal_at(&p(0.0, 0.0, 0.0)), v(0.0, 0.0, 0.0));
        assert_eq!(
            c.local_normal_at(&p(1.0, 1.0, 1.0)),
            v(1.0, -(2f64.sqrt()), 1.0)
        );
        assert_eq!(c.local_normal_at(&p(-1.0, -1.0, 0.0)), v(-1.0, 1.0, 0.0));

        let capped = Cone::new(-1.0, 1.0, true);
        assert_eq!(capped.local_normal_at(&p(0.2, 1.0, 0.3)), v(0.0, 1.0, 0.0));
        assert_eq!(capped.local_normal_at(&p(0.2, -1.0, 0.3)), v(0.0, -1.0, 0.0));
    }

    fn triangle() -> Triangle {
        Triangle::new(p(0.0, 1.0, 0.0), p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0))
    }

    #[test]
    fn triangle_precomputes_edges_and_normal() {
        let t = triangle();
        let (e1, e2) = t.edges();
        assert_eq!(e1, v(-1.0, -1.0, 0.0));
        assert_eq!(e2, v(1.0, -1.0, 0.0));
        assert_eq!(t.normal(), v(0.0, 0.0, -1.0));
        assert_eq!(t.vertices()[0], p(0.0, 1.0, 0.0));
        for pt in [p(0.0, 0.5, 0.0), p(-0.5, 0.75, 0.0), p(0.5, 0.25, 0.0)].iter() {
            assert_eq!(t.local_normal_at(pt), t.normal());
        }
    }

    #[test]
    fn triangle_misses_outside_edges() {
        let cases = [
            (p(0.0, -1.0, -2.0), v(0.0, 1.0, 0.0)),
            (p(1.0, 1.0, -2.0), v(0.0, 0.0, 1.0)),
            (p(-1.0, 1.0, -2.0), v(0.0, 0.0, 1.0)),
            (p(0.0, -1.0, -2.0), v(0.0, 0.0, 1.0)),
        ];
        for (origin, dir) in cases.iter() {
            assert_ts(&local_ts(triangle(), *origin, *dir), &[]);
        }
        assert_ts(
            &local_ts(triangle(), p(0.0, 0.5, -2.0), v(0.0, 0.0, 1.0)),
            &[2.0],
        );
    }

    #[test]
    fn group_has_no_local_normal() {
        let g: Shape = Group::new().into();
        match g.local_normal_at(&p(0.0, 0.0, 0.0)) {
            Err(Error::InvalidOperation(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(g.as_group().is_some());
        assert!(Shape::from(Sphere).as_group().is_none());
    }

    //calls the shape's own local intersect, bypassing the arena's world-space entry point
    fn direct_ts(objects: &ObjectArena, id: ObjectId, origin: Tuple, dir: Tuple) -> Vec<f64> {
        let mut xs = vec![];
        objects[id]
            .shape()
            .local_intersect(objects, id, &Ray::new(origin, dir), &mut xs);
        xs.into_iter().map(|i| i.t).collect()
    }

    #[test]
    fn caps_only_hits_come_back_ascending() {
        let mut objects = ObjectArena::new();
        let id = objects.insert(Object::new(Cylinder::new(1.0, 2.0, true)));
        let ts = direct_ts(&objects, id, p(0.0, 3.0, 0.0), v(0.0, -1.0, 0.0));
        assert_ts(&ts, &[1.0, 2.0]);

        let id = objects.insert(Object::new(Cone::new(-0.5, 0.5, true)));
        let ts = direct_ts(&objects, id, p(0.0, 0.0, -0.25), v(0.0, 1.0, 0.0));
        assert_eq!(ts.len(), 4);
        assert!(ts.windows(2).all(|w| w[0] <= w[1]), "{:?}", ts);
    }

    #[test]
    fn group_merges_children_ascending() {
        let mut objects = ObjectArena::new();
        let g = objects.insert(Object::new(Group::new()));
        objects.insert_child(g, Object::new(Sphere)).unwrap();
        objects
            .insert_child(
                g,
                Object::new(Sphere).with_transform(crate::math::translation(0.0, 0.0, -3.0)),
            )
            .unwrap();
        let ts = direct_ts(&objects, g, p(0.0, 0.0, -5.0), v(0.0, 0.0, 1.0));
        assert_ts(&ts, &[1.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn appended_hits_leave_earlier_entries_alone() {
        let mut objects = ObjectArena::new();
        let id = objects.insert(Object::new(Sphere));
        let mut xs = vec![Intersection::new(100.0, id)];
        objects[id].shape().local_intersect(
            &objects,
            id,
            &Ray::new(p(0.0, 0.0, -5.0), v(0.0, 0.0, 1.0)),
            &mut xs,
        );
        let ts: Vec<f64> = xs.iter().map(|i| i.t).collect();
        assert_eq!(ts, vec![100.0, 4.0, 6.0]);
    }
}
