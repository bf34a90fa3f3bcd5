use crate::math::Transform;
use crate::object::{ObjectArena, ObjectId};
use crate::*;

trait PatternImpl {
    fn pattern_at(&self, p: &Tuple) -> RGB;
}

fn is_even(x: f64) -> bool {
    (x as i64).rem_euclid(2) == 0
}

pub mod patterns {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Stripe {
        pub a: RGB,
        pub b: RGB,
    }

    impl PatternImpl for Stripe {
        fn pattern_at(&self, p: &Tuple) -> RGB {
            if is_even(p.x().floor()) {
                self.a
            } else {
                self.b
            }
        }
    }

    #[derive(Clone, Debug)]
    pub struct Gradient {
        pub a: RGB,
        pub b: RGB,
    }

    impl PatternImpl for Gradient {
        fn pattern_at(&self, p: &Tuple) -> RGB {
            let fraction = p.x() - p.x().floor();
            self.a + (self.b - self.a) * fraction
        }
    }

    #[derive(Clone, Debug)]
    pub struct Ring {
        pub a: RGB,
        pub b: RGB,
    }

    impl PatternImpl for Ring {
        fn pattern_at(&self, p: &Tuple) -> RGB {
            let r = (p.x() * p.x() + p.z() * p.z()).sqrt();
            if is_even(r.floor()) {
                self.a
            } else {
                self.b
            }
        }
    }

    #[derive(Clone, Debug)]
    pub struct Checker {
        pub a: RGB,
        pub b: RGB,
    }

    impl PatternImpl for Checker {
        fn pattern_at(&self, p: &Tuple) -> RGB {
            if is_even(p.x().floor() + p.y().floor() + p.z().floor()) {
                self.a
            } else {
                self.b
            }
        }
    }

    /// Shows the pattern-space point itself as a color.
    #[derive(Clone, Debug)]
    pub struct Position;

    impl PatternImpl for Position {
        fn pattern_at(&self, p: &Tuple) -> RGB {
            RGB::new(p.x(), p.y(), p.z())
        }
    }
}

#[derive(Clone, Debug)]
pub enum PatternKind {
    Stripe(patterns::Stripe),
    Gradient(patterns::Gradient),
    Ring(patterns::Ring),
    Checker(patterns::Checker),
    Position(patterns::Position),
}

impl_wrap_from_many! {PatternKind, patterns, [Stripe, Gradient, Ring, Checker, Position]}

#[derive(Clone, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub transform: Transform,
}

impl Pattern {
    pub fn new<K: Into<PatternKind>>(kind: K) -> Self {
        Pattern {
            kind: kind.into(),
            transform: Transform::default(),
        }
    }

    pub fn stripe(a: RGB, b: RGB) -> Self {
        Self::new(patterns::Stripe { a, b })
    }

    pub fn gradient(a: RGB, b: RGB) -> Self {
        Self::new(patterns::Gradient { a, b })
    }

    pub fn ring(a: RGB, b: RGB) -> Self {
        Self::new(patterns::Ring { a, b })
    }

    pub fn checker(a: RGB, b: RGB) -> Self {
        Self::new(patterns::Checker { a, b })
    }

    pub fn with_transform(mut self, m: Matrix) -> Self {
        self.transform = Transform::new(m);
        self
    }

    pub fn pattern_at(&self, p: &Tuple) -> RGB {
        use PatternKind::*;
        match &self.kind {
            Stripe(k) => k.pattern_at(p),
            Gradient(k) => k.pattern_at(p),
            Ring(k) => k.pattern_at(p),
            Checker(k) => k.pattern_at(p),
            Position(k) => k.pattern_at(p),
        }
    }

    pub fn pattern_at_object(&self, object_point: &Tuple) -> RGB {
        self.pattern_at(&(self.transform.w2l() * *object_point))
    }

    //world -> object (through every enclosing group) -> pattern space
    pub fn pattern_at_shape(&self, objects: &ObjectArena, id: ObjectId, world_point: &Tuple) -> RGB {
        self.pattern_at_object(&objects.world_to_object(id, world_point))
    }
}
