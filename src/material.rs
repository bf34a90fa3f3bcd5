use crate::light::PointLight;
use crate::object::{ObjectArena, ObjectId};
use crate::pattern::Pattern;
use crate::*;

/// Phong surface description plus the reflect/refract coefficients used by the world.
#[derive(Clone, Debug)]
pub struct Material {
    pub color: RGB,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflective: f64,
    pub transparency: f64,
    pub refractive_index: f64,
    pub pattern: Option<Pattern>,
}

pub mod refractive_index {
    pub const VACUUM: f64 = 1.0;
    pub const AIR: f64 = 1.00029;
    pub const WATER: f64 = 1.333;
    pub const GLASS: f64 = 1.5;
    pub const DIAMOND: f64 = 2.417;
}

impl Default for Material {
    fn default() -> Self {
        Material {
            color: RGB::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: refractive_index::VACUUM,
            pattern: None,
        }
    }
}

impl Material {
    pub fn glass() -> Self {
        Material {
            transparency: 1.0,
            refractive_index: refractive_index::GLASS,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: RGB) -> Self {
        self.color = color;
        self
    }
    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = ambient;
        self
    }
    pub fn with_diffuse(mut self, diffuse: f64) -> Self {
        self.diffuse = diffuse;
        self
    }
    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = specular;
        self
    }
    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }
    pub fn with_reflective(mut self, reflective: f64) -> Self {
        self.reflective = reflective;
        self
    }
    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }
    pub fn with_refractive_index(mut self, refractive_index: f64) -> Self {
        self.refractive_index = refractive_index;
        self
    }
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Surface color of object `id` at a world-space `point`.
    /// The point is only carried into object space when a pattern needs it.
    pub fn color_at(&self, objects: &ObjectArena, id: ObjectId, point: &Tuple) -> RGB {
        match &self.pattern {
            Some(pattern) => pattern.pattern_at_shape(objects, id, point),
            None => self.color,
        }
    }

    /// Phong reflection of `light` at `point`; only the ambient term survives in shadow.
    pub fn lighting(
        &self,
        objects: &ObjectArena,
        id: ObjectId,
        light: &PointLight,
        point: &Tuple,
        eyev: &Tuple,
        normalv: &Tuple,
        in_shadow: bool,
    ) -> RGB {
        let effective = self.color_at(objects, id, point) * light.intensity;
        let ambient = effective * self.ambient;
        if in_shadow {
            return ambient;
        }

        let lightv = (light.position - *point).normalize();
        let light_dot_normal = lightv.dot(normalv);
        if light_dot_normal < 0.0 {
            //light is on the other side of the surface
            return ambient;
        }
        let diffuse = effective * self.diffuse * light_dot_normal;

        let reflectv = (-lightv).reflect(normalv);
        let reflect_dot_eye = reflectv.dot(eyev);
        let specular = if reflect_dot_eye <= 0.0 {
            RGB::black()
        } else {
            light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
        };
        ambient + diffuse + specular
    }
}
