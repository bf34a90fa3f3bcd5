use crate::intersection::{self, Computations, Intersection};
use crate::light::PointLight;
use crate::material::Material;
use crate::math::scaling;
use crate::object::{Object, ObjectArena, ObjectId};
use crate::shape::shapes::Sphere;
use crate::*;

/// Recursion budget for reflected and refracted rays.
pub const DEFAULT_DEPTH: usize = 5;

#[derive(Debug, Default)]
pub struct World {
    objects: ObjectArena,
    roots: Vec<ObjectId>,
    light: Option<PointLight>,
    fresnel: bool,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two concentric spheres lit from the upper left.
    pub fn default_world() -> Self {
        let mut world = World::new();
        world.set_light(PointLight::new(
            Tuple::point(-10.0, 10.0, -10.0),
            RGB::white(),
        ));
        world.add(
            Object::new(Sphere).with_material(
                Material::default()
                    .with_color(RGB::new(0.8, 1.0, 0.6))
                    .with_diffuse(0.7)
                    .with_specular(0.2),
            ),
        );
        world.add(Object::new(Sphere).with_transform(scaling(0.5, 0.5, 0.5)));
        world
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.light = Some(light);
    }

    pub fn light(&self) -> Option<&PointLight> {
        self.light.as_ref()
    }

    /// Blend reflection and refraction by Schlick reflectance on surfaces that have both.
    pub fn set_fresnel(&mut self, fresnel: bool) {
        self.fresnel = fresnel;
    }

    pub fn fresnel(&self) -> bool {
        self.fresnel
    }

    pub fn add(&mut self, object: Object) -> ObjectId {
        let id = self.objects.insert(object);
        self.roots.push(id);
        id
    }

    pub fn add_child(&mut self, group: ObjectId, object: Object) -> Result<ObjectId> {
        self.objects.insert_child(group, object)
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    pub fn objects(&self) -> &ObjectArena {
        &self.objects
    }

    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        let mut xs = vec![];
        for &id in self.roots.iter() {
            self.objects.intersect_into(id, ray, &mut xs);
        }
        intersection::sort(&mut xs);
        xs
    }

    pub fn is_shadowed(&self, point: &Tuple) -> bool {
        let light = match &self.light {
            Some(light) => light,
            None => return false,
        };
        let v = light.position - *point;
        let distance = v.magnitude();
        let ray = Ray::new(*point, v.normalize());
        let xs = self.intersect(&ray);
        intersection::hit(&xs).map_or(false, |h| h.t < distance)
    }

    pub fn shade_hit(&self, comps: &Computations, depth: usize) -> Result<RGB> {
        let object = &self.objects[comps.object];
        let material = &object.material;
        let surface = match &self.light {
            Some(light) => material.lighting(
                &self.objects,
                comps.object,
                light,
                &comps.over_point,
                &comps.eyev,
                &comps.normalv,
                self.is_shadowed(&comps.over_point),
            ),
            None => RGB::black(),
        };
        let reflected = self.reflected_color(comps, depth)?;
        let refracted = self.refracted_color(comps, depth)?;

        if self.fresnel && material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = comps.schlick();
            Ok(surface + reflected * reflectance + refracted * (1.0 - reflectance))
        } else {
            Ok(surface + reflected + refracted)
        }
    }

    pub fn reflected_color(&self, comps: &Computations, depth: usize) -> Result<RGB> {
        let reflective = self.objects[comps.object].material.reflective;
        if depth == 0 || reflective == 0.0 {
            return Ok(RGB::black());
        }
        let ray = Ray::new(comps.over_point, comps.reflectv);
        Ok(self.color_at(&ray, depth - 1)? * reflective)
    }

    pub fn refracted_color(&self, comps: &Computations, depth: usize) -> Result<RGB> {
        let transparency = self.objects[comps.object].material.transparency;
        if depth == 0 || transparency == 0.0 {
            return Ok(RGB::black());
        }
        //snell's law
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eyev.dot(&comps.normalv);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            //total internal reflection
            return Ok(RGB::black());
        }
        let cos_t = (1.0 - sin2_t).sqrt();
        let dir = comps.normalv * (n_ratio * cos_i - cos_t) - comps.eyev * n_ratio;
        let ray = Ray::new(comps.under_point, dir);
        Ok(self.color_at(&ray, depth - 1)? * transparency)
    }

    pub fn color_at(&self, ray: &Ray, depth: usize) -> Result<RGB> {
        let xs = self.intersect(ray);
        match intersection::hit(&xs) {
            Some(hit) => {
                let comps = Computations::prepare(hit, ray, &xs, &self.objects)?;
                self.shade_hit(&comps, depth)
            }
            None => Ok(RGB::black()),
        }
    }
}
