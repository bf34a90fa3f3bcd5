use crate::intersection::Intersection;
use crate::material::Material;
use crate::math::Transform;
use crate::shape::Shape;
use crate::*;
use std::ops::Index;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A shape placed in the scene. `transform` is relative to the parent group, if any.
#[derive(Debug)]
pub struct Object {
    shape: Shape,
    pub transform: Transform,
    pub material: Arc<Material>,
    parent: Option<ObjectId>,
}

impl Object {
    pub fn new<S: Into<Shape>>(shape: S) -> Self {
        Object {
            shape: shape.into(),
            transform: Transform::default(),
            material: Arc::new(Material::default()),
            parent: None,
        }
    }

    /// Panics if `m` is singular.
    pub fn with_transform(mut self, m: Matrix) -> Self {
        self.transform = Transform::new(m);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Arc::new(material);
        self
    }

    pub fn with_shared_material(mut self, material: Arc<Material>) -> Self {
        self.material = material;
        self
    }

    pub fn set_transform(&mut self, m: Matrix) -> Result<()> {
        self.transform = Transform::try_new(m)?;
        Ok(())
    }

    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    //read only, so a group can never lose the children that point back at it
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// Owns every object of a scene. Groups refer to their children by id and
/// children refer back to their group, so the hierarchy is a tree by construction.
#[derive(Debug, Default)]
pub struct ObjectArena {
    objects: Vec<Object>,
}

impl ObjectArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mut object: Object) -> ObjectId {
        object.parent = None;
        self.push(object)
    }

    fn push(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    pub fn insert_child(&mut self, group: ObjectId, mut object: Object) -> Result<ObjectId> {
        match self.get(group) {
            None => {
                return Err(Error::InvalidArgument(format!(
                    "no object with id {}",
                    group.index()
                )))
            }
            Some(o) if o.shape.as_group().is_none() => {
                return Err(Error::InvalidOperation(
                    "children can only be added to a group",
                ))
            }
            Some(_) => {}
        }
        object.parent = Some(group);
        let id = self.push(object);
        if let Some(g) = self.objects[group.0].shape.as_group_mut() {
            g.push_child(id);
        }
        Ok(id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Hits of a world-space `ray` (relative to the parent frame for children), sorted by t.
    pub fn intersect(&self, id: ObjectId, ray: &Ray) -> Vec<Intersection> {
        let mut xs = vec![];
        self.intersect_into(id, ray, &mut xs);
        xs
    }

    pub(crate) fn intersect_into(&self, id: ObjectId, ray: &Ray, xs: &mut Vec<Intersection>) {
        let object = &self[id];
        let local_ray = ray.transform(object.transform.w2l());
        object.shape.local_intersect(self, id, &local_ray, xs);
    }

    pub fn world_to_object(&self, id: ObjectId, point: &Tuple) -> Tuple {
        let object = &self[id];
        let point = match object.parent {
            Some(parent) => self.world_to_object(parent, point),
            None => *point,
        };
        object.transform.w2l() * point
    }

    pub fn normal_to_world(&self, id: ObjectId, normal: &Tuple) -> Tuple {
        let object = &self[id];
        let normal = (object.transform.w2l_t() * *normal).to_vector().normalize();
        match object.parent {
            Some(parent) => self.normal_to_world(parent, &normal),
            None => normal,
        }
    }

    pub fn normal_at(&self, id: ObjectId, world_point: &Tuple) -> Result<Tuple> {
        let local_point = self.world_to_object(id, world_point);
        let local_normal = self[id].shape.local_normal_at(&local_point)?;
        Ok(self.normal_to_world(id, &local_normal))
    }
}

impl Index<ObjectId> for ObjectArena {
    type Output = Object;
    fn index(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }
}
