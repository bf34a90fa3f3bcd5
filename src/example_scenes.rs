use glintrace::camera::PinHole;
use glintrace::light::PointLight;
use glintrace::material::{refractive_index, Material};
use glintrace::math::*;
use glintrace::object::{Object, ObjectId};
use glintrace::pattern::Pattern;
use glintrace::shape::shapes::*;
use glintrace::world::World;
use glintrace::*;
use log::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};
use std::sync::Arc;

pub type SceneFn = fn(usize, usize) -> Result<(PinHole, World)>;

pub const SCENES: &[(&str, SceneFn)] = &[
    ("spheres", make_spheres),
    ("plane", make_plane),
    ("glass-sphere", make_glass_sphere),
    ("glass-cylinder", make_glass_cylinder),
    ("hexagon", make_hexagon),
];

pub fn by_name(name: &str) -> Option<SceneFn> {
    SCENES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

pub fn names() -> Vec<&'static str> {
    SCENES.iter().map(|(n, _)| *n).collect()
}

fn camera(w: usize, h: usize, fov: f64, from: Tuple, to: Tuple) -> PinHole {
    PinHole::new(w, h, fov).with_transform(view_transform(
        &from,
        &to,
        &Tuple::vector(0.0, 1.0, 0.0),
    ))
}

fn white_light() -> PointLight {
    PointLight::new(Tuple::point(-10.0, 10.0, -10.0), RGB::white())
}

fn checker_room(world: &mut World) {
    let floor = Material::default()
        .with_pattern(Pattern::checker(RGB::all(0.15), RGB::all(0.85)))
        .with_specular(0.0)
        .with_reflective(0.1);
    world.add(Object::new(Plane).with_material(floor));

    let wall = Material::default()
        .with_pattern(
            Pattern::checker(RGB::all(0.15), RGB::all(0.85)).with_transform(scaling(0.5, 0.5, 0.5)),
        )
        .with_specular(0.0);
    world.add(
        Object::new(Plane)
            .with_transform(translation(0.0, 0.0, 10.0) * rotation_x(FRAC_PI_2))
            .with_material(wall),
    );
}

fn make_spheres(w: usize, h: usize) -> Result<(PinHole, World)> {
    let mut world = World::new();
    world.set_light(white_light());

    let room = Arc::new(
        Material::default()
            .with_color(RGB::new(1.0, 0.9, 0.9))
            .with_specular(0.0),
    );
    world.add(
        Object::new(Sphere)
            .with_transform(scaling(10.0, 0.01, 10.0))
            .with_shared_material(room.clone()),
    );
    world.add(
        Object::new(Sphere)
            .with_transform(
                translation(0.0, 0.0, 5.0)
                    * rotation_y(-FRAC_PI_4)
                    * rotation_x(FRAC_PI_2)
                    * scaling(10.0, 0.01, 10.0),
            )
            .with_shared_material(room.clone()),
    );
    world.add(
        Object::new(Sphere)
            .with_transform(
                translation(0.0, 0.0, 5.0)
                    * rotation_y(FRAC_PI_4)
                    * rotation_x(FRAC_PI_2)
                    * scaling(10.0, 0.01, 10.0),
            )
            .with_shared_material(room),
    );

    let balls = [
        (
            translation(-0.5, 1.0, 0.5),
            RGB::new(0.1, 1.0, 0.5),
        ),
        (
            translation(1.5, 0.5, -0.5) * scaling(0.5, 0.5, 0.5),
            RGB::new(0.5, 1.0, 0.1),
        ),
        (
            translation(-1.5, 0.33, -0.75) * scaling(0.33, 0.33, 0.33),
            RGB::new(1.0, 0.8, 0.1),
        ),
    ];
    for (transform, color) in balls.iter() {
        world.add(
            Object::new(Sphere)
                .with_transform(transform.clone())
                .with_material(
                    Material::default()
                        .with_color(*color)
                        .with_diffuse(0.7)
                        .with_specular(0.3),
                ),
        );
    }

    let camera = camera(
        w,
        h,
        FRAC_PI_3,
        Tuple::point(0.0, 1.5, -5.0),
        Tuple::point(0.0, 1.0, 0.0),
    );
    Ok((camera, world))
}

fn make_plane(w: usize, h: usize) -> Result<(PinHole, World)> {
    let mut world = World::new();
    world.set_light(white_light());
    checker_room(&mut world);

    world.add(
        Object::new(Sphere)
            .with_transform(translation(-0.5, 1.0, 0.5))
            .with_material(
                Material::default()
                    .with_pattern(
                        Pattern::stripe(RGB::new(0.1, 1.0, 0.5), RGB::new(0.1, 0.5, 1.0))
                            .with_transform(scaling(0.2, 0.2, 0.2) * rotation_z(FRAC_PI_4)),
                    )
                    .with_diffuse(0.7)
                    .with_specular(0.3),
            ),
    );
    world.add(
        Object::new(Sphere)
            .with_transform(translation(1.5, 0.5, -0.5) * scaling(0.5, 0.5, 0.5))
            .with_material(
                Material::default()
                    .with_pattern(
                        Pattern::ring(RGB::new(1.0, 0.3, 0.3), RGB::white())
                            .with_transform(scaling(0.25, 0.25, 0.25) * rotation_x(FRAC_PI_2)),
                    )
                    .with_reflective(0.3),
            ),
    );
    world.add(
        Object::new(Cube)
            .with_transform(
                translation(-1.6, 0.35, -0.8) * rotation_y(FRAC_PI_6) * scaling(0.35, 0.35, 0.35),
            )
            .with_material(
                Material::default()
                    .with_pattern(Pattern::gradient(
                        RGB::new(1.0, 0.8, 0.1),
                        RGB::new(0.1, 0.3, 1.0),
                    ))
                    .with_diffuse(0.7),
            ),
    );

    let camera = camera(
        w,
        h,
        FRAC_PI_3,
        Tuple::point(0.0, 1.5, -5.0),
        Tuple::point(0.0, 1.0, 0.0),
    );
    Ok((camera, world))
}

fn hollow_glass() -> Material {
    Material::glass()
        .with_color(RGB::all(0.1))
        .with_ambient(0.0)
        .with_diffuse(0.1)
        .with_specular(1.0)
        .with_shininess(300.0)
        .with_reflective(0.9)
}

fn make_glass_sphere(w: usize, h: usize) -> Result<(PinHole, World)> {
    let mut world = World::new();
    world.set_light(white_light());
    checker_room(&mut world);

    world.add(
        Object::new(Sphere)
            .with_transform(translation(0.0, 1.0, 0.0))
            .with_material(hollow_glass()),
    );
    //air bubble
    world.add(
        Object::new(Sphere)
            .with_transform(translation(0.0, 1.0, 0.0) * scaling(0.5, 0.5, 0.5))
            .with_material(hollow_glass().with_refractive_index(refractive_index::AIR)),
    );
    world.add(
        Object::new(Sphere)
            .with_transform(translation(1.5, 0.4, 2.0) * scaling(0.4, 0.4, 0.4))
            .with_material(Material::default().with_color(RGB::new(1.0, 0.3, 0.2))),
    );

    let camera = camera(
        w,
        h,
        FRAC_PI_3,
        Tuple::point(0.0, 2.5, -4.5),
        Tuple::point(0.0, 1.0, 0.0),
    );
    Ok((camera, world))
}

fn make_glass_cylinder(w: usize, h: usize) -> Result<(PinHole, World)> {
    let mut world = World::new();
    world.set_light(white_light());
    checker_room(&mut world);

    world.add(
        Object::new(Cylinder::new(0.0, 2.0, true))
            .with_transform(translation(-0.6, 0.0, 0.0) * scaling(0.6, 1.0, 0.6))
            .with_material(hollow_glass().with_refractive_index(refractive_index::WATER)),
    );
    world.add(
        Object::new(Cone::new(-1.0, 0.0, true))
            .with_transform(translation(1.0, 1.0, 0.5) * scaling(0.5, 1.0, 0.5))
            .with_material(
                Material::default()
                    .with_color(RGB::new(0.2, 0.4, 1.0))
                    .with_reflective(0.2),
            ),
    );
    world.add(
        Object::new(Triangle::new(
            Tuple::point(-2.5, 0.0, 3.0),
            Tuple::point(-1.0, 2.5, 3.5),
            Tuple::point(0.5, 0.0, 4.0),
        ))
        .with_material(Material::default().with_color(RGB::new(0.9, 0.8, 0.2))),
    );

    let camera = camera(
        w,
        h,
        FRAC_PI_3,
        Tuple::point(0.0, 2.0, -5.0),
        Tuple::point(0.0, 1.0, 0.0),
    );
    Ok((camera, world))
}

fn hexagon_side(world: &mut World, hexagon: ObjectId, material: &Arc<Material>) -> Result<ObjectId> {
    let side = world.add_child(hexagon, Object::new(Group::new()))?;
    world.add_child(
        side,
        Object::new(Sphere)
            .with_transform(translation(0.0, 0.0, -1.0) * scaling(0.25, 0.25, 0.25))
            .with_shared_material(material.clone()),
    )?;
    world.add_child(
        side,
        Object::new(Cylinder::new(0.0, 1.0, false))
            .with_transform(
                translation(0.0, 0.0, -1.0)
                    * rotation_y(-FRAC_PI_6)
                    * rotation_z(-FRAC_PI_2)
                    * scaling(0.25, 1.0, 0.25),
            )
            .with_shared_material(material.clone()),
    )?;
    Ok(side)
}

fn make_hexagon(w: usize, h: usize) -> Result<(PinHole, World)> {
    let mut world = World::new();
    world.set_light(white_light());
    checker_room(&mut world);

    let material = Arc::new(
        Material::default()
            .with_color(RGB::new(0.8, 0.3, 0.3))
            .with_reflective(0.2),
    );
    let hexagon = world.add(
        Object::new(Group::new())
            .with_transform(translation(0.0, 1.0, 0.0) * rotation_x(-FRAC_PI_6)),
    );
    for n in 0..6 {
        let side = hexagon_side(&mut world, hexagon, &material)?;
        if let Some(o) = world.object_mut(side) {
            o.set_transform(rotation_y(n as f64 * PI / 3.0))?;
        }
    }
    debug!("hexagon built from {} objects", world.objects().len());

    let camera = camera(
        w,
        h,
        FRAC_PI_3,
        Tuple::point(0.0, 2.5, -4.0),
        Tuple::point(0.0, 1.0, 0.0),
    );
    Ok((camera, world))
}
