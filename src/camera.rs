use crate::math::Transform;
use crate::*;

pub trait Camera {
    fn hsize(&self) -> usize;
    fn vsize(&self) -> usize;
    /// Ray through the center of pixel `(px, py)`, counted from the top left.
    fn ray_for_pixel(&self, px: usize, py: usize) -> Ray;
}

/// Ideal pinhole one unit in front of a canvas of `hsize` x `vsize` pixels.
#[derive(Clone, Debug)]
pub struct PinHole {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Transform,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl PinHole {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };
        PinHole {
            hsize,
            vsize,
            field_of_view,
            transform: Transform::default(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
        }
    }

    /// `view` maps world space to camera space, e.g. the result of `view_transform`.
    pub fn with_transform(mut self, view: Matrix) -> Self {
        self.transform = Transform::new(view);
        self
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn transform(&self) -> &Matrix {
        self.transform.l2w()
    }
}

impl Camera for PinHole {
    fn hsize(&self) -> usize {
        self.hsize
    }

    fn vsize(&self) -> usize {
        self.vsize
    }

    fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let xoffset = (px as f64 + 0.5) * self.pixel_size;
        let yoffset = (py as f64 + 0.5) * self.pixel_size;
        //the camera looks down -z, so +x is to the left
        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;

        let inv = self.transform.w2l();
        let pixel = inv * Tuple::point(world_x, world_y, -1.0);
        let origin = inv * Tuple::origin();
        Ray::new(origin, (pixel - origin).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{rotation_y, translation, view_transform};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

    #[test]
    fn construction() {
        let c = PinHole::new(160, 120, FRAC_PI_2);
        assert_eq!(c.hsize(), 160);
        assert_eq!(c.vsize(), 120);
        assert_eq!(c.field_of_view(), FRAC_PI_2);
        assert_eq!(c.transform(), &Matrix::identity(4));
    }

    #[test]
    fn pixel_size_for_either_orientation() {
        assert_abs_diff_eq!(PinHole::new(200, 125, FRAC_PI_2).pixel_size(), 0.01);
        assert_abs_diff_eq!(PinHole::new(125, 200, FRAC_PI_2).pixel_size(), 0.01);
    }

    #[test]
    fn ray_through_center() {
        let c = PinHole::new(201, 101, FRAC_PI_2);
        let r = c.ray_for_pixel(100, 50);
        assert_eq!(r.origin, Tuple::point(0.0, 0.0, 0.0));
        assert_eq!(r.dir, Tuple::vector(0.0, 0.0, -1.0));
    }

    #[test]
    fn ray_through_corner() {
        let c = PinHole::new(201, 101, FRAC_PI_2);
        let r = c.ray_for_pixel(0, 0);
        assert_eq!(r.origin, Tuple::point(0.0, 0.0, 0.0));
        assert!(approx::abs_diff_eq!(
            r.dir,
            Tuple::vector(0.66519, 0.33259, -0.66851),
            epsilon = 1e-4
        ));
    }

    #[test]
    fn ray_when_camera_is_transformed() {
        let c = PinHole::new(201, 101, FRAC_PI_2)
            .with_transform(rotation_y(FRAC_PI_4) * translation(0.0, -2.0, 5.0));
        let r = c.ray_for_pixel(100, 50);
        assert_eq!(r.origin, Tuple::point(0.0, 2.0, -5.0));
        assert_eq!(r.dir, Tuple::vector(SQRT_2 / 2.0, 0.0, -SQRT_2 / 2.0));
    }

    #[test]
    fn looking_at_the_origin() {
        let c = PinHole::new(11, 11, FRAC_PI_2).with_transform(view_transform(
            &Tuple::point(0.0, 0.0, -5.0),
            &Tuple::point(0.0, 0.0, 0.0),
            &Tuple::vector(0.0, 1.0, 0.0),
        ));
        let r = c.ray_for_pixel(5, 5);
        assert_eq!(r.origin, Tuple::point(0.0, 0.0, -5.0));
        assert_eq!(r.dir, Tuple::vector(0.0, 0.0, 1.0));
    }
}
