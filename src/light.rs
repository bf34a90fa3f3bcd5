use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: RGB,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: RGB) -> Self {
        PointLight {
            position,
            intensity,
        }
    }
}
