//! Embeddable attribute store
//!
//! Most hosts do not want to implement [`Tweenable`] by hand for every scene
//! object. A [`Tweener`] carries the full set of animatable attributes;
//! embed one per object, hand it to the engine, and copy its fields out at
//! draw time.

use smallvec::smallvec;

use crate::attribute::Attribute;
use crate::tweenable::{AttrVec, Tweenable};

/// A ready-made [`Tweenable`] carrying the standard animatable attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Tweener {
    position: [f64; 3],
    rotation: [f64; 3],
    scale: [f64; 3],
    alpha: f64,
    stroke_alpha: f64,
    fill_alpha: f64,
}

impl Tweener {
    pub fn new() -> Self {
        Self {
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            alpha: 1.0,
            stroke_alpha: 1.0,
            fill_alpha: 1.0,
        }
    }

    pub fn position(&self) -> [f64; 3] {
        self.position
    }

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = [x, y, z];
    }

    /// Rotation in degrees per axis.
    pub fn rotation(&self) -> [f64; 3] {
        self.rotation
    }

    pub fn set_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.rotation = [x, y, z];
    }

    /// Per-axis scale factors.
    pub fn scale(&self) -> [f64; 3] {
        self.scale
    }

    pub fn set_scale(&mut self, x: f64, y: f64, z: f64) {
        self.scale = [x, y, z];
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    pub fn stroke_alpha(&self) -> f64 {
        self.stroke_alpha
    }

    pub fn set_stroke_alpha(&mut self, alpha: f64) {
        self.stroke_alpha = alpha;
    }

    pub fn fill_alpha(&self) -> f64 {
        self.fill_alpha
    }

    pub fn set_fill_alpha(&mut self, alpha: f64) {
        self.fill_alpha = alpha;
    }
}

impl Default for Tweener {
    fn default() -> Self {
        Self::new()
    }
}

impl Tweenable for Tweener {
    fn read(&self, attribute: Attribute) -> AttrVec {
        match attribute {
            Attribute::Position2d => AttrVec::from_slice(&self.position[..2]),
            Attribute::Position3d => AttrVec::from_slice(&self.position),
            Attribute::Rotation2d => smallvec![self.rotation[2]],
            Attribute::Rotation3d => AttrVec::from_slice(&self.rotation),
            Attribute::Scale => smallvec![self.scale[0]],
            Attribute::ScaleAxes => AttrVec::from_slice(&self.scale),
            Attribute::Alpha => smallvec![self.alpha],
            Attribute::StrokeAlpha => smallvec![self.stroke_alpha],
            Attribute::FillAlpha => smallvec![self.fill_alpha],
            Attribute::None => AttrVec::new(),
        }
    }

    fn write(&mut self, attribute: Attribute, values: &[f64]) {
        match (attribute, values) {
            (Attribute::Position2d, &[x, y]) => {
                self.position[0] = x;
                self.position[1] = y;
            }
            (Attribute::Position3d, &[x, y, z]) => self.position = [x, y, z],
            (Attribute::Rotation2d, &[z]) => self.rotation[2] = z,
            (Attribute::Rotation3d, &[x, y, z]) => self.rotation = [x, y, z],
            // Uniform scale writes all three axes.
            (Attribute::Scale, &[s]) => self.scale = [s, s, s],
            (Attribute::ScaleAxes, &[x, y, z]) => self.scale = [x, y, z],
            (Attribute::Alpha, &[a]) => self.alpha = a,
            (Attribute::StrokeAlpha, &[a]) => self.stroke_alpha = a,
            (Attribute::FillAlpha, &[a]) => self.fill_alpha = a,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tweener = Tweener::new();
        assert_eq!(tweener.position(), [0.0; 3]);
        assert_eq!(tweener.scale(), [1.0; 3]);
        assert_eq!(tweener.alpha(), 1.0);
    }

    #[test]
    fn test_position_round_trip() {
        let mut tweener = Tweener::new();
        tweener.write(Attribute::Position2d, &[10.0, 20.0]);

        let read = tweener.read(Attribute::Position2d);
        assert_eq!(&read[..], &[10.0, 20.0]);

        // The z component is untouched by a 2d write.
        assert_eq!(tweener.position(), [10.0, 20.0, 0.0]);
    }

    #[test]
    fn test_uniform_scale_spreads_to_axes() {
        let mut tweener = Tweener::new();
        tweener.write(Attribute::Scale, &[2.5]);

        assert_eq!(tweener.scale(), [2.5, 2.5, 2.5]);
        assert_eq!(&tweener.read(Attribute::ScaleAxes)[..], &[2.5, 2.5, 2.5]);
    }

    #[test]
    fn test_rotation_2d_is_z_axis() {
        let mut tweener = Tweener::new();
        tweener.write(Attribute::Rotation2d, &[90.0]);

        assert_eq!(tweener.rotation(), [0.0, 0.0, 90.0]);
        assert_eq!(&tweener.read(Attribute::Rotation2d)[..], &[90.0]);
    }

    #[test]
    fn test_wrong_arity_write_is_ignored() {
        let mut tweener = Tweener::new();
        tweener.write(Attribute::Position3d, &[1.0, 2.0]);
        assert_eq!(tweener.position(), [0.0; 3]);
    }

    #[test]
    fn test_none_reads_empty() {
        let tweener = Tweener::new();
        assert!(tweener.read(Attribute::None).is_empty());
    }
}
