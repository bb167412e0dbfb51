//! Attribute selectors
//!
//! A selector names one numeric vector of a target (a position, a rotation,
//! a scale, an alpha) and fixes how many components that vector carries.

/// Identifies which attribute vector of a target a tween animates.
///
/// The component count is fixed per selector (see [`Attribute::arity`]);
/// every value read from or written to a target for a given selector has
/// exactly that many components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// x/y position
    Position2d,
    /// x/y/z position
    Position3d,
    /// Rotation about the z axis
    Rotation2d,
    /// x/y/z rotation
    Rotation3d,
    /// Uniform scale factor
    Scale,
    /// Per-axis x/y/z scale factors
    ScaleAxes,
    /// Object alpha
    Alpha,
    /// Stroke alpha
    StrokeAlpha,
    /// Fill alpha
    FillAlpha,
    /// No attribute. A tween over `None` runs its timing machine without
    /// touching the target, which makes it usable as a plain timer.
    #[default]
    None,
}

impl Attribute {
    /// Number of components in this attribute's vector.
    pub fn arity(&self) -> usize {
        match self {
            Attribute::Position2d => 2,
            Attribute::Position3d | Attribute::Rotation3d | Attribute::ScaleAxes => 3,
            Attribute::Rotation2d
            | Attribute::Scale
            | Attribute::Alpha
            | Attribute::StrokeAlpha
            | Attribute::FillAlpha => 1,
            Attribute::None => 0,
        }
    }
}
