// SPDX-License-Identifier: MPL-2.0
//! Animatable properties and the sampled visual state of a target.

/// A visual property a track can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    /// Vertical offset in logical pixels, positive is down.
    TranslateY,
    Scale,
    ScaleY,
    /// Rotation around the horizontal axis, in degrees.
    RotateX,
    /// Rotation around the vertical axis, in degrees.
    RotateY,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Opacity,
        Property::TranslateY,
        Property::Scale,
        Property::ScaleY,
        Property::RotateX,
        Property::RotateY,
    ];

    /// Value of the property on an element nothing animates.
    #[must_use]
    pub fn identity(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale | Property::ScaleY => 1.0,
            Property::TranslateY | Property::RotateX | Property::RotateY => 0.0,
        }
    }
}

/// Sampled visual state of one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub scale_y: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Motion {
    pub const IDENTITY: Motion = Motion {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
        scale_y: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    #[must_use]
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Opacity => self.opacity,
            Property::TranslateY => self.translate_y,
            Property::Scale => self.scale,
            Property::ScaleY => self.scale_y,
            Property::RotateX => self.rotate_x,
            Property::RotateY => self.rotate_y,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::TranslateY => &mut self.translate_y,
            Property::Scale => &mut self.scale,
            Property::ScaleY => &mut self.scale_y,
            Property::RotateX => &mut self.rotate_x,
            Property::RotateY => &mut self.rotate_y,
        };
        *slot = value;
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Opacity clamped to [0, 1], ready to be used as a color alpha.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.opacity.clamp(0.0, 1.0)
    }

    /// Apparent vertical extent after the X rotation, in [0, 1].
    ///
    /// A card tilted back by `rotate_x` degrees is drawn shorter by the
    /// cosine of the angle.
    #[must_use]
    pub fn tilt_factor(&self) -> f32 {
        self.rotate_x.to_radians().cos().abs()
    }

    /// Apparent horizontal extent after the Y rotation, signed.
    ///
    /// Negative once the element has turned past 90° and shows its back.
    #[must_use]
    pub fn turn_factor(&self) -> f32 {
        self.rotate_y.to_radians().cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let motion = Motion::default();
        assert!(motion.is_identity());
        for property in Property::ALL {
            assert_eq!(motion.get(property), property.identity());
        }
    }

    #[test]
    fn set_then_get() {
        let mut motion = Motion::IDENTITY;
        motion.set(Property::RotateY, -90.0);
        assert_eq!(motion.get(Property::RotateY), -90.0);
        assert!(!motion.is_identity());
    }

    #[test]
    fn alpha_is_clamped() {
        let mut motion = Motion::IDENTITY;
        motion.opacity = 1.3;
        assert_eq!(motion.alpha(), 1.0);
        motion.opacity = -0.2;
        assert_eq!(motion.alpha(), 0.0);
    }

    #[test]
    fn turn_factor_changes_sign_past_quarter_turn() {
        let mut motion = Motion::IDENTITY;
        motion.rotate_y = -60.0;
        assert!(motion.turn_factor() > 0.0);
        motion.rotate_y = -120.0;
        assert!(motion.turn_factor() < 0.0);
    }
}
