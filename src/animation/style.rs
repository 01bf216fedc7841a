use std::collections::BTreeMap;

use crate::foundation::math::lerp;

/// Animatable style property.
///
/// Units follow the rendering layer's conventions: translations in CSS pixels,
/// rotations in degrees, `Width`/`BackgroundSize`/`BackgroundPosition` in percent.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    X,
    Y,
    Scale,
    Rotate,
    RotateX,
    RotateY,
    Width,
    BackgroundSize,
    BackgroundPosition,
}

impl Property {
    /// Value a property rests at when nothing animates it.
    pub fn neutral(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::Width | Self::BackgroundSize => 100.0,
            Self::X
            | Self::Y
            | Self::Rotate
            | Self::RotateX
            | Self::RotateY
            | Self::BackgroundPosition => 0.0,
        }
    }
}

/// A resolved set of property values, ready to be applied to an element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style(BTreeMap<Property, f64>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Property, value: f64) -> Self {
        self.0.insert(prop, value);
        self
    }

    pub fn set(&mut self, prop: Property, value: f64) {
        self.0.insert(prop, value);
    }

    pub fn get(&self, prop: Property) -> Option<f64> {
        self.0.get(&prop).copied()
    }

    /// Value of `prop`, or its neutral value when the style does not carry it.
    pub fn get_or_neutral(&self, prop: Property) -> f64 {
        self.get(prop).unwrap_or_else(|| prop.neutral())
    }

    pub fn keys(&self) -> impl Iterator<Item = Property> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpolate property-wise. Keys missing on either side use the property's
    /// neutral value.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut out = a.clone();
        for (prop, bv) in b.iter() {
            let av = a.get_or_neutral(prop);
            out.set(prop, lerp(av, bv, t));
        }
        out
    }

    /// Merge `other` over `self`.
    pub fn merged(mut self, other: &Self) -> Self {
        for (prop, v) in other.iter() {
            self.set(prop, v);
        }
        self
    }
}

impl FromIterator<(Property, f64)> for Style {
    fn from_iter<I: IntoIterator<Item = (Property, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
