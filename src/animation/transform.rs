use crate::{
    animation::style::{Property, Style},
    foundation::core::Domain,
    foundation::error::{MotionError, MotionResult},
    foundation::math::lerp,
};

/// One `(input, output)` breakpoint of a [`TransformMapping`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stop {
    pub input: f64,
    pub output: f64,
}

/// Piecewise-linear mapping from a signal value to an output value.
///
/// Breakpoints are strictly increasing. Inputs below the first or above the last
/// breakpoint clamp to the corresponding edge output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Stop>", into = "Vec<Stop>")]
pub struct TransformMapping {
    stops: Vec<Stop>,
}

impl TransformMapping {
    /// Build from parallel input/output slices.
    pub fn new(inputs: &[f64], outputs: &[f64]) -> MotionResult<Self> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::validation(format!(
                "TransformMapping has {} inputs but {} outputs",
                inputs.len(),
                outputs.len()
            )));
        }
        Self::from_stops(
            inputs
                .iter()
                .zip(outputs)
                .map(|(&input, &output)| Stop { input, output })
                .collect(),
        )
    }

    pub fn from_stops(stops: Vec<Stop>) -> MotionResult<Self> {
        if stops.is_empty() {
            return Err(MotionError::validation(
                "TransformMapping needs at least one breakpoint",
            ));
        }
        if stops
            .iter()
            .any(|s| !s.input.is_finite() || !s.output.is_finite())
        {
            return Err(MotionError::validation(
                "TransformMapping breakpoints and outputs must be finite",
            ));
        }
        if !stops.windows(2).all(|w| w[0].input < w[1].input) {
            return Err(MotionError::validation(
                "TransformMapping breakpoints must be strictly increasing",
            ));
        }
        Ok(Self { stops })
    }

    /// Two-breakpoint mapping `[x0, x1] -> [y0, y1]`.
    ///
    /// Callers pass compile-time breakpoints (`x0 < x1`); a non-finite output is
    /// replaced by `0.0` so evaluation stays inert.
    pub(crate) fn span(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self::fixed(&[(x0, y0), (x1, y1)])
    }

    pub(crate) fn fixed(points: &[(f64, f64)]) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        Self {
            stops: points
                .iter()
                .map(|&(input, output)| Stop {
                    input,
                    output: if output.is_finite() { output } else { 0.0 },
                })
                .collect(),
        }
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Input range covered by the breakpoints.
    pub fn domain(&self) -> Domain {
        Domain {
            min: self.stops[0].input,
            max: self.stops[self.stops.len() - 1].input,
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        let idx = self.stops.partition_point(|s| s.input <= x);

        if idx == 0 {
            return self.stops[0].output;
        }
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].output;
        }

        let a = self.stops[idx - 1];
        let b = self.stops[idx];
        let t = (x - a.input) / (b.input - a.input);
        lerp(a.output, b.output, t)
    }
}

impl TryFrom<Vec<Stop>> for TransformMapping {
    type Error = MotionError;

    fn try_from(stops: Vec<Stop>) -> Result<Self, Self::Error> {
        Self::from_stops(stops)
    }
}

impl From<TransformMapping> for Vec<Stop> {
    fn from(m: TransformMapping) -> Self {
        m.stops
    }
}

/// Independent mappings from one input signal to several output properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelMap {
    channels: Vec<(Property, TransformMapping)>,
}

impl ChannelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the mapping driving `prop`.
    pub fn with(mut self, prop: Property, mapping: TransformMapping) -> Self {
        match self.channels.iter_mut().find(|(p, _)| *p == prop) {
            Some((_, m)) => *m = mapping,
            None => self.channels.push((prop, mapping)),
        }
        self
    }

    pub fn mapping(&self, prop: Property) -> Option<&TransformMapping> {
        self.channels
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn eval(&self, x: f64) -> Style {
        self.channels
            .iter()
            .map(|(prop, m)| (*prop, m.eval(x)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transform.rs"]
mod tests;
