//! Sequential composition of transforms.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{negate, rotate180, trim, trim_or_keep, TransformError};
use crate::buffer::PixelBuffer;

/// A single pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transform {
    /// Remove `margin` pixels from every edge.
    Trim { margin: usize },
    /// Rotate by 180 degrees.
    Rotate180,
    /// Invert red, green and blue.
    Negate,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Trim { margin } => write!(f, "trim({margin})"),
            Transform::Rotate180 => f.write_str("rotate180"),
            Transform::Negate => f.write_str("negate"),
        }
    }
}

/// What a pipeline does when a trim margin does not fit the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimPolicy {
    /// Log a warning and continue with the untrimmed image.
    #[default]
    Keep,
    /// Stop the pipeline with `TransformError::MarginTooLarge`.
    Abort,
}

/// An ordered list of transforms applied one after another.
///
/// Each stage receives the previous stage's output; the input image is
/// never modified.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().trim(50).rotate180().negate();
/// let filtered = pipeline.apply(&image)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pipeline {
    /// Stages in application order.
    pub steps: Vec<Transform>,
    /// Handling of oversized trim margins.
    #[serde(default)]
    pub trim_policy: TrimPolicy,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trim stage.
    pub fn trim(mut self, margin: usize) -> Self {
        self.steps.push(Transform::Trim { margin });
        self
    }

    /// Append a 180-degree rotation stage.
    pub fn rotate180(mut self) -> Self {
        self.steps.push(Transform::Rotate180);
        self
    }

    /// Append a negation stage.
    pub fn negate(mut self) -> Self {
        self.steps.push(Transform::Negate);
        self
    }

    /// Append any stage.
    pub fn then(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the oversized-trim handling.
    pub fn with_trim_policy(mut self, policy: TrimPolicy) -> Self {
        self.trim_policy = policy;
        self
    }

    /// Check if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every stage in order.
    ///
    /// An empty pipeline returns a copy of `image`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::MarginTooLarge` only under
    /// `TrimPolicy::Abort`.
    pub fn apply(&self, image: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
        let mut current = image.clone();
        for step in &self.steps {
            debug!(%step, dimensions = ?current.dimensions(), "applying transform");
            current = self.apply_step(*step, &current)?;
        }
        Ok(current)
    }

    fn apply_step(&self, step: Transform, image: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
        match step {
            Transform::Trim { margin } => match self.trim_policy {
                TrimPolicy::Keep => Ok(trim_or_keep(image, margin)),
                TrimPolicy::Abort => trim(image, margin),
            },
            Transform::Rotate180 => Ok(rotate180(image)),
            Transform::Negate => Ok(negate(image)),
        }
    }
}

impl FromIterator<Transform> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
            trim_policy: TrimPolicy::default(),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("identity");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
