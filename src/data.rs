//! Binary feature vectors
//!
//! The registry can carry a pre-parsed data payload so the host algorithm
//! does not depend exclusively on a file read: a two-level ordered
//! collection (outer level per class label, inner level per instance) of
//! binary feature vectors. Each vector stores its dense form plus the
//! precomputed indices of present features, which sparse algorithms iterate
//! directly.

use ndarray::Array1;

/// One instance's binary feature vector
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVectorBinary {
    id: usize,
    dense: Array1<bool>,
    present: Vec<usize>,
}

impl FeatureVectorBinary {
    /// Create a feature vector from an instance id and its dense features
    ///
    /// # Examples
    ///
    /// ```
    /// use paramreg_rs::data::FeatureVectorBinary;
    ///
    /// let fv = FeatureVectorBinary::new(7, &[true, false, true]);
    /// assert_eq!(fv.id(), 7);
    /// assert_eq!(fv.num_features(), 3);
    /// assert_eq!(fv.present_features(), &[0, 2]);
    /// ```
    pub fn new(id: usize, features: &[bool]) -> Self {
        let present = features
            .iter()
            .enumerate()
            .filter_map(|(index, &is_present)| is_present.then_some(index))
            .collect();

        Self {
            id,
            dense: Array1::from(features.to_vec()),
            present,
        }
    }

    /// The instance id this vector was created with
    pub fn id(&self) -> usize {
        self.id
    }

    /// Total number of features, present or not
    pub fn num_features(&self) -> usize {
        self.dense.len()
    }

    /// Check whether a feature is present; out-of-range indices are absent
    pub fn is_feature_present(&self, feature: usize) -> bool {
        self.dense.get(feature).copied().unwrap_or(false)
    }

    /// Number of present features
    pub fn num_present_features(&self) -> usize {
        self.present.len()
    }

    /// Indices of present features, in increasing order
    pub fn present_features(&self) -> &[usize] {
        &self.present
    }

    /// Fraction of features that are present; zero for an empty vector
    pub fn sparsity(&self) -> f64 {
        if self.dense.is_empty() {
            0.0
        } else {
            self.present.len() as f64 / self.dense.len() as f64
        }
    }
}
