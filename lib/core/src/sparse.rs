use serde::{Deserialize, Serialize};

/// Sparse vector of (column, weight) pairs with strictly ascending columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Build from pairs in any order. Duplicate columns are summed and zero
    /// weights are dropped.
    #[must_use]
    pub fn from_pairs(mut pairs: Vec<(u32, f32)>) -> Self {
        pairs.sort_by_key(|&(idx, _)| idx);
        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f32> = Vec::with_capacity(pairs.len());
        for (idx, value) in pairs {
            if indices.last() == Some(&idx) {
                if let Some(last) = values.last_mut() {
                    *last += value;
                }
            } else {
                indices.push(idx);
                values.push(value);
            }
        }
        let mut v = Self { indices, values };
        v.retain_nonzero();
        v
    }

    fn retain_nonzero(&mut self) {
        if self.values.iter().all(|&w| w != 0.0) {
            return;
        }
        let (indices, values) = self
            .indices
            .iter()
            .zip(self.values.iter())
            .filter(|(_, w)| **w != 0.0)
            .map(|(&i, &w)| (i, w))
            .unzip();
        self.indices = indices;
        self.values = values;
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn get(&self, column: u32) -> Option<f32> {
        self.indices
            .binary_search(&column)
            .ok()
            .map(|pos| self.values[pos])
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|w| w * w).sum::<f32>().sqrt()
    }

    /// Scale to unit length; zero vectors stay zero
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for w in &mut self.values {
                *w *= inv_norm;
            }
        }
    }

    /// Dot product over columns present in both vectors, walked in ascending
    /// column order so `a.dot(b)` and `b.dot(a)` are bit-identical.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity clamped into [0, 1]; 0 when either norm is 0
    pub fn cosine_similarity(&self, other: &SparseVector) -> f32 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (norm_a * norm_b)).clamp(0.0, 1.0)
    }

    /// Per-column products for shared columns, ascending by column
    pub fn shared_contributions(&self, other: &SparseVector) -> Vec<(u32, f32)> {
        let (mut i, mut j) = (0, 0);
        let mut out = Vec::new();
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    out.push((self.indices[i], self.values[i] * other.values[j]));
                    i += 1;
                    j += 1;
                }
            }
        }
        out
    }
}
