use crate::rigel_errors::RigelError;

/// Ordered group of catalogue stars, drawn as a polyline.
///
/// An asterism holds indices into the [`StarCatalogue`](super::StarCatalogue)
/// it belongs to, not the stars themselves. The catalogue checks the indices
/// when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asterism {
    star_indices: Vec<usize>,
}

impl Asterism {
    /// Errors
    /// ------
    /// * [`RigelError::EmptyAsterism`] if `star_indices` is empty.
    pub fn new(star_indices: Vec<usize>) -> Result<Self, RigelError> {
        if star_indices.is_empty() {
            return Err(RigelError::EmptyAsterism);
        }
        Ok(Asterism { star_indices })
    }

    pub fn star_indices(&self) -> &[usize] {
        &self.star_indices
    }

    pub fn len(&self) -> usize {
        self.star_indices.len()
    }

    /// Always `false`, asterisms hold at least one star.
    pub fn is_empty(&self) -> bool {
        self.star_indices.is_empty()
    }
}
