use crate::celestial::{Asterism, Star};
use crate::rigel_errors::RigelError;

/// Immutable catalogue of stars and of the asterisms drawn between them.
///
/// Star order is significant: asterisms refer to stars by index, and the
/// observed sky reports star positions in catalogue order.
#[derive(Debug, Clone, Default)]
pub struct StarCatalogue {
    stars: Vec<Star>,
    asterisms: Vec<Asterism>,
}

impl StarCatalogue {
    /// Build a catalogue.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::AsterismIndexOutOfRange`] if an asterism refers to an index
    ///   `>= stars.len()`.
    pub fn new(stars: Vec<Star>, asterisms: Vec<Asterism>) -> Result<Self, RigelError> {
        let len = stars.len();
        if let Some(&index) = asterisms
            .iter()
            .flat_map(|a| a.star_indices())
            .find(|&&i| i >= len)
        {
            return Err(RigelError::AsterismIndexOutOfRange { index, len });
        }
        Ok(StarCatalogue { stars, asterisms })
    }

    /// Create a new [`StarCatalogueBuilder`].
    pub fn builder() -> StarCatalogueBuilder {
        StarCatalogueBuilder::new()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Star indices of the asterism at `index`, `None` if there is no such asterism.
    pub fn asterism_indices(&self, index: usize) -> Option<&[usize]> {
        self.asterisms.get(index).map(Asterism::star_indices)
    }

    /// Stars of the asterism at `index`, in asterism order.
    pub fn asterism_stars(&self, index: usize) -> Option<Vec<&Star>> {
        self.asterism_indices(index)
            .map(|indices| indices.iter().map(|&i| &self.stars[i]).collect())
    }
}

/// Incremental construction of a [`StarCatalogue`].
///
/// ```rust, ignore
/// let catalogue = StarCatalogue::builder()
///     .add_star(vega)
///     .add_star(deneb)
///     .add_asterism(Asterism::new(vec![0, 1])?)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct StarCatalogueBuilder {
    stars: Vec<Star>,
    asterisms: Vec<Asterism>,
}

impl StarCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a star; its index is the number of stars added before it.
    pub fn add_star(mut self, star: Star) -> Self {
        self.stars.push(star);
        self
    }

    pub fn add_asterism(mut self, asterism: Asterism) -> Self {
        self.asterisms.push(asterism);
        self
    }

    /// Stars added so far.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Asterisms added so far.
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Validate and build the catalogue.
    ///
    /// Errors
    /// ------
    /// * See [`StarCatalogue::new`].
    pub fn build(self) -> Result<StarCatalogue, RigelError> {
        StarCatalogue::new(self.stars, self.asterisms)
    }
}
