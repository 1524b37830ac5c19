use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{Category, DomainError, ImageId};

/// Ordered image lists for every concrete category.
///
/// Built once at start-up and shared read-only; insertion order drives both
/// column placement and lightbox navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageCatalog {
    food: Vec<ImageId>,
    product: Vec<ImageId>,
    nature: Vec<ImageId>,
    architecture: Vec<ImageId>,
}

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images(
        mut self,
        category: Category,
        images: Vec<ImageId>,
    ) -> Result<Self, DomainError> {
        *self.entry_mut(category)? = images;
        Ok(self)
    }

    pub fn push(&mut self, category: Category, image: ImageId) -> Result<(), DomainError> {
        self.entry_mut(category)?.push(image);
        Ok(())
    }

    /// The ordered image list shown for `category`.
    ///
    /// `All` concatenates the concrete categories in declared order without
    /// removing duplicates; a concrete category is borrowed as stored.
    pub fn project(&self, category: Category) -> Cow<'_, [ImageId]> {
        match self.entry(category) {
            Some(images) => Cow::Borrowed(images),
            None => Cow::Owned(
                Category::CONCRETE
                    .into_iter()
                    .filter_map(|concrete| self.entry(concrete))
                    .flat_map(|images| images.iter().cloned())
                    .collect(),
            ),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        match self.entry(category) {
            Some(images) => images.len(),
            None => Category::CONCRETE
                .into_iter()
                .map(|concrete| self.len(concrete))
                .sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len(Category::All) == 0
    }

    /// First image of the projected list, used as a category's cover.
    pub fn cover(&self, category: Category) -> Option<&ImageId> {
        match self.entry(category) {
            Some(images) => images.first(),
            None => Category::CONCRETE
                .into_iter()
                .find_map(|concrete| self.cover(concrete)),
        }
    }

    fn entry(&self, category: Category) -> Option<&[ImageId]> {
        match category {
            Category::All => None,
            Category::Food => Some(&self.food),
            Category::Product => Some(&self.product),
            Category::Nature => Some(&self.nature),
            Category::Architecture => Some(&self.architecture),
        }
    }

    fn entry_mut(&mut self, category: Category) -> Result<&mut Vec<ImageId>, DomainError> {
        match category {
            Category::All => Err(DomainError::SyntheticCategory(category)),
            Category::Food => Ok(&mut self.food),
            Category::Product => Ok(&mut self.product),
            Category::Nature => Ok(&mut self.nature),
            Category::Architecture => Ok(&mut self.architecture),
        }
    }
}
