use serde::{Deserialize, Serialize};

use crate::{Category, ImageCatalog, ImageId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub logo: ImageId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub company: String,
    pub image: ImageId,
}

/// A headline figure on the clients page, e.g. `50+` happy clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioContent {
    pub studio_name: String,
    pub clients: Vec<Client>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioEntry {
    pub category: Category,
    pub title: String,
    pub cover: Option<ImageId>,
    pub href: String,
}

impl PortfolioEntry {
    /// One entry per concrete category. `link` renders the location of that
    /// category's gallery.
    pub fn index(
        catalog: &ImageCatalog,
        link: impl Fn(Category) -> String,
    ) -> Vec<PortfolioEntry> {
        Category::CONCRETE
            .into_iter()
            .map(|category| PortfolioEntry {
                category,
                title: format!("{}\nPHOTOGRAPHY", category.label()),
                cover: catalog.cover(category).cloned(),
                href: link(category),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_index_covers_each_concrete_category() {
        let cover = ImageId::new("https://img/nature/0.jpeg").expect("id");
        let catalog = ImageCatalog::new()
            .with_images(Category::Nature, vec![cover.clone()])
            .expect("catalog");

        let entries = PortfolioEntry::index(&catalog, |category| format!("/g/{category}"));
        let categories: Vec<Category> = entries.iter().map(|entry| entry.category).collect();
        assert_eq!(categories, Category::CONCRETE.to_vec());
        assert_eq!(entries[0].title, "FOOD\nPHOTOGRAPHY");
        assert_eq!(entries[0].cover, None);
        assert_eq!(entries[2].cover, Some(cover));
        assert_eq!(entries[3].href, "/g/architecture");
    }
}
