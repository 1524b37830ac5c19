use folio_application::{ApplicationError, CatalogSource};
use folio_domain::{
    Category, Client, ContactDetails, ImageCatalog, ImageId, Stat, StudioContent, Testimonial,
};

const PEXELS: &str = "https://images.pexels.com/photos";

const FOOD: [u32; 12] = [
    1640777, 1633578, 2097090, 376464, 1581384, 1199957, 1438672, 1640772, 2097090, 1640777,
    376464, 1581384,
];
const PRODUCT: [u32; 6] = [3373745, 3968056, 4465124, 3561339, 3968056, 4465124];
const NATURE: [u32; 6] = [1287145, 1402787, 1563356, 1402787, 1563356, 1287145];
const ARCHITECTURE: [u32; 4] = [2181915, 1707310, 2181915, 1707310];

fn pexels(photo: u32) -> Result<ImageId, ApplicationError> {
    Ok(ImageId::new(format!(
        "{PEXELS}/{photo}/pexels-photo-{photo}.jpeg"
    ))?)
}

fn pexels_all(photos: &[u32]) -> Result<Vec<ImageId>, ApplicationError> {
    photos.iter().copied().map(pexels).collect()
}

/// The studio's shipped portfolio.
#[derive(Debug, Default)]
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn load_catalog(&self) -> Result<ImageCatalog, ApplicationError> {
        Ok(ImageCatalog::new()
            .with_images(Category::Food, pexels_all(&FOOD)?)?
            .with_images(Category::Product, pexels_all(&PRODUCT)?)?
            .with_images(Category::Nature, pexels_all(&NATURE)?)?
            .with_images(Category::Architecture, pexels_all(&ARCHITECTURE)?)?)
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

pub fn builtin_studio_content() -> Result<StudioContent, ApplicationError> {
    let clients = [
        ("Luxury Restaurant", 1640777),
        ("Artisan Bakery", 1633578),
        ("Gourmet Foods", 2097090),
        ("Coffee Roasters", 376464),
        ("Farm Fresh", 1581384),
        ("Premium Spirits", 1199957),
    ]
    .into_iter()
    .map(|(name, photo)| -> Result<Client, ApplicationError> {
        Ok(Client {
            name: name.to_string(),
            logo: pexels(photo)?,
        })
    })
    .collect::<Result<Vec<_>, _>>()?;

    let testimonials = [
        (
            "Arowona's photography elevated our brand to new heights. The attention to detail and artistic vision is unmatched.",
            "Sarah Johnson",
            "Luxury Restaurant",
            1640777,
        ),
        (
            "Working with Arowona was a transformative experience. The images captured the essence of our products perfectly.",
            "Michael Chen",
            "Artisan Bakery",
            1633578,
        ),
        (
            "Professional, creative, and results-driven. Arowona understood our vision and delivered beyond expectations.",
            "Emily Rodriguez",
            "Gourmet Foods",
            2097090,
        ),
    ]
    .into_iter()
    .map(|(quote, author, company, photo)| -> Result<Testimonial, ApplicationError> {
        Ok(Testimonial {
            quote: quote.to_string(),
            author: author.to_string(),
            company: company.to_string(),
            image: pexels(photo)?,
        })
    })
    .collect::<Result<Vec<_>, _>>()?;

    let stats = [
        ("50+", "Happy Clients"),
        ("200+", "Projects Completed"),
        ("5+", "Years Experience"),
        ("100%", "Satisfaction Rate"),
    ]
    .into_iter()
    .map(|(value, label)| Stat {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect();

    Ok(StudioContent {
        studio_name: "AROWONA".to_string(),
        clients,
        testimonials,
        stats,
        contact: ContactDetails {
            email: "hello@arowona.com".to_string(),
            phone: "+234 xxx xxx xxxx".to_string(),
            location: "Abuja & Ibadan, Nigeria".to_string(),
            social: ["Instagram", "Twitter", "LinkedIn"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
    })
}
