use folio_domain::Category;
use url::Url;

const ROUTE_BASE: &str = "folio://site/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Portfolio,
    Gallery { category: Category },
    Clients,
    Contact,
}

impl Route {
    /// Parses a site location such as `/gallery?category=nature`.
    ///
    /// Unknown paths land on the home page. The gallery's `category` query
    /// value goes through the usual fallback to the default category.
    pub fn parse(location: &str) -> Self {
        let Some(url) = Url::parse(ROUTE_BASE)
            .ok()
            .and_then(|base| base.join(location.trim()).ok())
        else {
            return Self::Home;
        };

        match url.path().trim_end_matches('/') {
            "/portfolio" => Self::Portfolio,
            "/gallery" => {
                let token = url
                    .query_pairs()
                    .find(|(key, _)| key == "category")
                    .map(|(_, value)| value.into_owned());
                Self::Gallery {
                    category: Category::resolve(token.as_deref()),
                }
            }
            "/clients" => Self::Clients,
            "/contact" => Self::Contact,
            _ => Self::Home,
        }
    }

    pub fn href(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Portfolio => "/portfolio".to_string(),
            Self::Gallery { category } => format!("/gallery?category={category}"),
            Self::Clients => "/clients".to_string(),
            Self::Contact => "/contact".to_string(),
        }
    }

    pub fn gallery(category: Category) -> Self {
        Self::Gallery { category }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "HOME",
        route: Route::Home,
    },
    NavItem {
        name: "PORTFOLIO",
        route: Route::Portfolio,
    },
    NavItem {
        name: "CLIENTS",
        route: Route::Clients,
    },
    NavItem {
        name: "CONTACT",
        route: Route::Contact,
    },
];

impl NavItem {
    /// The gallery is reached from the portfolio, so it highlights that item.
    pub fn is_active(&self, current: Route) -> bool {
        match (self.route, current) {
            (Route::Portfolio, Route::Gallery { .. }) => true,
            (item, current) => item == current,
        }
    }
}
