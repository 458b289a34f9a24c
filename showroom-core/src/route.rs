use crate::error::{Result, ShowroomError};
use std::fmt;
use url::Url;

/// The pages a location can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Details { id: u32 },
    Compare,
}

impl Route {
    /// Resolve a location such as `/details?id=3` or a full URL.
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        let url = match Url::parse(location) {
            Ok(url) => url,
            Err(_) => relative_url(location)?,
        };

        match url.path().trim_end_matches('/') {
            "" | "/index.html" | "/catalog" => Ok(Route::Catalog),
            "/details" | "/details.html" => {
                let id = url
                    .query_pairs()
                    .find(|(key, _)| key == "id")
                    .and_then(|(_, value)| value.trim().parse::<u32>().ok())
                    .ok_or(ShowroomError::MissingCarId)?;
                Ok(Route::Details { id })
            }
            "/compare" | "/compare.html" => Ok(Route::Compare),
            other => Err(ShowroomError::UnknownRoute(other.to_string())),
        }
    }

    /// Visiting these pages starts a fresh comparison when reset is enabled.
    pub fn resets_comparison(&self) -> bool {
        matches!(self, Route::Catalog | Route::Details { .. })
    }
}

/// Place a bare path and query under a fixed origin. A leading `//` would
/// name a host, so it is rejected rather than joined.
fn relative_url(location: &str) -> Result<Url> {
    let location = location.split_once('#').map_or(location, |(rest, _)| rest);
    let (path, query) = match location.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (location, None),
    };
    if path.starts_with("//") {
        return Err(ShowroomError::UnknownRoute(location.to_string()));
    }

    let mut url = Url::parse("http://localhost/")
        .map_err(|e| ShowroomError::UnknownRoute(e.to_string()))?;
    url.set_path(path);
    url.set_query(query);
    Ok(url)
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Catalog => write!(f, "/"),
            Route::Details { id } => write!(f, "/details?id={}", id),
            Route::Compare => write!(f, "/compare"),
        }
    }
}
