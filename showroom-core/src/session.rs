use crate::compare::{AddOutcome, ComparisonList};
use crate::data::{COMPARE_KEY, Storage, THEME_KEY};
use crate::error::{LoadTarget, Result, ShowroomError};
use crate::filter::{FilterCriteria, filter_cars};
use crate::recommend::recommend;
use crate::route::Route;
use crate::theme::Theme;
use futures::future::join_all;
use showroom_client::{CarRecord, ShowroomClient};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct ShowroomOptions {
    /// Start a fresh comparison whenever the catalog or a detail page is visited.
    pub reset_comparison_on_visit: bool,
}

impl Default for ShowroomOptions {
    fn default() -> Self {
        Self {
            reset_comparison_on_visit: true,
        }
    }
}

/// Page state for one showroom session: the catalog snapshot, the
/// comparison list and whatever detail record the current page shows.
///
/// All comparison mutations go through [`Showroom::update_comparison`],
/// which persists before committing, so storage and memory never diverge.
pub struct Showroom<S: Storage> {
    client: ShowroomClient,
    storage: S,
    options: ShowroomOptions,
    catalog: Vec<CarRecord>,
    comparison: ComparisonList,
    route: Route,
    current: Option<CarRecord>,
    theme: Theme,
}

impl<S: Storage> Showroom<S> {
    pub fn open(client: ShowroomClient, storage: S, options: ShowroomOptions) -> Result<Self> {
        let comparison = load_comparison(&storage)?;
        let theme = load_theme(&storage)?;
        debug!(
            "Opened showroom with {} compared cars, {} theme",
            comparison.len(),
            theme
        );

        Ok(Self {
            client,
            storage,
            options,
            catalog: Vec::new(),
            comparison,
            route: Route::Catalog,
            current: None,
            theme,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn catalog(&self) -> &[CarRecord] {
        &self.catalog
    }

    pub fn current(&self) -> Option<&CarRecord> {
        self.current.as_ref()
    }

    pub fn comparison(&self) -> &ComparisonList {
        &self.comparison
    }

    /// The number shown on the compare badge.
    pub fn badge_count(&self) -> usize {
        self.comparison.len()
    }

    /// Switch pages. The previous detail record is dropped.
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        debug!("Navigating to {}", route);
        self.route = route;
        self.current = None;
        if self.options.reset_comparison_on_visit && route.resets_comparison() {
            self.clear_comparison()?;
        }
        Ok(())
    }

    /// Replace the catalog snapshot. On failure the previous snapshot stays.
    pub async fn load_catalog(&mut self) -> Result<&[CarRecord]> {
        match self.client.fetch_catalog().await {
            Ok(cars) => {
                self.catalog = cars;
                Ok(&self.catalog)
            }
            Err(source) => {
                warn!("Error fetching cars: {}", source);
                Err(ShowroomError::Load {
                    target: LoadTarget::Catalog,
                    source,
                })
            }
        }
    }

    /// Load the record shown on the details page. On failure the previous
    /// record stays.
    pub async fn load_detail(&mut self, id: u32) -> Result<&CarRecord> {
        match self.client.fetch_detail(id).await {
            Ok(car) => Ok(&*self.current.insert(car)),
            Err(source) => {
                warn!("Error fetching car {}: {}", id, source);
                Err(ShowroomError::Load {
                    target: LoadTarget::Detail(id),
                    source,
                })
            }
        }
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<&CarRecord> {
        filter_cars(&self.catalog, criteria)
    }

    /// Recommendations for the car on the details page.
    pub fn recommendations(&self) -> Vec<&CarRecord> {
        match &self.current {
            Some(car) => recommend(car, &self.catalog),
            None => Vec::new(),
        }
    }

    /// Apply `mutate` to a copy of the comparison list, persist the copy,
    /// then commit it. Returns the mutation's result; the badge count is
    /// [`Showroom::badge_count`] afterwards.
    pub fn update_comparison<T>(
        &mut self,
        mutate: impl FnOnce(&mut ComparisonList) -> Result<T>,
    ) -> Result<T> {
        let mut next = self.comparison.clone();
        let outcome = mutate(&mut next)?;
        self.storage
            .set(COMPARE_KEY, &serde_json::to_string(&next)?)?;
        self.comparison = next;
        Ok(outcome)
    }

    /// Add a car. On a details page the viewed car is added too when
    /// there is room.
    pub fn add_to_comparison(&mut self, id: u32) -> Result<AddOutcome> {
        let current = match self.route {
            Route::Details { id: viewed } => Some(viewed),
            _ => None,
        };
        let outcome = self.update_comparison(|list| match current {
            Some(viewed) => list.add_with_current(id, viewed),
            None => list.add(id),
        })?;
        info!("Comparison list now {:?}", self.comparison.ids());
        Ok(outcome)
    }

    pub fn remove_from_comparison(&mut self, id: u32) -> Result<bool> {
        self.update_comparison(|list| Ok(list.remove(id)))
    }

    pub fn clear_comparison(&mut self) -> Result<()> {
        self.update_comparison(|list| {
            list.clear();
            Ok(())
        })
    }

    /// Detail records for every compared car, in list order. Cars that
    /// fail to load are left out.
    pub async fn compared_cars(&self) -> Vec<CarRecord> {
        let fetches = self
            .comparison
            .ids()
            .iter()
            .map(|&id| self.client.fetch_detail(id));

        join_all(fetches)
            .await
            .into_iter()
            .zip(self.comparison.ids())
            .filter_map(|(result, id)| match result {
                Ok(car) => Some(car),
                Err(e) => {
                    warn!("Skipping car {} in comparison: {}", id, e);
                    None
                }
            })
            .collect()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}

fn load_comparison<S: Storage>(storage: &S) -> Result<ComparisonList> {
    let Some(raw) = storage.get(COMPARE_KEY)? else {
        return Ok(ComparisonList::new());
    };
    match serde_json::from_str::<Vec<u32>>(&raw) {
        Ok(ids) => Ok(ComparisonList::from_ids(ids)),
        Err(e) => {
            warn!("Ignoring unreadable comparison list {:?}: {}", raw, e);
            Ok(ComparisonList::new())
        }
    }
}

fn load_theme<S: Storage>(storage: &S) -> Result<Theme> {
    let Some(raw) = storage.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };
    Ok(raw.parse().unwrap_or_else(|_| {
        warn!("Ignoring unknown theme preference {:?}", raw);
        Theme::default()
    }))
}
