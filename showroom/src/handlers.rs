use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use showroom_client::ShowroomClient;
use showroom_core::compare::AddOutcome;
use showroom_core::data::{DATABASE_FILE, Database, Storage};
use showroom_core::lookup::MANUFACTURERS;
use showroom_core::render::{Node, Renderer};
use showroom_core::views::{alert_view, catalog_view, compare_view, detail_view};
use showroom_core::{FilterCriteria, Route, Showroom, ShowroomError, ShowroomOptions, Theme};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Settings resolved from the global command line flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Url,
    pub data_dir: PathBuf,
    pub reset_comparison_on_visit: bool,
    pub color: bool,
    pub quiet: bool,
}

impl AppConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// A rendered page plus any alerts raised while building it. Alerts go to
/// stderr and make the process exit non-zero; the page is still shown.
#[derive(Debug, Default)]
pub struct Page {
    pub output: String,
    pub alerts: Vec<String>,
    pub theme: Theme,
}

impl Page {
    /// An empty page whose alerts will share the renderer's theme.
    pub fn for_renderer(renderer: &Renderer) -> Self {
        Self {
            theme: renderer.theme(),
            ..Self::default()
        }
    }

    pub fn emit(&self, color: bool) -> i32 {
        let renderer = Renderer::new(self.theme).with_color(color);
        print!("{}", self.output);
        for alert in &self.alerts {
            eprint!("{}", renderer.render(&alert_view(alert)));
        }
        if self.alerts.is_empty() { 0 } else { 1 }
    }
}

pub fn config_from_matches(matches: &ArgMatches) -> Result<AppConfig> {
    let api_url = match matches.get_one::<Url>("api-url") {
        Some(url) => url.clone(),
        None => Url::parse(crate::commands::DEFAULT_API_URL)?,
    };
    let data_dir = matches
        .get_one::<String>("data-dir")
        .map(String::as_str)
        .unwrap_or(crate::commands::DEFAULT_DATA_DIR);

    Ok(AppConfig {
        api_url,
        data_dir: PathBuf::from(shellexpand::tilde(data_dir).as_ref()),
        reset_comparison_on_visit: !matches.get_flag("keep-comparison"),
        color: !matches.get_flag("no-color"),
        quiet: matches.get_flag("quiet"),
    })
}

pub fn criteria_from_matches(matches: &ArgMatches) -> FilterCriteria {
    FilterCriteria {
        text: matches.get_one::<String>("search").cloned(),
        manufacturer: matches.get_one::<String>("manufacturer").cloned(),
        year_min: matches.get_one::<i32>("year-min").copied(),
        year_max: matches.get_one::<i32>("year-max").copied(),
        category: matches.get_one::<String>("category").cloned(),
    }
}

pub fn open_showroom(config: &AppConfig) -> Result<Showroom<Database>> {
    let client = ShowroomClient::new(config.api_url.as_str())?;
    let db_path = config.database_path();
    let storage = Database::new(&db_path)
        .with_context(|| format!("Failed to open storage at {}", db_path.display()))?;
    let options = ShowroomOptions {
        reset_comparison_on_visit: config.reset_comparison_on_visit,
    };
    Ok(Showroom::open(client, storage, options)?)
}

pub fn renderer_for<S: Storage>(config: &AppConfig, showroom: &Showroom<S>) -> Renderer {
    Renderer::new(showroom.theme()).with_color(config.color)
}

/// Run `fut` under a spinner unless output is quiet.
async fn with_spinner<F: Future>(quiet: bool, message: &str, fut: F) -> F::Output {
    if quiet {
        return fut.await;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message.to_string());
    let output = fut.await;
    spinner.finish_and_clear();
    output
}

// Pages

pub async fn catalog_page<S: Storage>(
    showroom: &mut Showroom<S>,
    criteria: &FilterCriteria,
    format: OutputFormat,
    renderer: &Renderer,
    quiet: bool,
) -> Result<Page> {
    showroom.navigate(Route::Catalog)?;

    let mut page = Page::for_renderer(renderer);
    if let Err(e) = with_spinner(quiet, "Loading cars...", showroom.load_catalog()).await {
        page.alerts.push(e.user_message());
        return Ok(page);
    }

    let cars = showroom.filtered(criteria);
    debug!("{} of {} cars match", cars.len(), showroom.catalog().len());
    page.output = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&cars)?),
        OutputFormat::Text => renderer.render(&catalog_view(&cars, showroom.badge_count())),
    };
    Ok(page)
}

pub async fn details_page<S: Storage>(
    showroom: &mut Showroom<S>,
    id: u32,
    compare_ids: &[u32],
    renderer: &Renderer,
    quiet: bool,
) -> Result<Page> {
    showroom.navigate(Route::Details { id })?;

    let mut page = Page::for_renderer(renderer);
    let catalog_loaded = with_spinner(quiet, "Loading cars...", showroom.load_catalog())
        .await
        .map(|cars| cars.len());
    if let Err(e) = with_spinner(quiet, "Loading car details...", showroom.load_detail(id)).await {
        page.alerts.push(e.user_message());
        return Ok(page);
    }

    for &compare_id in compare_ids {
        match showroom.add_to_comparison(compare_id) {
            Ok(AddOutcome::Added) => info!("Added car {} to comparison", compare_id),
            Ok(AddOutcome::AlreadyPresent) => debug!("Car {} already in comparison", compare_id),
            Err(e @ ShowroomError::ComparisonFull { .. }) => page.alerts.push(e.user_message()),
            Err(e) => return Err(e.into()),
        }
    }

    let Some(car) = showroom.current() else {
        return Ok(page);
    };
    let recommendations = showroom.recommendations();
    page.output = renderer.render(&detail_view(car, &recommendations, showroom.badge_count()));
    if let Err(e) = catalog_loaded {
        page.alerts.push(e.user_message());
    }
    Ok(page)
}

pub async fn compare_page<S: Storage>(
    showroom: &mut Showroom<S>,
    renderer: &Renderer,
    quiet: bool,
) -> Result<Page> {
    showroom.navigate(Route::Compare)?;
    let cars = with_spinner(quiet, "Loading comparison...", showroom.compared_cars()).await;

    let mut page = Page::for_renderer(renderer);
    page.output = renderer.render(&compare_view(&cars));
    if cars.len() < showroom.comparison().len() {
        page.alerts
            .push(showroom_core::error::DETAIL_LOAD_FAILED.to_string());
    }
    Ok(page)
}

pub fn manufacturers_page(renderer: &Renderer) -> Page {
    let rows = MANUFACTURERS
        .iter()
        .map(|m| vec![m.name.to_string(), m.country.to_string(), m.founded.to_string()])
        .collect();
    let nodes = vec![
        Node::heading("Manufacturers"),
        Node::Table {
            headers: vec!["Name".into(), "Country".into(), "Founded".into()],
            rows,
        },
    ];
    Page {
        output: renderer.render(&nodes),
        ..Page::for_renderer(renderer)
    }
}

// Handler functions

pub async fn handle_catalog(config: &AppConfig, args: &ArgMatches) -> Result<Page> {
    let mut showroom = open_showroom(config)?;
    let renderer = renderer_for(config, &showroom);
    let format = args
        .get_one::<String>("format")
        .and_then(|f| OutputFormat::from_str(f))
        .unwrap_or(OutputFormat::Text);
    let criteria = criteria_from_matches(args);
    catalog_page(&mut showroom, &criteria, format, &renderer, config.quiet).await
}

pub async fn handle_details(config: &AppConfig, args: &ArgMatches) -> Result<Page> {
    let mut showroom = open_showroom(config)?;
    let renderer = renderer_for(config, &showroom);
    let id = *args.get_one::<u32>("ID").ok_or(ShowroomError::MissingCarId)?;
    let compare_ids: Vec<u32> = args
        .get_many::<u32>("compare")
        .map(|ids| ids.copied().collect())
        .unwrap_or_default();
    details_page(&mut showroom, id, &compare_ids, &renderer, config.quiet).await
}

pub async fn handle_compare(config: &AppConfig, args: &ArgMatches) -> Result<Page> {
    let mut showroom = open_showroom(config)?;
    let renderer = renderer_for(config, &showroom);

    let mut page = Page::for_renderer(&renderer);
    match args.subcommand() {
        Some(("add", sub)) => {
            let id = *sub.get_one::<u32>("ID").ok_or(ShowroomError::MissingCarId)?;
            match showroom.add_to_comparison(id) {
                Ok(_) => page.output = format!("Compare ({})\n", showroom.badge_count()),
                Err(e @ ShowroomError::ComparisonFull { .. }) => page.alerts.push(e.user_message()),
                Err(e) => return Err(e.into()),
            }
        }
        Some(("remove", sub)) => {
            let id = *sub.get_one::<u32>("ID").ok_or(ShowroomError::MissingCarId)?;
            showroom.remove_from_comparison(id)?;
            page.output = format!("Compare ({})\n", showroom.badge_count());
        }
        Some(("clear", _)) => {
            showroom.clear_comparison()?;
            page.output = format!("Compare ({})\n", showroom.badge_count());
        }
        _ => return compare_page(&mut showroom, &renderer, config.quiet).await,
    }
    Ok(page)
}

pub async fn handle_open(config: &AppConfig, args: &ArgMatches) -> Result<Page> {
    let location = args
        .get_one::<String>("LOCATION")
        .map(String::as_str)
        .unwrap_or("/");
    let mut showroom = open_showroom(config)?;
    let renderer = renderer_for(config, &showroom);
    let route = match Route::parse(location) {
        Ok(route) => route,
        Err(e) => {
            let mut page = Page::for_renderer(&renderer);
            page.alerts.push(e.user_message());
            return Ok(page);
        }
    };
    match route {
        Route::Catalog => {
            catalog_page(
                &mut showroom,
                &FilterCriteria::default(),
                OutputFormat::Text,
                &renderer,
                config.quiet,
            )
            .await
        }
        Route::Details { id } => details_page(&mut showroom, id, &[], &renderer, config.quiet).await,
        Route::Compare => compare_page(&mut showroom, &renderer, config.quiet).await,
    }
}

pub fn handle_theme(config: &AppConfig, args: &ArgMatches) -> Result<Page> {
    let mut showroom = open_showroom(config)?;
    let theme = match args.get_one::<String>("THEME").map(String::as_str) {
        None => showroom.theme(),
        Some("toggle") => showroom.toggle_theme()?,
        Some(value) => {
            let theme: Theme = value.parse()?;
            showroom.set_theme(theme)?;
            theme
        }
    };
    Ok(Page {
        output: format!("Theme: {}\n", theme),
        alerts: Vec::new(),
        theme,
    })
}

pub fn handle_manufacturers(config: &AppConfig) -> Result<Page> {
    let showroom = open_showroom(config)?;
    Ok(manufacturers_page(&renderer_for(config, &showroom)))
}
