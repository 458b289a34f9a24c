pub mod compare;
pub mod data;
pub mod error;
pub mod filter;
pub mod lookup;
pub mod recommend;
pub mod render;
pub mod route;
pub mod session;
pub mod theme;
pub mod views;

pub use compare::{AddOutcome, ComparisonList, MAX_COMPARE};
pub use data::{Database, MemoryStorage, Storage};
pub use error::{ShowroomError, Result};
pub use filter::{FilterCriteria, filter_cars};
pub use recommend::recommend;
pub use route::Route;
pub use session::{Showroom, ShowroomOptions};
pub use theme::Theme;

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
   ___ _                                     
  / __| |_  _____ __ ___ _ ___  ___ _ __  
  \__ \ ' \/ _ \ V  V / '_/ _ \/ _ \ '  \ 
  |___/_||_\___/\_/\_/|_| \___/\___/_|_|_|
"#;
    eprintln!("{}", banner.bright_blue().bold());
    eprintln!(
        "  {} {}\n",
        "showroom".bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
}
