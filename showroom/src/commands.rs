use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_DATA_DIR: &str = "~/.config/showroom/";

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("showroom")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("showroom")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and progress spinners").required(false))
        .arg(arg!(-v --"verbose" "Log debug output to stderr").required(false))
        .arg(
            arg!(--"api-url" <URL>)
                .required(false)
                .help("Base URL of the car catalog API")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_API_URL),
        )
        .arg(
            arg!(--"data-dir" <PATH>)
                .required(false)
                .help("Directory holding the showroom database")
                .default_value(DEFAULT_DATA_DIR),
        )
        .arg(
            arg!(--"keep-comparison")
                .required(false)
                .help("Keep the comparison list when visiting the catalog or a details page")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"no-color")
                .required(false)
                .help("Disable colored output")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand_required(true)
        .subcommand(
            command!("catalog")
                .about("List the car catalog, optionally filtered")
                .arg(
                    arg!(-s --"search" <TEXT>)
                        .required(false)
                        .help("Match against car name or category"),
                )
                .arg(
                    arg!(-m --"manufacturer" <NAME>)
                        .required(false)
                        .help("Only cars whose name contains this manufacturer"),
                )
                .arg(
                    arg!(--"year-min" <YEAR>)
                        .required(false)
                        .help("Earliest model year (inclusive)")
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    arg!(--"year-max" <YEAR>)
                        .required(false)
                        .help("Latest model year (inclusive)")
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    arg!(-c --"category" <CATEGORY>)
                        .required(false)
                        .help("Category label, e.g. SUV, Sedan, Hatchback"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("details")
                .about("Show one car with specifications and recommendations")
                .arg(
                    arg!(<ID>)
                        .help("The car identifier")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--"compare" <ID>)
                        .required(false)
                        .help("Add a car to the comparison list from this page (repeatable)")
                        .value_parser(clap::value_parser!(u32))
                        .action(clap::ArgAction::Append),
                ),
        )
        .subcommand(
            command!("compare")
                .about("Manage and view the comparison list")
                .subcommand(command!("show").about("Compare the selected cars side by side"))
                .subcommand(
                    command!("add").about("Add a car to the comparison list").arg(
                        arg!(<ID>)
                            .help("The car identifier")
                            .value_parser(clap::value_parser!(u32)),
                    ),
                )
                .subcommand(
                    command!("remove")
                        .about("Remove a car from the comparison list")
                        .arg(
                            arg!(<ID>)
                                .help("The car identifier")
                                .value_parser(clap::value_parser!(u32)),
                        ),
                )
                .subcommand(command!("clear").about("Empty the comparison list")),
        )
        .subcommand(
            command!("open")
                .about("Open a page by location, e.g. /, /details?id=3, /compare")
                .arg(arg!(<LOCATION>).help("Page path, optionally with query")),
        )
        .subcommand(
            command!("theme")
                .about("Show or change the color theme")
                .arg(
                    arg!([THEME])
                        .help("light, dark or toggle")
                        .value_parser(["light", "dark", "toggle"]),
                ),
        )
        .subcommand(command!("manufacturers").about("List known manufacturers"))
}
