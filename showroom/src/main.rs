use showroom::command_argument_builder;
use showroom::handlers::{
    config_from_matches, handle_catalog, handle_compare, handle_details, handle_manufacturers,
    handle_open, handle_theme,
};
use showroom_core::render::Renderer;
use showroom_core::views::alert_view;
use showroom_core::{ShowroomError, Theme, print_banner};
use tracing::Level;

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_tracing(chosen_command.get_flag("verbose"));

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let config = match config_from_matches(&chosen_command) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    let outcome = match chosen_command.subcommand() {
        Some(("catalog", primary_command)) => handle_catalog(&config, primary_command).await,
        Some(("details", primary_command)) => handle_details(&config, primary_command).await,
        Some(("compare", primary_command)) => handle_compare(&config, primary_command).await,
        Some(("open", primary_command)) => handle_open(&config, primary_command).await,
        Some(("theme", primary_command)) => handle_theme(&config, primary_command),
        Some(("manufacturers", _)) => handle_manufacturers(&config),
        _ => unreachable!("clap should ensure we don't get here"),
    };

    match outcome {
        Ok(page) => std::process::exit(page.emit(config.color)),
        Err(e) => {
            let renderer = Renderer::new(Theme::default()).with_color(config.color);
            let message = match e.downcast_ref::<ShowroomError>() {
                Some(err) => err.user_message(),
                None => format!("{:#}", e),
            };
            eprint!("{}", renderer.render(&alert_view(&message)));
            std::process::exit(1);
        }
    }
}
