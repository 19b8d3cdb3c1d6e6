use anyhow::Result;
use clap::{Arg, ArgAction, command, value_parser};
use std::path::PathBuf;
use wibar::Config;
use wibar::utils::{file_handler::load_config_file, log::setup_logging};
use wibar_core::models::{BarId, ScreenId};
use wibar_core::{BarEvent, GeometryPlacementServer, Manager};

type CheckManager = Manager<Config, GeometryPlacementServer>;

fn main() -> Result<()> {
    let matches = command!("Wibar Check")
        .about("Docks the configured bars and prints where they end up")
        .args(&[
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Outputs the loaded configuration."),
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .default_value("warn")
                .help("Log filter used when RUST_LOG is unset, e.g. `wibar_core=debug`."),
            Arg::new("hide")
                .long("hide")
                .value_name("INDEX")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Append)
                .help("Hides the bar at INDEX in the config's `bars` list."),
            Arg::new("remove-screen")
                .long("remove-screen")
                .value_name("ID")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Append)
                .help("Unplugs the screen with this id after docking."),
            Arg::new("INPUT")
                .value_parser(value_parser!(PathBuf))
                .help("Sets the config file to use. Uses the XDG config otherwise."),
        ])
        .get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map_or("warn", String::as_str);
    setup_logging(log_level);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m wibar version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = load_config_file(matches.get_one::<PathBuf>("INPUT").map(PathBuf::as_path))?;
    println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
    if verbose {
        dbg!(&config);
    }

    let options = config.bars.clone();
    let mut manager = CheckManager::new(config);
    let mut bars: Vec<Option<BarId>> = Vec::with_capacity(options.len());
    println!("\x1b[0;94m::\x1b[0m Docking {} bar(s) . . .", options.len());
    for (index, options) in options.into_iter().enumerate() {
        match manager.create_bar(options) {
            Ok(id) => bars.push(Some(id)),
            Err(err) => {
                println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m bar {index}: {err} \x1b[0m");
                bars.push(None);
            }
        }
    }

    if let Some(hidden) = matches.get_many::<usize>("hide") {
        for index in hidden {
            match bars.get(*index).copied().flatten() {
                Some(id) => manager.set_visible(id, false)?,
                None => println!("\x1b[1;93mWARN: No bar at index {index} to hide.\x1b[0m"),
            }
        }
    }

    if let Some(removed) = matches.get_many::<usize>("remove-screen") {
        for screen in removed.map(|id| ScreenId(*id)) {
            if manager.placement_server.remove_screen(screen).is_none() {
                println!("\x1b[1;93mWARN: There is no {screen} to remove.\x1b[0m");
                continue;
            }
            manager.bar_event_handler(BarEvent::ScreenRemoved(screen));
        }
    }

    report(&manager);
    Ok(())
}

fn report(manager: &CheckManager) {
    let server = &manager.placement_server;
    for screen in server.screens() {
        println!(
            "\x1b[0;94m::\x1b[0m {} ({}) {:?}",
            screen.id, screen.output, screen.bbox
        );
        for id in manager.state.bars_on_screen(screen.id) {
            let Some(bar) = manager.state.bar(id) else {
                continue;
            };
            let geometry = server
                .geometry(id)
                .map_or_else(|| "unplaced".to_string(), |g| format!("{g:?}"));
            println!(
                "    {} {:<6} stretch={} visible={} {} margins={:?}",
                id,
                bar.position(),
                bar.stretch(),
                bar.visible(),
                geometry,
                manager.state.compute_margins(id),
            );
        }
        if let Some(workarea) = server.workarea(screen.id) {
            println!("    workarea {workarea:?}");
        }
    }
    let live = manager.state.live_bars().count();
    let removed = manager.state.bars.len() - live;
    if removed > 0 {
        println!("\x1b[0;94m::\x1b[0m {removed} bar(s) removed");
    }
}
