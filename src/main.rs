use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use valdump::{config, Culture, DumpOptions, DumpSink, Dumper, WriterSink};

fn cli() -> Command {
    Command::new("valdump")
        .about("Render a JSON document as a depth-bounded text dump")
        .arg(
            Arg::new("input")
                .help("JSON file to dump; reads stdin when omitted or '-'")
                .index(1),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .help("Name shown in front of the root value")
                .default_value("value"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .short('d')
                .help("Nesting levels to expand before collapsing to '...'")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("culture")
                .long("culture")
                .help(format!(
                    "Number and date formatting preset ({})",
                    Culture::preset_names().collect::<Vec<_>>().join(", ")
                )),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Options file; defaults to the user config directory")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("boxed")
                .long("boxed")
                .short('b')
                .help("Frame the dump in a titled box")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .help("Minimum box width")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("no-title")
                .long("no-title")
                .help("Omit braces around composites and the box title")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("Colorize output with ANSI escapes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr; repeat for more detail")
                .action(ArgAction::Count),
        )
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Options from the config file with command-line flags applied on top.
fn resolve_options(matches: &ArgMatches) -> Result<DumpOptions> {
    let config_path = matches.get_one::<PathBuf>("config");
    let mut options = config::load_options(config_path.map(PathBuf::as_path))
        .context("Failed to load dump options")?;

    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        options = options.with_max_depth(*depth);
    }
    if let Some(name) = matches.get_one::<String>("culture") {
        let culture = Culture::from_name(name).context("Invalid --culture")?;
        options = options.with_culture(culture);
    }
    if let Some(width) = matches.get_one::<usize>("width") {
        options = options.with_box_width(*width);
    }
    if matches.get_flag("no-title") {
        options = options.with_title(false);
    }
    if matches.get_flag("color") {
        options = options.with_colors(true);
    }

    options.validate()?;
    Ok(options)
}

fn read_input(input: Option<&String>) -> Result<String> {
    match input.map(String::as_str) {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let options = resolve_options(&matches)?;
    debug!(?options, "resolved options");

    let input = matches.get_one::<String>("input");
    let json_content = read_input(input)?;
    let document: serde_json::Value =
        serde_json::from_str(&json_content).context("Input is not valid JSON")?;

    let name = matches
        .get_one::<String>("name")
        .map(String::as_str)
        .unwrap_or("value");
    let dumper = Dumper::new(options);

    let output = if matches.get_flag("boxed") {
        dumper.dump_box(&document, name)
    } else {
        dumper.dump(&document, name)
    };
    info!(bytes = output.len(), "dump rendered");

    WriterSink::stdout()
        .emit(name, &output)
        .context("Failed to write dump")?;

    Ok(())
}
