use std::io::{self, Read, Write};
use std::{fs, path::PathBuf, process::exit};

use crate::args::{Args, Commands};
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use video_embed::{config, ConfigError, ProviderConfig, VideoEmbedder};

mod args;

pub fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("failed to set up logging: {error}");
    }

    let config = match load_config(args.config.as_deref(), &args.set) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Invalid video options: {error}");
            exit(1);
        }
    };

    match args.command {
        Commands::Process { input, output } => {
            let embedder = VideoEmbedder::new(config);
            transform(input, output, |text| embedder.process_to_string(text));
        }
        Commands::Render { input, output } => {
            let embedder = VideoEmbedder::new(config);
            transform(input, output, |text| embedder.render_to_string(text));
        }
        Commands::Options => {
            for key in ProviderConfig::keys() {
                let value = config.get_key(&key).unwrap_or_default();
                println!("{key}={value}");
            }
        }
    }
}

fn load_config(path: Option<&std::path::Path>, set: &[String]) -> Result<ProviderConfig, ConfigError> {
    let mut options = match path {
        Some(path) => config::read_options_path(path)?,
        None => Vec::new(),
    };
    for pair in set {
        options.extend(config::split_args(pair)?);
    }
    ProviderConfig::new(options)
}

fn transform<F>(input: Option<PathBuf>, output: Option<PathBuf>, embed: F)
where
    F: Fn(&str) -> String,
{
    let text = match read_input(input.as_ref()) {
        Ok(text) => text,
        Err(error) => {
            log::error!("Failed to read input: {error}");
            exit(1);
        }
    };

    let html = embed(&text);

    let result = match output {
        Some(path) => fs::write(&path, html),
        None => io::stdout().write_all(html.as_bytes()),
    };
    if let Err(error) = result {
        log::error!("Failed to write output: {error}");
        exit(1);
    }
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
