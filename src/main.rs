//! Circular Stacker CLI
//!
//! Usage:
//!   circular-stacker [OPTIONS] [SCENE]
//!
//! Options:
//!   -c, --config <FILE>   Layout settings file (TOML format)
//!   -p, --preset <NAME>   Use a named preset from the settings file
//!   -f, --format <FMT>    Output format: text, toml or svg
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};

use circular_stacker::{
    stack_scene, LayoutConfig, OutputFormat, Scene, SceneError, Settings, SettingsError,
    SkipStrategy, StackConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Toml,
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Toml => OutputFormat::Toml,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "circular-stacker")]
#[command(about = "Distribute objects in stacked circular rings")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    scene: Option<PathBuf>,

    /// Layout settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Named preset from the settings file
    #[arg(short, long, requires = "config")]
    preset: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Ring radius
    #[arg(long)]
    radius: Option<f64>,

    /// Height increment between rings
    #[arg(long, allow_negative_numbers = true)]
    height: Option<f64>,

    /// Rotation of the ring start (degrees)
    #[arg(long, allow_negative_numbers = true)]
    rotation: Option<f64>,

    /// Extra z-rotation for each object (degrees)
    #[arg(long, allow_negative_numbers = true)]
    z_rotation: Option<f64>,

    /// Extra height per placed object
    #[arg(long, allow_negative_numbers = true)]
    z_offset: Option<f64>,

    /// Skip pattern of 1s and 0s (e.g. "101011")
    #[arg(long, conflicts_with = "skip")]
    pattern: Option<String>,

    /// Skip count: occupy one slot, then skip this many
    #[arg(long)]
    skip: Option<usize>,

    /// Rotate objects to face the ring center
    #[arg(long)]
    face_center: bool,

    /// Keep selection order instead of sorting by name
    #[arg(long)]
    no_sort: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of a base layout
    fn layout_overrides(&self, base: LayoutConfig) -> LayoutConfig {
        let mut config = base;
        if let Some(radius) = self.radius {
            config = config.with_radius(radius);
        }
        if let Some(height) = self.height {
            config = config.with_height_increment(height);
        }
        if let Some(degrees) = self.rotation {
            config = config.with_ring_rotation(degrees);
        }
        if let Some(degrees) = self.z_rotation {
            config = config.with_z_rotation(degrees);
        }
        if let Some(offset) = self.z_offset {
            config = config.with_z_offset(offset);
        }
        if let Some(bits) = &self.pattern {
            config = config.with_skip(SkipStrategy::pattern(bits));
        }
        if let Some(skip) = self.skip {
            config = config.with_skip(SkipStrategy::count(skip));
        }
        if self.face_center {
            config = config.with_face_center(true);
        }
        if self.no_sort {
            config = config.with_sort_by_name(false);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!("parsed arguments: {:?}", cli);

    // If no scene file and stdin is a terminal (interactive), show help
    if cli.scene.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let layout = match &cli.config {
        Some(path) => {
            let source = read_file(path)?;
            let settings = Settings::from_str(&source)
                .map_err(|e| describe_settings_error(e, &source, path))?;
            info!("loaded settings from '{}'", path.display());
            match &cli.preset {
                Some(name) => settings.preset(name).map_err(|e| e.to_string())?,
                None => settings.layout,
            }
        }
        None => LayoutConfig::default(),
    };
    let layout = cli.layout_overrides(layout);
    info!("{}", layout.skip.summary());

    let (source, filename) = match &cli.scene {
        Some(path) => (read_file(path)?, path.display().to_string()),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {}", e))?;
            (buffer, "<stdin>".to_string())
        }
    };

    let mut scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(SceneError::ParseError(e)) => return Err(e.format(&source, &filename)),
        Err(e) => return Err(format!("Error loading scene '{}': {}", filename, e)),
    };

    let config = StackConfig::new()
        .with_layout(layout)
        .with_format(cli.format.into());

    stack_scene(&mut scene, &config).map_err(|e| e.to_string())
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Error reading file '{}': {}", path.display(), e))
}

fn describe_settings_error(err: SettingsError, source: &str, path: &Path) -> String {
    match err {
        SettingsError::ParseError(e) => e.format(source, &path.display().to_string()),
        other => format!("Error loading settings '{}': {}", path.display(), other),
    }
}

fn print_intro() {
    println!(
        r#"Circular Stacker - distribute objects in stacked circular rings

USAGE:
    circular-stacker [OPTIONS] [SCENE]
    cat scene.toml | circular-stacker

OPTIONS:
    -c, --config <FILE>    Layout settings (TOML)
    -p, --preset <NAME>    Named preset from the settings file
    -f, --format <FMT>     text, toml or svg
    --radius, --height, --rotation, --z-rotation, --z-offset
    --pattern <BITS> | --skip <N>
    --face-center, --no-sort
    -h, --help             Print help

SCENE FILE:
    cursor = [0.0, 0.0, 0.0]

    [[objects]]
    name = "Cube"
    rotation_z_deg = 0.0

    [[objects]]
    name = "Light"
    selected = false

Objects fill the first ring slot by slot, then continue one ring higher."#
    );
}
