//! Wardley Edit CLI
//!
//! Applies one position update to a map file and prints the result:
//!
//!   wardley-edit --kind component --name Kettle --visibility 0.1 --maturity 0.9 map.owm
//!   cat map.owm | wardley-edit --line 4 --pixels 250,120
//!
//! The updated map goes to stdout (or back to the file with --write);
//! everything else goes to stderr.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use wardley_edit::{
    EditorConfig, ElementIdentity, ElementKind, LogicalPosition, PositionUpdateEngine,
    ScreenPosition,
};

#[derive(Parser)]
#[command(name = "wardley-edit")]
#[command(about = "Move elements of a text-defined Wardley Map")]
struct Cli {
    /// Input map file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Element kind keyword (component, note, market, ...)
    #[arg(short, long)]
    kind: Option<String>,

    /// Element name, paired with --kind
    #[arg(short, long)]
    name: Option<String>,

    /// Address the element by zero-based source line instead of by name
    #[arg(short, long)]
    line: Option<usize>,

    /// Address the single instance of --kind (e.g. the annotations box)
    #[arg(long)]
    singleton: bool,

    /// New visibility, 0..1 (with --maturity)
    #[arg(long)]
    visibility: Option<f64>,

    /// New maturity, 0..1 (with --visibility)
    #[arg(long)]
    maturity: Option<f64>,

    /// New position as canvas pixels "x,y", converted via the configured
    /// canvas dimensions
    #[arg(long, value_name = "X,Y")]
    pixels: Option<String>,

    /// Occurrence index for multi-tuple annotation lines
    #[arg(long, default_value_t = 0)]
    occurrence: usize,

    /// Config file with canvas dimensions (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the result back to the input file instead of stdout
    #[arg(short, long)]
    write: bool,

    /// Dump the match decision to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config = match &cli.config {
        Some(path) => match EditorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EditorConfig::default(),
    };

    // Build the element identity
    let identity = match identity_from_args(&cli) {
        Ok(identity) => identity,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    // Resolve the target position
    let position = match position_from_args(&cli, &config) {
        Ok(position) => position,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Error: no input file and stdin is a terminal");
                std::process::exit(1);
            }
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let engine = PositionUpdateEngine::new();
    let outcome = engine.update_occurrence(&source, &identity, cli.occurrence, position);

    if cli.debug {
        eprintln!("=== Update Debug ===");
        eprintln!("identity:   {}", identity);
        eprintln!("occurrence: {}", cli.occurrence);
        match &outcome.changed {
            Some(change) => {
                eprintln!("line:       {}", change.line);
                match change.previous {
                    Some(prev) => eprintln!(
                        "previous:   visibility {:.2}, maturity {:.2}",
                        prev.visibility, prev.maturity
                    ),
                    None => eprintln!("previous:   (no coordinates, tuple inserted)"),
                }
            }
            None => eprintln!("no line matched; text unchanged"),
        }
        eprintln!("====================");
    }

    if cli.write {
        let Some(path) = &cli.input else {
            eprintln!("Error: --write requires an input file");
            std::process::exit(1);
        };
        if let Err(e) = fs::write(path, &outcome.text) {
            eprintln!("Error writing file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    } else {
        print!("{}", outcome.text);
    }
}

fn identity_from_args(cli: &Cli) -> Result<ElementIdentity, String> {
    if let Some(line) = cli.line {
        return Ok(ElementIdentity::line(line));
    }

    let Some(kind_str) = &cli.kind else {
        return Err("one of --kind or --line is required".to_string());
    };
    let Some(kind) = ElementKind::from_keyword(kind_str) else {
        return Err(format!("unknown element kind '{}'", kind_str));
    };

    if cli.singleton {
        return Ok(ElementIdentity::singleton(kind));
    }
    match &cli.name {
        Some(name) => Ok(ElementIdentity::named(kind, name.clone())),
        None => Err("--kind needs --name (or --singleton)".to_string()),
    }
}

fn position_from_args(cli: &Cli, config: &EditorConfig) -> Result<LogicalPosition, String> {
    if let Some(pixels) = &cli.pixels {
        let Some((x, y)) = pixels.split_once(',') else {
            return Err(format!("--pixels expects \"x,y\", got '{}'", pixels));
        };
        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| format!("invalid pixel x '{}'", x))?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| format!("invalid pixel y '{}'", y))?;
        return Ok(ScreenPosition::new(x, y).to_logical(config.canvas));
    }

    match (cli.visibility, cli.maturity) {
        (Some(visibility), Some(maturity)) => Ok(LogicalPosition::new(maturity, visibility)),
        _ => Err("either --pixels or both --visibility and --maturity are required".to_string()),
    }
}
