use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use tokendeck::export::{self, ExportFormat};
use tokendeck::session::EditorSession;
use tokendeck::storage::FileStorage;
use tokendeck::theme::Theme;

/// Command line surface: `tokendeck [css|tailwind|json] [--theme FILE]
/// [--out DIR]`. Without `--theme` the last persisted editing session is
/// exported; without `--out` the export goes to stdout.
struct Args {
    format: ExportFormat,
    theme_file: Option<PathBuf>,
    out_dir: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut format = ExportFormat::Css;
    let mut theme_file = None;
    let mut out_dir = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "css" => format = ExportFormat::Css,
            "tailwind" => format = ExportFormat::Tailwind,
            "json" => format = ExportFormat::Json,
            "--theme" => {
                let value = args.next().context("--theme requires a file path")?;
                theme_file = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = args.next().context("--out requires a directory")?;
                out_dir = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!("usage: tokendeck [css|tailwind|json] [--theme FILE] [--out DIR]");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(Args {
        format,
        theme_file,
        out_dir,
    })
}

fn load_theme(args: &Args) -> Result<Theme> {
    if let Some(path) = &args.theme_file {
        let serialized = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file {}", path.display()))?;
        return serde_json::from_str(&serialized)
            .with_context(|| format!("failed to parse theme file {}", path.display()));
    }

    let storage = FileStorage::with_default_root()?;
    Ok(EditorSession::restore(&storage).theme().clone())
}

fn main() -> Result<()> {
    tokendeck::logging::init();

    let args = parse_args()?;
    let theme = load_theme(&args)?;

    match &args.out_dir {
        Some(dir) => {
            let path = export::write_export(&theme, args.format, dir)?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let content = export::export_theme(&theme, args.format)?;
            print!("{content}");
        }
    }

    Ok(())
}
