use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use lapel_core::codec;
use lapel_core::{Language, LapelConfig, pattern_by_id};
use lapel_render::{CardOptions, decode_pattern, render_preview_png, social_card_png, thumbnail_png};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Lang {
    Ru,
    En,
}

impl From<Lang> for Language {
    fn from(l: Lang) -> Self {
        match l {
            Lang::Ru => Language::Ru,
            Lang::En => Language::En,
        }
    }
}

/// Render a lapel design, given as a query string, to a PNG file.
#[derive(Debug, Parser)]
#[command(name = "lapel-preview", version)]
struct Args {
    /// e.g. "model=peak&pattern=texture01&trim=navy&stitch=gold&gender=female"
    query: String,

    /// Output PNG path.
    #[arg(short, long)]
    out: PathBuf,

    /// Pattern tile (PNG or SVG). Defaults to the catalog asset under --assets.
    #[arg(long)]
    pattern_file: Option<PathBuf>,

    /// Directory holding the site's static assets.
    #[arg(long, default_value = "public")]
    assets: PathBuf,

    /// Render the 1200×630 social card instead of the preview.
    #[arg(long, conflicts_with = "thumbnail")]
    card: bool,

    /// Render the square thumbnail instead of the preview.
    #[arg(long)]
    thumbnail: bool,

    /// Thumbnail edge length in pixels.
    #[arg(long, default_value_t = 300)]
    size: u32,

    #[arg(long, value_enum, default_value = "ru")]
    lang: Lang,

    #[arg(short, long)]
    verbose: bool,
}

fn pattern_path(args: &Args, config: &LapelConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(p) = &args.pattern_file {
        return Ok(p.clone());
    }
    let descriptor = pattern_by_id(&config.pattern).ok_or_else(|| {
        format!(
            "pattern '{}' is not in the catalog; pass --pattern-file",
            config.pattern
        )
    })?;
    Ok(args
        .assets
        .join(descriptor.asset_path().trim_start_matches('/')))
}

fn render(args: &Args, config: &LapelConfig) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let lang = Language::from(args.lang);
    if args.thumbnail {
        return Ok(thumbnail_png(config, args.size, lang)?);
    }
    if args.card {
        let name = pattern_by_id(&config.pattern)
            .map(|p| p.display_name(lang).to_string())
            .unwrap_or_else(|| config.pattern.clone());
        let options = CardOptions {
            language: lang,
            ..Default::default()
        };
        return Ok(social_card_png(config, &name, &options)?);
    }
    let path = pattern_path(args, config)?;
    debug!(path = %path.display(), "reading pattern tile");
    let bytes = fs::read(&path)?;
    let tile = decode_pattern(&config.pattern, &bytes)?;
    Ok(render_preview_png(config, &tile)?)
}

fn write_output(path: &Path, png: &[u8]) -> std::io::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, png)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = codec::decode_query(&args.query)?;
    info!(design = %config.summary(), pattern = %config.pattern, "decoded");

    let png = render(&args, &config)?;
    write_output(&args.out, &png)?;
    info!(out = %args.out.display(), bytes = png.len(), "written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        let args = Args::try_parse_from([
            "lapel-preview",
            "model=peak&pattern=geo01&trim=navy&stitch=gold&gender=male",
            "--out",
            "x.png",
            "--card",
            "--lang",
            "en",
        ])
        .unwrap();
        assert!(args.card);
        assert!(matches!(args.lang, Lang::En));
    }

    #[test]
    fn card_and_thumbnail_conflict() {
        let res = Args::try_parse_from([
            "lapel-preview",
            "q",
            "--out",
            "x.png",
            "--card",
            "--thumbnail",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn catalog_asset_path() {
        let argv = ["lapel-preview", "q", "--out", "x.png", "--assets", "site"];
        let args = Args::try_parse_from(argv).unwrap();
        let path = pattern_path(&args, &LapelConfig::default()).unwrap();
        assert_eq!(path, PathBuf::from("site/patterns/geo01.svg"));
    }
}
