use std::env;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use zip::ZipArchive;

// Source Han Sans covers Latin and Cyrillic, which is all the cards print.
const ZIP_URL: &str =
    "https://github.com/adobe-fonts/source-han-sans/releases/download/2.005R/09_SourceHanSansSC.zip";
const FONT_FILE: &str = "SourceHanSansSC-Regular.otf";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FONT_TTF");

    let Ok(out) = env::var("OUT_DIR") else {
        println!("cargo:warning=OUT_DIR not set; skipping font embedding");
        return;
    };
    let target = PathBuf::from(out).join(FONT_FILE);

    // Incremental build with a real font already in place.
    if fs::metadata(&target).map(|m| m.len() > 0).unwrap_or(false) {
        return;
    }

    if let Ok(path) = env::var("FONT_TTF") {
        match fs::copy(&path, &target) {
            Ok(_) => return,
            Err(e) => println!("cargo:warning=failed to copy FONT_TTF {path}: {e}"),
        }
    }

    if let Err(e) = fetch_font(&target) {
        // Renderers fall back to system fonts when the embedded face is empty.
        println!("cargo:warning=embedding an empty font: {e}");
        let _ = fs::write(&target, b"");
    }
}

fn fetch_font(target: &Path) -> Result<(), String> {
    let zip_path = target.with_extension("zip");
    let zip_arg = zip_path.to_string_lossy().to_string();
    let downloaded = run("curl", &["-L", "-f", "-o", &zip_arg, ZIP_URL])
        || run("wget", &["-O", &zip_arg, ZIP_URL]);
    if !downloaded {
        return Err(format!("could not download {ZIP_URL}; set FONT_TTF or allow network"));
    }

    let mut data = Vec::new();
    fs::File::open(&zip_path)
        .and_then(|mut f| f.read_to_end(&mut data))
        .map_err(|e| format!("reading {zip_arg}: {e}"))?;
    let mut zip = ZipArchive::new(Cursor::new(data)).map_err(|e| e.to_string())?;
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).map_err(|e| e.to_string())?;
        if file.name().ends_with(FONT_FILE) {
            let mut buf = Vec::new();
            std::io::copy(&mut file, &mut buf).map_err(|e| e.to_string())?;
            return fs::write(target, &buf).map_err(|e| e.to_string());
        }
    }
    Err(format!("{FONT_FILE} not found in archive"))
}

fn run(cmd: &str, args: &[&str]) -> bool {
    Command::new(cmd)
        .args(args)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
