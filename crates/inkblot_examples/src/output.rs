use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{imageops, RgbImage};
use inkblot::prelude::*;
use tracing_subscriber::EnvFilter;

/// Addresses covering every scheme and pattern rule.
pub const SAMPLE_ADDRESSES: [(&str, &str); 8] = [
    ("zero", "0x0000000000000000000000000000000000000000"),
    ("dead", "0x000000000000000000000000000000000000dEaD"),
    ("cafe", "0xcafe0000cafe0000cafe0000cafe0000cafe0000"),
    ("repeating", "0x1111111111111111111111111111111111111112"),
    ("sequential", "0x0123456789abcdef0123456789abcdef01234567"),
    ("special-420", "0x7e2F9dd040cF7B41a1AF9e4A24A0EDB04093d420"),
    ("palindrome", "0x1db3439a222c519ab44bb1144fc28167b4fa6ff6"),
    ("vitalik", "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"),
];

/// Installs a stderr subscriber. `RUST_LOG` overrides the default `inkblot=info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inkblot=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// `out/<name>` under the examples crate, created if missing.
pub fn out_dir(name: &str) -> anyhow::Result<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("out").join(name);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(dir)
}

/// Writes the encoded PNG of `artwork` to `dir/<stem>.png`.
pub fn write_artwork(dir: &Path, stem: &str, artwork: &Artwork) -> anyhow::Result<PathBuf> {
    let path = dir.join(format!("{stem}.png"));
    fs::write(&path, &artwork.png).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Prints fingerprint, scheme and trait summary to stdout.
pub fn print_summary(label: &str, artwork: &Artwork) {
    let fp = &artwork.fingerprint;
    println!("== {label} ({})", fp.address);
    println!(
        "   seed {:#010x} | diversity {:.3} | zeros {:.2} | run {} | palindrome {} | fallback {}",
        fp.seed, fp.diversity, fp.zero_ratio, fp.longest_run, fp.is_palindrome, fp.is_fallback
    );
    println!(
        "   pattern {} | scheme {} | {} {} + {} {}",
        artwork.pattern,
        artwork.scheme.scheme_name,
        artwork.scheme.primary_name,
        artwork.scheme.primary,
        artwork.scheme.secondary_name,
        artwork.scheme.secondary
    );
    let traits: Vec<String> = artwork
        .traits()
        .iter()
        .map(|t| format!("{}={}", t.trait_type, t.value))
        .collect();
    println!("   traits: {}", traits.join(", "));
    let fx = &artwork.stats.effects;
    if fx.spots > 0 {
        println!("   ink: {} spots, {} drips", fx.spots, fx.drips);
    }
}

/// Tiles thumbnails of `artworks` into one image, `columns` per row.
pub fn contact_sheet(artworks: &[Artwork], thumb: u32, columns: u32) -> RgbImage {
    let columns = columns.max(1);
    let rows = (artworks.len() as u32).div_ceil(columns).max(1);
    let mut sheet = RgbImage::from_pixel(
        columns * thumb,
        rows * thumb,
        image::Rgb([255, 255, 255]),
    );
    for (i, artwork) in artworks.iter().enumerate() {
        let i = i as u32;
        let tile = imageops::thumbnail(&artwork.image, thumb, thumb);
        imageops::overlay(
            &mut sheet,
            &tile,
            ((i % columns) * thumb) as i64,
            ((i / columns) * thumb) as i64,
        );
    }
    sheet
}
