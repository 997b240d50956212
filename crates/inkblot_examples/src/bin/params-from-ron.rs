use std::fs;

use inkblot::prelude::*;
use inkblot_examples::{init_tracing, out_dir, print_summary, write_artwork};
use serde::Deserialize;

/// Gallery description loaded from `assets/gallery.ron`.
#[derive(Debug, Deserialize)]
struct GalleryFile {
    params: RenderParams,
    /// Adjust the parameters per address from its fingerprint.
    #[serde(default)]
    tune: bool,
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    name: String,
    address: String,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = format!("{}/assets/gallery.ron", env!("CARGO_MANIFEST_DIR"));
    let text = fs::read_to_string(&path)?;
    let gallery: GalleryFile =
        ron::from_str(&text).map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
    gallery.params.validate()?;

    let dir = out_dir("ron")?;
    for entry in &gallery.entries {
        let fingerprint = extract(&entry.address);
        let params = if gallery.tune {
            gallery.params.tuned_for(&fingerprint)
        } else {
            gallery.params.clone()
        };
        let artwork = FrameRenderer::try_new(params)?.render(&fingerprint)?;
        print_summary(&entry.name, &artwork);
        write_artwork(&dir, &entry.name, &artwork)?;
    }
    Ok(())
}
