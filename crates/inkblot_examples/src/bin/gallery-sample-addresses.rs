use inkblot::prelude::*;
use inkblot_examples::{
    contact_sheet, init_tracing, out_dir, print_summary, write_artwork, SAMPLE_ADDRESSES,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let params = RenderParams::new(512)
        .with_particle_count(400)
        .with_frames_to_render(40)
        .with_max_radius(9.0);
    let renderer = FrameRenderer::try_new(params)?;
    let dir = out_dir("gallery")?;

    let mut artworks = Vec::with_capacity(SAMPLE_ADDRESSES.len());
    for (label, address) in SAMPLE_ADDRESSES {
        let artwork = renderer.render(&extract(address))?;
        print_summary(label, &artwork);
        let path = write_artwork(&dir, label, &artwork)?;
        info!("Wrote {}.", path.display());
        artworks.push(artwork);
    }

    let sheet = contact_sheet(&artworks, 256, 4);
    let sheet_path = dir.join("contact_sheet.png");
    sheet.save(&sheet_path)?;
    info!("Wrote contact sheet {}.", sheet_path.display());
    Ok(())
}
