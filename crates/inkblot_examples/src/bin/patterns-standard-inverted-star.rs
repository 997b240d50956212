use inkblot::prelude::*;
use inkblot_examples::{contact_sheet, init_tracing, out_dir, print_summary, write_artwork};

/// One address per pattern rule: plain, palindromic ending, contains 420.
const CASES: [(&str, &str); 3] = [
    ("standard", "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"),
    ("inverted", "0x1db3439a222c519ab44bb1144fc28167b4fa6ff6"),
    ("star", "0x7e2F9dd040cF7B41a1AF9e4A24A0EDB04093d420"),
];

fn main() -> anyhow::Result<()> {
    init_tracing();

    let renderer = FrameRenderer::try_new(RenderParams::new(512).with_frames_to_render(40))?;
    let dir = out_dir("patterns")?;

    let mut artworks = Vec::new();
    for (expected, address) in CASES {
        let artwork = renderer.render(&extract(address))?;
        anyhow::ensure!(
            artwork.pattern.name() == expected,
            "{address} selected {} instead of {expected}",
            artwork.pattern
        );
        print_summary(expected, &artwork);
        write_artwork(&dir, expected, &artwork)?;
        artworks.push(artwork);
    }

    contact_sheet(&artworks, 384, 3).save(dir.join("patterns.png"))?;
    Ok(())
}
