#![forbid(unsafe_code)]

mod output;

pub use output::{
    contact_sheet, init_tracing, out_dir, print_summary, write_artwork, SAMPLE_ADDRESSES,
};
