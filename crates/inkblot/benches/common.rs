use std::time::Duration;

use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

#[allow(dead_code)]
pub const ADDRESSES: [&str; 3] = [
    "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B",
    "0x7e2F9dd040cF7B41a1AF9e4A24A0EDB04093d420",
    "0x1db3439a222c519ab44bb1144fc28167b4fa6ff6",
];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

#[allow(dead_code)]
pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}
