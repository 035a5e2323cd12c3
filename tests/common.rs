#![allow(dead_code)]

use chrono::Local;
use env_logger::fmt::Color;
use log::Level;
use sha2::{Digest, Sha256};
use std::io::Write;

use bloomkit::{BloomFilter, Builder};

pub fn init_logger() {
    env_logger::builder()
        .format(|buf, record: &log::Record| {
            let mut style = buf.style();
            let color = match record.level() {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Green,
                Level::Debug => Color::Cyan,
                Level::Trace => Color::White,
            };
            style.set_color(color);
            writeln!(
                buf,
                "[{} {} {:>30}:{:^4}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                style.value(record.level()),
                record.module_path().unwrap_or(""),
                style.value(record.line().unwrap_or(0)),
                style.value(record.args())
            )
        })
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .unwrap_or(());
}

/// 32-bit FNV-1a over utf-8 bytes
pub fn fnv1a(s: &str) -> u32 {
    s.bytes().fold(2_166_136_261_u32, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(16_777_619)
    })
}

/// First 8 bytes of SHA-256 digest, big endian
pub fn sha256_prefix(s: &str) -> u64 {
    let digest = Sha256::digest(s.as_bytes());
    let mut prefix = [0; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Filter over strings with FNV-1a and SHA-256 position functions
pub fn string_filter(capacity: usize) -> BloomFilter<str> {
    Builder::<str>::new()
        .with_capacity(capacity)
        .unwrap()
        .with_hash_function(move |s: &str| fnv1a(s) as usize % capacity)
        .with_hash_function(move |s: &str| (sha256_prefix(s) % capacity as u64) as usize)
        .build()
        .unwrap()
}

/// Filter over integers with `count` seeded multiplicative hash functions
pub fn seeded_filter(capacity: usize, count: u64) -> BloomFilter<u64> {
    let mut filter = BloomFilter::new(capacity).unwrap();
    for seed in 1..=count {
        filter
            .add_hash_function(move |x: &u64| {
                let mixed = (x ^ seed.wrapping_mul(0x9e37_79b9_7f4a_7c15))
                    .wrapping_mul(0xbf58_476d_1ce4_e5b9);
                ((mixed >> 17) % capacity as u64) as usize
            })
            .unwrap();
    }
    filter
}
