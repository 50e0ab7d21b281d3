use chrono::{DateTime, Utc};

fn main() {
    // SOURCE_DATE_EPOCH pins the date for reproducible builds
    let built = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);
    println!("cargo:rustc-env=BUILD_DATE={}", built.format("%Y-%m-%d"));
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-changed=build.rs");
}
