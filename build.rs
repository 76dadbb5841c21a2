use std::{env, fs, path::PathBuf};

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap_or_default();
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo always sets OUT_DIR"));

    if target.starts_with("thumbv6m") {
        // Pico 1: copy our memory.x to OUT_DIR so the linker finds it
        let memory_x = fs::read_to_string("memory.x").expect("Failed to read memory.x");
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory.x");
    }

    // 2) A project-local .env may pick the regions; the real environment wins
    let _ = dotenvy::from_filename(".env");
    let blast_regions = env::var("BLAST_REGIONS").map_or_else(
        |_| "both".to_owned(),
        |value| value.trim().to_ascii_lowercase(),
    );
    if !matches!(blast_regions.as_str(), "both" | "na" | "eu") {
        println!(
            "cargo:warning=BLAST_REGIONS={blast_regions} is not one of both/na/eu; firmware will refuse to start"
        );
    }

    // 3) Expose as a compile-time constant for `BlastSettings::from_build_env`
    println!("cargo:rustc-env=BLAST_REGIONS={blast_regions}");
    println!("cargo:rerun-if-env-changed=BLAST_REGIONS");
    println!("cargo:rerun-if-changed=.env");
}
