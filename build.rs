//! Build script for spotwatch.
//!
//! Copies the `.env.example` template into the local data directory
//! (`<data_local_dir>/spotwatch/`), next to where `config::load_env` looks
//! for the real `.env` file.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotwatch");

    // A missing template or a read-only data dir must not break the build.
    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
