use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");
    println!("cargo:rerun-if-changed=stats.json");

    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();

    // target/<profile>/build/<pkg>/out -> target/<profile>
    let dest_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap();

    // Copy config.toml and the stats file next to the executable
    for file in ["config.toml", "stats.json"] {
        fs::copy(file, dest_dir.join(file)).unwrap();
    }
}
