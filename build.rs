use std::env;
use std::fs;
use std::path::Path;

// Ship config.toml next to the built binary (target/<profile>/), where
// `Config::load` looks first.
fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        println!("cargo:warning=unexpected OUT_DIR layout, config.toml not copied");
        return;
    };

    if let Err(err) = fs::copy("config.toml", profile_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {err}");
    }
}
