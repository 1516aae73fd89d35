use std::env;
use std::path::{Path, PathBuf};

const API_KEY_VARIABLE: &str = "PLANT_ID_API_KEY";

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed={}", API_KEY_VARIABLE);

    if target_os == "macos" {
        create_macos_plist();
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());

    match resolve_api_key(&manifest_dir) {
        Some(api_key) => {
            println!("cargo:rustc-env={}={}", API_KEY_VARIABLE, api_key);
        }
        None => {
            println!(
                "cargo:warning={} is not set. Identification requests will be rejected by Plant.id.",
                API_KEY_VARIABLE
            );
        }
    }
}

fn resolve_api_key(manifest_dir: &Path) -> Option<String> {
    if let Ok(value) = env::var(API_KEY_VARIABLE) {
        if !value.trim().is_empty() {
            return Some(value.trim().to_string());
        }
    }

    let dotenv_contents = std::fs::read_to_string(manifest_dir.join(".env")).ok()?;
    dotenv_contents
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .find(|(name, _)| name.trim() == API_KEY_VARIABLE)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

fn create_macos_plist() {
    let plist_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>Plant Identifier</string>
    <key>CFBundleDisplayName</key>
    <string>Plant Identifier</string>
    <key>CFBundleIdentifier</key>
    <string>com.plant-identifier.app</string>
    <key>CFBundleVersion</key>
    <string>0.1.0</string>
    <key>CFBundleShortVersionString</key>
    <string>0.1.0</string>
    <key>NSCameraUsageDescription</key>
    <string>Plant Identifier uses the camera to photograph plants for identification.</string>
</dict>
</plist>"#;

    let Ok(out_dir) = env::var("OUT_DIR") else {
        return;
    };
    let plist_path = PathBuf::from(&out_dir).join("Info.plist");

    if let Err(e) = std::fs::write(&plist_path, plist_content) {
        println!("cargo:warning=Failed to write Info.plist: {}", e);
        return;
    }

    println!("cargo:warning=Created Info.plist for macOS with camera usage description");
}
