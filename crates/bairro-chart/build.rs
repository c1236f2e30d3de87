// File: crates/bairro-chart/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for the raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
