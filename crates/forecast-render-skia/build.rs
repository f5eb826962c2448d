// File: crates/forecast-render-skia/build.rs
// Summary: Links the Windows system library Skia's font/ICU code needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends
        println!("cargo:rustc-link-lib=advapi32");
    }
}
