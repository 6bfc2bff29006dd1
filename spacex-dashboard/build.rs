use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // The dashboard has no fallback data set: a missing CSV fails the build.
    let launches_src = Path::new("../fixtures/spacex_launch_dash.csv");
    fs::copy(launches_src, Path::new(&out_dir).join("spacex_launch_dash.csv")).unwrap_or_else(
        |e| panic!("failed to copy {}: {}", launches_src.display(), e),
    );

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/spacex_launch_dash.csv");
}
