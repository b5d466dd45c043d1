use std::env;
use std::fs;
use std::path::Path;

/// Every artifact the dashboard embeds, relative to the workspace
/// `fixtures/` directory. A missing artifact fails the build outright:
/// the error policy is fatal-with-no-fallback, so no stub content is
/// ever written in its place.
const ARTIFACTS: &[&str] = &[
    "data/final_daily_melt_eto.csv",
    "data/final_weekly_melt_eto.csv",
    "data/final_monthly_melt_eto.csv",
    "data/ml_final_df_daily.csv",
    "data/final_weekly_in_rice.csv",
    "data/final_weekly_kc.csv",
    "data/final_monthly_in_rice.csv",
    "data/final_monthly_kc.csv",
    "data/final_daily_irrigation.csv",
    "data/fb_prophet_monthly_T_mean.csv",
    "data/fb_prophet_monthly_T_min.csv",
    "data/fb_prophet_monthly_T_max.csv",
    "models/fb_prophet_monthly_T_mean.json",
    "models/fb_prophet_monthly_T_min.json",
    "models/fb_prophet_monthly_T_max.json",
    "map_malolos.html",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let fixtures = Path::new("../fixtures");

    for artifact in ARTIFACTS {
        let src = fixtures.join(artifact);
        if !src.exists() {
            panic!("missing artifact: {}", src.display());
        }
        let dest = Path::new(&out_dir).join(
            src.file_name()
                .unwrap_or_else(|| panic!("bad artifact path: {}", artifact)),
        );
        fs::copy(&src, &dest)
            .unwrap_or_else(|e| panic!("failed to copy {}: {}", src.display(), e));
        println!("cargo:rerun-if-changed=../fixtures/{}", artifact);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
