use std::path::Path;

use crate::settings::{self, Settings};

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(settings::load(Some(Path::new(file))), "Error: {}");
    println!(
        "OK: server.body_limit={}, log.filter={}",
        s.server.body_limit, s.log.filter
    );
}

/// Settings from `--config`, or the defaults.
pub fn load_settings(file: Option<&str>) -> Settings {
    die!(settings::load(file.map(Path::new)), "Error: {}")
}
