fn main() {
    // Validate the embedded mapping table at compile time.
    validate_toml(
        "src/table/default_table.toml",
        include_str!("src/table/default_table.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value = match content.parse::<toml::Table>() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for (section, len) in [("single", 1), ("double", 2), ("triple", 3)] {
        let Some(entries) = value.get(section).and_then(|v| v.as_table()) else {
            panic!("{path} is missing the [{section}] table");
        };
        for (key, out) in entries {
            if key.chars().count() != len {
                panic!("{path}: [{section}] key {key:?} must be {len} characters");
            }
            match out.as_str() {
                Some(s) if s.chars().count() == 1 => {}
                _ => panic!("{path}: [{section}] value for {key:?} must be a single character"),
            }
        }
    }
}
