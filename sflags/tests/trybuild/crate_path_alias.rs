//! Derives through an explicit crate path.

use sflags::{Describe, Options};

/// Uses the real crate name as a self-referential alias so no workspace
/// reconfiguration is needed.
#[derive(Describe)]
#[sflags(crate = "sflags")]
struct CratePathConfig {
    pub value: String,
    pub count: u32,
}

fn main() -> Result<(), sflags::ParseError> {
    let mut config = CratePathConfig {
        value: String::from("hello"),
        count: 1,
    };
    let names: Vec<String> = sflags::parse_struct(&mut config, &Options::default())?
        .into_iter()
        .map(|flag| flag.name)
        .collect();
    assert_eq!(names, ["value", "count"]);
    assert_eq!((config.value.as_str(), config.count), ("hello", 1));
    Ok(())
}
