//! Serialised flag descriptions for documentation tooling.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::{Value, json};
use sflags::{Describe, Kind, Options};

#[derive(Describe, Default)]
struct DocsCfg {
    /// Port to listen on.
    #[sflags(flag = "port p,required", env = "PORT")]
    pub port: u16,
    #[sflags(flag = ",hidden")]
    pub trace: bool,
    pub peers: Vec<std::net::IpAddr>,
}

#[rstest]
fn specs_serialise_without_value_handles() -> Result<()> {
    let mut config = DocsCfg {
        port: 8080,
        ..DocsCfg::default()
    };
    let flags = sflags::parse_struct(&mut config, &Options::default().desc_tag("doc"))?;
    let specs = sflags::specs(&flags);
    ensure!(specs.iter().map(|spec| spec.kind).eq([Kind::Uint, Kind::Bool, Kind::List]));

    let document = serde_json::to_value(&specs)?;
    let port = document
        .get(0)
        .ok_or_else(|| anyhow!("missing port entry"))?;
    ensure!(
        *port
            == json!({
                "name": "port",
                "short": "p",
                "env_names": ["PORT"],
                "usage": "Port to listen on.",
                "hidden": false,
                "deprecated": false,
                "required": true,
                "default": "8080",
                "kind": "uint",
                "is_bool_flag": false,
            }),
        "unexpected {port}"
    );

    let trace = document
        .get(1)
        .ok_or_else(|| anyhow!("missing trace entry"))?;
    ensure!(trace.get("short").is_none(), "absent short aliases are omitted");
    ensure!(trace.get("hidden") == Some(&Value::Bool(true)));
    ensure!(trace.get("is_bool_flag") == Some(&Value::Bool(true)));
    ensure!(document.get(2).and_then(|peers| peers.get("default")) == Some(&json!("[]")));
    Ok(())
}
