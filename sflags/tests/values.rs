//! Setting derived configurations through their flag handles.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use regex::Regex;
use rstest::rstest;
use sflags::{Counter, Describe, Flag, Kind, Options, SetError};

#[derive(Describe, Default)]
struct Tuning {
    pub retries: Counter,
    pub backoff: Duration,
    pub weights: BTreeMap<String, u8>,
    pub include: Option<Regex>,
    pub hosts: Vec<std::net::Ipv4Addr>,
}

fn by_name<'f, 'a>(flags: &'f mut [Flag<'a>], name: &str) -> Result<&'f mut Flag<'a>> {
    flags
        .iter_mut()
        .find(|flag| flag.name == name)
        .ok_or_else(|| anyhow!("no flag named {name}"))
}

#[rstest]
fn every_kind_writes_into_the_struct() -> Result<()> {
    let mut tuning = Tuning::default();
    {
        let mut flags = sflags::parse_struct(&mut tuning, &Options::default())?;
        let kinds: Vec<Kind> = flags.iter().map(|flag| flag.value.kind()).collect();
        ensure!(kinds == [Kind::Counter, Kind::Duration, Kind::Map, Kind::Pattern, Kind::List]);

        let retries = by_name(&mut flags, "retries")?;
        retries.value.set("")?;
        retries.value.set("")?;
        by_name(&mut flags, "backoff")?.value.set("250ms")?;
        let weights = by_name(&mut flags, "weights")?;
        weights.value.set("b:2")?;
        weights.value.set("a:1")?;
        ensure!(weights.value.to_string() == "map[a:1 b:2]");
        by_name(&mut flags, "include")?.value.set("^web-[0-9]+$")?;
        by_name(&mut flags, "hosts")?.value.set("10.0.0.1,10.0.0.2")?;
    }
    ensure!(tuning.retries.count() == 2);
    ensure!(tuning.backoff == Duration::from_millis(250));
    ensure!(tuning.weights.len() == 2);
    ensure!(tuning.include.as_ref().is_some_and(|re| re.is_match("web-12")));
    ensure!(tuning.hosts.len() == 2);
    Ok(())
}

#[rstest]
#[case::bad_duration("backoff", "fast")]
#[case::map_without_separator("weights", "a=1")]
#[case::map_item_out_of_range("weights", "a:300")]
#[case::invalid_pattern("include", "(")]
#[case::bad_list_element("hosts", "10.0.0.1,nowhere")]
fn rejected_input_leaves_defaults(#[case] name: &str, #[case] raw: &str) -> Result<()> {
    let mut tuning = Tuning::default();
    {
        let mut flags = sflags::parse_struct(&mut tuning, &Options::default())?;
        let flag = by_name(&mut flags, name)?;
        let err = flag.value.set(raw).err();
        ensure!(
            matches!(err, Some(SetError::Parse { .. } | SetError::Syntax { .. })),
            "{name}={raw} gave {err:?}"
        );
    }
    ensure!(tuning.backoff == Duration::ZERO);
    ensure!(tuning.weights.is_empty());
    ensure!(tuning.include.is_none());
    ensure!(tuning.hosts.is_empty());
    Ok(())
}

#[rstest]
fn counter_accepts_an_explicit_total() -> Result<()> {
    let mut tuning = Tuning {
        retries: Counter(3),
        ..Tuning::default()
    };
    {
        let mut flags = sflags::parse_struct(&mut tuning, &Options::default())?;
        let retries = by_name(&mut flags, "retries")?;
        ensure!(retries.def_value == "3");
        ensure!(retries.value.is_bool_flag());
        retries.value.set("7")?;
        retries.value.set("")?;
    }
    ensure!(tuning.retries == Counter(8));
    Ok(())
}
