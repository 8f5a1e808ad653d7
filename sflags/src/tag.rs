//! Interpretation of the `flag` and `env` field tags.
//!
//! Flag tag: `[~][name][ short][,marker...]`, where a first segment of `-`
//! skips the field and markers are `hidden`, `deprecated` and `required`.
//! Env tag: `-` for none, or a comma-separated list of names where a
//! leading `~` means the name is used verbatim.

use crate::describe::FieldMeta;
use crate::naming::{flag_name_to_env_name, identifier_to_flag_name};
use crate::options::Options;

/// Tag key listing environment names.
pub(crate) const ENV_TAG: &str = "env";

/// Flag attributes resolved from a field's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Directive {
    pub(crate) name: String,
    pub(crate) short: Option<String>,
    pub(crate) hidden: bool,
    pub(crate) deprecated: bool,
    pub(crate) required: bool,
}

/// Resolves the flag directive for `meta`, or `None` when the field is
/// suppressed with `-`.
pub(crate) fn flag_directive(meta: &FieldMeta, options: &Options) -> Option<Directive> {
    let tag = meta.tag(&options.flag_tag).unwrap_or_default();
    let mut segments = tag.split(',');
    let head = segments.next().unwrap_or_default();
    if head == "-" {
        return None;
    }
    let markers: Vec<&str> = segments.collect();
    let has = |marker: &str| markers.contains(&marker);

    let mut name = identifier_to_flag_name(meta.name, &options.flag_divider);
    let mut short = None;
    let mut verbatim = false;
    if !head.is_empty() {
        let mut parts = head.split(' ');
        let first = parts.next().unwrap_or_default();
        short = parts
            .next()
            .filter(|alias| !alias.is_empty())
            .map(str::to_owned);
        let (declared, tilde) = first
            .strip_prefix('~')
            .map_or((first, false), |rest| (rest, true));
        verbatim = tilde;
        if !declared.is_empty() {
            name = declared.to_owned();
        }
    }

    if !verbatim && !options.prefix.is_empty() {
        name.insert_str(0, &options.prefix);
    }

    Some(Directive {
        name,
        short,
        hidden: has("hidden") || options.hidden,
        deprecated: has("deprecated") || options.deprecated,
        required: has("required"),
    })
}

/// Resolves the environment names for a flag called `flag_name`.
pub(crate) fn env_names(flag_name: &str, meta: &FieldMeta, options: &Options) -> Vec<String> {
    let tag = meta.tag(ENV_TAG).unwrap_or_default();
    let to_env = |name: &str| flag_name_to_env_name(name, &options.flag_divider, &options.env_divider);
    let mut segments = tag.split(',').peekable();
    match segments.peek().copied().unwrap_or_default() {
        "-" => Vec::new(),
        "" => vec![format!("{}{}", options.env_prefix, to_env(flag_name))],
        _ => {
            let scope = if options.prefix.is_empty() {
                String::new()
            } else {
                to_env(&options.prefix)
            };
            segments
                .filter(|segment| !segment.is_empty())
                .filter_map(|segment| {
                    segment.strip_prefix('~').map_or_else(
                        || Some(format!("{}{scope}{segment}", options.env_prefix)),
                        |verbatim| (!verbatim.is_empty()).then(|| verbatim.to_owned()),
                    )
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn meta(name: &'static str, tags: &'static [(&'static str, &'static str)]) -> FieldMeta {
        FieldMeta {
            name,
            type_name: "alloc::string::String",
            exported: true,
            embedded: false,
            tags,
        }
    }

    #[fixture]
    fn options() -> Options {
        Options::default()
    }

    #[rstest]
    fn dash_skips_the_field(options: Options) {
        assert!(flag_directive(&meta("Secret", &[("flag", "-")]), &options).is_none());
        assert!(flag_directive(&meta("Secret", &[("flag", "-,hidden")]), &options).is_none());
    }

    #[rstest]
    fn absent_tag_derives_name(options: Options) {
        let directive = flag_directive(&meta("MaxConns", &[]), &options);
        assert_eq!(directive.map(|d| d.name).as_deref(), Some("max-conns"));
    }

    #[rstest]
    fn name_short_and_markers(options: Options) {
        let tags = &[("flag", "name_two t,hidden,deprecated")];
        let directive = flag_directive(&meta("Name2", tags), &options);
        assert_eq!(
            directive,
            Some(Directive {
                name: String::from("name_two"),
                short: Some(String::from("t")),
                hidden: true,
                deprecated: true,
                required: false,
            })
        );
    }

    #[rstest]
    #[case::exact(&[("flag", ",required")], true)]
    #[case::unknown_ignored(&[("flag", ",mandatory")], false)]
    #[case::case_sensitive(&[("flag", ",Required")], false)]
    fn markers_must_match_exactly(
        options: Options,
        #[case] tags: &'static [(&'static str, &'static str)],
        #[case] required: bool,
    ) {
        let directive = flag_directive(&meta("Name7", tags), &options);
        assert_eq!(directive.map(|d| d.required), Some(required));
    }

    #[rstest]
    fn prefix_applies_unless_tilde() {
        let options = Options::default().prefix("sub-");
        let prefixed = flag_directive(&meta("Name", &[]), &options);
        let verbatim = flag_directive(&meta("Name3", &[("flag", "~name3")]), &options);
        assert_eq!(prefixed.map(|d| d.name).as_deref(), Some("sub-name"));
        assert_eq!(verbatim.map(|d| d.name).as_deref(), Some("name3"));
    }

    #[rstest]
    #[case::short_only(&[("flag", " t")], Some("t"))]
    #[case::bare_tilde(&[("flag", "~")], None)]
    fn empty_declared_name_falls_back(
        options: Options,
        #[case] tags: &'static [(&'static str, &'static str)],
        #[case] short: Option<&str>,
    ) {
        let directive = flag_directive(&meta("Name", tags), &options);
        assert_eq!(directive.as_ref().map(|d| d.name.as_str()), Some("name"));
        assert_eq!(directive.as_ref().and_then(|d| d.short.as_deref()), short);
    }

    #[rstest]
    fn inherited_markers_are_ored() {
        let mut options = Options::default();
        options.hidden = true;
        let directive = flag_directive(&meta("Name", &[("flag", ",deprecated")]), &options);
        assert!(directive.as_ref().is_some_and(|d| d.hidden && d.deprecated));
    }

    #[rstest]
    fn custom_flag_tag_key() {
        let options = Options::default().flag_tag("cli");
        let tags = &[("flag", "ignored"), ("cli", "port p")];
        let directive = flag_directive(&meta("Port", tags), &options);
        assert_eq!(directive.map(|d| d.name).as_deref(), Some("port"));
    }

    #[rstest]
    #[case::derived(&[], "name_two", &["NAME_TWO"])]
    #[case::suppressed(&[("env", "-")], "name", &[])]
    #[case::explicit(&[("env", "NAME_THREE")], "name3", &["NAME_THREE"])]
    #[case::list(&[("env", "NAME_8,~nn_8")], "name_8", &["NAME_8", "nn_8"])]
    #[case::empty_segments(&[("env", "A,,~,B")], "x", &["A", "B"])]
    fn env_tag_grammar(
        options: Options,
        #[case] tags: &'static [(&'static str, &'static str)],
        #[case] flag: &str,
        #[case] expected: &[&str],
    ) {
        assert_eq!(env_names(flag, &meta("Field", tags), &options), expected);
    }

    #[rstest]
    fn env_prefix_and_divider() {
        let options = Options::default().env_prefix("PP|").env_divider("|");
        let derived = env_names("name_two", &meta("Name2", &[]), &options);
        let listed = env_names("name_8", &meta("Name8", &[("env", "NAME_8,~nn_8")]), &options);
        assert_eq!(derived, ["PP|NAME_TWO"]);
        assert_eq!(listed, ["PP|NAME_8", "nn_8"]);
    }

    #[rstest]
    fn nested_scope_prefixes_explicit_names() {
        let options = Options::default().prefix("sub-sub2-");
        let named = env_names("sub-sub2-name5", &meta("Name5", &[("env", "name_five")]), &options);
        let verbatim = env_names("name3", &meta("Name3", &[("env", "~NAME_THREE")]), &options);
        assert_eq!(named, ["SUB_SUB2_name_five"]);
        assert_eq!(verbatim, ["NAME_THREE"]);
    }

    #[rstest]
    fn tilde_env_name_ignores_env_prefix() {
        let options = Options::default().env_prefix("APP_").prefix("db-");
        let tags = &[("env", "~NAME_THREE,URL")];
        let names = env_names("db-name3", &meta("Name3", tags), &options);
        assert_eq!(names, ["NAME_THREE", "APP_DB_URL"]);
    }
}
