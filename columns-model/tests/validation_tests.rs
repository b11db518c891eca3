use columns_model::{
    validate, BreakpointOption, BreakpointSet, Configuration, IssueKind, Preset, SizeOption,
};
use pretty_assertions::assert_eq;

fn valid_config() -> Configuration {
    let set = BreakpointSet::with_defaults("Breakpoints 1");
    let preset = Preset::new("Preset 1", vec!["hero".into()], set.id.clone());
    Configuration::new(vec![preset], vec![set])
}

fn kinds(config: &Configuration) -> Vec<IssueKind> {
    validate(config).into_iter().map(|i| i.kind).collect()
}

// ── Clean documents ──────────────────────────────────────────────

#[test]
fn default_configuration_is_valid() {
    assert!(validate(&valid_config()).is_empty());
}

#[test]
fn empty_accepted_types_is_not_an_issue() {
    let mut config = valid_config();
    config.presets[0].clear();
    assert!(validate(&config).is_empty());
}

// ── Deferred conditions ──────────────────────────────────────────

#[test]
fn dangling_reference_is_reported_on_the_preset() {
    let mut config = valid_config();
    config.breakpoints.clear();
    let issues = validate(&config);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].uid, config.presets[0].uid);
    assert_eq!(
        issues[0].kind,
        IssueKind::DanglingBreakpoints {
            id: "breakpoints-1".into()
        }
    );
}

#[test]
fn blank_option_is_reported() {
    let mut config = valid_config();
    let uid = config.breakpoints[0].breakpoints[0].add_option();
    let issues = validate(&config);
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.uid == uid));
    assert_eq!(kinds(&config), vec![IssueKind::EmptyLabel, IssueKind::EmptyValue]);
}

#[test]
fn duplicate_breakpoint_value_is_reported_once() {
    let mut config = valid_config();
    let mut copy = config.breakpoints[0].breakpoints[0].deep_copy();
    copy.label = "Desktop again".into();
    config.breakpoints[0].add_breakpoint(copy);
    assert_eq!(
        kinds(&config),
        vec![IssueKind::DuplicateBreakpointValue {
            value: "desktop".into()
        }]
    );
}

#[test]
fn empty_collections_are_reported() {
    let set = BreakpointSet::new("Empty", vec![]);
    let bare = BreakpointSet::new("Bare", vec![BreakpointOption::new("Desktop", "desktop", vec![])]);
    let config = Configuration::new(vec![], vec![set, bare]);
    assert_eq!(kinds(&config), vec![IssueKind::NoBreakpoints, IssueKind::NoSizeOptions]);
}

#[test]
fn colliding_ids_are_reported_on_the_later_entity() {
    let mut config = valid_config();
    let mut second = BreakpointSet::new(
        "Other",
        vec![BreakpointOption::new("All", "all", vec![SizeOption::new("Full", "12")])],
    );
    second.rename("Breakpoints-1");
    let second_uid = second.uid.clone();
    config.breakpoints.push(second);

    let issues = validate(&config);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].uid, second_uid);
    assert_eq!(
        issues[0].kind,
        IssueKind::DuplicateId {
            id: "breakpoints-1".into()
        }
    );
}

#[test]
fn issue_display_names_the_problem() {
    let mut config = valid_config();
    config.presets[0].breakpoints = "gone".into();
    let message = validate(&config)[0].to_string();
    assert!(message.contains("\"gone\""));
}
