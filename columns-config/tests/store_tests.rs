use columns_config::store::{
    accepted_content_types, add_breakpoint_set, add_preset, breakpoint_options, delete_breakpoint_set,
    delete_preset, duplicate_breakpoint_set, duplicate_preset, initial_configuration, update_breakpoint_set,
    update_preset,
};
use columns_model::{Configuration, ContentType, NamingConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn catalog() -> Vec<ContentType> {
    vec![ContentType::new("article", "Article"), ContentType::new("hero", "Hero")]
}

// ── Initial document ─────────────────────────────────────────────

#[test]
fn initial_configuration_links_preset_to_first_set() {
    let config = initial_configuration(&catalog());
    assert_eq!(config.breakpoints.len(), 1);
    assert_eq!(config.breakpoints[0].name, "Breakpoints 1");
    assert_eq!(config.presets.len(), 1);
    assert_eq!(config.presets[0].name, "Preset 1");
    assert_eq!(config.presets[0].id, "preset-1");
    assert_eq!(config.presets[0].breakpoints, "breakpoints-1");
    assert_eq!(config.presets[0].accepted_content_types, ["article", "hero"]);
}

// ── Adding ───────────────────────────────────────────────────────

#[test]
fn second_breakpoint_set_is_numbered_two() {
    let config = add_breakpoint_set(&Configuration::default());
    assert_eq!(config.breakpoints[0].name, "Breakpoints 1");

    let config = add_breakpoint_set(&config);
    assert_eq!(config.breakpoints[1].name, "Breakpoints 2");
    assert_eq!(config.breakpoints[1].id, "breakpoints-2");
    assert_eq!(config.breakpoints[1].breakpoints.len(), 3);
}

#[test]
fn add_does_not_mutate_input() {
    let before = initial_configuration(&catalog());
    let after = add_breakpoint_set(&before);
    assert_eq!(before.breakpoints.len(), 1);
    assert_eq!(after.breakpoints.len(), 2);
}

#[test]
fn add_probes_past_gap_left_by_delete() {
    let config = add_breakpoint_set(&add_breakpoint_set(&add_breakpoint_set(&Configuration::default())));
    // Remove "Breakpoints 1": two remain, so probing starts at 3, which is taken.
    let config = delete_breakpoint_set(&config, 0);
    let config = add_breakpoint_set(&config);
    let names: Vec<_> = config.breakpoints.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Breakpoints 2", "Breakpoints 3", "Breakpoints 4"]);
}

#[test]
fn add_preset_defaults_to_first_set_and_whole_catalog() {
    let config = add_breakpoint_set(&initial_configuration(&[]));
    let config = add_preset(&config, &catalog());
    let preset = &config.presets[1];
    assert_eq!(preset.name, "Preset 2");
    assert_eq!(preset.breakpoints, config.breakpoints[0].id);
    assert_eq!(preset.accepted_content_types, ["article", "hero"]);
}

#[test]
fn add_preset_without_sets_synthesizes_one() {
    let config = add_preset(&Configuration::default(), &[]);
    assert_eq!(config.breakpoints.len(), 1);
    assert_eq!(config.presets[0].breakpoints, config.breakpoints[0].id);
    assert!(config.presets[0].accepted_content_types.is_empty());
}

#[test]
fn add_uses_configured_prefixes() {
    let naming = NamingConfig {
        preset_prefix: "Layout".into(),
        breakpoints_prefix: "Grid".into(),
        ..NamingConfig::default()
    };
    let config = columns_config::store::add_preset_with(&Configuration::default(), &[], &naming);
    assert_eq!(config.presets[0].name, "Layout 1");
    assert_eq!(config.breakpoints[0].id, "grid-1");
}

// ── Update & delete ──────────────────────────────────────────────

#[test]
fn update_replaces_at_index() {
    let config = initial_configuration(&catalog());
    let mut preset = config.presets[0].clone();
    preset.clear();
    let config = update_preset(&config, 0, preset);
    assert!(config.presets[0].accepted_content_types.is_empty());
}

#[test]
fn update_out_of_range_is_noop() {
    let config = initial_configuration(&catalog());
    let preset = config.presets[0].clone();
    assert_eq!(update_preset(&config, 5, preset), config);
    let set = config.breakpoints[0].clone();
    assert_eq!(update_breakpoint_set(&config, 5, set), config);
}

#[test]
fn rename_does_not_migrate_preset_reference() {
    let config = initial_configuration(&catalog());
    let mut set = config.breakpoints[0].clone();
    set.rename("Landing");
    let config = update_breakpoint_set(&config, 0, set);
    assert_eq!(config.breakpoints[0].id, "landing");
    assert_eq!(config.presets[0].breakpoints, "breakpoints-1");
}

#[test]
fn deleting_referenced_set_leaves_preset_pointing_at_it() {
    let config = initial_configuration(&catalog());
    let config = delete_breakpoint_set(&config, 0);
    assert!(config.breakpoints.is_empty());
    assert_eq!(config.presets[0].breakpoints, "breakpoints-1");
}

#[test]
fn delete_out_of_range_is_noop() {
    let config = initial_configuration(&catalog());
    assert_eq!(delete_preset(&config, 3), config);
    assert_eq!(delete_breakpoint_set(&config, 3), config);
}

// ── Duplicate ────────────────────────────────────────────────────

#[test]
fn duplicate_set_gets_copy_name_and_fresh_uids() {
    let config = initial_configuration(&catalog());
    let config = duplicate_breakpoint_set(&config, 0);
    let (source, copy) = (&config.breakpoints[0], &config.breakpoints[1]);
    assert_eq!(copy.name, "Breakpoints 1 copy");
    assert_eq!(copy.id, "breakpoints-1-copy");
    assert_ne!(copy.uid, source.uid);
    assert_ne!(copy.breakpoints[0].uid, source.breakpoints[0].uid);
    assert_eq!(copy.breakpoints[0].value, source.breakpoints[0].value);

    let config = duplicate_breakpoint_set(&config, 0);
    assert_eq!(config.breakpoints[2].name, "Breakpoints 1 copy 2");
}

#[test]
fn duplicate_preset_keeps_reference() {
    let config = duplicate_preset(&initial_configuration(&catalog()), 0);
    assert_eq!(config.presets[1].name, "Preset 1 copy");
    assert_eq!(config.presets[1].breakpoints, config.presets[0].breakpoints);
    assert_eq!(duplicate_preset(&config, 9), config);
}

// ── Read models ──────────────────────────────────────────────────

#[test]
fn read_models_resolve_or_empty() {
    let config = initial_configuration(&catalog());
    assert_eq!(accepted_content_types(&config, "preset-1"), ["article", "hero"]);
    assert!(accepted_content_types(&config, "nope").is_empty());
    assert_eq!(breakpoint_options(&config, "breakpoints-1").len(), 3);
    assert!(breakpoint_options(&config, "nope").is_empty());
}

// ── Name uniqueness under arbitrary edits ────────────────────────

#[derive(Debug, Clone)]
enum Op {
    AddSet,
    AddPreset,
    DeleteSet(usize),
    DeletePreset(usize),
    RenameSet(usize, u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::AddSet),
        3 => Just(Op::AddPreset),
        1 => (0usize..8).prop_map(Op::DeleteSet),
        1 => (0usize..8).prop_map(Op::DeletePreset),
        1 => (0usize..8, 1u8..6).prop_map(|(i, n)| Op::RenameSet(i, n)),
    ]
}

proptest! {
    #[test]
    fn generated_names_are_never_duplicated(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut config = Configuration::default();
        for op in ops {
            match op {
                Op::AddSet => {
                    config = add_breakpoint_set(&config);
                    let added = config.breakpoints.last().unwrap();
                    let same = config.breakpoints.iter().filter(|b| b.name == added.name).count();
                    prop_assert_eq!(same, 1);
                }
                Op::AddPreset => {
                    config = add_preset(&config, &[]);
                    let added = config.presets.last().unwrap();
                    let same = config.presets.iter().filter(|p| p.name == added.name).count();
                    prop_assert_eq!(same, 1);
                }
                Op::DeleteSet(i) => config = delete_breakpoint_set(&config, i),
                Op::DeletePreset(i) => config = delete_preset(&config, i),
                Op::RenameSet(i, n) => {
                    if let Some(mut set) = config.breakpoints.get(i).cloned() {
                        set.rename(&format!("Breakpoints {n}"));
                        config = update_breakpoint_set(&config, i, set);
                    }
                }
            }
        }
    }
}
