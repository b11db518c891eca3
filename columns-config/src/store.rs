//! Operations over the configuration aggregate.
//!
//! Every function takes the current state and returns the next one; the input
//! is never modified. Index arguments out of range leave the state unchanged.
//! Replacements are not re-validated: sub-editors keep the invariants, and
//! [`columns_model::validate`] reports what they miss.

use columns_model::{BreakpointSet, Configuration, ContentType, NamingConfig, Preset};
use columns_types::{probe_numbered_name, slugify};
use tracing::{debug, warn};

/// The document written on first install: `Preset 1` bound to `Breakpoints 1`.
pub fn initial_configuration(catalog: &[ContentType]) -> Configuration {
    add_preset(&Configuration::default(), catalog)
}

pub fn add_breakpoint_set(config: &Configuration) -> Configuration {
    add_breakpoint_set_with(config, &NamingConfig::default())
}

/// Appends `"<prefix> <n>"` seeded with the default breakpoints. `n` starts at
/// the collection length plus one and moves up past names already in use.
pub fn add_breakpoint_set_with(config: &Configuration, naming: &NamingConfig) -> Configuration {
    let name = probe_numbered_name(&naming.breakpoints_prefix, config.breakpoints.len() + 1, |n| {
        config.breakpoints.iter().any(|b| b.name == n)
    });
    let set = BreakpointSet::with_defaults(name);
    debug!("Adding breakpoint set {}", set.id);

    let mut next = config.clone();
    next.breakpoints.push(set);
    next
}

pub fn add_preset(config: &Configuration, catalog: &[ContentType]) -> Configuration {
    add_preset_with(config, catalog, &NamingConfig::default())
}

/// Appends `"<prefix> <n>"` accepting every known content type and bound to
/// the first breakpoint set. With no sets, a default set is added first.
pub fn add_preset_with(config: &Configuration, catalog: &[ContentType], naming: &NamingConfig) -> Configuration {
    let mut next = if config.breakpoints.is_empty() {
        add_breakpoint_set_with(config, naming)
    } else {
        config.clone()
    };

    let name = probe_numbered_name(&naming.preset_prefix, next.presets.len() + 1, |n| {
        next.presets.iter().any(|p| p.name == n)
    });
    let breakpoints = next.breakpoints[0].id.clone();
    let accepted = catalog.iter().map(|c| c.id.clone()).collect();
    let preset = Preset::new(name, accepted, breakpoints);
    debug!("Adding preset {} -> {}", preset.id, preset.breakpoints);

    next.presets.push(preset);
    next
}

pub fn update_preset(config: &Configuration, index: usize, preset: Preset) -> Configuration {
    let mut next = config.clone();
    match next.presets.get_mut(index) {
        Some(slot) => *slot = preset,
        None => debug!("Ignoring update of preset {} (out of range)", index),
    }
    next
}

/// Replaces the set at `index`. A changed id strands presets that referenced
/// the old one; they keep the stale id until re-linked.
pub fn update_breakpoint_set(config: &Configuration, index: usize, set: BreakpointSet) -> Configuration {
    let mut next = config.clone();
    let Some(slot) = next.breakpoints.get_mut(index) else {
        debug!("Ignoring update of breakpoint set {} (out of range)", index);
        return next;
    };

    if slot.id != set.id {
        let stranded = config.presets_referencing(&slot.id).count();
        if stranded > 0 {
            warn!(
                "Breakpoint set {} renamed to {}; {} preset(s) still reference the old id",
                slot.id, set.id, stranded
            );
        }
    }
    *slot = set;
    next
}

pub fn delete_preset(config: &Configuration, index: usize) -> Configuration {
    let mut next = config.clone();
    if index < next.presets.len() {
        let removed = next.presets.remove(index);
        debug!("Deleted preset {}", removed.id);
    }
    next
}

/// Removes the set at `index`. Presets referencing it are left untouched.
pub fn delete_breakpoint_set(config: &Configuration, index: usize) -> Configuration {
    let mut next = config.clone();
    if index < next.breakpoints.len() {
        let removed = next.breakpoints.remove(index);
        let dangling = next.presets_referencing(&removed.id).count();
        debug!("Deleted breakpoint set {} ({} preset(s) now dangling)", removed.id, dangling);
    }
    next
}

/// Appends a copy of the preset named `"<name> copy"` (then `copy 2`, ...).
pub fn duplicate_preset(config: &Configuration, index: usize) -> Configuration {
    let Some(source) = config.presets.get(index) else {
        return config.clone();
    };
    let name = copy_name(&source.name, |n| config.presets.iter().any(|p| p.name == n));
    let copy = source.copy_as(&name);

    let mut next = config.clone();
    next.presets.push(copy);
    next
}

/// Appends a deep copy of the set with fresh uids throughout.
pub fn duplicate_breakpoint_set(config: &Configuration, index: usize) -> Configuration {
    let Some(source) = config.breakpoints.get(index) else {
        return config.clone();
    };
    let name = copy_name(&source.name, |n| config.breakpoints.iter().any(|b| b.name == n));
    let mut copy = source.deep_copy();
    copy.id = slugify(&name);
    copy.name = name;

    let mut next = config.clone();
    next.breakpoints.push(copy);
    next
}

fn copy_name(name: &str, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{name} copy");
    if !taken(&base) {
        return base;
    }
    probe_numbered_name(&base, 2, taken)
}

/// Content types the preset accepts; empty when the preset is unknown.
pub fn accepted_content_types<'a>(config: &'a Configuration, preset_id: &str) -> &'a [String] {
    config
        .preset(preset_id)
        .map(|p| p.accepted_content_types.as_slice())
        .unwrap_or_default()
}

/// Breakpoints offered for column size selection; empty when the set is unknown.
pub fn breakpoint_options<'a>(
    config: &'a Configuration,
    set_id: &str,
) -> &'a [columns_model::BreakpointOption] {
    config
        .breakpoint_set(set_id)
        .map(|s| s.breakpoints.as_slice())
        .unwrap_or_default()
}
