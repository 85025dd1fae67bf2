//! Derived views over a registry snapshot
//!
//! Pure functions, recomputed on every access; nothing here is cached or
//! incrementally maintained.

use std::collections::{BTreeMap, HashMap};

use crate::domain::Activity;

/// All activities ordered ascending by parsed date.
///
/// Ties on the date are broken by id so the ordering is deterministic
/// regardless of registry iteration order. Unparseable dates sort first.
pub fn activities_by_date(registry: &HashMap<String, Activity>) -> Vec<Activity> {
    let mut activities: Vec<Activity> = registry.values().cloned().collect();
    activities.sort_by(|a, b| {
        a.parsed_date()
            .cmp(&b.parsed_date())
            .then_with(|| a.id.cmp(&b.id))
    });
    activities
}

/// Activities grouped by date string, with each group's members in the
/// same order as [`activities_by_date`].
pub fn grouped_activities(registry: &HashMap<String, Activity>) -> BTreeMap<String, Vec<Activity>> {
    let mut groups: BTreeMap<String, Vec<Activity>> = BTreeMap::new();
    for activity in activities_by_date(registry) {
        groups.entry(activity.date.clone()).or_default().push(activity);
    }
    groups
}
