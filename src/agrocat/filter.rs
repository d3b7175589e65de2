//! Filter values and per-key predicates.
//!
//! Every listing view exposes a handful of filter controls (category radios,
//! a rating threshold, a price range, flag toggles, tag chips). Each control
//! owns one key in a [`FilterState`] and is backed by one [`FilterDef`] in the
//! catalog's schema. Instead of a bespoke filter function per page, the
//! pipeline looks up the definition for each key and asks it whether an item
//! passes.
//!
//! Values that carry no constraint (`All`, a zero threshold, an unset flag, an
//! empty tag set) are *inactive*: their predicate is never consulted.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Shape of value a filter key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Single-select among named options (category, level, price tier).
    Exact,
    /// Numeric lower bound (rating >= N).
    Threshold,
    /// Inclusive numeric range `[min, max]`.
    Range,
    /// Boolean toggle; only `true` constrains.
    Flag,
    /// Multi-select tags; an item passes when it shares at least one.
    Tags,
}

impl FilterKind {
    /// Syntax hint shown next to the key in help output.
    pub fn syntax(&self) -> &'static str {
        match self {
            FilterKind::Exact => "<option>|all",
            FilterKind::Threshold => "<min>",
            FilterKind::Range => "<min>..<max>",
            FilterKind::Flag => "true|false",
            FilterKind::Tags => "<tag>[,<tag>...]",
        }
    }
}

/// Current value of one filter control.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilterValue {
    /// No constraint.
    #[default]
    All,
    Exact(String),
    AtLeast(f64),
    Range { min: f64, max: f64 },
    Flag(bool),
    Tags(BTreeSet<String>),
}

static ALL: FilterValue = FilterValue::All;

impl FilterValue {
    pub fn exact(value: impl Into<String>) -> Self {
        FilterValue::Exact(value.into())
    }

    pub fn range(min: f64, max: f64) -> Self {
        FilterValue::Range { min, max }
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Tags(tags.into_iter().map(Into::into).collect())
    }

    /// The kind this value belongs to. `All` fits every kind.
    pub fn kind(&self) -> Option<FilterKind> {
        match self {
            FilterValue::All => None,
            FilterValue::Exact(_) => Some(FilterKind::Exact),
            FilterValue::AtLeast(_) => Some(FilterKind::Threshold),
            FilterValue::Range { .. } => Some(FilterKind::Range),
            FilterValue::Flag(_) => Some(FilterKind::Flag),
            FilterValue::Tags(_) => Some(FilterKind::Tags),
        }
    }

    /// Whether this value differs from its no-op default.
    ///
    /// A range is always active, including an inverted one (which then
    /// rejects every item).
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::All => false,
            FilterValue::Exact(s) => {
                let s = s.trim();
                !s.is_empty() && !s.eq_ignore_ascii_case("all")
            }
            FilterValue::AtLeast(n) => *n > 0.0,
            FilterValue::Range { .. } => true,
            FilterValue::Flag(on) => *on,
            FilterValue::Tags(tags) => !tags.is_empty(),
        }
    }

    /// Parses the textual form used on the command line for a key of `kind`.
    ///
    /// `all` (or an empty string) always yields [`FilterValue::All`].
    pub fn parse(kind: FilterKind, raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(FilterValue::All);
        }

        match kind {
            FilterKind::Exact => Ok(FilterValue::Exact(raw.to_string())),
            FilterKind::Threshold => parse_number(raw).map(FilterValue::AtLeast),
            FilterKind::Range => {
                let (min, max) = raw
                    .split_once("..")
                    .ok_or_else(|| format!("expected <min>..<max>, got \"{}\"", raw))?;
                let min = if min.trim().is_empty() {
                    f64::NEG_INFINITY
                } else {
                    parse_number(min)?
                };
                let max = if max.trim().is_empty() {
                    f64::INFINITY
                } else {
                    parse_number(max)?
                };
                Ok(FilterValue::Range { min, max })
            }
            FilterKind::Flag => match raw.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(FilterValue::Flag(true)),
                "false" | "no" | "off" | "0" => Ok(FilterValue::Flag(false)),
                other => Err(format!("expected true or false, got \"{}\"", other)),
            },
            FilterKind::Tags => Ok(FilterValue::tags(
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            )),
        }
    }
}

fn parse_number(raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("expected a number, got \"{}\"", raw)),
    }
}

/// Filter key -> current value for one listing view.
///
/// Missing keys read as [`FilterValue::All`]. Setting a key back to `All`
/// drops it, so two states with the same constraints compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterState::set`].
    pub fn with(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> &FilterValue {
        self.values.get(key).unwrap_or(&ALL)
    }

    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        let key = key.into();
        if value == FilterValue::All {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Adds `tag` to the tag set under `key`, or removes it if already present.
    pub fn toggle_tag(&mut self, key: &str, tag: &str) {
        let mut tags = match self.values.remove(key) {
            Some(FilterValue::Tags(tags)) => tags,
            _ => BTreeSet::new(),
        };
        if !tags.remove(tag) {
            tags.insert(tag.to_string());
        }
        if !tags.is_empty() {
            self.values.insert(key.to_string(), FilterValue::Tags(tags));
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Item-level test behind one filter key.
pub type Predicate<T> = fn(&T, &FilterValue) -> bool;

/// Declaration of one filter control for a catalog of `T`.
pub struct FilterDef<T: 'static> {
    /// Key used in [`FilterState`] and on the command line.
    pub key: &'static str,
    /// Human label for help output.
    pub label: &'static str,
    pub kind: FilterKind,
    /// Selectable values for exact-match keys (empty otherwise).
    pub options: &'static [&'static str],
    predicate: Predicate<T>,
}

impl<T: 'static> FilterDef<T> {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        kind: FilterKind,
        predicate: Predicate<T>,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            options: &[],
            predicate,
        }
    }

    /// Set the selectable options.
    pub const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    /// Whether `value` constrains this key: it must be active and of the
    /// key's kind. Anything else is inert.
    pub fn is_effective(&self, value: &FilterValue) -> bool {
        value.is_active() && value.kind() == Some(self.kind)
    }

    /// Check whether `item` passes this filter under `value`.
    ///
    /// Inert values always pass.
    pub fn matches(&self, item: &T, value: &FilterValue) -> bool {
        if !self.is_effective(value) {
            return true;
        }
        (self.predicate)(item, value)
    }
}

/// Case-insensitive equality against an exact-match value.
pub fn exact_eq(field: &str, value: &FilterValue) -> bool {
    match value {
        FilterValue::Exact(wanted) => field.trim().to_lowercase() == wanted.trim().to_lowercase(),
        _ => true,
    }
}

/// Lower bound check for threshold values.
pub fn at_least(field: f64, value: &FilterValue) -> bool {
    match value {
        FilterValue::AtLeast(min) => field >= *min,
        _ => true,
    }
}

/// Inclusive range check. An inverted range (`min > max`) rejects everything.
pub fn in_range(field: f64, value: &FilterValue) -> bool {
    match value {
        FilterValue::Range { min, max } => *min <= field && field <= *max,
        _ => true,
    }
}

/// A raised flag requires the field to be set.
pub fn flag_set(field: bool, value: &FilterValue) -> bool {
    match value {
        FilterValue::Flag(true) => field,
        _ => true,
    }
}

/// Item tags must share at least one tag with the selection (case-insensitive).
pub fn tags_intersect(item_tags: &[String], value: &FilterValue) -> bool {
    match value {
        FilterValue::Tags(wanted) => item_tags.iter().any(|tag| {
            wanted
                .iter()
                .any(|w| w.trim().to_lowercase() == tag.trim().to_lowercase())
        }),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Crop {
        kind: String,
        yield_t: f64,
        irrigated: bool,
        tags: Vec<String>,
    }

    fn crop(kind: &str, yield_t: f64, irrigated: bool, tags: &[&str]) -> Crop {
        Crop {
            kind: kind.to_string(),
            yield_t,
            irrigated,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn kind_matches(c: &Crop, v: &FilterValue) -> bool {
        exact_eq(&c.kind, v)
    }

    fn yield_at_least(c: &Crop, v: &FilterValue) -> bool {
        at_least(c.yield_t, v)
    }

    fn yield_in_range(c: &Crop, v: &FilterValue) -> bool {
        in_range(c.yield_t, v)
    }

    fn is_irrigated(c: &Crop, v: &FilterValue) -> bool {
        flag_set(c.irrigated, v)
    }

    fn has_tags(c: &Crop, v: &FilterValue) -> bool {
        tags_intersect(&c.tags, v)
    }

    const KIND: FilterDef<Crop> =
        FilterDef::new("kind", "Kind", FilterKind::Exact, kind_matches).options(&["Mil", "Sorgho"]);
    const YIELD: FilterDef<Crop> =
        FilterDef::new("yield", "Yield", FilterKind::Threshold, yield_at_least);
    const YIELD_RANGE: FilterDef<Crop> =
        FilterDef::new("yield_range", "Yield", FilterKind::Range, yield_in_range);
    const IRRIGATED: FilterDef<Crop> =
        FilterDef::new("irrigated", "Irrigated", FilterKind::Flag, is_irrigated);
    const TAGS: FilterDef<Crop> = FilterDef::new("tags", "Tags", FilterKind::Tags, has_tags);

    #[test]
    fn inactive_values() {
        assert!(!FilterValue::All.is_active());
        assert!(!FilterValue::exact("all").is_active());
        assert!(!FilterValue::exact("ALL").is_active());
        assert!(!FilterValue::exact("  ").is_active());
        assert!(!FilterValue::AtLeast(0.0).is_active());
        assert!(!FilterValue::Flag(false).is_active());
        assert!(!FilterValue::Tags(BTreeSet::new()).is_active());
    }

    #[test]
    fn active_values() {
        assert!(FilterValue::exact("Mil").is_active());
        assert!(FilterValue::AtLeast(3.5).is_active());
        assert!(FilterValue::Flag(true).is_active());
        assert!(FilterValue::tags(["bio"]).is_active());
        assert!(FilterValue::range(5.0, 1.0).is_active());
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let value = FilterValue::exact("mil");
        assert!(KIND.matches(&crop("Mil", 1.0, false, &[]), &value));
        assert!(!KIND.matches(&crop("Sorgho", 1.0, false, &[]), &value));
    }

    #[test]
    fn threshold_is_inclusive() {
        let value = FilterValue::AtLeast(2.0);
        assert!(YIELD.matches(&crop("Mil", 2.0, false, &[]), &value));
        assert!(!YIELD.matches(&crop("Mil", 1.9, false, &[]), &value));
    }

    #[test]
    fn range_is_inclusive() {
        let value = FilterValue::range(1.0, 2.0);
        assert!(YIELD_RANGE.matches(&crop("Mil", 1.0, false, &[]), &value));
        assert!(YIELD_RANGE.matches(&crop("Mil", 2.0, false, &[]), &value));
        assert!(!YIELD_RANGE.matches(&crop("Mil", 2.1, false, &[]), &value));
    }

    #[test]
    fn inverted_range_rejects_everything() {
        let value = FilterValue::range(3.0, 1.0);
        for y in [0.0, 1.0, 2.0, 3.0, 4.0] {
            assert!(!YIELD_RANGE.matches(&crop("Mil", y, false, &[]), &value));
        }
    }

    #[test]
    fn flag_only_constrains_when_raised() {
        let dry = crop("Mil", 1.0, false, &[]);
        assert!(!IRRIGATED.matches(&dry, &FilterValue::Flag(true)));
        assert!(IRRIGATED.matches(&dry, &FilterValue::Flag(false)));
    }

    #[test]
    fn tags_need_non_empty_intersection() {
        let value = FilterValue::tags(["bio", "local"]);
        assert!(TAGS.matches(&crop("Mil", 1.0, false, &["Local"]), &value));
        assert!(!TAGS.matches(&crop("Mil", 1.0, false, &["export"]), &value));
        assert!(!TAGS.matches(&crop("Mil", 1.0, false, &[]), &value));
    }

    #[test]
    fn mismatched_kind_is_inert() {
        let sorgho = crop("Sorgho", 1.0, false, &[]);
        assert!(!KIND.is_effective(&FilterValue::AtLeast(4.0)));
        assert!(KIND.matches(&sorgho, &FilterValue::AtLeast(4.0)));
        assert!(YIELD.matches(&sorgho, &FilterValue::exact("high")));
    }

    #[test]
    fn parse_by_kind() {
        assert_eq!(
            FilterValue::parse(FilterKind::Exact, " Débutant "),
            Ok(FilterValue::exact("Débutant"))
        );
        assert_eq!(
            FilterValue::parse(FilterKind::Threshold, "4.5"),
            Ok(FilterValue::AtLeast(4.5))
        );
        assert_eq!(
            FilterValue::parse(FilterKind::Range, "2..10"),
            Ok(FilterValue::range(2.0, 10.0))
        );
        assert_eq!(
            FilterValue::parse(FilterKind::Flag, "yes"),
            Ok(FilterValue::Flag(true))
        );
        assert_eq!(
            FilterValue::parse(FilterKind::Tags, "bio, local,,"),
            Ok(FilterValue::tags(["bio", "local"]))
        );
    }

    #[test]
    fn parse_open_range() {
        assert_eq!(
            FilterValue::parse(FilterKind::Range, "..5"),
            Ok(FilterValue::range(f64::NEG_INFINITY, 5.0))
        );
        assert_eq!(
            FilterValue::parse(FilterKind::Range, "3.."),
            Ok(FilterValue::range(3.0, f64::INFINITY))
        );
    }

    #[test]
    fn parse_all_clears_any_kind() {
        for kind in [
            FilterKind::Exact,
            FilterKind::Threshold,
            FilterKind::Range,
            FilterKind::Flag,
            FilterKind::Tags,
        ] {
            assert_eq!(FilterValue::parse(kind, "all"), Ok(FilterValue::All));
        }
    }

    #[test]
    fn parse_errors() {
        assert!(FilterValue::parse(FilterKind::Threshold, "high").is_err());
        assert!(FilterValue::parse(FilterKind::Threshold, "inf").is_err());
        assert!(FilterValue::parse(FilterKind::Range, "5").is_err());
        assert!(FilterValue::parse(FilterKind::Flag, "maybe").is_err());
    }

    #[test]
    fn state_missing_key_reads_all() {
        let state = FilterState::new();
        assert_eq!(state.get("level"), &FilterValue::All);
    }

    #[test]
    fn state_setting_all_removes_key() {
        let mut state = FilterState::new().with("level", FilterValue::exact("Avancé"));
        assert!(!state.is_empty());
        state.set("level", FilterValue::All);
        assert!(state.is_empty());
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn state_toggle_tag() {
        let mut state = FilterState::new();
        state.toggle_tag("tags", "bio");
        state.toggle_tag("tags", "local");
        assert_eq!(state.get("tags"), &FilterValue::tags(["bio", "local"]));

        state.toggle_tag("tags", "bio");
        assert_eq!(state.get("tags"), &FilterValue::tags(["local"]));

        state.toggle_tag("tags", "local");
        assert!(state.is_empty());
    }
}
