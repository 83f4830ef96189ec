// Warning table - tabular model of one feed snapshot
use super::aggregate::GroupCounts;
use super::warning::WarningRecord;
use std::collections::BTreeSet;
use std::hash::Hash;

/// Columns that can be listed as filter choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    AwarenessType,
    AwarenessLevel,
    AreaId,
}

impl Column {
    fn value<'a>(&self, record: &'a WarningRecord) -> Option<&'a str> {
        match self {
            Column::AwarenessType => Some(record.awareness_type_name.as_str()),
            Column::AwarenessLevel => Some(record.awareness_level_id.as_str()),
            Column::AreaId => record.area_id.as_deref(),
        }
    }
}

/// User selection on the two filter dimensions.
///
/// An empty set excludes every row on that dimension; it does not mean
/// "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub types: BTreeSet<String>,
    pub levels: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<T, L>(types: T, levels: L) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, record: &WarningRecord) -> bool {
        self.types.contains(&record.awareness_type_name)
            && self.levels.contains(&record.awareness_level_id)
    }
}

/// Rows of a [`WarningTable`] that passed a [`FilterSelection`], in feed order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<&'a WarningRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a WarningRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn group_count<K, F>(&self, key: F) -> GroupCounts<K>
    where
        K: Eq + Hash + Clone,
        F: Fn(&WarningRecord) -> K,
    {
        GroupCounts::from_rows(self.rows.iter().copied(), key)
    }
}

/// All warning records of one feed snapshot, in feed order.
///
/// Never mutated after construction; a refresh builds a new table.
#[derive(Debug, Clone, Default)]
pub struct WarningTable {
    records: Vec<WarningRecord>,
}

impl WarningTable {
    pub fn new(records: Vec<WarningRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WarningRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn distinct_values(&self, column: Column) -> BTreeSet<String> {
        self.records
            .iter()
            .filter_map(|r| column.value(r))
            .map(str::to_string)
            .collect()
    }

    pub fn filter(&self, selection: &FilterSelection) -> FilteredView<'_> {
        if selection.types.is_empty() || selection.levels.is_empty() {
            return FilteredView { rows: Vec::new() };
        }

        FilteredView {
            rows: self.records.iter().filter(|r| selection.matches(r)).collect(),
        }
    }

    pub fn group_count<K, F>(&self, key: F) -> GroupCounts<K>
    where
        K: Eq + Hash + Clone,
        F: Fn(&WarningRecord) -> K,
    {
        GroupCounts::from_rows(self.records.iter(), key)
    }
}
