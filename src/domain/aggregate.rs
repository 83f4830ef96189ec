// Grouped counts and the three chart aggregates
use super::table::{FilteredView, WarningTable};
use super::warning::WarningRecord;
use std::collections::HashMap;
use std::hash::Hash;

/// Row counts per grouping key, in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCounts<K> {
    groups: Vec<(K, usize)>,
}

impl<K> GroupCounts<K>
where
    K: Eq + Hash + Clone,
{
    pub fn from_rows<'r, I, F>(rows: I, key: F) -> Self
    where
        I: IntoIterator<Item = &'r WarningRecord>,
        F: Fn(&WarningRecord) -> K,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<(K, usize)> = Vec::new();

        for row in rows {
            let k = key(row);
            match index.get(&k) {
                Some(&slot) => groups[slot].1 += 1,
                None => {
                    index.insert(k.clone(), groups.len());
                    groups.push((k, 1));
                }
            }
        }

        Self { groups }
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }
}

impl<K> GroupCounts<K> {
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.groups.iter().map(|(k, count)| (k, *count))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all group counts; equals the number of grouped rows.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, count)| count).sum()
    }
}

/// (awareness type, start time) grouping key.
pub type TypeTimeKey = (String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSeries {
    /// Per type and start time, over the filtered view.
    pub by_type_and_time: GroupCounts<TypeTimeKey>,
    /// Per start time, over the whole table.
    pub by_time: GroupCounts<String>,
    /// Per awareness level, over the whole table.
    pub by_level: GroupCounts<String>,
}

pub struct AlertAggregator;

impl AlertAggregator {
    pub fn compute(table: &WarningTable, view: &FilteredView<'_>) -> AggregateSeries {
        AggregateSeries {
            by_type_and_time: Self::by_type_and_time(view),
            by_time: Self::by_time(table),
            by_level: Self::by_level(table),
        }
    }

    pub fn by_type_and_time(view: &FilteredView<'_>) -> GroupCounts<TypeTimeKey> {
        view.group_count(|r| (r.awareness_type_name.clone(), r.start_time.clone()))
    }

    pub fn by_time(table: &WarningTable) -> GroupCounts<String> {
        table.group_count(|r| r.start_time.clone())
    }

    pub fn by_level(table: &WarningTable) -> GroupCounts<String> {
        table.group_count(|r| r.awareness_level_id.clone())
    }
}
