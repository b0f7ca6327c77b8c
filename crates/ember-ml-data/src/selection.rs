use crate::dataset::ColumnStore;

/// A column identifier: either a literal header name or a zero-based
/// position. Selection calls accept heterogeneous sequences of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnId {
    Name(String),
    Index(usize),
}

impl From<&str> for ColumnId {
    fn from(name: &str) -> Self {
        ColumnId::Name(name.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(name: String) -> Self {
        ColumnId::Name(name)
    }
}

impl From<usize> for ColumnId {
    fn from(index: usize) -> Self {
        ColumnId::Index(index)
    }
}

/// Partition of the store's columns into a target (at most one) and an
/// order-significant feature list. Nothing is auto-selected. Read through
/// [`ColumnStore::target`] and [`ColumnStore::feature_indices`].
#[derive(Debug, Default, Clone)]
pub(crate) struct Selection {
    pub(crate) target: Option<usize>,
    pub(crate) features: Vec<usize>,
}

impl ColumnStore {
    fn resolve(&self, id: &ColumnId) -> Option<usize> {
        match id {
            ColumnId::Name(name) => self.index_of(name),
            ColumnId::Index(i) => (*i < self.column_count()).then_some(*i),
        }
    }

    /// Designates the target column. An identifier that does not resolve
    /// (unknown name, out-of-range index) clears the target instead. A
    /// target that collides with already-selected features removes every
    /// occurrence of that index from the feature list; the target never
    /// doubles as a feature.
    pub fn select_target(&mut self, id: impl Into<ColumnId>) -> &mut Self {
        match self.resolve(&id.into()) {
            Some(i) => {
                self.selection.features.retain(|&f| f != i);
                self.selection.target = Some(i);
            }
            None => self.selection.target = None,
        }
        self
    }

    /// Appends feature columns in input order. Identifiers that resolve to
    /// the current target, fail to resolve, or fall out of range are
    /// silently skipped. Repeated calls accumulate; duplicates are legal.
    pub fn select_features<I>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnId>,
    {
        for id in ids {
            match self.resolve(&id.into()) {
                Some(i) if Some(i) != self.selection.target => {
                    self.selection.features.push(i)
                }
                _ => {}
            }
        }
        self
    }

    /// Index of the selected target column, if any.
    pub fn target(&self) -> Option<usize> {
        self.selection.target
    }

    /// Selected feature column indices, in selection order.
    pub fn feature_indices(&self) -> &[usize] {
        &self.selection.features
    }

    /// Gathers the feature values at `row` in **reverse selection order**.
    /// The reversal is a load-bearing compatibility quirk: models train on
    /// this ordering, so prediction inputs must follow it too. Missing
    /// cells read as 0.
    pub fn feature_row(&self, row: usize) -> Vec<f64> {
        self.selection
            .features
            .iter()
            .rev()
            .map(|&i| self.columns[i].get(row).unwrap_or(0.0))
            .collect()
    }

    /// Target value at `row`, missing cells reading as 0 (mirrors
    /// [`feature_row`](ColumnStore::feature_row)). `None` when no target
    /// is selected.
    pub fn target_value(&self, row: usize) -> Option<f64> {
        self.selection
            .target
            .map(|t| self.columns[t].get(row).unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn store() -> ColumnStore {
        ColumnStore::from_reader(Cursor::new("a,b,c,goal\n1,2,3,10\n4,,6,20\n".to_string()))
            .unwrap()
    }

    #[test]
    fn select_by_name_and_index() {
        let mut d = store();
        d.select_features(vec![ColumnId::from("a"), ColumnId::from(2usize)])
            .select_target("goal");
        assert_eq!(d.feature_indices(), &[0, 2]);
        assert_eq!(d.target(), Some(3));
    }

    #[test]
    fn invalid_identifiers_are_skipped() {
        let mut d = store();
        d.select_features(vec![
            ColumnId::from("a"),
            ColumnId::from("nope"),
            ColumnId::from(99usize),
        ]);
        assert_eq!(d.feature_indices(), &[0]);
    }

    #[test]
    fn target_cannot_be_selected_as_feature() {
        let mut d = store();
        d.select_target("goal");
        d.select_features(vec![ColumnId::from(3usize), ColumnId::from(1usize)]);
        assert_eq!(d.feature_indices(), &[1]);
    }

    #[test]
    fn target_selection_evicts_feature() {
        let mut d = store();
        d.select_features(vec![0usize, 1, 2]);
        d.select_target(1usize);
        assert_eq!(d.feature_indices(), &[0, 2]);
        assert_eq!(d.target(), Some(1));
    }

    #[test]
    fn target_selection_evicts_duplicates() {
        let mut d = store();
        d.select_features(vec![1usize, 0, 1]);
        d.select_target(1usize);
        assert_eq!(d.feature_indices(), &[0]);
    }

    #[test]
    fn unresolvable_target_clears() {
        let mut d = store();
        d.select_target("goal");
        assert_eq!(d.target(), Some(3));
        d.select_target("missing column");
        assert_eq!(d.target(), None);
        d.select_target(42usize);
        assert_eq!(d.target(), None);
    }

    #[test]
    fn repeated_calls_accumulate() {
        let mut d = store();
        d.select_features(vec![0usize]);
        d.select_features(vec![2usize, 0]);
        assert_eq!(d.feature_indices(), &[0, 2, 0]);
    }

    #[test]
    fn feature_row_is_reversed() {
        let mut d = store();
        d.select_features(vec!["a", "c"]);
        assert_eq!(d.feature_row(0), vec![3.0, 1.0]);
    }

    #[test]
    fn feature_row_reads_missing_as_zero() {
        let mut d = store();
        d.select_features(vec!["b", "a"]);
        assert_eq!(d.feature_row(1), vec![4.0, 0.0]);
    }

    #[test]
    fn target_value_reads_missing_as_zero() {
        let mut d = store();
        assert_eq!(d.target_value(0), None);
        d.select_target("b");
        assert_eq!(d.target_value(0), Some(2.0));
        assert_eq!(d.target_value(1), Some(0.0));
    }
}
