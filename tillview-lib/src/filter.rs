//! Filter criteria over an in-memory record set
//!
//! A screen's active filters are an ordered list of named criteria that
//! combine with logical AND. The text-search criterion is built from the
//! screen's designated searchable fields and ORs a case-insensitive
//! substring match across them.

use std::fmt;
use std::sync::Arc;

/// A single filter predicate over records of type `R`.
pub type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Extracts one searchable string field from a record.
pub type FieldAccessor<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// One named criterion in a filter set.
struct Criterion<R> {
    name: String,
    predicate: Predicate<R>,
}

/// An ordered set of named filter criteria, combined with AND.
///
/// Setting a criterion under an existing name replaces it in place, keeping
/// the original position; new names append. Order only matters for
/// evaluation short-circuiting, never for the result.
pub struct FilterSet<R> {
    criteria: Vec<Criterion<R>>,
}

impl<R> FilterSet<R> {
    /// Creates an empty filter set. Everything matches.
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Adds or replaces the criterion with the given name.
    pub fn set(&mut self, name: impl Into<String>, predicate: Predicate<R>) {
        let name = name.into();
        match self.criteria.iter_mut().find(|c| c.name == name) {
            Some(criterion) => criterion.predicate = predicate,
            None => self.criteria.push(Criterion { name, predicate }),
        }
    }

    /// Removes the criterion with the given name.
    ///
    /// Returns `true` if a criterion was removed.
    pub fn clear(&mut self, name: &str) -> bool {
        let before = self.criteria.len();
        self.criteria.retain(|c| c.name != name);
        self.criteria.len() != before
    }

    /// Returns `true` if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the number of active criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the names of the active criteria, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|c| c.name.as_str())
    }

    /// Returns `true` if the record passes every active criterion.
    pub fn matches(&self, record: &R) -> bool {
        self.criteria.iter().all(|c| (c.predicate)(record))
    }
}

impl<R> Default for FilterSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for FilterSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSet")
            .field("criteria", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// The designated searchable fields of a screen's record type.
///
/// Text search deliberately runs over an explicit field list instead of
/// stringifying whole records, so each screen states exactly what its search
/// box reaches.
pub struct SearchFields<R> {
    fields: Vec<FieldAccessor<R>>,
}

impl<R: 'static> SearchFields<R> {
    /// Creates an empty field list.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a searchable field.
    pub fn push(&mut self, field: impl Fn(&R) -> String + Send + Sync + 'static) {
        self.fields.push(Arc::new(field));
    }

    /// Builds the text-search predicate for a query.
    ///
    /// Matches records where at least one configured field contains the
    /// query, case-insensitively. With no configured fields the predicate
    /// matches nothing.
    pub fn matcher(&self, query: &str) -> Predicate<R> {
        let needle = query.to_lowercase();
        let fields = self.fields.clone();
        Box::new(move |record| {
            fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(&needle))
        })
    }
}

impl<R: 'static> Default for SearchFields<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for SearchFields<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchFields")
            .field("fields", &self.fields.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        city: &'static str,
        flagged: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Casa Central",
                city: "Asunción",
                flagged: true,
            },
            Row {
                name: "Sucursal Este",
                city: "Ciudad del Este",
                flagged: false,
            },
        ]
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let mut filter = FilterSet::new();
        filter.set("flagged", Box::new(|r: &Row| r.flagged));
        filter.set("named", Box::new(|r: &Row| r.name.contains("Casa")));

        let rows = rows();
        assert!(filter.matches(&rows[0]));
        assert!(!filter.matches(&rows[1]));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut filter: FilterSet<Row> = FilterSet::new();
        filter.set("a", Box::new(|_| true));
        filter.set("b", Box::new(|_| true));
        filter.set("a", Box::new(|_| false));

        assert_eq!(filter.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!filter.matches(&rows()[0]));
    }

    #[test]
    fn test_clear_reports_removal() {
        let mut filter: FilterSet<Row> = FilterSet::new();
        filter.set("a", Box::new(|_| true));

        assert!(filter.clear("a"));
        assert!(!filter.clear("a"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut fields = SearchFields::new();
        fields.push(|r: &Row| r.name.to_string());
        fields.push(|r: &Row| r.city.to_string());

        let rows = rows();
        let matcher = fields.matcher("ESTE");
        assert!(!matcher(&rows[0]));
        assert!(matcher(&rows[1]));

        // Second field counts too.
        let matcher = fields.matcher("asunción");
        assert!(matcher(&rows[0]));
    }

    #[test]
    fn test_search_without_fields_matches_nothing() {
        let fields: SearchFields<Row> = SearchFields::new();
        let matcher = fields.matcher("anything");
        assert!(!matcher(&rows()[0]));
    }
}
