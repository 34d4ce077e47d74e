use crate::project::ProjectRecord;

/// Text half of the filter: empty queries match everything.
pub fn matches_query(record: &ProjectRecord, query: &str) -> bool {
    query.is_empty() || record.searchable_text().contains(&query.to_lowercase())
}

/// Category half of the filter: exact, case-sensitive match on `year`.
pub fn matches_category(record: &ProjectRecord, selected: Option<&str>) -> bool {
    selected.map_or(true, |label| record.year_label() == label)
}

/// Records passing both the text query and the selected category, in input order.
pub fn filter_projects<'a>(
    records: &'a [ProjectRecord],
    query: &str,
    selected: Option<&str>,
) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .filter(|record| matches_query(record, query) && matches_category(record, selected))
        .collect()
}
