use std::collections::HashMap;

use serde::Serialize;

use crate::project::ProjectRecord;

/// Number of visible records sharing one `year` label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub label: String,
    pub count: usize,
    /// `count` relative to the records passed to the same `aggregate` call.
    pub proportion: f64,
}

/// Groups records by year, keeping the order in which each year first appears.
pub fn aggregate<'a, I>(records: I) -> Vec<CategoryBucket>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut buckets: Vec<CategoryBucket> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut total = 0_usize;

    for record in records {
        total += 1;
        let label = record.year_label();
        if let Some(&index) = positions.get(label) {
            buckets[index].count += 1;
        } else {
            positions.insert(label, buckets.len());
            buckets.push(CategoryBucket {
                label: label.to_string(),
                count: 1,
                proportion: 0.0,
            });
        }
    }

    for bucket in &mut buckets {
        bucket.proportion = bucket.count as f64 / total as f64;
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_follow_first_occurrence() {
        let records = vec![
            ProjectRecord::new("A", "2023"),
            ProjectRecord::new("B", "2023"),
            ProjectRecord::new("C", "2024"),
        ];
        let buckets = aggregate(&records);
        let summary: Vec<(&str, usize)> = buckets
            .iter()
            .map(|bucket| (bucket.label.as_str(), bucket.count))
            .collect();
        assert_eq!(summary, [("2023", 2), ("2024", 1)]);
    }

    #[test]
    fn test_order_is_not_sorted_by_count_or_label() {
        let records = vec![
            ProjectRecord::new("A", "2025"),
            ProjectRecord::new("B", "2021"),
            ProjectRecord::new("C", "2021"),
            ProjectRecord::new("D", "2021"),
        ];
        let labels: Vec<String> = aggregate(&records)
            .into_iter()
            .map(|bucket| bucket.label)
            .collect();
        assert_eq!(labels, ["2025", "2021"]);
    }

    #[test]
    fn test_counts_sum_to_input_and_proportions_to_one() {
        let records = vec![
            ProjectRecord::new("A", "2023"),
            ProjectRecord::default(),
            ProjectRecord::new("C", "2024"),
            ProjectRecord::new("D", "2024"),
        ];
        let buckets = aggregate(&records);
        assert_eq!(buckets.iter().map(|bucket| bucket.count).sum::<usize>(), 4);
        let total: f64 = buckets.iter().map(|bucket| bucket.proportion).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(buckets.iter().any(|bucket| bucket.label.is_empty()));
    }

    #[test]
    fn test_empty_input_has_no_buckets() {
        assert!(aggregate(&Vec::<ProjectRecord>::new()).is_empty());
    }
}
