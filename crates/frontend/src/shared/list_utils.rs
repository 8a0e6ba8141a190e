//! List helpers shared by table views: sorting, paging, header indicators.
use std::cmp::Ordering;

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive comparison of optional text, empty values last
pub fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.filter(|s| !s.is_empty()), b.filter(|s| !s.is_empty())) {
        (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        (total + page_size - 1) / page_size
    }
}

/// Page `page` (0-based, clamped to the last page) of `items`.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, usize) {
    let pages = page_count(items.len(), page_size);
    let page = page.min(pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    (items.get(start..end).unwrap_or(&[]).to_vec(), page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, f64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => cmp_f64(self.1, other.1),
                _ => cmp_text(Some(self.0), Some(other.0)),
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", 1.0), Row("A", 3.0), Row("c", 2.0)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].0, "A");
        sort_list(&mut rows, "amount", false);
        assert_eq!(rows[0].1, 3.0);
        assert_eq!(rows[2].1, 1.0);
    }

    #[test]
    fn test_cmp_text_empty_last() {
        assert_eq!(cmp_text(Some("x"), None), Ordering::Less);
        assert_eq!(cmp_text(Some(""), Some("a")), Ordering::Greater);
    }

    #[test]
    fn test_paging() {
        assert_eq!(page_count(0, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        let items: Vec<u32> = (0..30).collect();
        let (page, idx) = page_slice(&items, 1, 25);
        assert_eq!(page.len(), 5);
        assert_eq!(idx, 1);
        let (page, idx) = page_slice(&items, 9, 25);
        assert_eq!(idx, 1);
        assert_eq!(page[0], 25);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
    }
}
