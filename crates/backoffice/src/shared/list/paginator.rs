//! Пагинация отфильтрованного списка

use serde::{Deserialize, Serialize};

/// Одна страница списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Номер страницы, начиная с 1 (уже ограничен диапазоном)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Номер первой строки страницы (1-based) для подписи "11-20 из 42"
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_row() + self.items.len() - 1
        }
    }
}

/// Количество страниц; для пустого списка одна пустая страница
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_count.div_ceil(page_size).max(1)
}

/// Вырезать страницу из списка
///
/// Номер страницы ограничивается диапазоном `[1, total_pages]`, размер
/// страницы 0 считается равным 1.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = start.saturating_add(page_size).min(total_count);
    let items = if start < end {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        page,
        page_size,
        total_pages,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_items_by_ten() {
        let items: Vec<u32> = (1..=12).collect();
        let first = paginate(&items, 10, 1);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_count, 12);
        assert!(first.has_next());

        let second = paginate(&items, 10, 2);
        assert_eq!(second.items, vec![11, 12]);
        assert_eq!((second.first_row(), second.last_row()), (11, 12));
        assert!(!second.has_next());
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 10, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.first_row(), 0);
    }

    #[test]
    fn test_page_number_is_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, 2, 0).page, 1);
        assert_eq!(paginate(&items, 2, 99).page, 3);
        assert_eq!(paginate(&items, 2, 99).items, vec![5]);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let items = vec!["a", "b"];
        let page = paginate(&items, 0, 2);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items, vec!["b"]);
    }

    #[test]
    fn test_unbounded_page_size_shows_everything() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(total_pages(items.len(), usize::MAX), 1);

        let page = paginate(&items, usize::MAX, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items, items);
    }

    #[test]
    fn test_pages_cover_list_exactly_once() {
        let items: Vec<u32> = (1..=23).collect();
        for size in 1..=25 {
            let pages = total_pages(items.len(), size);
            let joined: Vec<u32> = (1..=pages)
                .flat_map(|p| paginate(&items, size, p).items)
                .collect();
            assert_eq!(joined, items, "page size {}", size);
        }
    }
}
