/// Утилиты для работы со списками (поиск)

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект уже приведённому к нижнему регистру запросу
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Фильтрует список по поисковому запросу без учёта регистра.
///
/// Порядок элементов сохраняется; пустой запрос возвращает весь список.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}
