//! 동기화된 집합 자료구조
//!
//! 여러 워커 스레드가 공유할 수 있도록 `RwLock`으로 보호되는 [`Set`]과
//! 최초 삽입 순서를 유지하는 [`OrderedSet`]을 제공합니다.
//!
//! - 조회(`contains`, `values`, `len`)는 읽기 잠금으로 동시에 수행될 수 있습니다.
//! - 변경(`add`, `delete`, `clear`)은 쓰기 잠금으로 상호 배타적입니다.
//! - `values()`는 스냅샷 복사본을 반환하므로 순회 중 변경을 관찰하지 않습니다.
//!
//! ```rust,ignore
//! let origins = OrderedSet::with_capacity(4);
//! origins.add_all(["http://localhost:3000", "http://localhost:3000", "http://localhost:8080"]);
//! assert_eq!(origins.values(), vec!["http://localhost:3000", "http://localhost:8080"]);
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

/// 순서를 보장하지 않는 동기화 집합
#[derive(Debug)]
pub struct Set<T> {
    data: RwLock<HashSet<T>>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self {
            data: RwLock::new(HashSet::new()),
        }
    }
}

impl<T> Set<T>
where
    T: Eq + Hash + Clone,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashSet::with_capacity(capacity)),
        }
    }

    /// 값을 추가합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub fn add(&self, value: T) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(value);
    }

    pub fn add_all<I: IntoIterator<Item = T>>(&self, values: I) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data.extend(values);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(value)
    }

    pub fn is_unique(&self, value: &T) -> bool {
        !self.contains(value)
    }

    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Vec<T> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn delete(&self, value: &T) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(value);
    }

    pub fn clear(&self) {
        self.data.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[derive(Debug)]
struct OrderedInner<T> {
    index: HashSet<T>,
    items: Vec<T>,
}

/// 최초 삽입 순서를 유지하는 동기화 집합
#[derive(Debug)]
pub struct OrderedSet<T> {
    inner: RwLock<OrderedInner<T>>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(OrderedInner {
                index: HashSet::new(),
                items: Vec::new(),
            }),
        }
    }
}

impl<T> OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(OrderedInner {
                index: HashSet::with_capacity(capacity),
                items: Vec::with_capacity(capacity),
            }),
        }
    }

    /// 값을 뒤에 추가합니다. 중복이면 기존 위치를 유지합니다.
    pub fn add(&self, value: T) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.index.insert(value.clone()) {
            inner.items.push(value);
        }
    }

    pub fn add_all<I: IntoIterator<Item = T>>(&self, values: I) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        for value in values {
            if inner.index.insert(value.clone()) {
                inner.items.push(value);
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .index
            .contains(value)
    }

    pub fn is_unique(&self, value: &T) -> bool {
        !self.contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 삽입 순서대로 스냅샷을 반환합니다.
    pub fn values(&self) -> Vec<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .clone()
    }

    /// `index` 위치의 값을 제거하고 뒤의 값들을 한 칸씩 당깁니다.
    /// 범위를 벗어나면 아무 일도 하지 않습니다.
    pub fn delete(&self, index: usize) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if index < inner.items.len() {
            let value = inner.items.remove(index);
            inner.index.remove(&value);
        }
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.index.clear();
        inner.items.clear();
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let set = OrderedSet::with_capacity(0);
        set.add_all(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_set_add_is_idempotent() {
        let set = Set::with_capacity(2);
        set.add("user");
        set.add("user");
        set.add("admin");

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"admin"));
        assert!(set.is_unique(&"guest"));

        set.delete(&"user");
        assert!(!set.contains(&"user"));

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_ordered_set_keeps_first_insertion_position() {
        let set = OrderedSet::with_capacity(3);
        set.add("a");
        set.add("b");
        set.add("c");
        set.add("a");

        assert_eq!(set.len(), 3);
        assert_eq!(set.values(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ordered_set_delete_shifts_successors() {
        let set: OrderedSet<&str> = ["a", "b", "c", "d"].into_iter().collect();

        set.delete(1);
        assert_eq!(set.values(), vec!["a", "c", "d"]);
        assert!(set.is_unique(&"b"));

        // 삭제된 값은 다시 추가하면 맨 뒤에 붙습니다.
        set.add("b");
        assert_eq!(set.values(), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_ordered_set_delete_out_of_range_is_noop() {
        let set: OrderedSet<i32> = [1, 2].into_iter().collect();
        set.delete(5);
        assert_eq!(set.values(), vec![1, 2]);

        let empty: OrderedSet<i32> = OrderedSet::default();
        empty.delete(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_values_is_a_snapshot() {
        let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
        let snapshot = set.values();
        set.clear();

        assert_eq!(snapshot, vec![1, 2, 3]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_concurrent_adds_do_not_duplicate() {
        let set = Arc::new(OrderedSet::with_capacity(16));
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let set = Arc::clone(&set);
                thread::spawn(move || {
                    for value in 0..16 {
                        set.add(value);
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(set.len(), 16);
    }
}
