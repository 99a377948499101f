use std::cell::RefCell;
use std::rc::Rc;

use crate::DynamicArray;

/// Records its id in a shared log when dropped.
#[derive(Debug, Clone)]
struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn tracked_array(ids: &[u32], log: &Rc<RefCell<Vec<u32>>>) -> DynamicArray<Tracked> {
    ids.iter()
        .map(|&id| Tracked {
            id,
            log: log.clone(),
        })
        .collect()
}

fn sorted(log: &Rc<RefCell<Vec<u32>>>) -> Vec<u32> {
    let mut ids = log.borrow().clone();
    ids.sort_unstable();
    ids
}

#[test]
fn test_drop_releases_each_element_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let a = tracked_array(&[1, 2, 3, 4, 5], &log);
    assert!(log.borrow().is_empty());
    drop(a);
    assert_eq!(sorted(&log), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_growth_does_not_drop() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut a = tracked_array(&[1], &log);
    for id in 2..=17 {
        a.push(Tracked {
            id,
            log: log.clone(),
        });
    }
    a.insert(
        0,
        Tracked {
            id: 0,
            log: log.clone(),
        },
    )
    .unwrap();
    assert!(log.borrow().is_empty());
    assert_eq!(a.len(), 18);
}

#[test]
fn test_remove_hands_element_to_caller() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut a = tracked_array(&[1, 2, 3], &log);
    let removed = a.remove(1).unwrap();
    assert!(log.borrow().is_empty());
    assert_eq!(removed.id, 2);
    drop(removed);
    assert_eq!(*log.borrow(), vec![2]);
    drop(a);
    assert_eq!(sorted(&log), vec![1, 2, 3]);
}

#[test]
fn test_set_returns_old_element() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut a = tracked_array(&[1, 2], &log);
    let old = a
        .set(
            0,
            Tracked {
                id: 10,
                log: log.clone(),
            },
        )
        .unwrap();
    assert_eq!(old.id, 1);
    assert!(log.borrow().is_empty());
    drop(old);
    drop(a);
    assert_eq!(sorted(&log), vec![1, 2, 10]);
}

#[test]
fn test_value_removal_drops_matches() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut a = tracked_array(&[1, 2, 1, 3, 1], &log);
    let probe = tracked_array(&[1, 3], &log);

    assert!(a.remove_item(probe.get(1).unwrap()));
    assert_eq!(*log.borrow(), vec![3]);

    assert!(a.remove_all(probe.get(0).unwrap()));
    assert_eq!(*log.borrow(), vec![3, 1, 1, 1]);
    assert_eq!(a.len(), 1);
    assert_eq!(a.get(0).unwrap().id, 2);

    drop(a);
    drop(probe);
    assert_eq!(sorted(&log), vec![1, 1, 1, 1, 2, 3, 3]);
}

#[test]
fn test_clear_drops_everything() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut a = tracked_array(&[4, 5, 6], &log);
    a.clear();
    assert_eq!(sorted(&log), vec![4, 5, 6]);
    assert_eq!(a.capacity(), 1);
    drop(a);
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_clone_is_independent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let a = tracked_array(&[1, 2], &log);
    let b = a.clone();
    drop(a);
    assert_eq!(sorted(&log), vec![1, 2]);
    assert_eq!(b.len(), 2);
    assert_eq!(b.get(1).unwrap().id, 2);
    drop(b);
    assert_eq!(sorted(&log), vec![1, 1, 2, 2]);
}
