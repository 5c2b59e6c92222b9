use std::cell::RefCell;

use super::*;

#[test]
fn new_guard_is_mounted() {
    assert!(MountGuard::new().is_mounted());
    assert!(MountGuard::default().is_mounted());
}

#[test]
fn deliver_applies_while_mounted() {
    let guard = MountGuard::new();
    let slot = RefCell::new(Vec::new());
    assert!(guard.deliver(vec![1, 2], |v| *slot.borrow_mut() = v));
    assert_eq!(*slot.borrow(), vec![1, 2]);
}

#[test]
fn deliver_is_suppressed_after_release() {
    let guard = MountGuard::new();
    let task_handle = guard.clone();
    guard.release();
    let slot = RefCell::new(None::<u8>);
    assert!(!task_handle.deliver(7, |v| *slot.borrow_mut() = Some(v)));
    assert!(slot.borrow().is_none());
    assert!(!task_handle.is_mounted());
}
