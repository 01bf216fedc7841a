use std::cell::Cell;

use super::*;

#[test]
fn delivers_in_subscription_order() {
    let subject = Subject::<i32>::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let l1 = Rc::clone(&log);
    let _a = subject.subscribe(move |v| l1.borrow_mut().push(("a", *v)));
    let l2 = Rc::clone(&log);
    let _b = subject.subscribe(move |v| l2.borrow_mut().push(("b", *v)));

    subject.emit(&1);
    subject.emit(&2);
    assert_eq!(*log.borrow(), vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let subject = Subject::<()>::new();
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    let sub = subject.subscribe(move |_| h.set(h.get() + 1));
    assert!(sub.is_active());
    subject.emit(&());
    sub.unsubscribe();
    subject.emit(&());
    assert_eq!(hits.get(), 1);
    assert_eq!(subject.listener_count(), 0);
}

#[test]
fn callback_can_detach_itself_mid_delivery() {
    let subject = Subject::<u8>::new();
    let weak = subject.downgrade();
    let own_id = Rc::new(Cell::new(None));
    let hits = Rc::new(Cell::new(0));

    let id_slot = Rc::clone(&own_id);
    let h = Rc::clone(&hits);
    let sub = subject.subscribe(move |_| {
        h.set(h.get() + 1);
        if let Some(id) = id_slot.get() {
            weak.unsubscribe(id);
        }
    });
    own_id.set(Some(sub.id()));

    subject.emit(&0);
    subject.emit(&0);
    assert_eq!(hits.get(), 1);
    assert!(!sub.is_active());
    assert!(!subject.is_subscribed(sub.id()));
}

#[test]
fn subscription_outlives_subject_harmlessly() {
    let subject = Subject::<u8>::new();
    let sub = subject.subscribe(|_| {});
    drop(subject);
    assert!(!sub.is_active());
    drop(sub);
}

#[test]
fn unknown_ids_are_ignored() {
    let a = Subject::<u8>::new();
    let b = Subject::<u8>::new();
    let sub = b.subscribe(|_| {});
    assert!(!a.unsubscribe(sub.id()));
    assert!(b.is_subscribed(sub.id()));
}
