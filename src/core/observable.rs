//! # Observable Value
//!
//! A minimal push-based value container: a current value plus a list of
//! subscriber callbacks, every one of which is invoked synchronously on each
//! write — including writes of an identical value. No deduplication: the
//! selection surfaces driven by these fields want a notification per user
//! interaction, not per distinct value.
//!
//! Reentrancy: `set` takes `&mut self`, so a subscriber can never write back
//! into the observable it is being notified from — the infinite-notification
//! hazard is ruled out at compile time rather than guarded at runtime.
//! Subscribers that need to feed state changes back into the owning event
//! loop send over a channel instead (see `tui::run`).

use std::fmt;

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value container that notifies registered subscribers on every write.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value`, then notifies every subscriber with the new value
    /// before returning. Notification order is subscription order.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for subscriber in &mut self.subscribers {
            subscriber(&self.value);
        }
    }

    /// Registers a callback invoked on every subsequent write.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_value() {
        let observable = Observable::new(7);
        assert_eq!(*observable.get(), 7);
    }

    #[test]
    fn test_set_updates_value() {
        let mut observable = Observable::new(0usize);
        observable.set(3);
        assert_eq!(*observable.get(), 3);
    }

    #[test]
    fn test_subscriber_sees_new_value_before_set_returns() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new(0i32);

        let sink = Rc::clone(&seen);
        observable.subscribe(move |value| sink.borrow_mut().push(*value));

        observable.set(1);
        // Delivery is synchronous: the write is already recorded here.
        assert_eq!(*seen.borrow(), vec![1]);
        observable.set(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_same_value_write_notifies_again() {
        let count = Rc::new(RefCell::new(0));
        let mut observable = Observable::new(5);

        let sink = Rc::clone(&count);
        observable.subscribe(move |_| *sink.borrow_mut() += 1);

        observable.set(5);
        observable.set(5);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_exactly_one_notification_per_write() {
        let count = Rc::new(RefCell::new(0));
        let mut observable = Observable::new(String::new());

        let sink = Rc::clone(&count);
        observable.subscribe(move |_| *sink.borrow_mut() += 1);

        observable.set("a".to_string());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_multiple_subscribers_all_notified_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new(0);

        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            observable.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        observable.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_subscriber_added_after_write_misses_it() {
        let count = Rc::new(RefCell::new(0));
        let mut observable = Observable::new(0);

        observable.set(1);

        let sink = Rc::clone(&count);
        observable.subscribe(move |_| *sink.borrow_mut() += 1);
        assert_eq!(*count.borrow(), 0);

        observable.set(2);
        assert_eq!(*count.borrow(), 1);
    }
}
