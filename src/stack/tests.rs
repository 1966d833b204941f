use super::*;
cfg_not_loom! {
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

#[test]
fn st_empty_error() {
    let stack = ConcurrentStack::new();
    assert_eq!(stack.pop(), Err(EmptyError {}));

    stack.push(5);
    assert_eq!(stack.pop(), Ok(5));
    assert_eq!(stack.pop(), Err(EmptyError {}));
    assert_eq!(stack.pop(), Err(EmptyError {}));
}

#[test]
fn st_lifo_order() {
    let stack = ConcurrentStack::new();
    for i in 1..=3 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
}

#[test]
fn st_pop_into() {
    let stack = ConcurrentStack::new();
    let mut out = String::from("untouched");
    assert_eq!(stack.pop_into(&mut out), Err(EmptyError {}));
    assert_eq!(out, "untouched");

    stack.push(String::from("top"));
    assert_eq!(stack.pop_into(&mut out), Ok(()));
    assert_eq!(out, "top");
}

#[test]
fn copy_isolation() {
    let a = ConcurrentStack::from(vec![1, 2]);
    let b = a.clone();

    a.push(3);
    assert_eq!(b.pop(), Ok(2));
    assert_eq!(a.into_inner(), [1, 2, 3]);
    assert_eq!(b.into_inner(), [1]);
}

#[test]
fn drop_discards_elements() {
    let arc = Arc::new(());
    {
        let stack = ConcurrentStack::new();
        for _ in 0..5 {
            stack.push(arc.clone());
        }
    }
    assert_eq!(Arc::strong_count(&arc), 1);
}

#[test]
fn debug_shows_len() {
    let stack = ConcurrentStack::from(vec!['a']);
    assert_eq!(format!("{stack:?}"), "ConcurrentStack { len: 1, .. }");
}

#[test]
fn mt_exactly_once() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 1_000;

    let stack = Arc::new(ConcurrentStack::new());
    let pushers = (0..THREADS)
        .map(|t| {
            let stack = stack.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    stack.push(t * PER_THREAD + i);
                }
            })
        })
        .collect::<Vec<_>>();
    let poppers = (0..THREADS)
        .map(|_| {
            let stack = stack.clone();
            thread::spawn(move || {
                let mut popped = Vec::new();
                while popped.len() < PER_THREAD {
                    match stack.pop() {
                        Ok(item) => popped.push(item),
                        Err(EmptyError {}) => thread::yield_now(),
                    }
                }
                popped
            })
        })
        .collect::<Vec<_>>();

    for pusher in pushers {
        pusher.join().unwrap();
    }
    let mut seen = poppers
        .into_iter()
        .flat_map(|popper| popper.join().unwrap())
        .collect::<Vec<_>>();
    seen.sort_unstable();

    assert_eq!(seen, (0..THREADS * PER_THREAD).collect::<Vec<_>>());
    assert_eq!(stack.pop(), Err(EmptyError {}));
}

proptest! {
    #[test]
    fn lifo_order(items in prop::collection::vec(any::<i64>(), 0..64)) {
        let stack = ConcurrentStack::new();
        for &item in &items {
            stack.push(item);
        }
        for &item in items.iter().rev() {
            prop_assert_eq!(stack.pop(), Ok(item));
        }
        prop_assert_eq!(stack.pop(), Err(EmptyError {}));
    }
}

}

cfg_loom! {
use loom::model::model;
use loom::sync::Arc;
use loom::thread;

#[test]
fn push_races_pop() {
    model(|| {
        let stack = Arc::new(ConcurrentStack::new());
        let pusher = {
            let stack = stack.clone();
            thread::spawn(move || stack.push(1))
        };

        let popped = stack.pop();
        pusher.join().unwrap();
        match popped {
            Ok(item) => {
                assert_eq!(item, 1);
                assert!(stack.is_empty());
            }
            Err(EmptyError {}) => assert_eq!(stack.pop(), Ok(1)),
        }
    });
}

#[test]
fn concurrent_pops_exactly_once() {
    model(|| {
        let stack = Arc::new(ConcurrentStack::from(vec![1, 2]));
        let popper = {
            let stack = stack.clone();
            thread::spawn(move || stack.pop())
        };

        let mine = stack.pop();
        let theirs = popper.join().unwrap();
        let mut both = [mine.unwrap(), theirs.unwrap()];
        both.sort_unstable();
        assert_eq!(both, [1, 2]);
        assert_eq!(stack.pop(), Err(EmptyError {}));
    });
}
}
