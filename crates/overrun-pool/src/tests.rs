use crate::{Pool, Poolable};

#[derive(Debug)]
struct Dummy {
    hits: u32,
    released: u32,
}

impl Dummy {
    fn new() -> Self {
        Self {
            hits: 0,
            released: 0,
        }
    }
}

impl Poolable for Dummy {
    fn on_release(&mut self) {
        self.hits = 0;
        self.released += 1;
    }
}

fn make_pool(initial: usize) -> Pool<u8, Dummy> {
    let mut pool = Pool::new();
    pool.register(0, initial, Dummy::new);
    pool
}

fn assert_partition_invariant(pool: &Pool<u8, Dummy>, key: u8) {
    assert_eq!(
        pool.active_count(key) + pool.inactive_count(key),
        pool.total_allocated(key),
        "partition invariant violated for key {key}"
    );
}

#[test]
fn invariant_holds_across_operation_sequences() {
    let mut pool = make_pool(3);
    assert_partition_invariant(&pool, 0);

    let mut handles = Vec::new();
    for _ in 0..5 {
        handles.push(pool.acquire(0).unwrap());
        assert_partition_invariant(&pool, 0);
    }
    // Grew lazily past the initial 3.
    assert_eq!(pool.total_allocated(0), 5);
    assert_eq!(pool.active_count(0), 5);

    for h in handles.drain(..) {
        pool.release(h);
        assert_partition_invariant(&pool, 0);
    }
    assert_eq!(pool.active_count(0), 0);
    assert_eq!(pool.inactive_count(0), 5);
}

#[test]
fn exhaustion_grows_by_exactly_one() {
    let mut pool = make_pool(1);
    let _a = pool.acquire(0).unwrap();
    assert_eq!(pool.total_allocated(0), 1);
    let _b = pool.acquire(0).unwrap();
    assert_eq!(pool.total_allocated(0), 2);
    let _c = pool.acquire(0).unwrap();
    assert_eq!(pool.total_allocated(0), 3);
}

#[test]
fn no_entity_is_both_active_and_inactive() {
    let mut pool = make_pool(2);
    let a = pool.acquire(0).unwrap();
    assert!(pool.is_active(a));
    assert_eq!(pool.active_count(0), 1);
    assert_eq!(pool.inactive_count(0), 1);

    pool.release(a);
    assert!(!pool.is_active(a));
    assert_eq!(pool.active_count(0), 0);
    assert_eq!(pool.inactive_count(0), 2);
}

#[test]
fn double_release_is_idempotent() {
    let mut pool = make_pool(2);
    let a = pool.acquire(0).unwrap();
    pool.release(a);

    let total = pool.total_allocated(0);
    let inactive = pool.inactive_count(0);
    pool.release(a);
    assert_eq!(pool.total_allocated(0), total);
    assert_eq!(pool.inactive_count(0), inactive);
    assert_partition_invariant(&pool, 0);

    // The neutral reset ran exactly once.
    let mut release_counts = Vec::new();
    pool.for_each_of_type(0, |d| release_counts.push(d.released))
        .unwrap();
    assert_eq!(release_counts.iter().sum::<u32>(), 1);
}

#[test]
fn release_resets_entity_to_neutral_state() {
    let mut pool = make_pool(1);
    let a = pool.acquire(0).unwrap();
    pool.get_mut(a).unwrap().hits = 7;
    pool.release(a);

    // The same slot comes back clean.
    let b = pool.acquire(0).unwrap();
    assert_eq!(pool.get(b).unwrap().hits, 0);
}

#[test]
fn released_handle_resolves_to_none() {
    let mut pool = make_pool(1);
    let a = pool.acquire(0).unwrap();
    assert!(pool.get(a).is_some());
    pool.release(a);
    assert!(pool.get(a).is_none());
    assert!(pool.get_mut(a).is_none());
}

#[test]
fn acquire_unregistered_key_is_an_error() {
    let mut pool = make_pool(2);
    let err = pool.acquire(9).unwrap_err();
    assert!(err.to_string().contains("no pool partition registered"));
    // Pool state untouched.
    assert_eq!(pool.total_allocated(9), 0);
    assert_partition_invariant(&pool, 0);
}

#[test]
fn register_is_idempotent() {
    let mut pool = make_pool(3);
    let _a = pool.acquire(0).unwrap();
    // Re-registering must not reset or resize the partition.
    pool.register(0, 50, Dummy::new);
    assert_eq!(pool.total_allocated(0), 3);
    assert_eq!(pool.active_count(0), 1);
}

#[test]
fn for_each_visits_active_and_inactive() {
    let mut pool = make_pool(4);
    let a = pool.acquire(0).unwrap();
    pool.get_mut(a).unwrap().hits = 1;

    let mut visited = 0;
    pool.for_each_of_type(0, |d| {
        d.hits += 10;
        visited += 1;
    })
    .unwrap();
    assert_eq!(visited, 4);

    // Active instance saw the visitor too.
    assert_eq!(pool.get(a).unwrap().hits, 11);

    assert!(pool.for_each_of_type(9, |_| {}).is_err());
}

#[test]
fn collect_active_is_in_deterministic_order() {
    let mut pool: Pool<u8, Dummy> = Pool::new();
    pool.register(2, 2, Dummy::new);
    pool.register(1, 2, Dummy::new);
    let h2 = pool.acquire(2).unwrap();
    let h1 = pool.acquire(1).unwrap();

    let mut buf = Vec::new();
    pool.collect_active_into(&mut buf);
    assert_eq!(buf, vec![h1, h2], "handles should come out in key order");
}
