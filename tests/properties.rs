use std::cmp::Ordering;

use binheap::{BinaryHeap, Compare, EmptyHeap, HeapConfig, Max, Min};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded, so every run sees the same sequences.
fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn random_items(rng: &mut StdRng, n: usize, range: u64) -> Vec<u64> {
    (0..n).map(|_| rng.gen_range(0..range)).collect()
}

fn drain<T, C: Compare<T>>(heap: &mut BinaryHeap<T, C>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(item) = heap.pop() {
        out.push(item);
    }
    out
}

#[test]
fn invariant_holds_under_mixed_operations() {
    let mut rng = seeded(0x2545_f491_4f6c_dd1d);
    let mut heap = BinaryHeap::with_config(Min, HeapConfig::doubling(1));

    for _ in 0..2_000 {
        if rng.gen_ratio(1, 3) {
            let _ = heap.pop();
        } else {
            heap.push(rng.gen_range(0..64u64)).unwrap();
        }
        assert_eq!(heap.verify(), Ok(()));
    }
}

#[test]
fn repeated_extraction_is_sorted() {
    let mut rng = seeded(7);
    for n in [0, 1, 2, 3, 10, 100, 257] {
        let items = random_items(&mut rng, n, 50);

        let mut max = BinaryHeap::<_, Max>::new();
        let mut min = BinaryHeap::<_, Min>::new();
        for &x in &items {
            max.push(x).unwrap();
            min.push(x).unwrap();
        }

        let mut ascending = items.clone();
        ascending.sort();
        let mut descending = ascending.clone();
        descending.reverse();

        assert_eq!(drain(&mut max), descending);
        assert_eq!(drain(&mut min), ascending);
    }
}

#[test]
fn heapify_matches_sorting() {
    let mut rng = seeded(99);
    for n in [0, 1, 2, 5, 64, 1000] {
        let items = random_items(&mut rng, n, 1000);
        let mut heap = BinaryHeap::from_vec(items.clone(), Max, HeapConfig::default()).unwrap();
        assert_eq!(heap.verify(), Ok(()));

        let mut expected = items;
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(drain(&mut heap), expected);
    }
}

#[test]
fn size_accounting() {
    let mut heap = BinaryHeap::<_, Max>::new();
    for k in 0..40 {
        heap.push(k).unwrap();
    }
    for _ in 0..15 {
        heap.pop().unwrap();
    }
    assert_eq!(heap.len(), 40 - 15);
}

#[test]
fn peek_matches_pop() {
    let mut rng = seeded(3);
    let mut heap: BinaryHeap<_, Min> = random_items(&mut rng, 200, 20).into_iter().collect();
    while !heap.is_empty() {
        let top = *heap.peek().unwrap();
        assert_eq!(heap.pop(), Ok(top));
    }
    assert_eq!(heap.pop(), Err(EmptyHeap));
    assert_eq!(heap.len(), 0);
}

#[test]
fn batch_build() {
    let mut heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2], Max, HeapConfig::default()).unwrap();
    assert_eq!(drain(&mut heap), [9, 8, 5, 3, 2, 1]);
}

#[test]
fn min_heap_scenario() {
    let mut heap = BinaryHeap::<_, Min>::new();
    for x in [7, 2, 9, 1] {
        heap.push(x).unwrap();
    }
    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(2));
    assert_eq!(heap.pop(), Ok(7));
    assert_eq!(heap.len(), 1);
}

#[test]
fn growth_past_capacity_hint() {
    let mut heap = BinaryHeap::with_config(Max, HeapConfig::doubling(2));
    for x in 0..10 {
        assert!(heap.push(x).is_ok());
        assert_eq!(heap.verify(), Ok(()));
    }
    assert!(heap.capacity() >= 10);
    assert_eq!(heap.peek(), Ok(&9));
}

#[test]
fn fixed_capacity_recovers_after_reserve() {
    let mut heap = BinaryHeap::with_config(Min, HeapConfig::fixed(3));
    for x in [4, 2, 6] {
        heap.push(x).unwrap();
    }

    let err = heap.push(1).unwrap_err();
    assert_eq!((err.capacity, err.requested), (3, 4));
    assert_eq!(heap.len(), 3);

    heap.reserve(1);
    heap.push(err.into_inner()).unwrap();
    assert_eq!(drain(&mut heap), [1, 2, 4, 6]);
}

#[test]
fn custom_total_order() {
    // even numbers before odd ones, then smallest first
    let parity_then_min = |a: &u64, b: &u64| match (a % 2, b % 2) {
        (0, 1) => Ordering::Greater,
        (1, 0) => Ordering::Less,
        _ => b.cmp(a),
    };

    let mut rng = seeded(11);
    let items = random_items(&mut rng, 50, 100);
    let mut heap = BinaryHeap::from_vec(items.clone(), parity_then_min, HeapConfig::default()).unwrap();

    let mut expected = items;
    expected.sort_by(|a, b| parity_then_min(b, a));
    assert_eq!(drain(&mut heap), expected);
}

#[test]
fn snapshot_is_a_copy() {
    let heap: BinaryHeap<_, Max> = vec![3, 1, 2].into_iter().collect();
    let mut snapshot = heap.snapshot();
    snapshot.clear();
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.snapshot(), heap.iter().copied().collect::<Vec<_>>());
}
