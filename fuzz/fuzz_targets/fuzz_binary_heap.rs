#![no_main]

use libfuzzer_sys::fuzz_target;

use binheap::{BinaryHeap, Compare, Growth, HeapConfig, Max, Min};

// Each byte is an operation: odd pushes `byte >> 1`, even pops. `model` mirrors the heap.
fn check<C: Compare<u8>>(ops: &[u8], mut heap: BinaryHeap<u8, C>, top: fn(&[u8]) -> Option<u8>) {
    let mut model = Vec::new();

    for &op in ops {
        if op & 1 == 1 {
            let item = op >> 1;
            match heap.push(item) {
                Ok(()) => model.push(item),
                Err(e) => {
                    assert_eq!(heap.growth(), Growth::Fixed);
                    assert_eq!(model.len(), heap.capacity());
                    assert_eq!(e.into_inner(), item);
                }
            }
        } else {
            let expected = top(&model);
            assert_eq!(heap.pop().ok(), expected);
            if let Some(x) = expected {
                let at = model.iter().position(|&y| y == x).unwrap();
                model.swap_remove(at);
            }
        }
        assert_eq!(heap.len(), model.len());
        assert!(heap.verify().is_ok());
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&head, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(head & 0x7f);
    let config = if head & 0x80 == 0 {
        HeapConfig::doubling(capacity)
    } else {
        HeapConfig::fixed(capacity)
    };

    check(ops, BinaryHeap::with_config(Max, config), |m| m.iter().max().copied());
    check(ops, BinaryHeap::with_config(Min, config), |m| m.iter().min().copied());
});
