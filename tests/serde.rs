use binheap::{BinaryHeap, Growth, HeapConfig, Max, Min};

#[test]
fn serializes_in_heap_order() {
    let mut heap = BinaryHeap::<_, Min>::new();
    heap.push(3).unwrap();
    heap.push(1).unwrap();
    heap.push(2).unwrap();

    assert_eq!(serde_json::to_string(&heap).unwrap(), "[1,3,2]");
}

#[test]
fn deserializes_any_sequence_into_a_heap() {
    let mut heap: BinaryHeap<i32, Max> = serde_json::from_str("[5,3,8,1,9,2]").unwrap();
    assert_eq!(heap.verify(), Ok(()));
    assert_eq!(heap.pop(), Ok(9));
    assert_eq!(heap.pop(), Ok(8));
    assert_eq!(heap.growth(), Growth::Doubling);
}

#[test]
fn round_trip_keeps_layout() {
    let heap: BinaryHeap<_, Min> = (0..20).rev().collect();
    let json = serde_json::to_string(&heap).unwrap();
    let back: BinaryHeap<i32, Min> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.snapshot(), heap.snapshot());
}

#[test]
fn rejects_non_sequences() {
    assert!(serde_json::from_str::<BinaryHeap<i32, Max>>("{\"a\":1}").is_err());
}

#[test]
fn config() {
    let config: HeapConfig = serde_json::from_str(r#"{"capacity":8,"growth":"Fixed"}"#).unwrap();
    assert_eq!(config, HeapConfig::fixed(8));

    // missing fields fall back to the defaults
    let config: HeapConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, HeapConfig::default());
}
