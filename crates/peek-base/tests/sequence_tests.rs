use peek_base::{Sequence, Stamped};

#[test]
fn test_sequence_starts_at_one() {
    let seq = Sequence::new();
    assert_eq!(seq.last(), 0);
    assert_eq!(seq.next(), 1);
    assert_eq!(seq.next(), 2);
    assert_eq!(seq.last(), 2);
}

#[test]
fn test_sequence_clones_share_counter() {
    let a = Sequence::new();
    let b = a.clone();
    assert_eq!(a.next(), 1);
    assert_eq!(b.next(), 2);
    assert_eq!(a.last(), 2);
}

#[test]
fn test_sequence_across_threads() {
    let seq = Sequence::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let seq = seq.clone();
            std::thread::spawn(move || (0..100).map(|_| seq.next()).collect::<Vec<_>>())
        })
        .collect();
    let mut all: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 400);
    assert_eq!(seq.last(), 400);
}

#[test]
fn test_stamped_superseded() {
    let stamped = Stamped::new(5, "boxes");
    assert!(stamped.is_superseded_by(6));
    assert!(!stamped.is_superseded_by(5));
    assert!(!stamped.is_superseded_by(4));
}
