use linked_queue::{QueueError, StringQueue};

#[test]
fn remove_from_empty_queue_fails_and_leaves_size_at_zero() {
    let mut q = StringQueue::new();
    assert!(matches!(q.remove_head(), Err(QueueError::Empty)));
    assert_eq!(q.len(), 0);

    let mut buf = [0u8; 8];
    assert!(matches!(q.remove_head_into(&mut buf), Err(QueueError::Empty)));
    assert_eq!(q.len(), 0);
}

#[test]
fn size_tracks_live_elements_across_mixed_operations() {
    let mut q = StringQueue::new();
    assert_eq!(q.len(), 0);

    q.insert_head(c"a").expect("insert");
    q.insert_tail(c"b").expect("insert");
    q.insert_head(c"c").expect("insert");
    assert_eq!(q.len(), 3);

    q.remove_head().expect("remove");
    assert_eq!(q.len(), 2);
    q.remove_head().expect("remove");
    q.remove_head().expect("remove");
    assert_eq!(q.len(), 0);

    assert!(q.remove_head().is_err());
    assert_eq!(q.len(), 0);
}

#[test]
fn tail_inserts_round_trip_through_head_removal() {
    let mut q = StringQueue::new();
    let texts = [c"alpha", c"beta", c"gamma", c"delta"];
    for text in texts {
        q.insert_tail(text).expect("insert");
    }

    for expected in texts {
        let got = q.remove_head().expect("remove");
        assert_eq!(got.as_c_str(), expected);
    }
    assert!(q.is_empty());
}

#[test]
fn head_inserts_come_back_in_reverse_insertion_order() {
    let mut q = StringQueue::new();
    q.insert_head(c"x").expect("insert");
    q.insert_head(c"y").expect("insert");

    let order: Vec<_> = q.iter().collect();
    assert_eq!(order, [c"y", c"x"]);
}

#[test]
fn buffer_copy_preserves_exact_bytes_when_it_fits() {
    let mut q = StringQueue::new();
    q.insert_tail(c"hello").expect("insert");

    let mut buf = [0xAAu8; 16];
    let copied = q.remove_head_into(&mut buf).expect("remove");
    assert_eq!(copied, 5);
    assert_eq!(&buf[..6], b"hello\0");
    assert!(q.is_empty());
}

#[test]
fn buffer_copy_truncates_silently_and_still_terminates() {
    let mut q = StringQueue::new();
    q.insert_tail(c"world").expect("insert");

    // 2-byte buffer on a 5-byte payload: 1 byte plus terminator
    let mut buf = [0xAAu8; 2];
    let copied = q.remove_head_into(&mut buf).expect("remove");
    assert_eq!(copied, 1);
    assert_eq!(buf, [b'w', 0]);
    assert_eq!(q.len(), 0);
}

#[test]
fn exact_boundary_buffer_truncates_by_one() {
    let mut q = StringQueue::new();
    q.insert_tail(c"abc").expect("insert");

    // room for the bytes but not the terminator
    let mut buf = [0xAAu8; 3];
    let copied = q.remove_head_into(&mut buf).expect("remove");
    assert_eq!(copied, 2);
    assert_eq!(buf, [b'a', b'b', 0]);
}

#[test]
fn empty_buffer_discards_the_payload() {
    let mut q = StringQueue::new();
    q.insert_tail(c"gone").expect("insert");

    let mut buf = [0u8; 0];
    let copied = q.remove_head_into(&mut buf).expect("remove");
    assert_eq!(copied, 0);
    assert!(q.is_empty());
}

#[test]
fn empty_payload_copies_only_the_terminator() {
    let mut q = StringQueue::new();
    q.insert_tail(c"").expect("insert");

    let mut buf = [0xAAu8; 4];
    let copied = q.remove_head_into(&mut buf).expect("remove");
    assert_eq!(copied, 0);
    assert_eq!(buf[0], 0);
}

#[test]
fn with_capacity_starts_empty() {
    let q = StringQueue::with_capacity(32).expect("reserve");
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
}

#[test]
fn clear_then_reuse() {
    let mut q = StringQueue::new();
    for text in [c"a", c"b"] {
        q.insert_tail(text).expect("insert");
    }
    q.clear();
    assert!(q.is_empty());

    q.insert_tail(c"fresh").expect("insert");
    assert_eq!(q.remove_head().expect("remove").as_c_str(), c"fresh");
}

#[test]
fn queues_with_equal_contents_compare_equal() {
    let mut a = StringQueue::new();
    let mut b = StringQueue::new();
    for text in [c"one", c"two"] {
        a.insert_tail(text).expect("insert");
        b.insert_tail(text).expect("insert");
    }
    assert_eq!(a, b);

    b.insert_tail(c"three").expect("insert");
    assert_ne!(a, b);
}

#[test]
fn interior_nul_free_binary_payloads_survive() {
    let mut q = StringQueue::new();
    q.insert_tail(c"\x01\x02\xfe").expect("insert");

    let got = q.remove_head().expect("remove");
    assert_eq!(got.as_bytes(), &[0x01, 0x02, 0xfe]);
}
