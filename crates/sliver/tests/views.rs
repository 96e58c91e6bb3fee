//! Integration tests exercising the full view surface together:
//! typed construction, erasure, carving, writes, and the dump path,
//! rather than individual operations in isolation.

use sliver::{DumpError, SliceError, SliceView, SliceViewMut, TypedSlice, TypedSliceMut};

#[test]
fn typed_build_erased_carve_and_dump() {
    // A caller-owned buffer of message bytes, staged through the typed
    // layer and dumped through the erased one.
    let mut storage = *b"....hello, views....";
    let mut typed = TypedSliceMut::new(&mut storage[..]);
    typed.set(0, b'>').unwrap();

    let erased = typed.erase();
    let message = erased.slice(4, 16).unwrap();

    let mut sink = Vec::new();
    message.write(&mut sink).unwrap();
    assert_eq!(sink, b"hello, views");
}

#[test]
fn carve_of_carve_composes() {
    let bytes: Vec<u8> = (0u8..64).collect();
    let view = SliceView::new(&bytes, 4, 16).unwrap();

    let outer = view.slice(2, 14).unwrap();
    let inner = outer.slice(3, 7).unwrap();

    assert_eq!(inner.len(), 4);
    for j in 0..inner.len() {
        assert_eq!(inner.borrow(j).unwrap(), view.borrow(2 + 3 + j).unwrap());
    }
}

#[test]
fn fill_then_selective_overwrite() {
    let mut bytes = [0u8; 24];
    let mut view = SliceViewMut::new(&mut bytes, 4, 6).unwrap();

    view.fill(&[0xEE; 4]).unwrap();
    view.set(3, &1234u32.to_ne_bytes()).unwrap();

    for i in 0..6 {
        let el = view.borrow(i).unwrap();
        if i == 3 {
            assert_eq!(el.bytes(), 1234u32.to_ne_bytes());
        } else {
            assert_eq!(el.bytes(), [0xEE; 4]);
        }
    }
}

#[test]
fn aliasing_shared_views_observe_the_same_bytes() {
    let bytes: Vec<u8> = (0u8..32).collect();
    let a = SliceView::new(&bytes, 8, 4).unwrap();
    let b = SliceView::new(&bytes, 8, 4).unwrap();

    // Two independent views over one region: same addresses, same data.
    for i in 0..4 {
        let ea = a.borrow(i).unwrap();
        let eb = b.borrow(i).unwrap();
        assert_eq!(ea.as_ptr(), eb.as_ptr());
        assert_eq!(ea.bytes(), eb.bytes());
    }
}

#[test]
fn mutation_through_carves_respects_geometry() {
    let mut storage = [0u16; 8];
    let mut view = TypedSliceMut::new(&mut storage).erase_mut();

    {
        let mut left = view.slice_mut(0, 4).unwrap();
        left.fill(&0xAAAAu16.to_ne_bytes()).unwrap();
    }
    {
        let mut right = view.slice_mut(4, 8).unwrap();
        right.fill(&0x5555u16.to_ne_bytes()).unwrap();
    }

    drop(view);
    assert_eq!(storage[..4], [0xAAAA; 4]);
    assert_eq!(storage[4..], [0x5555; 4]);
}

#[test]
fn error_paths_leave_state_deterministic() {
    let mut bytes = [7u8; 16];
    let mut view = SliceViewMut::new(&mut bytes, 4, 4).unwrap();

    assert_eq!(
        view.slice(3, 1).unwrap_err(),
        SliceError::InvertedRange { begin: 3, end: 1 }
    );
    assert_eq!(
        view.set(4, &[0; 4]).unwrap_err(),
        SliceError::IndexOutOfBounds { index: 4, len: 4 }
    );
    assert_eq!(
        view.fill(&[0; 8]).unwrap_err(),
        SliceError::DataOverrun {
            index: 3,
            data_len: 8,
            span: 16
        }
    );

    // Every failure above happened before any byte moved.
    assert_eq!(view.as_bytes(), [7; 16]);
}

#[test]
fn dump_requires_byte_width_even_after_carving() {
    let bytes = [0u8; 16];
    let view = SliceView::new(&bytes, 4, 4).unwrap();
    let sub = view.slice(0, 2).unwrap();

    let mut sink = Vec::new();
    assert!(matches!(
        sub.write(&mut sink).unwrap_err(),
        DumpError::IncompatibleElementSize { size: 4 }
    ));

    // Reinterpreting the same region at byte width dumps fine.
    let narrow = SliceView::new(&bytes, 1, 16).unwrap();
    narrow.write(&mut sink).unwrap();
    assert_eq!(sink.len(), 16);
}

#[test]
fn typed_and_erased_views_agree_on_errors() {
    let storage = [0u64; 4];
    let typed = TypedSlice::new(&storage);
    let erased = typed.erase();

    assert_eq!(
        typed.get(4).unwrap_err(),
        erased.borrow(4).unwrap_err()
    );
    assert_eq!(
        typed.slice(2, 6).unwrap_err(),
        erased.slice(2, 6).unwrap_err()
    );
}
