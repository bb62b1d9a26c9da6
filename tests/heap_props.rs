//! Heap ordering properties

use heaptree::{ArrayTree, BinaryTree, Heap, MaxHeap, TraversalOrder, TreeError};
use proptest::prelude::*;

const SOURCE: [i32; 10] = [10, 18, 20, 8, 2, 16, 14, 12, 4, 6];

fn is_heap(tree: &ArrayTree<i32>) -> bool {
    tree.keys().all(|key| match tree.parent(key).unwrap() {
        Some(parent) => tree.get(key).unwrap() <= tree.get(parent).unwrap(),
        None => true,
    })
}

#[test]
fn bulk_and_incremental_agree() {
    let bulk = MaxHeap::from_values(SOURCE.to_vec()).unwrap();
    let mut incremental = MaxHeap::new();
    for value in SOURCE {
        incremental.push(value).unwrap();
    }

    let expected = vec![20, 18, 16, 14, 12, 10, 8, 6, 4, 2];
    assert_eq!(bulk.into_sorted_desc(), Ok(expected.clone()));
    assert_eq!(incremental.into_sorted_desc(), Ok(expected));
}

#[test]
fn pop_past_end_fails() {
    let mut heap = MaxHeap::from_values(vec![1]).unwrap();
    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Err(TreeError::EmptyHeap));
    assert_eq!(heap.pop(), Err(TreeError::EmptyHeap));
}

#[test]
fn heap_root_leads_every_traversal_of_its_tree() {
    let heap = MaxHeap::from_values(SOURCE.to_vec()).unwrap();
    assert_eq!(TraversalOrder::PreOrder.traverse(heap.as_tree()).next(), Some(&20));
    assert_eq!(TraversalOrder::PostOrder.traverse(heap.as_tree()).last(), Some(&20));
}

proptest! {
    #[test]
    fn bulk_build_establishes_invariant(
        values in proptest::collection::vec(-1000i32..1000, 0..128)
    ) {
        let heap = MaxHeap::from_values(values).unwrap();
        prop_assert!(is_heap(heap.as_tree()));
    }

    #[test]
    fn pops_come_out_sorted(values in proptest::collection::vec(any::<i32>(), 0..128)) {
        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        let bulk = MaxHeap::from_values(values.clone()).unwrap();
        prop_assert_eq!(bulk.into_sorted_desc(), Ok(expected.clone()));

        let mut incremental = MaxHeap::new();
        for value in values {
            incremental.push(value).unwrap();
            prop_assert!(is_heap(incremental.as_tree()));
        }
        prop_assert_eq!(incremental.into_sorted_desc(), Ok(expected));
    }

    #[test]
    fn invariant_survives_mixed_operations(
        ops in proptest::collection::vec(prop::option::of(0u8..50), 0..200)
    ) {
        let mut heap = MaxHeap::new();
        let mut shadow: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Some(value) => {
                    prop_assert_eq!(heap.push(value), Ok(()));
                    shadow.push(value);
                }
                None => {
                    let max = shadow.iter().copied().max();
                    match max {
                        Some(max) => {
                            prop_assert_eq!(heap.pop(), Ok(max));
                            let at = shadow.iter().position(|&v| v == max).unwrap();
                            shadow.swap_remove(at);
                        }
                        None => {
                            prop_assert_eq!(heap.pop(), Err(TreeError::EmptyHeap));
                        }
                    }
                }
            }
            prop_assert_eq!(heap.len(), shadow.len());
            prop_assert_eq!(heap.peek().copied(), shadow.iter().copied().max());
        }
    }
}
