use std::collections::VecDeque;

use proptest::prelude::*;
use ringdeque::{ceil_pow2, Deque};

const PROPTEST_CASES: u32 = 64;

#[derive(Debug, Clone)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PushBackMany(Vec<i32>),
    PushFrontMany(Vec<i32>),
    PopBack,
    PopFront,
    PopFrontZero,
    PopBackZero,
    PopFrontShrink,
    PopBackShrink,
    DropFront(isize),
    DropBack(isize),
    DropFrontZero(isize),
    Set(u8, i32),
    Swap(u8, u8),
    Reserve(u8),
    Shrink,
    ClearLazy,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        4 => any::<i32>().prop_map(Op::PushFront),
        1 => prop::collection::vec(any::<i32>(), 0..20).prop_map(Op::PushBackMany),
        1 => prop::collection::vec(any::<i32>(), 0..20).prop_map(Op::PushFrontMany),
        2 => Just(Op::PopBack),
        2 => Just(Op::PopFront),
        1 => Just(Op::PopFrontZero),
        1 => Just(Op::PopBackZero),
        1 => Just(Op::PopFrontShrink),
        1 => Just(Op::PopBackShrink),
        1 => (-2isize..5).prop_map(Op::DropFront),
        1 => (-2isize..5).prop_map(Op::DropBack),
        1 => (-2isize..5).prop_map(Op::DropFrontZero),
        1 => (any::<u8>(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => (any::<u8>(), any::<u8>()).prop_map(|(i, j)| Op::Swap(i, j)),
        1 => any::<u8>().prop_map(Op::Reserve),
        1 => Just(Op::Shrink),
        1 => Just(Op::ClearLazy),
    ]
}

/// Applies `op` to both the deque and the model.
fn apply(deque: &mut Deque<i32>, model: &mut VecDeque<i32>, op: Op) -> Result<(), TestCaseError> {
    match op {
        Op::PushBack(v) => {
            deque.push_back(v);
            model.push_back(v);
        }
        Op::PushFront(v) => {
            deque.push_front(v);
            model.push_front(v);
        }
        Op::PushBackMany(values) => {
            let before = deque.capacity();
            let needed = deque.len() + values.len();
            model.extend(values.iter().copied());
            deque.push_back_many(values);
            if needed > before {
                prop_assert_eq!(deque.capacity(), ceil_pow2(needed));
            } else {
                prop_assert_eq!(deque.capacity(), before);
            }
        }
        Op::PushFrontMany(values) => {
            for &v in &values {
                model.push_front(v);
            }
            deque.push_front_many(values);
        }
        Op::PopBack => prop_assert_eq!(deque.pop_back(), model.pop_back()),
        Op::PopFront => prop_assert_eq!(deque.pop_front(), model.pop_front()),
        Op::PopFrontZero => prop_assert_eq!(deque.pop_front_zero(), model.pop_front()),
        Op::PopBackZero => prop_assert_eq!(deque.pop_back_zero(), model.pop_back()),
        Op::PopFrontShrink | Op::PopBackShrink => {
            let before = deque.capacity();
            if matches!(op, Op::PopFrontShrink) {
                prop_assert_eq!(deque.pop_front_shrink(), model.pop_front());
            } else {
                prop_assert_eq!(deque.pop_back_shrink(), model.pop_back());
            }
            let len = model.len();
            if len <= before >> 2 {
                prop_assert_eq!(deque.capacity(), ceil_pow2(len << 1).min(before));
            } else {
                prop_assert_eq!(deque.capacity(), before);
            }
        }
        Op::DropFront(n) => {
            deque.drop_front(n);
            let n = (n.max(0) as usize).min(model.len());
            model.drain(..n).for_each(drop);
        }
        Op::DropBack(n) => {
            deque.drop_back(n);
            let keep = model.len().saturating_sub(n.max(0) as usize);
            model.truncate(keep);
        }
        Op::DropFrontZero(n) => {
            deque.drop_front_zero(n);
            let n = (n.max(0) as usize).min(model.len());
            model.drain(..n).for_each(drop);
        }
        Op::Set(i, v) => {
            if !model.is_empty() {
                let i = i as usize % model.len();
                deque.set(i, v);
                model[i] = v;
            }
        }
        Op::Swap(i, j) => {
            if !model.is_empty() {
                let i = i as usize % model.len();
                let j = j as usize % model.len();
                deque.swap(i, j);
                model.swap(i, j);
            }
        }
        Op::Reserve(n) => {
            let before = deque.capacity();
            prop_assert!(deque.reserve(n as isize).is_ok());
            let needed = model.len() + n as usize;
            prop_assert_eq!(deque.capacity(), before.max(ceil_pow2(needed)));
        }
        Op::Shrink => {
            prop_assert_eq!(deque.shrink(), ceil_pow2(model.len()));
        }
        Op::ClearLazy => {
            deque.clear_lazy();
            model.clear();
        }
    }
    Ok(())
}

fn check(deque: &Deque<i32>, model: &VecDeque<i32>) -> Result<(), TestCaseError> {
    prop_assert_eq!(deque.len(), model.len());
    prop_assert!(deque.capacity().is_power_of_two());
    prop_assert!(deque.len() <= deque.capacity());
    prop_assert!(deque.iter().eq(model.iter()));
    prop_assert_eq!(deque.peek_front(), model.front());
    prop_assert_eq!(deque.peek_back(), model.back());
    let (a, b) = deque.as_slices();
    prop_assert_eq!(a.len() + b.len(), model.len());
    if a.is_empty() {
        prop_assert!(b.is_empty());
    }
    Ok(())
}

/// Builds a deque holding `items` whose head has been moved forward by `offset` slots.
fn rotated(items: &[i32], offset: usize) -> Deque<i32> {
    let mut deque = Deque::with_capacity(items.len() as isize).unwrap();
    for _ in 0..offset {
        deque.push_back(0);
        deque.drop_front(1);
    }
    deque.push_back_many(items.iter().copied());
    deque
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_sequence_matches_vecdeque(
        initial in 0isize..40,
        ops in prop::collection::vec(op(), 1..300),
    ) {
        let mut deque = Deque::with_capacity(initial).unwrap();
        let mut model = VecDeque::new();
        for op in ops {
            apply(&mut deque, &mut model, op)?;
            check(&deque, &model)?;
        }
    }

    #[test]
    fn prop_index_matches_vecdeque(
        ops in prop::collection::vec(op(), 1..100),
        probes in prop::collection::vec(any::<u8>(), 1..20),
    ) {
        let mut deque = Deque::with_capacity(1).unwrap();
        let mut model = VecDeque::new();
        for op in ops {
            apply(&mut deque, &mut model, op)?;
        }
        for probe in probes {
            let i = probe as usize;
            prop_assert_eq!(deque.get(i), model.get(i));
            if i < model.len() {
                prop_assert_eq!(deque.at(i), &model[i]);
                prop_assert_eq!(deque.at_unchecked(i), &model[i]);
            }
        }
        let expected: Vec<_> = model.iter().copied().collect();
        prop_assert_eq!(deque.to_vec(), expected);
    }

    #[test]
    fn prop_capacity_doubles_on_push(n in 0usize..600) {
        let mut deque = Deque::with_capacity(1).unwrap();
        for i in 0..n {
            deque.push_back(i);
        }
        prop_assert_eq!(deque.len(), n);
        prop_assert_eq!(deque.capacity(), n.next_power_of_two());
    }

    #[test]
    fn prop_resize_keeps_order(
        items in prop::collection::vec(any::<i32>(), 0..100),
        offset in 0usize..128,
        cap in 0isize..300,
    ) {
        let mut deque = rotated(&items, offset);
        let before = deque.capacity();
        let wanted = ceil_pow2(cap as usize);
        let result = deque.resize(cap);
        if wanted == before {
            prop_assert_eq!(result, Err(ringdeque::Error::SameCapacity));
        } else if wanted < items.len() {
            prop_assert_eq!(result, Err(ringdeque::Error::NotEnoughCapacity));
            prop_assert_eq!(deque.capacity(), before);
        } else {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(deque.capacity(), wanted);
        }
        prop_assert_eq!(deque.to_vec(), items);
    }

    #[test]
    fn prop_from_slice_matches_pushes(items in prop::collection::vec(any::<i32>(), 0..100)) {
        let from_slice = Deque::from_slice(&items);
        let mut pushed = Deque::with_capacity(0).unwrap();
        for &x in &items {
            pushed.push_back(x);
        }
        prop_assert_eq!(&from_slice, &pushed);
        prop_assert_eq!(from_slice.capacity(), ceil_pow2(items.len()));
        prop_assert_eq!(Deque::from_slice(&from_slice.to_vec()), pushed);
    }

    #[test]
    fn prop_rotation_is_invisible(
        items in prop::collection::vec(any::<i32>(), 0..64),
        offset_a in 0usize..128,
        offset_b in 0usize..128,
    ) {
        let a = rotated(&items, offset_a);
        let b = rotated(&items, offset_b);
        prop_assert!(a == b);
        prop_assert!(b == a);
        prop_assert!(a == Deque::from_slice(&items));
        prop_assert!(a == items);
        prop_assert_eq!(a.iter().rev().count(), items.len());
    }

    #[test]
    fn prop_unequal_when_one_differs(
        items in prop::collection::vec(0i32..100, 1..64),
        offset in 0usize..128,
        pos in any::<prop::sample::Index>(),
    ) {
        let a = rotated(&items, offset);
        let mut b = Deque::from_slice(&items);
        let pos = pos.index(items.len());
        b.set(pos, -1);
        prop_assert!(a != b);
        prop_assert!(b != a);
    }

    #[test]
    fn prop_search_matches_slice(
        items in prop::collection::vec(0i32..20, 1..64),
        offset in 0usize..128,
        needle in 0i32..20,
    ) {
        let deque = rotated(&items, offset);
        prop_assert_eq!(deque.index_of(&needle), items.iter().position(|&x| x == needle));
        prop_assert_eq!(deque.contains(&needle), items.contains(&needle));
        prop_assert_eq!(deque.min(), items.iter().min().unwrap());
        prop_assert_eq!(deque.max(), items.iter().max().unwrap());
    }

    #[test]
    fn prop_range_matches_slice(
        items in prop::collection::vec(any::<i32>(), 0..64),
        offset in 0usize..128,
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let deque = rotated(&items, offset);
        let (mut start, mut end) = (a.index(items.len() + 1), b.index(items.len() + 1));
        if start > end {
            core::mem::swap(&mut start, &mut end);
        }
        prop_assert_eq!(deque.to_vec_range(start, end), &items[start..end]);
        prop_assert!(deque.range(start..end).eq(items[start..end].iter()));

        let mut dst = vec![0; end - start];
        let copied = deque.copy_to_slice(start, &mut dst);
        prop_assert_eq!(copied, end - start);
        prop_assert_eq!(dst, &items[start..end]);
    }
}
