#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skipdict::{Ascending, SkipList};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(i16),
    Search(i16),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    max_height: u8,
    seed: u64,
    ops: Vec<Op>,
}

fuzz_target!(|input: FuzzInput| {
    let max_height = usize::from(input.max_height % 32) + 1;
    let mut list = SkipList::with_seed(max_height, Ascending, input.seed).unwrap();
    // Эталон: отсортированный вектор.
    let mut model: Vec<i16> = Vec::new();

    for op in input.ops {
        match op {
            Op::Insert(v) => {
                list.insert(v).unwrap();
                let at = model.partition_point(|x| *x <= v);
                model.insert(at, v);
            }
            Op::Search(v) => {
                assert_eq!(list.search(&v).is_some(), model.binary_search(&v).is_ok());
            }
            Op::Clear => {
                list.clear();
                model.clear();
                assert_eq!(list.max_level(), 0);
            }
        }
    }

    assert!(list.max_level() <= max_height);
    assert!(list.iter().copied().eq(model.iter().copied()));
    list.validate_invariants().unwrap();
});
