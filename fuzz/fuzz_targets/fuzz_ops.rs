#![no_main]

use arbitrary::Arbitrary;
use bytevector::{ByteVector, ReservePlan, ValueRange, VectorOptions, validate::validate_value};
use libfuzzer_sys::fuzz_target;

// Keeps resize and reserve requests small enough that the fuzzer spends its
// time on state transitions rather than allocation.
const MAX_LEN: i64 = 4096;

#[derive(Arbitrary, Debug)]
enum Op {
    Set(u16, i8),
    SafeSet(i64, i64),
    PushBack(i8),
    SafePushBack(i64),
    PopBack,
    SafePopBack,
    Clear,
    Resize(u16, i8),
    SafeResize(i64, i64),
    Reserve(i64),
    Swap(Vec<i8>),
}

#[derive(Arbitrary, Debug)]
struct Input {
    symmetric: bool,
    seed: Vec<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let range = if input.symmetric {
        ValueRange::Symmetric
    } else {
        ValueRange::Int8
    };
    let options = VectorOptions {
        value_range: range,
        ..VectorOptions::default()
    };
    let mut vector = ByteVector::with_options(&input.seed[..], options).unwrap();
    let mut model: Vec<i8> = input.seed.iter().map(|&b| i8::from_ne_bytes([b])).collect();

    for op in input.ops {
        let before = vector.capacity();
        match op {
            Op::Set(idx, val) => {
                let idx = usize::from(idx);
                let ok = vector.set(idx, val).is_ok();
                assert_eq!(ok, idx < model.len());
                if ok {
                    model[idx] = val;
                }
            }
            Op::SafeSet(idx, val) => {
                let slot = usize::try_from(idx).ok().filter(|&i| i < model.len());
                let expected = validate_value(val, range).ok().zip(slot);
                assert_eq!(vector.safe_set(idx, val).is_ok(), expected.is_some());
                if let Some((val, i)) = expected {
                    model[i] = val;
                }
            }
            Op::PushBack(val) => {
                vector.push_back(val);
                model.push(val);
            }
            Op::SafePushBack(val) => {
                let expected = validate_value(val, range).ok();
                let ok = vector.safe_push_back(val).is_ok();
                assert_eq!(ok, expected.is_some());
                if let Some(val) = expected {
                    model.push(val);
                }
            }
            Op::PopBack => {
                if let Some(expected) = model.pop() {
                    assert_eq!(vector.pop_back(), expected);
                }
            }
            Op::SafePopBack => assert_eq!(vector.safe_pop_back().ok(), model.pop()),
            Op::Clear => {
                vector.clear();
                model.clear();
                assert_eq!(vector.capacity(), before);
            }
            Op::Resize(len, fill) => {
                vector.resize(usize::from(len), fill);
                model.resize(usize::from(len), fill);
            }
            Op::SafeResize(len, fill) => {
                if len > MAX_LEN {
                    continue;
                }
                let target = usize::try_from(len).ok().filter(|&n| n > model.len());
                let expected = validate_value(fill, range).ok().zip(target);
                assert_eq!(vector.safe_resize(len, fill).is_ok(), expected.is_some());
                if let Some((fill, n)) = expected {
                    model.resize(n, fill);
                }
            }
            Op::Reserve(p) => {
                if p > MAX_LEN {
                    continue;
                }
                match vector.reserve(p) {
                    Ok(ReservePlan::Truncate(len)) => model.truncate(len),
                    Ok(ReservePlan::Keep) => assert_eq!(vector.capacity(), before),
                    Ok(ReservePlan::Allocate(cap) | ReservePlan::Reallocate(cap)) => {
                        assert_eq!(vector.capacity(), cap);
                    }
                    Err(_) => assert!(p < 0),
                }
            }
            Op::Swap(src) => {
                let other = ByteVector::from(&src[..]);
                vector.swap(&other);
                assert_eq!(vector.capacity(), src.len());
                model = src;
            }
        }

        vector.check_invariants();
        assert_eq!(vector.len(), model.len());
        for (i, &expected) in model.iter().enumerate() {
            assert_eq!(vector.get(i), Ok(expected));
        }
    }
});
