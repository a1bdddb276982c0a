//! AFL fuzz harness for the sequence containers
//!
//! Drives both representations and a Vec reference model through the same
//! operation stream decoded from the fuzz input:
//! 1. Differential: both representations always match the model
//! 2. Error agreement: out-of-range operations fail identically on both
//! 3. Rendering: Display output matches the model's list rendering

use afl::fuzz;
use strand::seq::array::ArraySeq;
use strand::seq::linked::LinkedSeq;
use strand::seq::{Seq, SeqError};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Append one element
    Push { value: i8 },
    /// Replace an element; the index may be out of range on purpose
    Set { index_frac: u8, value: i8 },
    /// Reverse in place
    Reverse,
    /// Rotate; the magnitude may be out of range on purpose
    Rotate { m_frac: u8 },
    /// Split off a prefix; the index may be out of range on purpose
    SplitBack { index_frac: u8 },
    /// Read probe; the index may be out of range on purpose
    Get { index_frac: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 6;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => {
                let op = FuzzOp::Push {
                    value: rest[0] as i8,
                };
                Some((op, &rest[1..]))
            }
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Set {
                    index_frac: rest[0],
                    value: rest[1] as i8,
                };
                Some((op, &rest[2..]))
            }
            2 => Some((FuzzOp::Reverse, rest)),
            3 if !rest.is_empty() => {
                let op = FuzzOp::Rotate { m_frac: rest[0] };
                Some((op, &rest[1..]))
            }
            4 if !rest.is_empty() => {
                let op = FuzzOp::SplitBack {
                    index_frac: rest[0],
                };
                Some((op, &rest[1..]))
            }
            5 if !rest.is_empty() => {
                let op = FuzzOp::Get {
                    index_frac: rest[0],
                };
                Some((op, &rest[1..]))
            }
            _ => None,
        }
    }
}

/// Scale a byte to an index that lands out of range a fraction of the
/// time, so error paths get fuzzed alongside the happy paths.
fn scale(frac: u8, len: usize) -> usize {
    return (frac as usize) * (len + 2) / 256;
}

/// Both representations must hold exactly the model's contents.
fn check_sync(array: &ArraySeq<i32>, linked: &LinkedSeq<i32>, model: &[i32]) {
    assert_eq!(array.len(), model.len(), "array length mismatch");
    assert_eq!(linked.len(), model.len(), "linked length mismatch");
    assert!(array.iter().eq(model.iter()), "array content mismatch");
    assert!(linked.iter().eq(model.iter()), "linked content mismatch");
    assert_eq!(array, linked, "representations disagree");
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut array: ArraySeq<i32> = ArraySeq::new();
        let mut linked: LinkedSeq<i32> = LinkedSeq::new();
        let mut model: Vec<i32> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Push { value } => {
                    array.push(value as i32);
                    linked.push(value as i32);
                    model.push(value as i32);
                }

                FuzzOp::Set { index_frac, value } => {
                    let index = scale(index_frac, model.len());
                    let r_array = array.set(index, value as i32);
                    let r_linked = linked.set(index, value as i32);
                    assert_eq!(r_array, r_linked, "set results disagree");
                    if index < model.len() {
                        assert_eq!(r_array, Ok(model[index]));
                        model[index] = value as i32;
                    } else {
                        assert_eq!(
                            r_array,
                            Err(SeqError::IndexOutOfBounds {
                                index,
                                len: model.len(),
                            })
                        );
                    }
                }

                FuzzOp::Reverse => {
                    array.reverse();
                    linked.reverse();
                    model.reverse();
                }

                FuzzOp::Rotate { m_frac } => {
                    let m = scale(m_frac, model.len());
                    let r_array = array.rotate(m);
                    let r_linked = linked.rotate(m);
                    assert_eq!(r_array, r_linked, "rotate results disagree");
                    if m <= model.len() {
                        assert_eq!(r_array, Ok(()));
                        model.rotate_right(m);
                    } else {
                        assert_eq!(
                            r_array,
                            Err(SeqError::RotationOutOfRange {
                                m,
                                len: model.len(),
                            })
                        );
                    }
                }

                FuzzOp::SplitBack { index_frac } => {
                    let index = scale(index_frac, model.len());
                    let r_array = array.split_back(index);
                    let r_linked = linked.split_back(index);
                    match (r_array, r_linked) {
                        (Ok(front_array), Ok(front_linked)) => {
                            assert!(index <= model.len(), "accepted out-of-range split");
                            let front_model: Vec<i32> = model.drain(..index).collect();
                            assert_eq!(front_array.to_vec(), front_model);
                            assert_eq!(front_linked.to_vec(), front_model);
                        }
                        (Err(e_array), Err(e_linked)) => {
                            assert_eq!(e_array, e_linked);
                            assert!(index > model.len(), "rejected in-range split");
                        }
                        (r_array, r_linked) => {
                            panic!("split results disagree: {r_array:?} vs {r_linked:?}");
                        }
                    }
                }

                FuzzOp::Get { index_frac } => {
                    let index = scale(index_frac, model.len());
                    assert_eq!(array.get(index), linked.get(index), "get results disagree");
                    assert_eq!(array.get(index).ok(), model.get(index));
                }
            }

            check_sync(&array, &linked, &model);
        }

        // Rendering agreement with the model's list form
        let rendered = format!("{model:?}");
        assert_eq!(array.to_string(), rendered);
        assert_eq!(linked.to_string(), rendered);
    });
}
