#![cfg(test)]

use rand::{Rng, SeedableRng, rngs::StdRng};
use slice_glue::{
    AsSlice, BoundsError, Slice, SliceMut, SliceRange, host::RecordingHost, host_eprintf,
    host_exit, slice_index, slice_len, slice_subslice,
};

fn random_buffer(rng: &mut StdRng, len: usize) -> Vec<u32> {
    std::iter::repeat_with(|| rng.random()).take(len).collect()
}

fn random_range(rng: &mut StdRng, len: usize) -> SliceRange {
    let start = rng.random_range(0..=len);
    let end = rng.random_range(start..=len);
    SliceRange::new(start, end)
}

#[test]
fn random_subslices_compose() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let len = rng.random_range(0..64);
        let buffer = random_buffer(&mut rng, len);
        let slice = Slice::new(&buffer);

        let outer = random_range(&mut rng, slice.len());
        let sub = slice.subslice(outer).unwrap();
        assert_eq!(sub.len(), outer.len());
        assert_eq!(sub, buffer[outer.start..outer.end]);

        let inner = random_range(&mut rng, sub.len());
        let nested = sub.subslice(inner).unwrap();
        for j in 0..nested.len() {
            assert_eq!(nested.get(j), slice.get(outer.start + inner.start + j));
        }
        assert!(nested.get(nested.len()).unwrap_err().is_index());
        assert!(sub.subslice(0..sub.len()).unwrap().same_view(&sub));
    }
}

#[test]
fn random_out_of_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let len = rng.random_range(0..32);
        let buffer = random_buffer(&mut rng, len);
        let end = rng.random_range(len + 1..len + 8);
        assert_eq!(
            buffer.view_to(end),
            Err(BoundsError::Capacity { end, capacity: len })
        );
        let slice = Slice::new(&buffer);
        assert_eq!(
            slice.subslice(0..end),
            Err(BoundsError::Range { start: 0, end, len })
        );
        assert_eq!(
            slice.get(end),
            Err(BoundsError::Index { index: end, len })
        );
    }
}

#[test]
fn generated_code_shape() {
    // The kind of function a code generator emits: sum a window, give up on a
    // bad window.
    fn window_sum(host: &RecordingHost, data: Slice<'_, u32>, r: SliceRange) -> u32 {
        let window = match slice_subslice!(data, r) {
            Ok(window) => window,
            Err(e) => {
                host_eprintf!(host => "window_sum: {e}\n");
                host_exit!(host => 1)
            }
        };
        let mut sum = 0;
        for i in 0..slice_len!(window) {
            sum += match slice_index!(window, i) {
                Ok(x) => *x,
                Err(_) => host_exit!(host => 2),
            };
        }
        sum
    }

    let data = [10, 20, 30, 40, 50];
    let host = RecordingHost::new();
    let slice = Slice::new(&data);
    assert_eq!(
        host.run(|h| window_sum(h, slice, SliceRange::new(1, 4))),
        Ok(90)
    );
    assert_eq!(
        host.run(|h| window_sum(h, slice, SliceRange::new(3, 9))),
        Err(1)
    );
    assert_eq!(
        host.diagnostics(),
        ["window_sum: range 3..9 out of bounds for slice of length 5\n"]
    );
}

#[test]
fn serialize_views() {
    let mut data = [1u8, 2, 3, 4];
    let slice = Slice::from_buffer_range(&data, 1..3).unwrap();
    assert_eq!(serde_json::to_string(&slice).unwrap(), "[2,3]");
    assert_eq!(serde_json::to_string(&Slice::<u8>::empty()).unwrap(), "[]");

    let view = SliceMut::from_buffer(&mut data, 2).unwrap();
    assert_eq!(serde_json::to_string(&view).unwrap(), "[1,2]");
}

#[test]
fn range_round_trip() {
    let range = SliceRange::new(2, 5);
    let json = serde_json::to_string(&range).unwrap();
    assert_eq!(json, r#"{"start":2,"end":5}"#);
    assert_eq!(serde_json::from_str::<SliceRange>(&json).unwrap(), range);
}
