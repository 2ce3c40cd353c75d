use bit_ref::{util::as_cells, BitOrder, BitRef};
use rand::Rng;
use test_log::test;

const BUFFER_LEN: usize = 64;
const ROUNDS: usize = 10_000;

fn write(r: &BitRef<'_>, op: u8, value: bool) {
    match op {
        0 => {
            r.set(value);
        }
        1 => {
            r.toggle_if(value);
        }
        2 => {
            r.and_assign(value);
        }
        _ => {
            r.or_assign(value);
        }
    }
}

fn expected(current: bool, op: u8, value: bool) -> bool {
    match op {
        0 => value,
        1 => current ^ value,
        2 => current & value,
        _ => current | value,
    }
}

#[test]
fn bit_ref_isolation_random_ops() {
    let mut rng = rand::rng();

    for order in [BitOrder::Lsb0, BitOrder::Msb0] {
        let mut bytes: Vec<u8> = (0..BUFFER_LEN).map(|_| rng.random()).collect();
        let mut model = bytes.clone();

        for _ in 0..ROUNDS {
            let offset = rng.random_range(0..BUFFER_LEN * 8);
            let op = rng.random_range(0..4u8);
            let value: bool = rng.random();

            {
                let r = BitRef::with_order(as_cells(&mut bytes), offset, order);
                let before = r.get();
                write(&r, op, value);
                assert_eq!(expected(before, op, value), r.get());
            }

            let mask = order.mask((offset % 8) as u8);
            let byte = &mut model[offset / 8];
            let current = *byte & mask != 0;
            *byte = (*byte & !mask) | if expected(current, op, value) { mask } else { 0 };

            assert_eq!(model, bytes, "{order}: op {op} at offset {offset}");
        }
    }
}

#[test]
fn bit_ref_isolation_random_swaps() {
    let mut rng = rand::rng();

    let mut bytes: Vec<u8> = (0..BUFFER_LEN).map(|_| rng.random()).collect();
    let ones = bytes.iter().map(|b| b.count_ones()).sum::<u32>();

    for _ in 0..ROUNDS {
        let a = rng.random_range(0..BUFFER_LEN * 8);
        let b = rng.random_range(0..BUFFER_LEN * 8);

        let snapshot = bytes.clone();

        {
            let cells = as_cells(&mut bytes);
            BitRef::new(cells, a).swap(&BitRef::new(cells, b));
        }

        let bit = |buf: &[u8], idx: usize| buf[idx / 8] & (1u8 << (idx % 8)) != 0;

        assert_eq!(bit(&snapshot, b), bit(&bytes, a));
        assert_eq!(bit(&snapshot, a), bit(&bytes, b));

        for idx in (0..BUFFER_LEN * 8).filter(|&idx| idx != a && idx != b) {
            assert_eq!(bit(&snapshot, idx), bit(&bytes, idx), "bit {idx} changed");
        }
    }

    assert_eq!(ones, bytes.iter().map(|b| b.count_ones()).sum::<u32>());
}
