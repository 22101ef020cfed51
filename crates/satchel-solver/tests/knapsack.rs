// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use satchel_bnb::frontier::FrontierKind;
use satchel_model::{
    generation::InstanceGenerator,
    index::ItemIndex,
    item::{Item, is_sorted_by_density, sort_by_density},
    loading::ItemLoader,
    model::{ModelBuilder, ModelError},
};
use satchel_solver::{error::SolveError, solve, solver::SolverBuilder};

fn classic() -> Vec<Item<f64>> {
    vec![
        Item::new(60.0, 10.0),
        Item::new(100.0, 20.0),
        Item::new(120.0, 30.0),
    ]
}

#[test]
fn classic_instance() {
    let mut items = classic();
    assert_eq!(solve(&mut items, 50.0), Ok(220.0));

    let mut items = classic();
    assert_eq!(solve(&mut items, 40.0), Ok(180.0));
}

#[test]
fn zero_capacity_yields_zero() {
    let mut items = classic();
    assert_eq!(solve(&mut items, 0.0), Ok(0.0));
}

#[test]
fn single_item() {
    assert_eq!(solve(&mut [Item::new(9.0f64, 3.0)], 3.0), Ok(9.0));
    assert_eq!(solve(&mut [Item::new(9.0f64, 3.0)], 2.5), Ok(0.0));
}

#[test]
fn f32_input_accumulates_in_f64() {
    let mut items: Vec<Item<f32>> = (0..20).map(|_| Item::new(16_777_216.0, 1.0)).collect();
    items.push(Item::new(1.0, 1.0));
    // 2^24 + 1 is not representable in f32.
    let best = solve(&mut items, 21.0).unwrap();
    assert_eq!(best, 20.0 * 16_777_216.0 + 1.0);
}

#[test]
fn sort_is_idempotent() {
    let mut items = InstanceGenerator::<f64>::seeded(11).generate(50);
    items.push(Item::new(3.0, 0.0));
    items.push(Item::new(0.0, 0.0));

    sort_by_density(&mut items);
    assert!(is_sorted_by_density(&items));
    let once = items.clone();
    sort_by_density(&mut items);
    assert_eq!(items, once);

    let mut solved = once.clone();
    solve(&mut solved, 5.0).unwrap();
    assert_eq!(solved, once);
}

#[test]
fn monotone_in_capacity() {
    let mut rng = SmallRng::seed_from_u64(1);
    for seed in 0..20 {
        let items = InstanceGenerator::<f64>::seeded(seed).generate(15);
        let mut previous = 0.0f64;
        let mut capacity = 0.0f64;
        for _ in 0..8 {
            capacity += rng.gen_range(0.0..1.5);
            let best = solve(&mut items.clone(), capacity).unwrap();
            assert!(best + 1e-9 >= previous, "capacity {capacity}: {best} < {previous}");
            previous = best;
        }
    }
}

#[test]
fn monotone_in_items() {
    let mut rng = SmallRng::seed_from_u64(2);
    for seed in 0..20 {
        let mut items = InstanceGenerator::<f64>::seeded(100 + seed).generate(4);
        let capacity: f64 = rng.gen_range(0.5..3.0);
        let mut previous = solve(&mut items.clone(), capacity).unwrap();

        let extra = InstanceGenerator::<f64>::seeded(200 + seed).generate(10);
        for item in extra {
            items.push(item);
            let best = solve(&mut items.clone(), capacity).unwrap();
            assert!(best + 1e-9 >= previous);
            previous = best;
        }
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    let cases: Vec<(Vec<Item<f64>>, f64, ModelError)> = vec![
        (vec![], 1.0, ModelError::EmptyItems),
        (classic(), -1.0, ModelError::NegativeCapacity),
        (classic(), f64::INFINITY, ModelError::NonFiniteCapacity),
        (
            vec![Item::new(1.0, 1.0), Item::new(-2.0, 1.0)],
            1.0,
            ModelError::NegativeValue {
                index: ItemIndex::new(1),
            },
        ),
        (
            vec![Item::new(f64::NAN, 1.0)],
            1.0,
            ModelError::NonFiniteValue {
                index: ItemIndex::new(0),
            },
        ),
        (
            vec![Item::new(1.0, f64::INFINITY)],
            1.0,
            ModelError::NonFiniteWeight {
                index: ItemIndex::new(0),
            },
        ),
    ];

    for (mut items, capacity, expected) in cases {
        assert_eq!(
            solve(&mut items, capacity),
            Err(SolveError::InvalidInput(expected))
        );
    }
}

#[test]
fn loaded_instance_solves_end_to_end() {
    let data = "\
# value,weight
60,10
100;20
120 30
";
    let items: Vec<Item<f64>> = ItemLoader::new().from_str(data).unwrap();
    let model = ModelBuilder::from_items(50.0, &items).build().unwrap();

    for kind in FrontierKind::ALL {
        let outcome = SolverBuilder::new().with_frontier(kind).build().solve(&model);
        assert!(outcome.is_optimal());
        assert_relative_eq!(outcome.objective(), 220.0);
        assert_eq!(
            outcome.result().solution().selected(),
            &[ItemIndex::new(1), ItemIndex::new(2)]
        );
    }
}

#[test]
fn generator_is_reproducible_through_the_facade() {
    let mut a = InstanceGenerator::<f32>::seeded(5).generate(25);
    let mut b = InstanceGenerator::<f32>::seeded(5).generate(25);
    assert_eq!(solve(&mut a, 4.0), solve(&mut b, 4.0));
    assert_eq!(a, b);
}
