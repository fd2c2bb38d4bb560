use rand::{rngs::StdRng, Rng, SeedableRng};
use tudey_shapes::coord::*;

#[test]
fn largest_region_of_full_and_holed_square() {
    let mut set = CoordSet::from_region(Region::new(0, 0, 3, 3));
    assert_eq!(set.len(), 9);
    let largest = set.largest_region();
    assert_eq!(largest.area(), 9);
    assert_eq!(largest, Region::new(0, 0, 3, 3));

    assert!(set.remove(1, 1));
    let largest = set.largest_region();
    assert!(largest.area() <= 3);
    assert_eq!(largest.area(), 3);
    assert!(set.contains_region(largest));
}

#[test]
fn largest_region_of_empty_set() {
    let set = CoordSet::new();
    assert_eq!(set.largest_region(), Region::default());
    assert_eq!(set.largest_region().area(), 0);
}

#[test]
fn largest_region_caps_width_by_lower_rows() {
    // 1 wide column at x = 0 with a 4 wide block on top of it, starting at y = 1
    let mut set = CoordSet::new();
    set.add(0, 0);
    set.add_all(0, 1, 4, 2);
    let largest = set.largest_region();
    assert_eq!(largest, Region::new(0, 1, 4, 2));
    assert!(set.contains_region(largest));
}

#[test]
fn add_all_grows_by_absent_cells() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut set = CoordSet::new();
    for _ in 0..100 {
        let x = rng.gen_range(-20..20);
        let y = rng.gen_range(-20..20);
        let w = rng.gen_range(0..6);
        let h = rng.gen_range(0..6);
        let absent = Region::new(x, y, w, h)
            .coords()
            .filter(|c| !set.contains_coord(*c))
            .count();
        let before = set.len();
        let changed = set.add_all(x, y, w, h);
        assert!(set.contains_all(x, y, w, h));
        assert_eq!(set.len(), before + absent);
        assert_eq!(changed, absent > 0);
    }
}

#[test]
fn remove_all_clears_region() {
    let mut set = CoordSet::from_region(Region::new(-5, -5, 10, 10));
    assert!(set.remove_region(Region::new(-2, -2, 4, 4)));
    assert_eq!(set.len(), 100 - 16);
    assert!(!set.contains(0, 0));
    assert!(set.contains(-3, 0));
    assert!(!set.remove_region(Region::new(-2, -2, 4, 4)));
}

#[test]
fn border_is_disjoint_and_adjacent() {
    let mut rng = StdRng::seed_from_u64(11);
    let set: CoordSet = (0..60)
        .map(|_| Coord::new(rng.gen_range(-8..8), rng.gen_range(-8..8)))
        .collect();

    let border = set.border();
    assert!(!border.is_empty());
    for c in border.iter() {
        assert!(!set.contains_coord(c));
        assert!(Direction::ALL
            .iter()
            .any(|&d| set.contains_coord(c.step(d.opposite()))));
    }
    // every neighbor of a member is either a member or on the border
    for c in set.iter() {
        for d in Direction::ALL {
            let n = c.step(d);
            assert!(set.contains_coord(n) || border.contains_coord(n));
        }
    }

    let cardinal = set.cardinal_border();
    for c in cardinal.iter() {
        assert!(border.contains_coord(c));
        assert!(Direction::CARDINAL
            .iter()
            .any(|&d| set.contains_coord(c.step(d))));
    }
}

#[test]
fn border_of_single_cell() {
    let mut set = CoordSet::new();
    set.add(4, -2);
    assert_eq!(set.border().len(), 8);
    assert_eq!(set.cardinal_border().len(), 4);
    assert!(set.cardinal_border().contains(4, -1));
    assert!(!set.cardinal_border().contains(5, -1));

    // into an existing set
    let mut result = CoordSet::new();
    result.add(100, 100);
    set.border_into(&mut result);
    assert_eq!(result.len(), 9);
}

#[test]
fn border_of_block_is_ring() {
    let set = CoordSet::from_region(Region::new(0, 0, 3, 3));
    let border = set.border();
    assert_eq!(border.len(), 16);
    assert!(border.contains_all(-1, -1, 5, 1));
    assert!(!border.contains(1, 1));
    assert_eq!(set.cardinal_border().len(), 12);
}

#[test]
fn border_at_range_edge_drops_unrepresentable_cells() {
    let mut set = CoordSet::new();
    set.add(Coord::MAX, 0);
    let border = set.border();
    assert_eq!(border.len(), 5);
    assert!(border.iter().all(|c| c.x <= Coord::MAX));
}

#[test]
fn encode_round_trips_over_range() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let x = rng.gen_range(Coord::MIN..=Coord::MAX);
        let y = rng.gen_range(Coord::MIN..=Coord::MAX);
        let key = Coord::encode(x, y);
        assert_eq!(Coord::decode(key), Coord::new(x, y));
        assert_eq!(Coord::try_encode(x, y), Ok(key));
    }
    assert_eq!(Coord::encode(1, 2), 0x0001_0002);
    assert_eq!(Coord::encode(-1, 0), 0xFFFF_0000);
}

#[test]
fn out_of_range_coordinates() {
    let mut set = CoordSet::new();
    assert_eq!(
        set.try_add(Coord::MIN - 1, 0),
        Err(tudey_shapes::CoordError::OutOfRange {
            x: Coord::MIN - 1,
            y: 0
        })
    );
    assert!(set.is_empty());
    assert!(!set.contains(0, Coord::MAX + 1));
    // would alias (0, 0) if it were packed
    assert!(!set.contains(0x1_0000, 0));
}

#[test]
#[should_panic]
fn add_out_of_range_panics() {
    let mut set = CoordSet::new();
    set.add(0, Coord::MAX + 1);
}

#[test]
fn get_is_positional() {
    let set = CoordSet::from_region(Region::new(0, 0, 2, 2));
    let by_index: Vec<_> = (0..set.len()).filter_map(|i| set.get(i)).collect();
    let by_iter: Vec<_> = set.iter().collect();
    assert_eq!(by_index, by_iter);
    assert_eq!(set.get(4), None);
}

#[test]
fn pick_random_returns_members() {
    let mut rng = StdRng::seed_from_u64(17);
    assert_eq!(CoordSet::new().pick_random(&mut rng), None);

    let set = CoordSet::from_region(Region::new(-3, 2, 4, 3));
    let mut seen = CoordSet::new();
    for _ in 0..500 {
        let c = set.pick_random(&mut rng).unwrap();
        assert!(set.contains_coord(c));
        seen.add_coord(c);
    }
    // uniform over 12 cells, 500 draws reach all of them
    assert_eq!(seen, set);
}

#[test]
fn pick_random_region_returns_valid_origins() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut set = CoordSet::from_region(Region::new(0, 0, 4, 4));
    set.add_all(10, 10, 2, 1);

    let mut origins = CoordSet::new();
    for _ in 0..500 {
        let c = set.pick_random_region(2, 2, &mut rng).unwrap();
        assert!(set.contains_all(c.x, c.y, 2, 2));
        origins.add_coord(c);
    }
    // 3x3 valid origins in the block, none in the 2x1 strip
    assert_eq!(origins, CoordSet::from_region(Region::new(0, 0, 3, 3)));

    assert_eq!(set.pick_random_region(5, 5, &mut rng), None);
    let one = set.pick_random_region(1, 1, &mut rng).unwrap();
    assert!(set.contains_coord(one));
}

#[test]
fn collect_and_extend() {
    let mut set: CoordSet = vec![Coord::new(1, 1), Coord::new(0, 0), Coord::new(1, 1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    set.extend([Coord::new(2, 2), Coord::new(0, 0)]);
    assert_eq!(set.len(), 3);
    let coords: Vec<Coord> = set.clone().into();
    assert_eq!(CoordSet::try_from(coords), Ok(set.clone()));
    set.clear();
    assert!(set.is_empty());
}
