use arena_list::{ArenaError, ArenaList};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_insert_get_set() {
    let mut list = ArenaList::<f32, 4>::new();
    let a = list.insert_with([0.0, 1.0, 2.0, 3.0]);
    let b = list.insert();
    assert_eq!(a, 0);
    assert_eq!(b, 1);
    assert_eq!(list.get(a, 2), 2.0);
    assert_eq!(list.record(b), &[0.0; 4]);

    list.set(b, 3, 7.5);
    assert_eq!(list.get(b, 3), 7.5);
    assert_eq!(list.size(), 2);
    assert_eq!(list.live_len(), 2);
}

#[test]
fn test_erase_keeps_range() {
    let mut list = ArenaList::<i32, 2>::new();
    for i in 0..4 {
        list.insert_with([i, -i]);
    }
    list.erase(3).unwrap();
    list.erase(0).unwrap();
    assert_eq!(list.size(), 4);
    assert_eq!(list.live_len(), 2);
    assert_eq!(list.free_len(), 2);
    assert!(!list.is_live(0));
    assert!(list.is_live(1));
}

#[test]
fn test_erase_errors() {
    let mut list = ArenaList::<i32, 2>::new();
    let index = list.insert();
    assert_eq!(
        list.erase(5),
        Err(ArenaError::OutOfBounds { index: 5, size: 1 })
    );
    list.erase(index).unwrap();
    assert_eq!(list.erase(index), Err(ArenaError::DoubleErase { index }));
    assert_eq!(list.live_len(), 0);
}

#[test]
fn test_try_get() {
    let mut list = ArenaList::<i64, 2>::new();
    let index = list.insert_with([10, 20]);
    assert_eq!(list.try_get(index, 1), Some(20));
    assert_eq!(list.try_get(index, 2), None);
    assert_eq!(list.try_get(9, 0), None);
    list.erase(index).unwrap();
    assert_eq!(list.try_get(index, 0), None);
}

#[test]
#[should_panic(expected = "is free")]
fn test_get_free_record_panics() {
    let mut list = ArenaList::<i32, 2>::new();
    let index = list.insert();
    list.erase(index).unwrap();
    list.get(index, 0);
}

#[test]
fn test_clear_resets_free_list() {
    let mut list = ArenaList::<i32, 2>::new();
    for _ in 0..5 {
        list.insert();
    }
    list.erase(2).unwrap();
    list.clear();
    assert_eq!(list.size(), 0);
    assert!(list.is_empty());
    assert_eq!(list.insert(), 0);
    assert_eq!(list.insert(), 1);
}

#[test]
fn test_iter_skips_free_records() {
    let mut list = ArenaList::<i32, 1>::new();
    for i in 0..5 {
        list.insert_with([i * 10]);
    }
    list.erase(1).unwrap();
    list.erase(3).unwrap();
    let live: Vec<(u32, i32)> = list.iter().map(|(index, r)| (index, r[0])).collect();
    assert_eq!(live, vec![(0, 0), (2, 20), (4, 40)]);
}

#[test]
fn test_random_against_model() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut list = ArenaList::<u32, 3>::new();
    let mut model: Vec<Option<[u32; 3]>> = Vec::new();
    let mut max_size = 0;

    for step in 0..10_000u32 {
        let live: Vec<usize> = model
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_some())
            .map(|(i, _)| i)
            .collect();
        if live.is_empty() || rng.gen_bool(0.55) {
            let fields = [step, step.wrapping_mul(3), step ^ 0xABCD];
            let index = list.insert_with(fields) as usize;
            if index == model.len() {
                model.push(Some(fields));
            } else {
                assert!(model[index].is_none(), "reused a live slot");
                model[index] = Some(fields);
            }
        } else {
            let victim = live[rng.gen_range(0..live.len())];
            list.erase(victim as u32).unwrap();
            model[victim] = None;
        }

        assert!(list.size() >= max_size, "range shrank without clear");
        max_size = list.size();
    }

    assert_eq!(list.size(), model.len());
    for (index, record) in model.iter().enumerate() {
        match record {
            Some(fields) => assert_eq!(list.record(index as u32), fields),
            None => assert!(!list.is_live(index as u32)),
        }
    }
    assert_eq!(
        list.live_len(),
        model.iter().filter(|r| r.is_some()).count()
    );
}
