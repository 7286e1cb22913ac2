#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use slotlru::ds::{Link, RecencyList, SlotArena, SlotId};

// Fuzz RecencyList against a VecDeque of ids (front = most recent).
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<Link> = SlotArena::new();
    let mut list = RecencyList::new();
    let mut model: VecDeque<SlotId> = VecDeque::new();
    let mut detached: Vec<SlotId> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 5;
        let pick = pair[1] as usize;

        match op {
            0 => {
                let id = arena.allocate(Link::default());
                assert!(list.push_front(&mut arena, id));
                assert!(!list.push_front(&mut arena, id));
                model.push_front(id);
            },
            1 => {
                if !model.is_empty() {
                    let id = model[pick % model.len()];
                    assert!(list.move_to_front(&mut arena, id));
                    model.retain(|&other| other != id);
                    model.push_front(id);
                }
            },
            2 => {
                if !model.is_empty() {
                    let id = model.remove(pick % model.len()).unwrap();
                    assert!(list.detach(&mut arena, id));
                    assert!(!list.detach(&mut arena, id));
                    detached.push(id);
                }
            },
            3 => {
                let popped = list.pop_back(&mut arena);
                assert_eq!(popped, model.pop_back());
                detached.extend(popped);
            },
            _ => {
                if let Some(id) = detached.pop() {
                    assert!(list.push_front(&mut arena, id));
                    model.push_front(id);
                }
            },
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.front(), model.front().copied());
        assert_eq!(list.back(), model.back().copied());
        assert!(list.check_invariants(&arena).is_ok());
    }

    let order: Vec<SlotId> = list.iter(&arena).map(|(id, _)| id).collect();
    assert_eq!(order, model.iter().copied().collect::<Vec<_>>());
});
