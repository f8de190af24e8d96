//! Manual ordering of planned actions.
//!
//! The raw collection is one sequence in which scheduled and unscheduled
//! actions are interleaved. Only unscheduled actions are positioned by hand;
//! scheduled ones keep whatever slot they already occupy. After every change
//! that touches membership or sequence, `order` equals the index.

use jiff::Timestamp;

use crate::{models::PlannedAction, params::InsertPosition};

/// Returns the collection sorted by `order`, ties kept in raw order.
pub fn sort_manual(items: &[PlannedAction]) -> Vec<PlannedAction> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.order);
    sorted
}

/// Rewrites `order` so that it equals each item's index.
pub fn normalize_order(items: &mut [PlannedAction]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.order = index as i64;
    }
}

/// Global index at which a new unscheduled action is spliced into the
/// manually sorted sequence `ordered`.
///
/// `Start` lands on the first unscheduled slot, `End` right after the last
/// one. Without any unscheduled action the item goes to the end.
pub fn unscheduled_insert_index(ordered: &[PlannedAction], at: InsertPosition) -> usize {
    let mut positions = ordered
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_scheduled())
        .map(|(index, _)| index);

    let found = match at {
        InsertPosition::Start => positions.next(),
        InsertPosition::End => positions.last().map(|index| index + 1),
    };
    found.unwrap_or(ordered.len())
}

/// Moves the unscheduled action `id` to rank `target_index` among all
/// unscheduled actions of `ordered`, refreshing its `updated_at`.
///
/// The rank is clamped into range. Scheduled actions stay in their slots and
/// the unscheduled slots are refilled in the new sequence. Returns `None` when
/// `id` is not an unscheduled action.
///
/// The pool is every action without `planned_at`, whatever its status.
pub fn move_unscheduled(
    ordered: &[PlannedAction],
    id: &str,
    target_index: usize,
    now: Timestamp,
) -> Option<Vec<PlannedAction>> {
    let mut pool: Vec<PlannedAction> = ordered
        .iter()
        .filter(|item| !item.is_scheduled())
        .cloned()
        .collect();
    let source = pool.iter().position(|item| item.id == id)?;

    let mut moved = pool.remove(source);
    moved.updated_at = now;
    let bounded = target_index.min(pool.len());
    pool.insert(bounded, moved);

    let mut refill = pool.into_iter();
    let merged = ordered
        .iter()
        .map(|item| {
            if item.is_scheduled() {
                Some(item.clone())
            } else {
                refill.next()
            }
        })
        .collect::<Option<Vec<_>>>()?;
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(description: &str, scheduled: bool, order: i64) -> PlannedAction {
        let now = Timestamp::now();
        let mut action = PlannedAction::new(description, scheduled.then_some(now), order, now);
        action.id = description.to_string();
        action
    }

    fn names(items: &[PlannedAction]) -> Vec<&str> {
        items.iter().map(|item| item.description.as_str()).collect()
    }

    #[test]
    fn test_sort_manual_is_stable() {
        let items = vec![action("b", false, 1), action("a", false, 0), action("c", false, 1)];
        assert_eq!(names(&sort_manual(&items)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_order_uses_index() {
        let mut items = vec![action("a", false, 7), action("b", true, 3), action("c", false, -2)];
        normalize_order(&mut items);
        let orders: Vec<i64> = items.iter().map(|item| item.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_insert_index_around_scheduled_items() {
        let ordered = vec![
            action("s1", true, 0),
            action("u1", false, 1),
            action("s2", true, 2),
            action("u2", false, 3),
            action("s3", true, 4),
        ];
        assert_eq!(unscheduled_insert_index(&ordered, InsertPosition::Start), 1);
        assert_eq!(unscheduled_insert_index(&ordered, InsertPosition::End), 4);
    }

    #[test]
    fn test_insert_index_without_unscheduled_items() {
        let ordered = vec![action("s1", true, 0), action("s2", true, 1)];
        assert_eq!(unscheduled_insert_index(&ordered, InsertPosition::Start), 2);
        assert_eq!(unscheduled_insert_index(&ordered, InsertPosition::End), 2);
        assert_eq!(unscheduled_insert_index(&[], InsertPosition::End), 0);
    }

    #[test]
    fn test_move_keeps_scheduled_slots() {
        let ordered = vec![
            action("u1", false, 0),
            action("s1", true, 1),
            action("u2", false, 2),
            action("u3", false, 3),
        ];
        let moved = move_unscheduled(&ordered, "u3", 0, Timestamp::now()).unwrap();
        assert_eq!(names(&moved), vec!["u3", "s1", "u1", "u2"]);
    }

    #[test]
    fn test_move_counts_completed_items_in_pool() {
        let mut done = action("b", false, 2);
        done.status = crate::models::ActionStatus::Completed;
        let ordered = vec![action("a", false, 0), action("s1", true, 1), done, action("c", false, 3)];

        let moved = move_unscheduled(&ordered, "c", 1, Timestamp::now()).unwrap();
        assert_eq!(names(&moved), vec!["a", "s1", "c", "b"]);

        let moved = move_unscheduled(&ordered, "a", 1, Timestamp::now()).unwrap();
        assert_eq!(names(&moved), vec!["b", "s1", "a", "c"]);
    }

    #[test]
    fn test_move_clamps_target() {
        let ordered = vec![action("u1", false, 0), action("u2", false, 1), action("s1", true, 2)];
        let moved = move_unscheduled(&ordered, "u1", 99, Timestamp::now()).unwrap();
        assert_eq!(names(&moved), vec!["u2", "u1", "s1"]);
    }

    #[test]
    fn test_move_refreshes_only_moved_item() {
        let ordered = vec![action("u1", false, 0), action("u2", false, 1)];
        let later = ordered[0].updated_at + jiff::SignedDuration::from_secs(60);
        let moved = move_unscheduled(&ordered, "u2", 0, later).unwrap();
        assert_eq!(moved[0].updated_at, later);
        assert_eq!(moved[1].updated_at, ordered[0].updated_at);
    }

    #[test]
    fn test_move_unknown_or_scheduled_is_none() {
        let ordered = vec![action("u1", false, 0), action("s1", true, 1)];
        assert!(move_unscheduled(&ordered, "missing", 0, Timestamp::now()).is_none());
        assert!(move_unscheduled(&ordered, "s1", 0, Timestamp::now()).is_none());
    }
}
