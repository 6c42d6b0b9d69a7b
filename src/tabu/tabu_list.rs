//! Swap moves and the bounded tabu list.

use std::collections::VecDeque;

/// Exchange of the customers at positions `i` and `j` of a visit order,
/// with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapMove {
    i: usize,
    j: usize,
}

impl SwapMove {
    /// Creates a move, normalising the positions so that `i < j`.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            i: a.min(b),
            j: a.max(b),
        }
    }

    /// Lower position.
    pub fn i(&self) -> usize {
        self.i
    }

    /// Higher position.
    pub fn j(&self) -> usize {
        self.j
    }

    /// Applies the move to `order` in place.
    pub fn apply(&self, order: &mut [usize]) {
        order.swap(self.i, self.j);
    }
}

/// Short-term memory of recently applied moves.
///
/// Holds at most `tenure` moves; pushing beyond that evicts the oldest.
///
/// # Examples
///
/// ```
/// use fleet_routing::tabu::{SwapMove, TabuList};
///
/// let mut tabu = TabuList::new(2);
/// tabu.push(SwapMove::new(0, 1));
/// tabu.push(SwapMove::new(1, 2));
/// tabu.push(SwapMove::new(0, 2));
/// assert!(!tabu.contains(SwapMove::new(0, 1)));
/// assert!(tabu.contains(SwapMove::new(2, 1)));
/// assert_eq!(tabu.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    moves: VecDeque<SwapMove>,
    tenure: usize,
}

impl TabuList {
    /// Creates an empty list with the given tenure.
    pub fn new(tenure: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(tenure + 1),
            tenure,
        }
    }

    /// Records a move, evicting the oldest once over tenure.
    pub fn push(&mut self, mv: SwapMove) {
        self.moves.push_back(mv);
        if self.moves.len() > self.tenure {
            self.moves.pop_front();
        }
    }

    /// Returns `true` if the move is currently forbidden.
    pub fn contains(&self, mv: SwapMove) -> bool {
        self.moves.contains(&mv)
    }

    /// Number of forbidden moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if nothing is forbidden.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_move_normalised() {
        let mv = SwapMove::new(5, 2);
        assert_eq!(mv.i(), 2);
        assert_eq!(mv.j(), 5);
        assert_eq!(mv, SwapMove::new(2, 5));
    }

    #[test]
    fn test_swap_move_apply() {
        let mut order = vec![10, 11, 12, 13];
        SwapMove::new(1, 3).apply(&mut order);
        assert_eq!(order, vec![10, 13, 12, 11]);
    }

    #[test]
    fn test_tabu_list_fifo_eviction() {
        let mut tabu = TabuList::new(3);
        for k in 0..5 {
            tabu.push(SwapMove::new(k, k + 1));
        }
        assert_eq!(tabu.len(), 3);
        assert!(!tabu.contains(SwapMove::new(0, 1)));
        assert!(!tabu.contains(SwapMove::new(1, 2)));
        assert!(tabu.contains(SwapMove::new(2, 3)));
        assert!(tabu.contains(SwapMove::new(4, 5)));
    }

    #[test]
    fn test_tabu_list_zero_tenure() {
        let mut tabu = TabuList::new(0);
        tabu.push(SwapMove::new(0, 1));
        assert!(tabu.is_empty());
        assert!(!tabu.contains(SwapMove::new(0, 1)));
    }
}
