//! Monte Carlo tree search scaffolding (partially implemented).
//!
//! Visit/win-count tree node with UCB1 selection, expansion, and result
//! backpropagation. Rollouts and the surrounding search loop are still
//! missing, so [`crate::agent::Algorithm::MonteCarlo`] reports the
//! algorithm as unsupported rather than routing through this module.

use crate::constants::UCB1_C;
use crate::state::{State, legal_moves};

/// A node in a Monte Carlo search tree.
pub struct TreeNode {
    /// Game state at this node
    pub state: State,
    /// Move that produced this state (`None` at the root)
    pub pocket: Option<usize>,
    /// Accumulated result total (winrate = wins / visits)
    pub wins: f64,
    /// Number of times this node was visited
    pub visits: u32,
    /// Legal moves not yet expanded into children
    pub untried: Vec<usize>,
    /// Expanded child nodes
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node for the given state.
    pub fn new(state: &State, pocket: Option<usize>) -> Self {
        Self {
            untried: legal_moves(state),
            state: state.clone(),
            pocket,
            wins: 0.0,
            visits: 0,
            children: Vec::new(),
        }
    }

    /// UCB1 score given the parent's visit total.
    ///
    /// Unvisited nodes score infinity so they are always tried first.
    pub fn ucb1(&self, total_visits: u32) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let exploit = self.wins / self.visits as f64;
        let explore = UCB1_C * ((total_visits as f64).ln() / self.visits as f64).sqrt();
        exploit + explore
    }

    /// Index of the child with the highest UCB1 score, or `None` for a leaf.
    pub fn select_child(&self) -> Option<usize> {
        (0..self.children.len()).max_by(|&a, &b| {
            self.children[a]
                .ucb1(self.visits)
                .partial_cmp(&self.children[b].ucb1(self.visits))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Attach a child for `pocket`, removing it from the untried set.
    pub fn add_child(&mut self, pocket: usize, state: &State) {
        self.untried.retain(|&m| m != pocket);
        self.children.push(TreeNode::new(state, Some(pocket)));
    }

    /// Record one visit with the given playout result.
    pub fn update(&mut self, result: f64) {
        self.visits += 1;
        self.wins += result;
    }
}
