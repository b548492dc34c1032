//! Transition rules of the sweep.
//!
//! A state `(node, mode)` says that every vertex ending before `node` is
//! dominated. In `Solid` mode the last vertex labeled 2 already has a positive
//! neighbor; in `Boundary` mode `node` itself was just labeled 2 and still needs
//! one, which the next rule must provide with the rightmost vertex of `N[node]`.
//! A `Boundary` state whose vertex has no neighbor to its right is a dead end.
//!
//! Each rule places `k` vertices labeled 1 (the helpers) and, unless the
//! component is exhausted, one vertex labeled 2:
//!
//! | rule     | helpers in `Solid`    | helpers in `Boundary`        |
//! |----------|-----------------------|------------------------------|
//! | `Single` | none                  | none                         |
//! | `Pair`   | 1st undominated       | rightmost of `N[node]`       |
//! | `Triple` | 1st, 2nd undominated  | rightmost of `N[node]`, 1st  |
//!
//! The undominated vertex following the helpers is the pending vertex. When
//! there is none the component is closed at its last vertex. Otherwise the new
//! vertex labeled 2 either extends the anchor (the last helper, or `node`) to
//! the right, or reaches the pending vertex.

use super::sweep::{Node, Sweep};
use crate::types::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Solid,
    Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub node: Node,
    pub mode: Mode,
}

impl State {
    pub const START: State = State {
        node: Node::Start,
        mode: Mode::Solid,
    };

    pub fn new(v: usize, mode: Mode) -> Self {
        Self {
            node: Node::Vertex(v),
            mode,
        }
    }
}

/// A relaxation candidate produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub target: State,
    pub cost: Weight,
    pub ones: Vec<usize>,
    pub two: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Triple,
    Pair,
    Single,
}

impl Rule {
    /// Rules in the order they are tried from every state.
    pub const ALL: [Rule; 3] = [Rule::Triple, Rule::Pair, Rule::Single];

    fn num_helpers(self) -> usize {
        match self {
            Rule::Single => 0,
            Rule::Pair => 1,
            Rule::Triple => 2,
        }
    }

    /// Returns the transitions of this rule out of `from`.
    pub fn transitions(self, sweep: &Sweep, from: State) -> Vec<Transition> {
        let k = self.num_helpers();
        let mut helpers = Vec::with_capacity(k);
        let pending = match (from.mode, from.node) {
            (Mode::Solid, node) => {
                let lookups = sweep.undominated(node, k + 1);
                if lookups.len() < k {
                    return Vec::new();
                }
                helpers.extend_from_slice(&lookups[..k]);
                lookups.get(k).copied()
            }
            (Mode::Boundary, Node::Vertex(_)) if k == 0 => {
                // The vertex labeled 2 at `node` gets its support from `N[node]`.
                return extend(sweep, from.node, &helpers, None).into_iter().collect();
            }
            (Mode::Boundary, Node::Vertex(v)) => {
                let support = sweep.rightmost_in_closed_neighborhood(v);
                if support == v {
                    // `v` keeps its label 2; a support must come from the right.
                    return Vec::new();
                }
                helpers.push(support);
                let lookups = sweep.undominated(from.node, k);
                if lookups.len() < k - 1 {
                    return Vec::new();
                }
                helpers.extend_from_slice(&lookups[..k - 1]);
                lookups.get(k - 1).copied()
            }
            (Mode::Boundary, Node::Start) => return Vec::new(),
        };
        let anchor = helpers.last().map_or(from.node, |&h| Node::Vertex(h));
        match pending {
            None => vec![Transition {
                target: State::new(sweep.last(), Mode::Solid),
                cost: k,
                ones: helpers,
                two: None,
            }],
            Some(w) => {
                let bound = match from.mode {
                    Mode::Solid => None,
                    Mode::Boundary => Some(w),
                };
                extend(sweep, anchor, &helpers, bound)
                    .into_iter()
                    .chain(reach(sweep, anchor, &helpers, w))
                    .collect()
            }
        }
    }
}

/// Labels 2 the rightmost vertex of `N[anchor]`, which then has the anchor as a
/// positive neighbor.
///
/// The new vertex must avoid the neighborhoods of the helpers placed before the
/// anchor and, when `bound` is set, must still cover that pending vertex.
fn extend(sweep: &Sweep, anchor: Node, helpers: &[usize], bound: Option<usize>) -> Option<Transition> {
    let a = match anchor {
        Node::Start => return None,
        Node::Vertex(a) => a,
    };
    let two = sweep.rightmost_in_closed_neighborhood(a);
    if two == a
        || avoided_by(sweep, helpers, two)
        || bound.map_or(false, |w| !sweep.in_closed_neighborhood(Node::Vertex(w), two))
    {
        return None;
    }
    Some(Transition {
        target: State::new(two, Mode::Solid),
        cost: helpers.len() + 2,
        ones: helpers.to_vec(),
        two: Some(two),
    })
}

/// Labels 2 the rightmost vertex of `N[w]`, covering the pending vertex `w`.
///
/// The result is `Boundary` unless the anchor is a positive neighbor.
fn reach(sweep: &Sweep, anchor: Node, helpers: &[usize], w: usize) -> Option<Transition> {
    let two = sweep.rightmost_in_closed_neighborhood(w);
    if avoided_by(sweep, helpers, two) {
        return None;
    }
    let mode = if sweep.in_closed_neighborhood(anchor, two) {
        Mode::Solid
    } else {
        Mode::Boundary
    };
    Some(Transition {
        target: State::new(two, mode),
        cost: helpers.len() + 2,
        ones: helpers.to_vec(),
        two: Some(two),
    })
}

/// Returns `true` if `two` meets the closed neighborhood of a helper other than
/// the anchor.
fn avoided_by(sweep: &Sweep, helpers: &[usize], two: usize) -> bool {
    let earlier = &helpers[..helpers.len().saturating_sub(1)];
    earlier
        .iter()
        .any(|&h| sweep.in_closed_neighborhood(Node::Vertex(h), two))
}
