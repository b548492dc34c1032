use super::{
    sweep::Node,
    transition::{Mode, State, Transition},
};
use crate::types::{Label, Weight};

/// The best labeling found so far for a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub weight: Weight,
    /// Labels by sweep position; vertices not fixed yet are labeled 0.
    pub labels: Vec<Label>,
}

/// Optimal prefix costs of one component, indexed by state.
pub struct Table {
    start: Entry,
    solid: Vec<Option<Entry>>,
    boundary: Vec<Option<Entry>>,
}

impl Table {
    pub fn new(len: usize) -> Self {
        Self {
            start: Entry {
                weight: 0,
                labels: vec![Label::Zero; len],
            },
            solid: vec![None; len],
            boundary: vec![None; len],
        }
    }

    pub fn get(&self, state: State) -> Option<&Entry> {
        match (state.node, state.mode) {
            (Node::Start, Mode::Solid) => Some(&self.start),
            (Node::Start, Mode::Boundary) => None,
            (Node::Vertex(v), Mode::Solid) => self.solid[v].as_ref(),
            (Node::Vertex(v), Mode::Boundary) => self.boundary[v].as_ref(),
        }
    }

    fn slot_mut(&mut self, state: State) -> Option<&mut Option<Entry>> {
        match (state.node, state.mode) {
            (Node::Start, _) => None,
            (Node::Vertex(v), Mode::Solid) => Some(&mut self.solid[v]),
            (Node::Vertex(v), Mode::Boundary) => Some(&mut self.boundary[v]),
        }
    }

    /// Follows `transition` out of `from`, keeping the result only if it is
    /// strictly cheaper than the current entry of the target.
    pub fn relax(&mut self, from: State, transition: &Transition) -> bool {
        let candidate = match self.get(from) {
            Some(entry) => {
                let weight = entry.weight + transition.cost;
                if self
                    .get(transition.target)
                    .map_or(false, |target| target.weight <= weight)
                {
                    return false;
                }
                let mut labels = entry.labels.clone();
                for &v in &transition.ones {
                    labels[v] = Label::One;
                }
                if let Some(v) = transition.two {
                    labels[v] = Label::Two;
                }
                Entry { weight, labels }
            }
            None => return false,
        };
        match self.slot_mut(transition.target) {
            Some(slot) => {
                *slot = Some(candidate);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relax_keeps_strict_improvements() {
        let mut table = Table::new(2);
        assert_eq!(table.get(State::START).map(|e| e.weight), Some(0));
        assert!(table.get(State::new(1, Mode::Solid)).is_none());

        let expensive = Transition {
            target: State::new(1, Mode::Solid),
            cost: 2,
            ones: vec![0, 1],
            two: None,
        };
        assert!(table.relax(State::START, &expensive));
        let tie = Transition {
            target: State::new(1, Mode::Solid),
            cost: 2,
            ones: vec![],
            two: Some(1),
        };
        assert!(!table.relax(State::START, &tie));
        assert_eq!(
            table.get(State::new(1, Mode::Solid)),
            Some(&Entry {
                weight: 2,
                labels: vec![Label::One, Label::One],
            })
        );

        let cheaper = Transition {
            target: State::new(1, Mode::Solid),
            cost: 1,
            ones: vec![1],
            two: None,
        };
        assert!(table.relax(State::START, &cheaper));
        assert_eq!(
            table.get(State::new(1, Mode::Solid)).map(|e| e.labels.clone()),
            Some(vec![Label::Zero, Label::One])
        );
    }

    #[test]
    fn test_relax_from_unreached_state() {
        let mut table = Table::new(2);
        let transition = Transition {
            target: State::new(1, Mode::Solid),
            cost: 0,
            ones: vec![],
            two: None,
        };
        assert!(!table.relax(State::new(0, Mode::Boundary), &transition));
        assert!(table.get(State::new(1, Mode::Solid)).is_none());
    }
}
