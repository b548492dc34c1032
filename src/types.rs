//! Basic types of interval graphs and their labelings.

use crate::error::Error;
use derive_more::Display;
use std::str::FromStr;

/// The vertex id type: the position of an interval in its graph.
pub type VId = usize;

/// An endpoint position on the line.
pub type Endpoint = usize;

/// The weight of a labeling.
pub type Weight = usize;

/// A closed interval `[left, right]` with `left < right`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "({}, {})", left, right)]
pub struct Interval {
    pub left: Endpoint,
    pub right: Endpoint,
}

impl Interval {
    pub fn new(left: Endpoint, right: Endpoint) -> Self {
        Self { left, right }
    }

    /// Returns `true` if the two intervals overlap.
    ///
    /// Endpoints of one graph are distinct, so touching intervals never occur.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        self.left < other.right && other.left < self.right
    }
}

/// Parses `left:right`.
impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut endpoints = s.trim().splitn(2, ':').map(str::parse::<Endpoint>);
        match (endpoints.next(), endpoints.next()) {
            (Some(Ok(left)), Some(Ok(right))) => Ok(Interval::new(left, right)),
            _ => Err(Error::ParseInterval(s.to_string())),
        }
    }
}

/// The label of a vertex in a Roman domination function.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    #[display(fmt = "V0")]
    Zero,
    #[display(fmt = "V1")]
    One,
    #[display(fmt = "V2")]
    Two,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Zero, Label::One, Label::Two];

    pub fn weight(self) -> Weight {
        self.index()
    }

    pub fn index(self) -> usize {
        match self {
            Label::Zero => 0,
            Label::One => 1,
            Label::Two => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Label> {
        Label::ALL.get(index).copied()
    }

    pub fn is_positive(self) -> bool {
        self != Label::Zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Interval::new(0, 3);
        assert!(a.intersects(&Interval::new(1, 4)));
        assert!(Interval::new(1, 4).intersects(&a));
        assert!(a.intersects(&Interval::new(1, 2)));
        assert!(Interval::new(1, 2).intersects(&a));
        assert!(!a.intersects(&Interval::new(4, 5)));
        assert!(!Interval::new(4, 5).intersects(&a));
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!("3:7".parse::<Interval>().unwrap(), Interval::new(3, 7));
        assert_eq!(" 0:1 ".parse::<Interval>().unwrap(), Interval::new(0, 1));
        for s in &["3", "3:", "a:2", "1:2:3", "-1:2"] {
            assert!(matches!(s.parse::<Interval>(), Err(Error::ParseInterval(_))));
        }
    }

    #[test]
    fn test_label_weight() {
        assert_eq!(
            Label::ALL.iter().map(|l| l.weight()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(Label::from_index(2), Some(Label::Two));
        assert_eq!(Label::from_index(3), None);
        assert_eq!(Label::One.to_string(), "V1");
    }
}
