//! Text drawings of labeled interval graphs.

use crate::{
    error::Result,
    interval_graph::IntervalGraph,
    solution::Solution,
    types::{Interval, Label},
};
use derive_more::Display;
use itertools::Itertools;
use std::path::Path;

/// Colors of the `V0`, `V1` and `V2` groups.
pub const PALETTE: [&str; 3] = ["steelblue", "forestgreen", "firebrick"];

/// A titled drawing, ready to be printed or saved.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "{}\n{}", title, body)]
pub struct Rendering {
    pub title: String,
    pub body: String,
}

impl Rendering {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

/// Draws a graph together with one of its labelings.
pub trait Renderer {
    fn render(&self, graph: &IntervalGraph, solution: &Solution, title: &str) -> Rendering;
}

/// Draws one row per interval, grouped by label.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    palette: [&'static str; 3],
}

impl TextRenderer {
    pub fn new(palette: [&'static str; 3]) -> Self {
        Self { palette }
    }

    pub fn color(&self, label: Label) -> &'static str {
        self.palette[label.index()]
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(PALETTE)
    }
}

impl Renderer for TextRenderer {
    fn render(&self, graph: &IntervalGraph, solution: &Solution, title: &str) -> Rendering {
        let width = 2 * graph.order();
        let body = Label::ALL
            .iter()
            .filter(|&&label| !solution.group(label).is_empty())
            .map(|&label| {
                let rows = solution
                    .group(label)
                    .iter()
                    .map(|&v| {
                        let interval = graph.interval(v);
                        format!("{}  {}", draw_interval(interval, width), interval)
                    })
                    .join("\n");
                format!("{} ({})\n{}", label, self.color(label), rows)
            })
            .join("\n");
        Rendering {
            title: title.to_string(),
            body,
        }
    }
}

/// Draws `interval` on a line of `width` positions: `|` at the left endpoint,
/// `>` at the right one and `-` in between.
pub fn draw_interval(interval: Interval, width: usize) -> String {
    (0..width.max(interval.right + 1))
        .map(|i| {
            if i == interval.left {
                '|'
            } else if i == interval.right {
                '>'
            } else if interval.left < i && i < interval.right {
                '-'
            } else {
                ' '
            }
        })
        .collect()
}

/// Draws every interval of `graph`, one per line, in graph order.
pub fn draw_graph(graph: &IntervalGraph) -> String {
    let width = 2 * graph.order();
    graph
        .intervals()
        .iter()
        .map(|&interval| draw_interval(interval, width))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph(pairs: &[(usize, usize)]) -> IntervalGraph {
        IntervalGraph::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_draw_interval() {
        assert_eq!(draw_interval(Interval::new(1, 4), 6), " |--> ");
        assert_eq!(draw_interval(Interval::new(0, 1), 2), "|>");
    }

    #[test]
    fn test_draw_graph() {
        let g = create_graph(&[(0, 2), (1, 3)]);
        assert_eq!(draw_graph(&g), "|-> \n |->");
    }

    #[test]
    fn test_render_groups() {
        let g = create_graph(&[(0, 2), (1, 3)]);
        let s = Solution::from_labels(&[Label::Zero, Label::Two]);
        let rendering = TextRenderer::default().render(&g, &s, "QTRD");
        assert_eq!(rendering.title, "QTRD");
        assert_eq!(
            rendering.body,
            "V0 (steelblue)\n|->   (0, 2)\nV2 (firebrick)\n |->  (1, 3)"
        );
        assert!(rendering.to_string().starts_with("QTRD\nV0"));
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drawing");
        let rendering = Rendering {
            title: "t".to_string(),
            body: "b".to_string(),
        };
        rendering.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "t\nb");
    }
}
