//! Piecewise-linear values over projection years
//!
//! A curve is a set of `(year, value)` nodes. Between two nodes the value is
//! interpolated linearly, before the first node it takes the first node's value
//! and after the last node it stays at the last node's value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One control point of a [`YearCurve`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveNode {
    pub year: u32,
    pub value: f64,
}

impl FromStr for CurveNode {
    type Err = String;

    /// Parses `YEAR:VALUE`, e.g. `5:0.2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected YEAR:VALUE, got '{s}'"))?;
        let year = year
            .trim()
            .parse()
            .map_err(|_| format!("invalid year in '{s}'"))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid value in '{s}'"))?;
        if !value.is_finite() {
            return Err(format!("value must be finite in '{s}'"));
        }
        Ok(Self { year, value })
    }
}

impl fmt::Display for CurveNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.year, self.value)
    }
}

/// Year-indexed curve, nodes kept sorted by year with unique years
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearCurve {
    nodes: Vec<CurveNode>,
}

impl YearCurve {
    /// Curve through `nodes` in any order. Later duplicates of a year win.
    pub fn from_nodes(nodes: impl IntoIterator<Item = CurveNode>) -> Self {
        let mut curve = Self::default();
        for node in nodes {
            curve.place(node);
        }
        curve
    }

    /// Flat curve
    pub fn constant(value: f64) -> Self {
        Self {
            nodes: vec![CurveNode { year: 0, value }],
        }
    }

    pub fn nodes(&self) -> &[CurveNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set the value at `year` and carry it to every later node
    pub fn set(&mut self, year: u32, value: f64) {
        let idx = self.place(CurveNode { year, value });
        for node in &mut self.nodes[idx + 1..] {
            node.value = value;
        }
    }

    /// Value at `year`, or `None` for an empty curve
    pub fn value_at(&self, year: u32) -> Option<f64> {
        let left = self.nodes.iter().rev().find(|n| n.year <= year);
        let right = self.nodes.iter().find(|n| n.year >= year);

        match (left, right) {
            (None, None) => None,
            (None, Some(only)) | (Some(only), None) => Some(only.value),
            (Some(l), Some(r)) if l.year == r.year => Some(l.value),
            (Some(l), Some(r)) => {
                let t = f64::from(year - l.year) / f64::from(r.year - l.year);
                Some(l.value + t * (r.value - l.value))
            }
        }
    }

    /// Smallest and largest node value
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.nodes.iter().fold(None, |acc, n| match acc {
            None => Some((n.value, n.value)),
            Some((lo, hi)) => Some((lo.min(n.value), hi.max(n.value))),
        })
    }

    fn place(&mut self, node: CurveNode) -> usize {
        match self.nodes.binary_search_by_key(&node.year, |n| n.year) {
            Ok(idx) => {
                self.nodes[idx].value = node.value;
                idx
            }
            Err(idx) => {
                self.nodes.insert(idx, node);
                idx
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn node(year: u32, value: f64) -> CurveNode {
        CurveNode { year, value }
    }

    #[test]
    fn test_interpolates_between_nodes() {
        let curve = YearCurve::from_nodes([node(0, 0.1), node(4, 0.3)]);
        assert_abs_diff_eq!(curve.value_at(0).unwrap(), 0.1);
        assert_abs_diff_eq!(curve.value_at(1).unwrap(), 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.value_at(2).unwrap(), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.value_at(4).unwrap(), 0.3);
    }

    #[test]
    fn test_flat_outside_nodes() {
        let curve = YearCurve::from_nodes([node(5, 800.0), node(3, 600.0)]);
        assert_eq!(curve.nodes()[0].year, 3);
        assert_eq!(curve.value_at(0), Some(600.0));
        assert_eq!(curve.value_at(4), Some(700.0));
        assert_eq!(curve.value_at(40), Some(800.0));
    }

    #[test]
    fn test_empty_curve() {
        let curve = YearCurve::default();
        assert!(curve.is_empty());
        assert_eq!(curve.value_at(3), None);
        assert_eq!(curve.bounds(), None);
    }

    #[test]
    fn test_set_propagates_forward() {
        let mut curve = YearCurve::from_nodes([node(0, 0.1), node(5, 0.2), node(10, 0.3)]);
        curve.set(5, 0.05);
        assert_eq!(curve.value_at(10), Some(0.05));
        assert_eq!(curve.value_at(0), Some(0.1));

        curve.set(2, 0.4);
        assert_eq!(curve.nodes().len(), 4);
        assert_eq!(curve.value_at(5), Some(0.4));
        assert_eq!(curve.bounds(), Some((0.1, 0.4)));
    }

    #[test]
    fn test_parse_node() {
        assert_eq!("3:0.25".parse::<CurveNode>(), Ok(node(3, 0.25)));
        assert_eq!(" 10 : 900 ".parse::<CurveNode>(), Ok(node(10, 900.0)));
        assert!("3".parse::<CurveNode>().is_err());
        assert!("-1:0.2".parse::<CurveNode>().is_err());
        assert!("2:abc".parse::<CurveNode>().is_err());
        assert!("2:NaN".parse::<CurveNode>().is_err());
        assert_eq!(node(4, 0.5).to_string(), "4:0.5");
    }
}
