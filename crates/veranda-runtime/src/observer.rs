//! Intersection observer
//!
//! Computes visibility of observed elements against the margin-adjusted
//! viewport. Entries are produced on demand; latching and unobserving
//! policies belong to the caller.

use thiserror::Error;
use veranda_dom::{DomTree, NodeId, Rect};

/// Root margin in pixels, CSS box order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Error parsing a root-margin string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid root margin: {0}")]
pub struct RootMarginError(String);

impl RootMargin {
    /// Parse a CSS-style margin string (`"0px 0px -50px 0px"`). Only pixel
    /// units are supported; 1 to 4 values expand the CSS way.
    pub fn parse(s: &str) -> Result<Self, RootMarginError> {
        let mut values = Vec::new();
        for part in s.split_whitespace() {
            let number = part
                .strip_suffix("px")
                .unwrap_or(part)
                .parse::<f64>()
                .map_err(|_| RootMarginError(s.to_string()))?;
            values.push(number);
        }
        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Err(RootMarginError(s.to_string())),
        };
        Ok(Self { top, right, bottom, left })
    }

    /// Grow (positive) or shrink (negative) a viewport rect.
    pub fn apply(&self, viewport: Rect) -> Rect {
        Rect::from_xywh(
            viewport.x - self.left,
            viewport.y - self.top,
            viewport.width + self.left + self.right,
            viewport.height + self.top + self.bottom,
        )
    }
}

/// One observation result.
#[derive(Debug, Clone)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

/// Watches a set of elements for viewport intersection.
#[derive(Debug)]
pub struct IntersectionObserver {
    threshold: f64,
    margin: RootMargin,
    observed: Vec<NodeId>,
}

impl IntersectionObserver {
    pub fn new(threshold: f64, margin: RootMargin) -> Self {
        Self {
            threshold,
            margin,
            observed: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching a target.
    pub fn observe(&mut self, target: NodeId) {
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    /// Stop watching a target.
    pub fn unobserve(&mut self, target: NodeId) {
        self.observed.retain(|&id| id != target);
    }

    /// Stop watching everything.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    pub fn is_observing(&self, target: NodeId) -> bool {
        self.observed.contains(&target)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Compute an entry per observed target against the current viewport.
    pub fn entries(&self, tree: &DomTree, viewport: Rect) -> Vec<IntersectionEntry> {
        let root = self.margin.apply(viewport);
        self.observed
            .iter()
            .map(|&target| {
                let rect = tree.rect(target);
                let ratio = rect.coverage_by(&root);
                let is_intersecting = if self.threshold > 0.0 {
                    ratio >= self.threshold
                } else {
                    ratio > 0.0
                };
                IntersectionEntry {
                    target,
                    intersection_ratio: ratio,
                    is_intersecting,
                }
            })
            .collect()
    }
}
