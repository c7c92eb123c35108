// RTPLOT: Box-Plot Charts of AI Inference Times and Real-Time Latencies under Interference
// Copyright (C) 2024-2025 Roland Schmid <roschmi@ethz.ch> and Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Placement of grouped box plots along the x axis.
//!
//! Every (group, series) pair gets its own slot, whether or not there is data for it. Slots of
//! one group are `slot_step` apart, and the first slot of a group is `group_step` after the last
//! slot of the previous group. Groups are labeled at their center and separated by a divider
//! halfway between them.
use std::ops::Range;

use itertools::Itertools;
use thiserror::Error;

/// Distance between the x range boundary and the outermost slots.
pub const EDGE_MARGIN: f64 = 0.5;

/// Error thrown when the groups cannot be placed.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// There is nothing to place.
    #[error("Cannot lay out a chart without groups.")]
    NoGroups,
    /// A group has no series.
    #[error("Group {0:?} has no series.")]
    EmptyGroup(String),
    /// The spacing constants would produce overlapping or unordered slots.
    #[error("Invalid spacing: {0}")]
    InvalidSpacing(&'static str),
}

/// Spacing constants, all in x-axis units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    /// Position of the very first slot.
    pub origin: f64,
    /// Distance between two neighboring slots of the same group.
    pub slot_step: f64,
    /// Distance between the last slot of a group and the first slot of the next group.
    pub group_step: f64,
    /// Width of a single box.
    pub box_width: f64,
}

impl Spacing {
    /// Equally wide slots, one unit apart, with no extra space between groups.
    pub fn uniform() -> Self {
        Self {
            origin: 1.0,
            slot_step: 1.0,
            group_step: 1.0,
            box_width: 0.6,
        }
    }

    /// Boxes drawn side by side with `gap_within` between them, and `gap_between` added on top
    /// of the regular unit advance between groups.
    pub fn paired(box_width: f64, gap_within: f64, gap_between: f64) -> Self {
        Self {
            origin: 1.0,
            slot_step: box_width + gap_within,
            group_step: 1.0 + gap_between,
            box_width,
        }
    }

    fn check(&self) -> Result<(), LayoutError> {
        let finite = [self.origin, self.slot_step, self.group_step, self.box_width]
            .iter()
            .all(|x| x.is_finite());
        if !finite {
            return Err(LayoutError::InvalidSpacing("all constants must be finite"));
        }
        if self.box_width <= 0.0 {
            return Err(LayoutError::InvalidSpacing("box width must be positive"));
        }
        if self.slot_step < self.box_width {
            return Err(LayoutError::InvalidSpacing(
                "slot step must not be smaller than the box width",
            ));
        }
        if self.group_step < self.box_width {
            return Err(LayoutError::InvalidSpacing(
                "group step must not be smaller than the box width",
            ));
        }
        if self.origin - EDGE_MARGIN < 0.0 {
            return Err(LayoutError::InvalidSpacing("origin must leave room for the margin"));
        }
        Ok(())
    }
}

/// A category on the x axis and the series drawn in it, in drawing order.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSpec {
    pub label: String,
    /// Identities (indices into the series table of the chart).
    pub series: Vec<usize>,
}

impl GroupSpec {
    pub fn new(label: impl Into<String>, series: impl IntoIterator<Item = usize>) -> Self {
        Self {
            label: label.into(),
            series: series.into_iter().collect(),
        }
    }
}

/// Reserved position of a single series instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub x: f64,
    /// Index of the group.
    pub group: usize,
    /// Series identity, as given in the `GroupSpec`.
    pub series: usize,
}

/// Label of a group, placed at the group's center.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub label: String,
    pub x: f64,
}

/// Result of placing all groups.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// All slots, in increasing order of `x`.
    pub slots: Vec<Slot>,
    /// One tick per group.
    pub ticks: Vec<Tick>,
    /// One divider between each pair of consecutive groups.
    pub dividers: Vec<f64>,
    /// Visible range of the x axis.
    pub x_range: (f64, f64),
    pub spacing: Spacing,
    groups: Vec<Range<usize>>,
}

impl Layout {
    pub fn compute(groups: &[GroupSpec], spacing: Spacing) -> Result<Self, LayoutError> {
        spacing.check()?;
        if groups.is_empty() {
            return Err(LayoutError::NoGroups);
        }

        let mut slots = Vec::with_capacity(groups.iter().map(|g| g.series.len()).sum());
        let mut ranges = Vec::with_capacity(groups.len());
        let mut ticks = Vec::with_capacity(groups.len());
        let mut start = spacing.origin;

        for (group, spec) in groups.iter().enumerate() {
            if spec.series.is_empty() {
                return Err(LayoutError::EmptyGroup(spec.label.clone()));
            }
            let first = slots.len();
            slots.extend(spec.series.iter().enumerate().map(|(j, &series)| Slot {
                x: start + j as f64 * spacing.slot_step,
                group,
                series,
            }));
            let last_x = slots[slots.len() - 1].x;
            ticks.push(Tick {
                label: spec.label.clone(),
                x: (start + last_x) / 2.0,
            });
            ranges.push(first..slots.len());
            start = last_x + spacing.group_step;
        }

        let dividers = ranges
            .iter()
            .tuple_windows()
            .map(|(a, b)| (slots[a.end - 1].x + slots[b.start].x) / 2.0)
            .collect();

        let x_range = (
            spacing.origin - EDGE_MARGIN,
            slots[slots.len() - 1].x + EDGE_MARGIN,
        );

        Ok(Self {
            slots,
            ticks,
            dividers,
            x_range,
            spacing,
            groups: ranges,
        })
    }

    /// Slots of the group with index `group`.
    pub fn group_slots(&self, group: usize) -> &[Slot] {
        &self.slots[self.groups[group].clone()]
    }

    /// Range of indices into `slots` belonging to `group`.
    pub fn group_range(&self, group: usize) -> Range<usize> {
        self.groups[group].clone()
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn positions(&self) -> Vec<f64> {
        self.slots.iter().map(|s| s.x).collect()
    }
}
