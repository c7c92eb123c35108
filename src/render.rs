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
//! Drawing a [`Chart`] with plotly.
use std::collections::HashSet;

use plotly::{
    box_plot::BoxPoints,
    color::NamedColor,
    common::{Anchor, DashType, Font, Line, Marker, Title},
    layout::{
        Annotation, Axis, AxisType, BoxMode, Legend, Margin, Shape, ShapeLayer, ShapeLine,
        ShapeType,
    },
    BoxPlot, Layout, Plot,
};

use crate::chart::Chart;

/// Pixels reserved right of the plot area for the legend.
pub const LEGEND_MARGIN: usize = 160;
pub const PLACEHOLDER_TEXT: &str = "No Data";

const MEDIAN_COLOR: NamedColor = NamedColor::Orange;
const MEDIAN_WIDTH: f64 = 1.5;
const DIVIDER_COLOR: NamedColor = NamedColor::Gray;
const PLACEHOLDER_COLOR: NamedColor = NamedColor::Gray;
const GRID_COLOR: NamedColor = NamedColor::LightGray;
/// Padding of the y range, in decades.
const Y_PADDING: f64 = 0.1;

impl Chart {
    /// Build the plotly figure. The result is not shown or written anywhere.
    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();

        // boxes; only the first box of a series gets a legend entry
        let mut in_legend = HashSet::new();
        for glyph in self.boxes.iter() {
            let series = &self.series[glyph.series];
            let trace = BoxPlot::<f64, f64>::new_xy(vec![glyph.x; glyph.values.len()], glyph.values.clone())
                .name(&series.name)
                .legend_group(&series.name)
                .show_legend(in_legend.insert(glyph.series))
                .fill_color(series.color.clone())
                .marker(Marker::new().color(series.color.clone()))
                .line(Line::new().color(NamedColor::Black).width(1.0))
                .box_points(BoxPoints::Outliers);
            plot.add_trace(trace);
        }
        // series without any box still appear in the legend
        for (i, series) in self.series.iter().enumerate() {
            let listed = self.legend.iter().any(|e| e.name == series.name);
            if listed && !in_legend.contains(&i) {
                let trace = BoxPlot::<f64, f64>::new_xy(Vec::new(), Vec::new())
                    .name(&series.name)
                    .legend_group(&series.name)
                    .show_legend(true)
                    .fill_color(series.color.clone());
                plot.add_trace(trace);
            }
        }

        plot.set_layout(self.plot_layout());
        plot
    }

    fn plot_layout(&self) -> Layout {
        let (y_min, y_max) = self.y_range();
        let spacing = self.layout.spacing;

        let mut layout = Layout::new()
            .width(self.size.width + LEGEND_MARGIN)
            .height(self.size.height)
            .show_legend(true)
            .box_mode(BoxMode::Overlay)
            // plotly sizes the boxes relative to the closest pair of positions
            .box_gap(1.0 - spacing.box_width / spacing.slot_step.min(spacing.group_step))
            .legend(
                Legend::new()
                    .x(1.02)
                    .y(1.0)
                    .x_anchor(Anchor::Left)
                    .y_anchor(Anchor::Top)
                    .border_width(1),
            )
            .margin(Margin::new().right(LEGEND_MARGIN).bottom(120))
            .x_axis(
                Axis::new()
                    .range(vec![self.layout.x_range.0, self.layout.x_range.1])
                    .tick_values(self.layout.ticks.iter().map(|t| t.x).collect())
                    .tick_text(self.layout.ticks.iter().map(|t| t.label.clone()).collect())
                    .tick_angle(-45.0)
                    .show_grid(false)
                    .zero_line(false),
            )
            .y_axis(
                Axis::new()
                    .title(Title::from(self.y_label.as_str()))
                    .type_(AxisType::Log)
                    .range(vec![y_min, y_max])
                    .show_grid(true)
                    .grid_color(GRID_COLOR)
                    .show_line(true)
                    .mirror(true),
            );

        for value in minor_ticks(y_min, y_max) {
            layout.add_shape(
                Shape::new()
                    .shape_type(ShapeType::Line)
                    .layer(ShapeLayer::Below)
                    .x_ref("paper")
                    .y_ref("y")
                    .x0(0.0)
                    .x1(1.0)
                    .y0(value)
                    .y1(value)
                    .opacity(0.5)
                    .line(ShapeLine::new().color(GRID_COLOR).width(0.5)),
            );
        }

        for divider in self.layout.dividers.iter() {
            layout.add_shape(
                Shape::new()
                    .shape_type(ShapeType::Line)
                    .x_ref("x")
                    .y_ref("paper")
                    .x0(*divider)
                    .x1(*divider)
                    .y0(0.0)
                    .y1(1.0)
                    .line(
                        ShapeLine::new()
                            .color(DIVIDER_COLOR)
                            .width(1.0)
                            .dash(DashType::Dash),
                    ),
            );
        }

        // a non-positive median has no place on the log axis
        let half_width = spacing.box_width / 2.0;
        for glyph in self.boxes.iter().filter(|g| g.summary.median > 0.0) {
            layout.add_shape(
                Shape::new()
                    .shape_type(ShapeType::Line)
                    .x_ref("x")
                    .y_ref("y")
                    .x0(glyph.x - half_width)
                    .x1(glyph.x + half_width)
                    .y0(glyph.summary.median)
                    .y1(glyph.summary.median)
                    .line(ShapeLine::new().color(MEDIAN_COLOR).width(MEDIAN_WIDTH)),
            );
        }

        // just above the lower bound of the y axis
        for placeholder in self.placeholders.iter() {
            layout.add_annotation(
                Annotation::new()
                    .text(PLACEHOLDER_TEXT)
                    .x_ref("x")
                    .x(placeholder.x)
                    .y_ref("paper")
                    .y(0.02)
                    .x_anchor(Anchor::Center)
                    .y_anchor(Anchor::Bottom)
                    .show_arrow(false)
                    .font(Font::new().color(PLACEHOLDER_COLOR).size(10)),
            );
        }

        layout
    }

    /// Range of the logarithmic y axis, as exponents of 10.
    pub fn y_range(&self) -> (f64, f64) {
        match self.value_range() {
            Some((min, max)) => (min.log10() - Y_PADDING, max.log10() + Y_PADDING),
            None => (0.0, 1.0),
        }
    }
}

/// Values `k * 10^d` for `k` in `2..=9` strictly inside `10^lo .. 10^hi`.
pub fn minor_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let first = lo.floor() as i32;
    let last = hi.ceil() as i32;
    (first..=last)
        .flat_map(|d| (2..=9).map(move |k| k as f64 * 10f64.powi(d)))
        .filter(|v| {
            let e = v.log10();
            e > lo && e < hi
        })
        .collect()
}
