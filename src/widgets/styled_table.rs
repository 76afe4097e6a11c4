//! Read-only table: an accent header row over zebra-striped data rows.
//!
//! Columns are fixed when the table is built. [`StyledTable::replace_data`] throws
//! away every built row and rebuilds the grid from the new dataset; there is no
//! diffing. Rows are not checked against the header, so a short or long row is
//! drawn ragged and the data grid widens to the longest row.

use std::fmt::Display;
use std::sync::Arc;

use eframe::egui::{
    pos2, vec2, Color32, FontId, Galley, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2,
    Widget,
};

use crate::themes::{Styled, TableStyle};

/// Background for the data row at `index`; rows alternate starting with the even shade.
pub fn stripe(style: &TableStyle, index: usize) -> Color32 {
    if index % 2 == 0 {
        style.stripe_even
    } else {
        style.stripe_odd
    }
}

/// One built data row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub fill: Color32,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug)]
#[must_use = "You should put this widget in a ui with `ui.add(&mut widget);`"]
pub struct StyledTable {
    columns: Vec<String>,
    rows: Vec<TableRow>,
    generation: u64,
    style: TableStyle,
}

impl StyledTable {
    pub fn new<C, R, V>(
        columns: impl IntoIterator<Item = C>,
        rows: impl IntoIterator<Item = R>,
    ) -> Self
    where
        C: Into<String>,
        R: IntoIterator<Item = V>,
        V: Display,
    {
        let mut table = Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            generation: 0,
            style: TableStyle::default(),
        };
        table.replace_data(rows);
        table
    }

    /// A table with a header and no data rows.
    pub fn with_columns<C: Into<String>>(columns: impl IntoIterator<Item = C>) -> Self {
        Self::new(columns, std::iter::empty::<Vec<String>>())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of built data cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    /// How many times the data grid has been built.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Widest of the header and every data row.
    fn data_slots(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.len())
            .max()
            .unwrap_or(0)
            .max(self.columns.len())
    }

    pub fn replace_data<R, V>(&mut self, rows: impl IntoIterator<Item = R>)
    where
        R: IntoIterator<Item = V>,
        V: Display,
    {
        let _span = tracing::debug_span!("styled_table_rebuild").entered();

        self.rows.clear();
        for (index, row) in rows.into_iter().enumerate() {
            let cells: Vec<String> = row.into_iter().map(|value| value.to_string()).collect();
            if cells.len() != self.columns.len() {
                log::trace!(
                    "row {index} has {} cells for {} columns",
                    cells.len(),
                    self.columns.len()
                );
            }
            self.rows.push(TableRow {
                fill: stripe(&self.style, index),
                cells,
            });
        }
        self.generation += 1;

        log::debug!(
            "table rebuilt: {} rows, {} cells (generation {})",
            self.rows.len(),
            self.cell_count(),
            self.generation
        );
    }
}

impl Styled for StyledTable {
    type Style = TableStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.fill = stripe(&style, index);
        }
        self.style = style;
        self
    }

    fn style(&self) -> &Self::Style {
        &self.style
    }
}

struct RowPaint<'a> {
    font: &'a FontId,
    text_color: Color32,
    fill: Color32,
    border: Option<Stroke>,
    padding: Vec2,
}

/// Lay out one full-width row split into `slots` equal columns.
fn paint_row<'a>(
    ui: &mut Ui,
    cells: impl Iterator<Item = &'a str>,
    slots: usize,
    paint: RowPaint<'_>,
) -> Response {
    let width = ui.available_width();
    let slot_width = width / slots.max(1) as f32;

    let galleys: Vec<Arc<Galley>> = cells
        .map(|text| {
            ui.painter()
                .layout_no_wrap(text.to_owned(), paint.font.clone(), paint.text_color)
        })
        .collect();
    let text_height = galleys
        .iter()
        .map(|galley| galley.size().y)
        .fold(paint.font.size, f32::max);
    let height = text_height + paint.padding.y * 2.0;

    let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    for (slot, galley) in galleys.into_iter().enumerate() {
        let cell = Rect::from_min_size(
            pos2(rect.left() + slot_width * slot as f32, rect.top()),
            vec2(slot_width, height),
        );
        painter.rect_filled(cell, 0.0, paint.fill);
        if let Some(border) = paint.border {
            painter.rect_stroke(cell, 0.0, border, StrokeKind::Inside);
        }
        let text_pos = pos2(
            cell.left() + paint.padding.x,
            cell.center().y - galley.size().y / 2.0,
        );
        painter
            .with_clip_rect(cell.intersect(painter.clip_rect()))
            .galley(text_pos, galley, paint.text_color);
    }

    response
}

impl Widget for &mut StyledTable {
    fn ui(self, ui: &mut Ui) -> Response {
        let style = &self.style;
        let slots = self.data_slots();

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;

            if !self.columns.is_empty() {
                paint_row(
                    ui,
                    self.columns.iter().map(String::as_str),
                    self.columns.len(),
                    RowPaint {
                        font: &style.header_font,
                        text_color: style.header_text,
                        fill: style.header_fill,
                        border: None,
                        padding: style.padding,
                    },
                );
            }

            for row in &self.rows {
                paint_row(
                    ui,
                    row.cells.iter().map(String::as_str),
                    slots,
                    RowPaint {
                        font: &style.cell_font,
                        text_color: style.cell_text,
                        fill: row.fill,
                        border: Some(Stroke::new(1.0, style.border)),
                        padding: style.padding,
                    },
                );
            }
        })
        .response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes;

    fn people() -> StyledTable {
        StyledTable::new(["Name", "Age"], vec![vec!["Ada".to_string(), "36".to_string()]])
    }

    #[test]
    fn builds_header_and_initial_rows() {
        let table = people();
        assert_eq!(table.columns(), ["Name", "Age"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell_count(), 2);
        assert_eq!(table.generation(), 1);
    }

    #[test]
    fn replace_twice_leaves_only_latest_cells() {
        let mut table = people();
        table.replace_data(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        table.replace_data(vec![vec![7, 8], vec![9, 10]]);

        assert_eq!(table.cell_count(), table.columns().len() * 2);
        assert_eq!(table.rows()[0].cells, ["7", "8"]);
        assert_eq!(table.rows()[1].cells, ["9", "10"]);
        assert_eq!(table.generation(), 3);
    }

    #[test]
    fn rows_alternate_starting_light_grey() {
        let mut table = StyledTable::with_columns(["n"]);
        table.replace_data((0..5).map(|n| [n]));
        let fills: Vec<_> = table.rows().iter().map(|row| row.fill).collect();
        assert_eq!(
            fills,
            [
                themes::STRIPE_EVEN,
                themes::WHITE,
                themes::STRIPE_EVEN,
                themes::WHITE,
                themes::STRIPE_EVEN,
            ]
        );
        assert_eq!(Color32::from_hex("#F5F5F5").ok(), Some(fills[0]));
    }

    #[test]
    fn values_are_stringified() {
        let table = StyledTable::new(["x", "y", "z"], [vec![1.5_f64, -2.0, 0.25]]);
        assert_eq!(table.rows()[0].cells, ["1.5", "-2", "0.25"]);
    }

    #[test]
    fn ragged_rows_are_kept_as_given() {
        let table = StyledTable::new(["a", "b"], vec![vec!["1"], vec!["1", "2", "3"], vec![]]);
        assert_eq!(table.cell_count(), 4);
        assert_eq!(table.data_slots(), 3);
        assert_eq!(table.rows()[2].cells.len(), 0);
    }

    #[test]
    fn empty_dataset_clears_grid() {
        let mut table = people();
        table.replace_data(Vec::<Vec<u8>>::new());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.cell_count(), 0);
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn styled_restripes_built_rows() {
        let style = TableStyle {
            stripe_even: themes::INFO,
            stripe_odd: themes::WARNING,
            ..TableStyle::default()
        };
        let mut table = StyledTable::new(["n"], [[0], [1]]).styled(style);
        assert_eq!(table.rows()[0].fill, themes::INFO);
        assert_eq!(table.rows()[1].fill, themes::WARNING);

        table.replace_data([[2]]);
        assert_eq!(table.rows()[0].fill, themes::INFO);
    }
}
