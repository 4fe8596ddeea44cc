//! src/panels/background.rs
//!
//! Draws the particle field frame on a braille canvas filling the whole screen.
//!
//! Field coordinates grow downwards like screen pixels while the canvas grows
//! upwards, so y is flipped here.

use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Line, Points},
};

use crate::field::{FieldFrame, Viewport};

pub struct FieldPanel<'a> {
    pub frame: &'a FieldFrame,
    pub viewport: Viewport,
}

impl<'a> FieldPanel<'a> {
    pub fn new(frame: &'a FieldFrame, viewport: Viewport) -> Self {
        Self { frame, viewport }
    }
}

impl crate::ui::Panel for FieldPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());
        let points: Vec<(f64, f64)> = self
            .frame
            .points
            .iter()
            .map(|&(_, x, y)| (x, height - y))
            .collect();

        let canvas = Canvas::default()
            .background_color(Color::Black)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for edge in &self.frame.edges {
                    let (Some(&(x1, y1)), Some(&(x2, y2))) = (points.get(edge.a), points.get(edge.b))
                    else {
                        continue;
                    };
                    let v = edge.intensity;
                    ctx.draw(&Line::new(x1, y1, x2, y2, Color::Rgb(v, v, v)));
                }
                // points above the edges
                ctx.layer();
                ctx.draw(&Points {
                    coords: &points,
                    color: Color::White,
                });
            });
        f.render_widget(canvas, area);
    }
}
