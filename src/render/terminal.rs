//! On-screen view: draw a [`Scene`] on a braille canvas in the terminal.

use super::{Color, Renderer, Scene};
use crate::error::{PlotError, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::{Color as TuiColor, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Context, Line, Points},
        Block, Borders,
    },
    Frame, Terminal,
};
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Show `scene` full-screen until a key is pressed.
pub fn show(scene: &Scene, title: &str) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(PlotError::Terminal("stdout is not a terminal".to_string()));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, scene, title);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, scene: &Scene, title: &str) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, scene, title))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
                // Resize and everything else just redraws.
                _ => {}
            }
        }
    }
}

/// Draw `scene` scaled to the whole frame.
pub fn draw(f: &mut Frame<'_>, scene: &Scene, title: &str) {
    let area = f.area();
    let (w, h) = (scene.width as f64, scene.height as f64);

    let block = Block::default()
        .title(format!(" {} (press any key) ", title))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    let step = dot_step(scene, inner);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(TuiColor::White)
        .x_bounds([0.0, w])
        .y_bounds([0.0, h])
        .paint(|ctx| {
            let mut target = CanvasTarget {
                ctx,
                height: h,
                step,
            };
            scene.replay(&mut target);
        });

    f.render_widget(canvas, area);
}

/// Scene units between two braille dots, per axis.
fn dot_step(scene: &Scene, inner: Rect) -> (f64, f64) {
    let cols = (inner.width.max(1) as f64) * 2.0;
    let rows = (inner.height.max(1) as f64) * 4.0;
    (scene.width as f64 / cols, scene.height as f64 / rows)
}

fn tui(color: Color) -> TuiColor {
    TuiColor::Rgb(color.r(), color.g(), color.b())
}

/// [`Renderer`] over a ratatui canvas context; flips y so the canvas shows
/// the scene the right way up.
struct CanvasTarget<'c, 'a> {
    ctx: &'c mut Context<'a>,
    height: f64,
    step: (f64, f64),
}

impl CanvasTarget<'_, '_> {
    fn flip(&self, p: (f64, f64)) -> (f64, f64) {
        (p.0, self.height - p.1)
    }
}

impl Renderer for CanvasTarget<'_, '_> {
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let (a, b) = (self.flip(from), self.flip(to));
        self.ctx.draw(&Line::new(a.0, a.1, b.0, b.1, tui(color)));
    }

    fn rect(&mut self, corner: (f64, f64), opposite: (f64, f64), color: Color) {
        // Braille rectangles are outlines; fill by sampling one dot per step.
        let (x0, x1) = (corner.0.min(opposite.0), corner.0.max(opposite.0));
        let (y0, y1) = (corner.1.min(opposite.1), corner.1.max(opposite.1));
        let (sx, sy) = self.step;
        let mut coords = Vec::new();
        let mut y = y0 + sy / 2.0;
        while y < y1 {
            let mut x = x0 + sx / 2.0;
            while x < x1 {
                coords.push(self.flip((x, y)));
                x += sx;
            }
            y += sy;
        }
        if coords.is_empty() {
            coords.push(self.flip(((x0 + x1) / 2.0, (y0 + y1) / 2.0)));
        }
        self.ctx.draw(&Points {
            coords: &coords,
            color: tui(color),
        });
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
        let c = self.flip(center);
        self.ctx.draw(&Circle {
            x: c.0,
            y: c.1,
            radius,
            color: tui(color),
        });
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: Color) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
    }

    fn text(&mut self, at: (f64, f64), text: &str, _size: f64, color: Color) {
        let p = self.flip(at);
        self.ctx.print(
            p.0,
            p.1,
            Span::styled(text.to_string(), Style::default().fg(tui(color))),
        );
    }
}
