// File: src/cloud/terminal.rs
use crate::cloud::{HexColor, Renderer};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Gap between grid columns, in terminal cells.
const COLUMN_GAP: u16 = 3;
/// First screen line used by the grid. The title sits above it.
const GRID_TOP: u16 = 2;
/// Screen lines per grid row.
const ROW_HEIGHT: u16 = 2;

#[derive(Debug, Clone)]
struct Label {
    word: String,
    size: u32,
    color: HexColor,
    row: usize,
    column: usize,
}

/// Draws the cloud on an alternate terminal screen. Terminals have a single
/// font size, so size is shown as intensity instead.
pub struct TerminalRenderer {
    title: String,
    max_size: u32,
    labels: Vec<Label>,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>, max_size: u32) -> Self {
        Self { title: title.into(), max_size: max_size.max(1), labels: Vec::new() }
    }

    fn weight(&self, size: u32) -> Attribute {
        match u64::from(size) * 3 / u64::from(self.max_size) {
            0 => Attribute::Dim,
            1 => Attribute::NormalIntensity,
            _ => Attribute::Bold,
        }
    }

    /// Top-left screen cell of every label, in placement order.
    fn cell_origins(&self) -> Vec<(u16, u16)> {
        let columns = self.labels.iter().map(|l| l.column + 1).max().unwrap_or(0);
        let mut widths = vec![0u16; columns];
        for label in &self.labels {
            let width = u16::try_from(label.word.chars().count()).unwrap_or(u16::MAX);
            widths[label.column] = widths[label.column].max(width);
        }
        let mut starts = Vec::with_capacity(columns);
        let mut x = 0u16;
        for width in &widths {
            starts.push(x);
            x = x.saturating_add(width.saturating_add(COLUMN_GAP));
        }
        self.labels
            .iter()
            .map(|l| {
                let row = u16::try_from(l.row).unwrap_or(u16::MAX);
                (starts[l.column], GRID_TOP.saturating_add(row.saturating_mul(ROW_HEIGHT)))
            })
            .collect()
    }

    fn paint<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(&self.title),
            SetAttribute(Attribute::Reset),
            Print("  (q, Esc or Enter to close)")
        )?;
        for (label, (x, y)) in self.labels.iter().zip(self.cell_origins()) {
            let (r, g, b) = label.color.rgb();
            queue!(
                out,
                MoveTo(x, y),
                SetForegroundColor(Color::Rgb { r, g, b }),
                SetAttribute(self.weight(label.size)),
                Print(&label.word),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        out.flush()
    }
}

impl Renderer for TerminalRenderer {
    fn place(&mut self, word: &str, size: u32, color: HexColor, row: usize, column: usize) -> io::Result<()> {
        self.labels.push(Label { word: word.to_string(), size, color, row, column });
        Ok(())
    }

    /// Blocks until the user closes the cloud.
    fn show(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        let _guard = ScreenGuard::enter(&mut stdout)?;
        self.paint(&mut stdout)?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => self.paint(&mut stdout)?,
                _ => {}
            }
        }
    }
}

/// Restores the terminal when dropped, including on early error returns.
struct ScreenGuard;

impl ScreenGuard {
    fn enter<W: Write>(out: &mut W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
