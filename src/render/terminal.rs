use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::Mutex;

use super::{MovieCard, Notice, Panel, Renderer};

/// Writes cards as plain text blocks.
pub struct TerminalRenderer<W: Write + Send> {
    out: Mutex<Output<W>>,
}

struct Output<W> {
    writer: W,
    /// Panels with cards on screen since their last clear.
    visible: HashSet<Panel>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            out: Mutex::new(Output {
                writer,
                visible: HashSet::new(),
            }),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out.writer,
            Err(poisoned) => poisoned.into_inner().writer,
        }
    }

    fn write_with(&self, f: impl FnOnce(&mut W, &mut HashSet<Panel>) -> io::Result<()>) {
        let mut guard = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let Output { writer, visible } = &mut *guard;
        if let Err(e) = f(writer, visible).and_then(|_| writer.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

fn write_card<W: Write>(out: &mut W, card: &MovieCard) -> io::Result<()> {
    writeln!(out, "  {} ({})", card.title, card.year)?;
    writeln!(out, "    Year: {}", card.year)?;
    writeln!(out, "    Genre: {}", card.genres)?;
    writeln!(out, "    IMDb Rating: {}", card.rating)?;
    if !card.plot.is_empty() {
        writeln!(out, "    {}", card.plot)?;
    }
    writeln!(out, "    Poster: {}", card.poster_url)?;
    writeln!(out)
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn show(&self, panel: Panel, cards: &[MovieCard]) {
        self.write_with(|out, visible| {
            visible.insert(panel);
            writeln!(out, "== {} ({}) ==", panel.heading(), cards.len())?;
            for card in cards {
                write_card(out, card)?;
            }
            Ok(())
        });
    }

    /// Prints a marker only when the panel had something on screen.
    fn clear(&self, panel: Panel) {
        self.write_with(|out, visible| {
            if visible.remove(&panel) {
                writeln!(out, "-- {} cleared --", panel.heading())?;
            } else {
                tracing::debug!(?panel, "Panel already empty");
            }
            Ok(())
        });
    }

    fn notify(&self, notice: Notice) {
        self.write_with(|out, _| writeln!(out, "! {}", notice.message()));
    }
}
