pub mod card;
pub mod terminal;

use std::sync::Arc;

pub use card::MovieCard;
pub use terminal::TerminalRenderer;

use crate::movie::MovieRecord;

/// Area of the screen a set of cards is painted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Featured,
    Results,
    Recommendations,
}

impl Panel {
    pub fn heading(&self) -> &'static str {
        match self {
            Panel::Featured => "Featured movies",
            Panel::Results => "Search results",
            Panel::Recommendations => "You might also like",
        }
    }
}

/// User-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyTerm,
    NotFound,
    NoDisplayableResults,
    TryAgainLater,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyTerm => "Please enter a movie title.",
            Notice::NotFound => "Movie not found!",
            Notice::NoDisplayableResults => "No displayable results for this search.",
            Notice::TryAgainLater => "An error occurred. Please try again later.",
        }
    }
}

/// Paints cards and messages. Receives already-validated data only.
pub trait Renderer: Send + Sync {
    fn show(&self, panel: Panel, cards: &[MovieCard]);
    fn clear(&self, panel: Panel);
    fn notify(&self, notice: Notice);
}

/// Projects records into cards and hands them to the renderer.
#[derive(Clone)]
pub struct Screen {
    renderer: Arc<dyn Renderer>,
    placeholder_poster: String,
}

impl Screen {
    pub fn new(renderer: Arc<dyn Renderer>, placeholder_poster: &str) -> Self {
        Self {
            renderer,
            placeholder_poster: placeholder_poster.to_string(),
        }
    }

    pub fn show(&self, panel: Panel, records: &[MovieRecord]) {
        let cards: Vec<MovieCard> = records
            .iter()
            .map(|r| MovieCard::project(r, &self.placeholder_poster))
            .collect();
        self.renderer.show(panel, &cards);
    }

    pub fn clear(&self, panel: Panel) {
        self.renderer.clear(panel);
    }

    pub fn notify(&self, notice: Notice) {
        self.renderer.notify(notice);
    }
}
