//! Floating route summary card.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::format::format_summary;
use crate::pipeline::Route;

/// Icon shown next to the summary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Vehicle,
}

/// Where the card is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAnchor {
    MapTop,
}

/// A summary card as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub text: String,
    pub icon: CardIcon,
    pub anchor: CardAnchor,
}

/// Commands accepted by the view hosting the card.
pub trait CardSurface {
    fn show_card(&mut self, card: SummaryCard);

    fn remove_card(&mut self);
}

impl<S: CardSurface + ?Sized> CardSurface for Box<S> {
    fn show_card(&mut self, card: SummaryCard) {
        (**self).show_card(card)
    }

    fn remove_card(&mut self) {
        (**self).remove_card()
    }
}

/// Formats a route into a [`SummaryCard`] and keeps at most one on screen.
pub struct RouteSummaryPresenter<S: CardSurface> {
    surface: S,
    showing: bool,
}

impl<S: CardSurface> RouteSummaryPresenter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            showing: false,
        }
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Show the summary for `route`, replacing any card already shown.
    pub fn present(&mut self, route: &Route) {
        self.dismiss();
        let card = SummaryCard {
            text: format_summary(route.distance_meters(), route.duration_seconds()),
            icon: CardIcon::Vehicle,
            anchor: CardAnchor::MapTop,
        };
        debug!(text = %card.text, "Presenting route summary");
        self.surface.show_card(card);
        self.showing = true;
    }

    pub fn dismiss(&mut self) {
        if self.showing {
            self.surface.remove_card();
            self.showing = false;
        }
    }
}

/// Card surface keeping the visible cards in memory. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingCardSurface {
    cards: Arc<Mutex<Vec<SummaryCard>>>,
}

impl RecordingCardSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards currently on screen.
    pub fn cards(&self) -> Vec<SummaryCard> {
        self.cards.lock().clone()
    }
}

impl CardSurface for RecordingCardSurface {
    fn show_card(&mut self, card: SummaryCard) {
        self.cards.lock().push(card);
    }

    fn remove_card(&mut self) {
        self.cards.lock().clear();
    }
}
