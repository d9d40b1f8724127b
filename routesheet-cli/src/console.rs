//! Terminal renditions of the screen's views.
//!
//! Each surface prints what it is asked to show. The card and alert surfaces
//! also report back over a channel so the route command can act as the user:
//! closing the sheet once the summary is read, acknowledging an alert.

use console::style;
use tokio::sync::mpsc;

use routesheet::alert::{Alert, AlertChannel};
use routesheet::coord::BoundingRegion;
use routesheet::map::{MapSurface, Marker, Overlay};
use routesheet::screen::{DismissReason, HostScreen};
use routesheet::summary::{CardSurface, SummaryCard};

/// What the terminal "user" has seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seen {
    Card,
    Alert,
}

pub struct ConsoleMap;

impl MapSurface for ConsoleMap {
    fn add_overlay(&mut self, overlay: Overlay) {
        let Overlay::Polyline { points, style: line, .. } = overlay;
        println!(
            "  {} {} points, {} {}pt",
            style("route").cyan().bold(),
            points.len(),
            line.stroke_color,
            line.line_width
        );
    }

    fn clear_overlays(&mut self) {}

    fn add_marker(&mut self, marker: Marker) {
        println!(
            "  {} {} at {}",
            style("marker").cyan().bold(),
            marker.title,
            marker.coordinate
        );
    }

    fn clear_markers(&mut self) {}

    fn set_viewport(&mut self, region: BoundingRegion, _animated: bool) {
        let (lat_span, lon_span) = region.span();
        println!(
            "  {} centered on {} ({:.4}° × {:.4}°)",
            style("view").cyan().bold(),
            region.center(),
            lat_span,
            lon_span
        );
    }
}

pub struct ConsoleCard {
    seen: mpsc::UnboundedSender<Seen>,
}

impl ConsoleCard {
    pub fn new(seen: mpsc::UnboundedSender<Seen>) -> Self {
        Self { seen }
    }
}

impl CardSurface for ConsoleCard {
    fn show_card(&mut self, card: SummaryCard) {
        println!();
        println!("  {}", style(&card.text).green().bold());
        let _ = self.seen.send(Seen::Card);
    }

    fn remove_card(&mut self) {}
}

pub struct ConsoleAlerts {
    seen: mpsc::UnboundedSender<Seen>,
}

impl ConsoleAlerts {
    pub fn new(seen: mpsc::UnboundedSender<Seen>) -> Self {
        Self { seen }
    }
}

impl AlertChannel for ConsoleAlerts {
    fn present(&mut self, alert: Alert) {
        eprintln!();
        eprintln!("  {}", style(&alert.title).red().bold());
        eprintln!("  {}", alert.message);
        let _ = self.seen.send(Seen::Alert);
    }
}

pub struct ConsoleHost;

impl HostScreen for ConsoleHost {
    fn dismiss(&mut self, reason: DismissReason) {
        tracing::debug!(?reason, "Host dismissed");
    }
}
