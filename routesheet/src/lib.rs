//! RouteSheet - route resolution and presentation on a draggable map sheet
//!
//! This library provides the core of a route screen: a velocity-aware sheet
//! position controller, an asynchronous address → coordinate → route
//! resolution pipeline, and the renderer/presenter pair that consume the
//! resolved route. The [`screen`] module composes them into a single
//! UI-thread event loop.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── RouteScreen (UI loop) ───────────────────────────┐
//! │                                                                              │
//! │  PanEvent ──► PanTracker ──► SheetController ──► SheetEvent::Closed ──► dismiss
//! │                                                                              │
//! │  open ──► ResolutionSlot ──spawn──► RoutePipeline (geocode ─► directions)    │
//! │                 ▲                          │                                 │
//! │                 └──── ScreenEvent::Resolved (weak sender, liveness token)    │
//! │                                                                              │
//! │  Ok(Route)  ──► MapOverlayRenderer + RouteSummaryPresenter                   │
//! │  Err(error) ──► AlertChannel ──acknowledged──► dismiss                       │
//! └──────────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod alert;
pub mod cache;
pub mod config;
pub mod coord;
pub mod logging;
pub mod map;
pub mod pipeline;
pub mod provider;
pub mod screen;
pub mod sheet;
pub mod summary;
pub mod telemetry;
