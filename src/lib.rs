//! Emberfield: the interactive layer of a "coming soon" landing page,
//! rebuilt as a native crate.
//!
//! The centerpiece is the particle field backdrop ([`simulation`]): a
//! fixed set of ember-colored particles advanced once per frame with
//! pointer attraction, damping, and boundary reflection, joined by
//! distance-faded connection lines. [`page`] carries the page's smaller
//! interactions (launch countdown, subscription form, pointer parallax,
//! reveal-on-visibility). [`gpu`] and [`app`] host it all in a window,
//! playing the part of the browser tab.

pub mod app;
pub mod canvas;
pub mod config;
pub mod gpu;
pub mod page;
pub mod simulation;
