//! Credfolio - an expandable credential card gallery.
//!
//! A single-window desktop app showing a fixed list of credential cards.
//! Clicking a card expands it into a modal detail view; Escape, a click on
//! the backdrop, or the close button collapse it again.

#![allow(non_snake_case)]

pub mod app;
pub mod cards;
pub mod components;
pub mod pages;
pub mod scroll_lock;
pub mod selection;
pub mod theme;
