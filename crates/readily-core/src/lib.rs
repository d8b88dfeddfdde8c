//! Terminal-agnostic RSVP playback engine.
//!
//! The host feeds a [`content::TextBuffer`] and a [`input::CommandSource`] into
//! [`app::ReaderApp`], then drives [`app::ReaderApp::run`] with a
//! [`render::Display`] and a [`clock::Clock`].

pub mod app;
pub mod clock;
pub mod content;
pub mod input;
pub mod render;
pub mod text_policy;
