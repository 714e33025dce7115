//! The presentation-layer boundary.
//!
//! Rendering is the job of whatever UI framework hosts the page; this module
//! models everything that framework needs as plain data. [`page`] carries the
//! static chrome (title, tabs, step headings), [`form::TtsForm`] the user's
//! inputs, and [`app::TtsApp`] the submit flow: it takes the five form inputs and
//! hands back either `audio/wav` bytes or a user-facing message, never a panic.
//!
//! Generated audio is kept on the app so it survives page re-renders; it is only
//! replaced by a later successful generation or an explicit
//! [`reset`](app::TtsApp::reset).

pub mod app;
pub mod form;
pub mod page;
pub mod staging;

pub use app::{Banner, Download, TtsApp};
pub use form::{AudioFormat, AudioUpload, TtsForm};
pub use staging::StagedRequest;
