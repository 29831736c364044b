//! Message handlers.
//!
//! Each submodule extends `App` with the handlers for one area of the
//! dialog so `App::update` stays a thin dispatcher.

mod selection;
