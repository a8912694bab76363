//! Shared model and client/server logic for the Moonshine recruitment site.
//!
//! Everything in this crate is free of browser and server dependencies so the
//! `frontend` (yew) and `backend` (actix-web) crates can share one definition of
//! the application record, its validation rules and the wire envelopes, and so
//! the stateful controllers (form, carousel) can be tested natively.

pub mod api;
pub mod carousel;
pub mod form;
pub mod i18n;
pub mod model;
pub mod validation;
pub mod window;
