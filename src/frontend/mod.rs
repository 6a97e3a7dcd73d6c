//! Terminal front end.
//!
//! A thin form over the contact store. It only talks to the store through
//! `add`, `remove` and `list`.

pub mod form;

pub use form::ContactForm;
