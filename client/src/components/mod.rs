//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render route chrome and form controls while reading shared
//! state (session store, toasts) from Leptos context providers.

pub mod form_field;
pub mod navbar;
pub mod protected_route;
pub mod toast_stack;
