//! Declarative view models for the forms. They carry no behavior: each one is
//! derived from a form's layout and its live state, then handed to a renderer.

pub mod alert;
pub mod button;
pub mod card;
pub mod input;
pub mod render;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use card::{CrossLink, FieldLayout, FormView, Layout};
pub use input::{Field, InputKind, Link};
