pub mod model;
pub mod persona;
pub mod service;

pub use model::{ChatTurn, ResolutionPath};
pub use persona::{Persona, TemplatePicker};
pub use service::ChatService;
