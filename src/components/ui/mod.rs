pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod cover;
pub mod input;
pub mod label;
pub mod modal;
pub mod select;
pub mod spinner;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use badge::*;
pub use button::*;
#[allow(unused_imports)]
pub use card::*;
pub use cover::*;
pub use input::*;
pub use label::*;
pub use modal::*;
pub use select::*;
pub use spinner::*;
