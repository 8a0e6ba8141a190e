mod center;
pub mod tab_strip;

pub use center::Center;
pub use tab_strip::TabStrip;
