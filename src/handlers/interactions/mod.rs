//! Component and context-menu handlers.
//!
//! Buttons and select menus are routed to one handler each, whatever their custom id;
//! those handlers branch on the custom id themselves. Context menus are routed by the
//! menu entry's name.

pub mod button;
pub mod selectmenu;
pub mod user_info;
