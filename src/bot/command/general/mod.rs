//! Commands available to everyone.

pub mod help;
pub mod invite;
pub mod ping;

use super::CommandCategory;

pub fn category() -> CommandCategory {
    CommandCategory {
        name: "general",
        modules: vec![ping::module(), help::module(), invite::module()],
    }
}
