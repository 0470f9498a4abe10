//! Server configuration commands, restricted to server managers.

pub mod language;

use super::CommandCategory;

pub fn category() -> CommandCategory {
    CommandCategory {
        name: "config",
        modules: vec![language::module()],
    }
}
