use thiserror::Error;

/// Problems with the compiled-in command catalog, detected while building the registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Two command modules define the same command name.
    ///
    /// Discord rejects duplicate names in a bulk overwrite, and dispatch could only ever
    /// reach one of the handlers, so startup is aborted.
    #[error("Command '{name}' is defined by both {first} and {second}")]
    DuplicateCommand {
        name: String,
        /// Module path that registered the name first
        first: String,
        /// Module path that tried to register it again
        second: String,
    },
}
