//! Error types for logging-system registration

pub type Result<T> = std::result::Result<T, RegistryError>;

/// The registry's two failure modes. Everything else in the crate is either
/// silently clamped or rejected at compile time.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A logging system with this name already exists in the registry.
    #[error("Logging system '{name}' is already defined")]
    AlreadyDefined { name: String },

    /// The named logging system was never defined in this registry.
    #[error("Logging system '{name}' is not defined")]
    NotDefined { name: String },
}

impl RegistryError {
    /// Create an already-defined error
    pub fn already_defined(name: impl Into<String>) -> Self {
        RegistryError::AlreadyDefined { name: name.into() }
    }

    /// Create a not-defined error
    pub fn not_defined(name: impl Into<String>) -> Self {
        RegistryError::NotDefined { name: name.into() }
    }
}
