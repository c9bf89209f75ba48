#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(
        "entry module is not configured; name a module in the scan or build the app with one"
    )]
    EntryModuleUnresolved,
}

pub type RegistrationResult<T> = std::result::Result<T, RegistrationError>;
