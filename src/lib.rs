//! rpidsm: generate setup scripts for Raspberry Pi displays from a screen catalog.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    DoctorOptions, DoctorOutcome, ScreenListing, describe, doctor, install, install_command,
    list_screens, load_context, resolve,
};
pub use app::delivery::DeliveryResponse;
pub use domain::{
    AppConfig, AppError, GenerationResult, Language, OsVariant, RawRequest, ResolveError,
    Rotation,
};
