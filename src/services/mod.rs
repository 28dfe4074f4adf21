// Bookmark Saver services
// Stateless or self-contained functionality: backend client, validation, toasts, settings.

pub mod api_client;
pub mod settings_engine;
pub mod toast_center;
pub mod validation;
