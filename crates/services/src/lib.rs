#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod explanation_service;
pub mod profile_service;
pub mod progress_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, ExplanationError};
pub use explanation_service::{
    COULD_NOT_RETRIEVE, ExplanationConfig, ExplanationService, FAILED_TO_FETCH, GeminiClient,
    TextGenerator, build_prompt,
};
pub use profile_service::ProfileService;
pub use progress_service::ProgressService;
