pub mod collector;
pub mod controller;
pub mod number;
pub mod response;
pub mod status;
pub mod validation;

pub use crate::domain::model::{
    FormControl, FormData, ParsedDestination, StatusBanner, StatusKind, SubmissionPayload,
    SubmitOutcome,
};
pub use crate::domain::ports::{ConfigProvider, Page, Transport};
pub use crate::utils::error::Result;
