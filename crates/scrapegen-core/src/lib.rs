pub mod config;
pub mod logging;

pub mod delivery;
pub mod input;
pub mod notify;
pub mod pipeline;
pub mod request;
pub mod state;
pub mod transport;

pub use input::{FormInput, InputError};
pub use pipeline::{Pipeline, SubmitOutcome};
