mod campaign;
mod dashboard;
mod event;
mod import;
mod job;
mod log;
mod settings;
mod status;
mod student;

pub mod dtos {
    pub use crate::campaign::dtos::*;
    pub use crate::dashboard::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::import::dtos::*;
    pub use crate::job::dtos::*;
    pub use crate::log::dtos::*;
    pub use crate::settings::dtos::*;
    pub use crate::student::dtos::*;
}

pub use crate::campaign::api::*;
pub use crate::dashboard::api::*;
pub use crate::event::api::*;
pub use crate::import::api::*;
pub use crate::job::api::*;
pub use crate::log::api::*;
pub use crate::settings::api::*;
pub use crate::status::api::*;
pub use crate::student::api::*;
