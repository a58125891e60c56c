// src/lib.rs

pub mod c_api;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod protocol;

pub use crate::catalog::ModuleCatalog;
pub use crate::core::engine::{generate_pathway, PathwayEngine};
pub use crate::core::matcher::{get_method_modules, match_discipline_modules};
pub use crate::core::types::{Pathway, ProgrammingExperience, RecommendedLanguage, UserProfile};
pub use crate::error::{PathwayError, Result};
