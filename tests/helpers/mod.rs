#![allow(dead_code)]

pub mod project_fixtures;
pub mod source_fixtures;
pub mod syntax_helpers;
