// Domain layer: vocabularies, static tables, models and ports (interfaces).

pub mod catalog;
pub mod model;
pub mod ports;
pub mod tables;
