pub mod builder;
pub mod data;

pub use builder::{position_for, ChartBuilder};
pub use data::{
    parse_birth_date, parse_birth_time, BirthPlace, Chart, ChartError, ElementBalance, ElementPercent, Person,
    Position,
};
