pub mod chord;
pub mod notation;
pub mod scale;
