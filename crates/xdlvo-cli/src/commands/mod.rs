pub mod electrolyte;
pub mod presets;
pub mod run;
pub mod surface;
