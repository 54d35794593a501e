pub mod complexity_analysis;
pub mod comprehensive_analysis;
pub mod execution_simulation;
pub mod finding;
pub mod improvement_analysis;
pub mod structured_analysis;
pub mod syntax_analysis;
pub mod test_generation;
