mod convert_phase_tests;
mod pipeline_tests;
mod utils;
