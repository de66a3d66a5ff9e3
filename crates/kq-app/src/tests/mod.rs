mod pipeline_tests;
mod session_tests;
