pub mod check_tools;
pub mod run;
