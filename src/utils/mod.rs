pub mod external_tools;
pub mod shell;
pub mod step_log;
