pub mod log_run;
pub mod source;
