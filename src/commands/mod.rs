pub mod init;
pub mod template;
pub mod validate;

pub use init::{generate_template_scaffold, run_init, run_init_impl};
pub use template::{run_template, run_template_check_impl, run_template_show_impl};
pub use validate::{format_result, run_validate, run_validate_impl, write_output};
