//! Info command - describe the processor's variables.

use filezilla_url::{FileZillaUrlProcessor, ReqwestClient, VariableInfo};

/// Run the info command.
pub fn run() {
    let info = FileZillaUrlProcessor::<ReqwestClient>::info();

    println!("{}", info.description);
    println!();
    println!("Input variables:");
    print_variables(&info.input_variables);
    println!();
    println!("Output variables:");
    print_variables(&info.output_variables);
}

fn print_variables(variables: &[VariableInfo]) {
    for var in variables {
        let required = if var.required { " (required)" } else { "" };
        println!("  {}{}", var.name, required);
        println!("      {}", var.description);
    }
}
