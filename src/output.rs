use serde::Serialize;

/// Print data as pretty JSON (2-space indent), the only format Ansible reads.
pub fn print_json<T: Serialize>(data: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}
