mod cli;
mod inventory;
mod multipass;
mod output;

use clap::Parser;
use cli::Cli;
use output::{print_error, print_json};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let vms = multipass::fetch_vm_list();
    let ssh_key = inventory::ssh_key_path(&inventory::project_root());
    let inv = inventory::build_inventory(&vms, &ssh_key);

    let output = inventory::inventory_output(&inv, cli.list, cli.host.as_deref())?;
    print_json(&output)
}
