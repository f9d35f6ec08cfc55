use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "multipass-inventory")]
#[command(about = "Dynamic Ansible inventory for Multipass VMs")]
pub struct Cli {
    /// List all hosts
    #[arg(long)]
    pub list: bool,

    /// Get variables for a specific host
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,
}
