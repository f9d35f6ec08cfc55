use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::multipass::VmRecord;

/// The single VM this inventory is built around.
pub const TARGET_VM: &str = "jterrazz-infra";

// Skip localhost and docker IPs, prefer 192.168.x.x
const EXCLUDED_IP_PREFIXES: [&str; 3] = ["127.", "172.", "10.42."];

const SSH_USER: &str = "ubuntu";
const SSH_COMMON_ARGS: &str = "-o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null";

#[derive(Debug, Serialize)]
pub struct Inventory {
    pub all: AllGroup,
    pub development: HostGroup,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct AllGroup {
    pub children: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HostGroup {
    pub hosts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    pub hostvars: HashMap<String, HostVars>,
}

/// Ansible connection variables - CONNECTION INFO ONLY
#[derive(Debug, Serialize)]
pub struct HostVars {
    pub ansible_host: String,
    pub ansible_user: String,
    pub ansible_ssh_private_key_file: String,
    pub ansible_ssh_common_args: String,
}

/// Find the target VM and pick its first IP that passes the exclusion filter.
/// Returns None when the VM is absent, not running, or has no usable address.
fn select_vm_ip(vms: &[VmRecord]) -> Option<&str> {
    let target = vms.iter().find(|vm| vm.name == TARGET_VM)?;

    if target.state != "Running" {
        return None;
    }

    target
        .ipv4
        .iter()
        .map(String::as_str)
        .find(|ip| !EXCLUDED_IP_PREFIXES.iter().any(|p| ip.starts_with(p)))
}

/// Build the inventory document. The hosts list and hostvars stay empty
/// unless the target VM resolved to a usable IP; the document itself is
/// always well-formed.
pub fn build_inventory(vms: &[VmRecord], ssh_key_path: &Path) -> Inventory {
    let mut inventory = Inventory {
        all: AllGroup {
            children: vec!["development".to_string()],
        },
        development: HostGroup { hosts: Vec::new() },
        meta: Meta {
            hostvars: HashMap::new(),
        },
    };

    if let Some(vm_ip) = select_vm_ip(vms) {
        inventory.development.hosts = vec![TARGET_VM.to_string()];
        inventory.meta.hostvars.insert(
            TARGET_VM.to_string(),
            HostVars {
                ansible_host: vm_ip.to_string(),
                ansible_user: SSH_USER.to_string(),
                ansible_ssh_private_key_file: ssh_key_path.to_string_lossy().into_owned(),
                ansible_ssh_common_args: SSH_COMMON_ARGS.to_string(),
            },
        );
    }

    inventory
}

/// Pick the value a single invocation prints: the full document for `--list`
/// (or no flags), one host's variables for `--host`, `{}` for an unknown
/// host. `--list` wins when both flags are given.
pub fn inventory_output(
    inv: &Inventory,
    list: bool,
    host: Option<&str>,
) -> Result<serde_json::Value, serde_json::Error> {
    match host {
        Some(name) if !list => match inv.meta.hostvars.get(name) {
            Some(vars) => serde_json::to_value(vars),
            None => Ok(serde_json::json!({})),
        },
        _ => serde_json::to_value(inv),
    }
}

/// Path of the SSH private key relative to the project root.
pub fn ssh_key_path(project_root: &Path) -> PathBuf {
    project_root.join("local-data/ssh/id_rsa")
}

/// The binary is deployed at <root>/ansible/inventories/multipass/<bin>,
/// so the project root sits four ancestors above the executable itself.
/// Degrades to the current directory when the executable path is unknown
/// or too short, keeping the emitted key path relative.
pub fn project_root() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => root_from_exe(&exe),
        Err(_) => PathBuf::from("."),
    }
}

fn root_from_exe(exe: &Path) -> PathBuf {
    exe.ancestors()
        .nth(4)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
