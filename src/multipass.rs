use std::process::Command;

use serde::Deserialize;

/// Top-level shape of `multipass list --format json`.
#[derive(Debug, Deserialize)]
struct MultipassList {
    #[serde(default)]
    list: Vec<VmRecord>,
}

/// One VM as reported by multipass. Fields default individually so a record
/// missing any of them parses instead of discarding the whole list.
#[derive(Debug, Deserialize)]
pub struct VmRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub ipv4: Vec<String>,
}

/// Query multipass for all known VMs.
///
/// Fail-soft: spawn failure, non-zero exit, and malformed JSON all collapse
/// to an empty list so inventory queries never crash the caller.
pub fn fetch_vm_list() -> Vec<VmRecord> {
    let output = Command::new("multipass")
        .args(["list", "--format", "json"])
        .output();

    let output = match output {
        Ok(o) if o.status.success() => o,
        _ => return Vec::new(),
    };

    parse_vm_list(&output.stdout)
}

fn parse_vm_list(bytes: &[u8]) -> Vec<VmRecord> {
    match serde_json::from_slice::<MultipassList>(bytes) {
        Ok(parsed) => parsed.list,
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vm_list() {
        let json = br#"{
            "list": [
                {
                    "ipv4": ["192.168.64.10"],
                    "name": "jterrazz-infra",
                    "release": "Ubuntu 24.04 LTS",
                    "state": "Running"
                },
                {
                    "ipv4": [],
                    "name": "scratch",
                    "release": "Not Available",
                    "state": "Stopped"
                }
            ]
        }"#;

        let vms = parse_vm_list(json);
        assert_eq!(vms.len(), 2);
        assert_eq!(vms[0].name, "jterrazz-infra");
        assert_eq!(vms[0].state, "Running");
        assert_eq!(vms[0].ipv4, vec!["192.168.64.10"]);
        assert!(vms[1].ipv4.is_empty());
    }

    #[test]
    fn test_parse_malformed_json_is_empty() {
        assert!(parse_vm_list(b"not json at all").is_empty());
        assert!(parse_vm_list(b"").is_empty());
    }

    #[test]
    fn test_parse_missing_list_key_is_empty() {
        assert!(parse_vm_list(b"{}").is_empty());
    }

    #[test]
    fn test_parse_record_missing_fields() {
        let vms = parse_vm_list(br#"{"list": [{"name": "partial"}]}"#);
        assert_eq!(vms.len(), 1);
        assert_eq!(vms[0].name, "partial");
        assert_eq!(vms[0].state, "");
        assert!(vms[0].ipv4.is_empty());
    }
}
