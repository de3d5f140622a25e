use lexeth_config::ContractConfig;
use tracing::debug;

use super::{InterfaceDescriptor, Registry};
use crate::error::Error;

/// Loads every configured descriptor file, in order, into a new [`Registry`].
///
/// The first unreadable or malformed file aborts the load; a partially loaded registry is never
/// returned.
pub fn load_descriptors(contracts: &[ContractConfig]) -> Result<Registry, Error> {
    let mut registry = Registry::new();

    for contract in contracts {
        debug!("loading ABI for contract '{}' from {}", contract.name, contract.path.display());
        registry.insert(InterfaceDescriptor::from_file(&contract.name, &contract.path)?);
    }

    debug!("loaded {} contract ABI(s)", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use lexeth_common::utils::io::file::{delete_path, write_file};

    use super::*;

    const COUNTER_ABI: &str = r#"[
        {"type": "function", "name": "increment", "inputs": [], "outputs": [], "stateMutability": "nonpayable"}
    ]"#;

    const OWNED_ABI: &str = r#"[
        {
            "type": "function",
            "name": "transferOwnership",
            "inputs": [{"name": "newOwner", "type": "address"}],
            "outputs": [],
            "stateMutability": "nonpayable"
        }
    ]"#;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lexeth-loader-{}-{}", std::process::id(), name))
    }

    fn write_abi(dir: &Path, file: &str, contents: &str) -> PathBuf {
        let path = dir.join(file);
        write_file(&path, contents).expect("failed to write abi");
        path
    }

    #[test]
    fn test_load_descriptors_in_order() {
        let dir = scratch_dir("order");
        let contracts = vec![
            ContractConfig::new("Owned", write_abi(&dir, "owned.json", OWNED_ABI)),
            ContractConfig::new("Counter", write_abi(&dir, "counter.json", COUNTER_ABI)),
        ];

        let registry = load_descriptors(&contracts).expect("failed to load descriptors");
        let names = registry.iter().map(InterfaceDescriptor::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Owned", "Counter"]);
        assert_eq!(registry.get("Owned").expect("loaded").methods()[0].name, "transferOwnership");

        delete_path(&dir);
    }

    #[test]
    fn test_load_empty_contract_list() {
        let registry = load_descriptors(&[]).expect("failed to load descriptors");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = scratch_dir("missing");
        let contracts = vec![
            ContractConfig::new("Counter", write_abi(&dir, "counter.json", COUNTER_ABI)),
            ContractConfig::new("Ghost", dir.join("ghost.json")),
        ];

        let result = load_descriptors(&contracts);
        match result {
            Err(Error::DescriptorRead { path, .. }) => assert_eq!(path, dir.join("ghost.json")),
            other => panic!("expected a read error, got {other:?}"),
        }

        delete_path(&dir);
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let dir = scratch_dir("malformed");
        let contracts = vec![
            ContractConfig::new("Broken", write_abi(&dir, "broken.json", "{\"type\": ")),
            ContractConfig::new("Counter", write_abi(&dir, "counter.json", COUNTER_ABI)),
        ];

        let result = load_descriptors(&contracts);
        assert!(matches!(result, Err(Error::DescriptorParse { ref name, .. }) if name == "Broken"));

        delete_path(&dir);
    }

    #[test]
    fn test_undecodable_type_is_fatal() {
        let dir = scratch_dir("invalid-type");
        let bad = r#"[
            {"type": "function", "name": "f", "inputs": [{"name": "x", "type": "uint7"}], "outputs": [], "stateMutability": "nonpayable"}
        ]"#;
        let contracts = vec![
            ContractConfig::new("Counter", write_abi(&dir, "counter.json", COUNTER_ABI)),
            ContractConfig::new("Bad", write_abi(&dir, "bad.json", bad)),
        ];

        let result = load_descriptors(&contracts);
        assert!(matches!(result, Err(Error::DescriptorInvalid { ref name, .. }) if name == "Bad"));

        delete_path(&dir);
    }
}
