use crate::config::app::AccessConfig;
use crate::consts::DEFAULT_MAX_CHAIN_DEPTH;
use crate::enums::MissingFolderPolicy;

pub fn default_max_chain_depth() -> usize {
    DEFAULT_MAX_CHAIN_DEPTH
}

pub fn default_missing_folder() -> MissingFolderPolicy {
    MissingFolderPolicy::Deny
}

pub fn default_access() -> AccessConfig {
    AccessConfig {
        max_chain_depth: default_max_chain_depth(),
        missing_folder: default_missing_folder(),
    }
}
