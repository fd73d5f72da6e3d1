use crate::config::ReservedKeys;
use crate::download::ProgressMode;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub base_dir: PathBuf,
    pub reserved_keys: ReservedKeys,
    pub progress: ProgressMode,
}

#[derive(Debug, Clone)]
pub struct PlanParams {
    pub base_dir: PathBuf,
    pub reserved_keys: ReservedKeys,
    pub json: bool,
}
