use crate::domain::ports::HostProbe;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// Host memory readings via sysinfo.
#[derive(Debug, Default)]
pub struct SysinfoProbe;

impl SysinfoProbe {
    pub fn new() -> Self {
        Self
    }
}

impl HostProbe for SysinfoProbe {
    fn available_memory_mb(&self) -> u64 {
        let system = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
        );
        system.available_memory() / 1024 / 1024 // Convert bytes to MB
    }
}
