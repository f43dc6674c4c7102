use sysinfo::{Pid, Process, ProcessesToUpdate, System};

use crate::error::ProducerError;

const BYTES_PER_MB: f64 = 1_048_576.0;

pub trait MemorySampler {
    /// Current resident set size of the process, in megabytes.
    ///
    /// # Errors
    /// Errors when the sampler cannot read the process' memory usage
    fn resident_mb(&mut self) -> Result<f64, ProducerError>;
}

/// Samples the resident memory of the running process through `sysinfo`.
pub struct ProcessMemory {
    system: System,
    pid: Pid,
}

impl ProcessMemory {
    /// # Errors
    /// Errors when the current pid cannot be resolved on this platform
    pub fn new() -> Result<Self, ProducerError> {
        let pid = sysinfo::get_current_pid().map_err(ProducerError::MemoryUnavailable)?;
        Ok(ProcessMemory {
            system: System::new(),
            pid,
        })
    }
}

impl MemorySampler for ProcessMemory {
    fn resident_mb(&mut self) -> Result<f64, ProducerError> {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        self.system
            .process(self.pid)
            .map(Process::memory)
            .map(bytes_to_mb)
            .ok_or(ProducerError::ProcessNotFound)
    }
}

#[allow(clippy::cast_precision_loss)]
fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bytes_to_mb() {
        assert!(bytes_to_mb(0).abs() < f64::EPSILON);
        assert!((bytes_to_mb(1_048_576) - 1.0).abs() < f64::EPSILON);
        assert!((bytes_to_mb(3 * 524_288) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_process_memory_is_positive() {
        let mut sampler = ProcessMemory::new().unwrap();
        let first = sampler.resident_mb().unwrap();
        assert!(first > 0.0);
        // sampling again reuses the same handle
        let second = sampler.resident_mb().unwrap();
        assert!(second > 0.0);
    }
}
