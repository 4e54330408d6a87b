//! Device capability probe gating the animation on low-end machines

/// What the probe could learn about the host machine.
///
/// Either field may be unavailable; an absent value never satisfies the
/// low-end condition.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeviceProfile {
    /// Approximate total memory in GiB
    pub memory_gib: Option<f64>,
    /// Logical processor count
    pub logical_cpus: Option<usize>,
}

/// Memory below this (GiB) marks a machine as low-end
const LOW_MEMORY_GIB: f64 = 4.0;
/// Logical CPU count at or below this marks a machine as low-end
const LOW_CPU_COUNT: usize = 4;

impl DeviceProfile {
    /// Probe the running machine. Never fails; unknowable values are None.
    pub fn detect() -> Self {
        Self {
            memory_gib: detect_memory_gib(),
            logical_cpus: Some(num_cpus::get()),
        }
    }

    /// True when either the memory or the CPU condition is met.
    pub fn is_low_end(&self) -> bool {
        let low_memory = self.memory_gib.map(|m| m < LOW_MEMORY_GIB).unwrap_or(false);
        let few_cpus = self
            .logical_cpus
            .map(|n| n <= LOW_CPU_COUNT)
            .unwrap_or(false);
        low_memory || few_cpus
    }
}

#[cfg(target_os = "linux")]
fn detect_memory_gib() -> Option<f64> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    parse_meminfo_total_gib(&meminfo)
}

#[cfg(not(target_os = "linux"))]
fn detect_memory_gib() -> Option<f64> {
    None
}

/// Pulls `MemTotal:  N kB` out of /proc/meminfo text
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_meminfo_total_gib(meminfo: &str) -> Option<f64> {
    let line = meminfo.lines().find(|l| l.starts_with("MemTotal:"))?;
    let kib: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kib / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_condition_marks_low_end() {
        let low_mem = DeviceProfile {
            memory_gib: Some(2.0),
            logical_cpus: Some(16),
        };
        assert!(low_mem.is_low_end());

        let few_cpus = DeviceProfile {
            memory_gib: Some(32.0),
            logical_cpus: Some(4),
        };
        assert!(few_cpus.is_low_end());

        let capable = DeviceProfile {
            memory_gib: Some(16.0),
            logical_cpus: Some(8),
        };
        assert!(!capable.is_low_end());
    }

    #[test]
    fn absent_values_never_satisfy_a_condition() {
        let unknown = DeviceProfile {
            memory_gib: None,
            logical_cpus: None,
        };
        assert!(!unknown.is_low_end());

        let mixed = DeviceProfile {
            memory_gib: None,
            logical_cpus: Some(3),
        };
        assert!(mixed.is_low_end());
    }

    #[test]
    fn meminfo_parsing() {
        let text = "MemTotal:       16303908 kB\nMemFree:         1216324 kB\n";
        let gib = parse_meminfo_total_gib(text).unwrap();
        assert!((gib - 15.547).abs() < 0.01);

        assert!(parse_meminfo_total_gib("MemFree: 100 kB\n").is_none());
        assert!(parse_meminfo_total_gib("MemTotal: not-a-number kB\n").is_none());
    }

    #[test]
    fn detect_reports_cpus() {
        let profile = DeviceProfile::detect();
        assert!(profile.logical_cpus.unwrap() >= 1);
    }
}
