use std::env;

/// Benchmark run parameters, resolved from the environment.
///
/// The entry point takes no command-line arguments; overrides come from
/// `MEMBENCH_ELEMS`, `MEMBENCH_BLOCK_SIZE` and `MEMBENCH_THREADS`.
/// Unparseable values fall back to the defaults.
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    /// Elements per buffer. Default 1M (1,048,576).
    pub elems: usize,
    /// Elements assigned to one work item per launch. Default 1024.
    pub block_size: usize,
    /// Worker threads backing the device pool. Default: all host cores.
    pub threads: usize,
}

pub const DEFAULT_ELEMS: usize = 1024 * 1024;
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

impl BenchConfig {
    pub fn from_env() -> Self {
        Self {
            elems: env_usize("MEMBENCH_ELEMS", DEFAULT_ELEMS),
            block_size: env_usize("MEMBENCH_BLOCK_SIZE", DEFAULT_BLOCK_SIZE),
            threads: thread_count(),
        }
    }
}

/// Worker threads the device pool should use.
pub fn thread_count() -> usize {
    env_usize("MEMBENCH_THREADS", num_cpus::get()).max(1)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default)
}
