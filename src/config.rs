//! xray-tool config module.

/// Exit code of the process on failure.
pub const FAILURE: i32 = 1;

/// Output path which denotes the standard output.
pub const STDOUT: &str = "-";

/// Default filter of the logger when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Name of the ELF section which contains the sled table.
pub const SLED_SECTION: &str = "xray_instr_map";

/// Size of one sled entry in a 64-bit binary.
pub const SLED_ENTRY_SIZE: usize = 32;

/// Size of a machine word in a 64-bit binary.
pub const WORD_SIZE: usize = 8;

/// Function identifier assigned to instrumented functions.
pub type FunctionId = u32;

/// Address in the address space of the binary.
pub type Address = u64;

#[cfg(not(test))]
/// Map used by the crate.
pub type Map<K, V> = std::collections::HashMap<K, V>;

// Use less performant BTree in tests for deterministic sequences
#[cfg(test)]
/// Map used by the crate.
pub type Map<K, V> = std::collections::BTreeMap<K, V>;
