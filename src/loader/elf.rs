//! xray-tool ELF loader.

use super::Loader;
use crate::config::{Address, Map, SLED_ENTRY_SIZE, SLED_SECTION, WORD_SIZE};
use crate::error::{Error, Result};
use crate::map::{InstrumentationMap, SledEntry, SledKind};
use object::endian::Endian;
use object::{Endianness, Object, ObjectSection, ObjectSymbol, RelocationKind, RelocationTarget};

/// Reads the sled table from the instrumentation section of a 64-bit ELF file.
pub struct ElfLoader;

impl Loader for ElfLoader {
    fn name(&self) -> &'static str {
        "ELF"
    }

    fn sniff(&self, data: &[u8]) -> bool {
        data.starts_with(&object::elf::ELFMAG)
    }

    fn load(&self, data: &[u8]) -> Result<InstrumentationMap> {
        let file = object::File::parse(data)?;
        if !file.is_64() {
            return Err(Error::ElfClass);
        }
        let section = file
            .section_by_name(SLED_SECTION)
            .ok_or(Error::MissingSection(SLED_SECTION))?;
        let contents = section.data()?;
        if contents.len() % SLED_ENTRY_SIZE != 0 {
            return Err(Error::SectionSize(contents.len() as u64));
        }

        let relocs = relocations(&file, &section)?;
        let sleds = parse_sled_table(contents, section.address(), file.endianness(), &relocs)?;
        Ok(InstrumentationMap::from_sleds(sleds))
    }
}

/// Collects values of absolute and PC-relative relocations applied to the section,
/// indexed by offset inside the section.
fn relocations<'data>(
    file: &object::File<'data>,
    section: &object::Section<'data, '_>,
) -> Result<Map<u64, Address>> {
    let base = section.address();
    let mut relocs = Map::default();
    for (offset, reloc) in section.relocations() {
        let kind = reloc.kind();
        if kind != RelocationKind::Absolute && kind != RelocationKind::Relative {
            continue;
        }
        let target = match reloc.target() {
            RelocationTarget::Symbol(index) => file.symbol_by_index(index)?.address(),
            RelocationTarget::Section(index) => file.section_by_index(index)?.address(),
            _ => continue,
        };
        let mut value = (target as i64).wrapping_add(reloc.addend()) as Address;
        if kind == RelocationKind::Relative {
            value = value.wrapping_sub(base.wrapping_add(offset));
        }
        tracing::debug!("Relocation at +0x{:x} -> 0x{:x}", offset, value);
        relocs.insert(offset, value);
    }
    Ok(relocs)
}

/// Parses the raw sled table located at `base` in the address space of the binary.
pub fn parse_sled_table(
    contents: &[u8],
    base: Address,
    endian: Endianness,
    relocs: &Map<u64, Address>,
) -> Result<Vec<SledEntry>> {
    let relocate = |offset: u64, value: Address| match value {
        0 => relocs.get(&offset).copied().unwrap_or(0),
        _ => value,
    };

    let mut sleds = Vec::with_capacity(contents.len() / SLED_ENTRY_SIZE);
    for (index, entry) in contents.chunks_exact(SLED_ENTRY_SIZE).enumerate() {
        let offset = (index * SLED_ENTRY_SIZE) as u64;
        let mut address = relocate(offset, endian.read_u64_bytes(word(entry, 0)));
        let mut function = relocate(
            offset + WORD_SIZE as u64,
            endian.read_u64_bytes(word(entry, WORD_SIZE)),
        );
        let kind = SledKind::try_from(entry[2 * WORD_SIZE])
            .map_err(|kind| Error::SledKind(kind, index))?;
        let always_instrument = entry[2 * WORD_SIZE + 1] != 0;
        let version = entry[2 * WORD_SIZE + 2];

        // Since version 2 both addresses are relative to the entry's own location
        if version >= 2 {
            let location = base.wrapping_add(offset);
            address = address.wrapping_add(location);
            function = function.wrapping_add(location.wrapping_add(WORD_SIZE as u64));
        }

        sleds.push(SledEntry {
            address,
            function,
            kind,
            always_instrument,
            version,
        });
    }
    Ok(sleds)
}

fn word(entry: &[u8], at: usize) -> [u8; WORD_SIZE] {
    let mut bytes = [0_u8; WORD_SIZE];
    bytes.copy_from_slice(&entry[at..at + WORD_SIZE]);
    bytes
}
