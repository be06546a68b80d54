//! Memory management core: physical frames, paging, and the kernel heap.
//!
//! Boot order is `pmm::Pmm::init` → `paging::Paging::init` → `heap::Heap::init`:
//! the physical allocator is bootstrapped from the firmware memory map first,
//! paging then pulls frames from it to build the kernel address space, and
//! the heap pulls from both to back its free list. Heap never talks to Pmm
//! directly — it always goes through Paging.

pub mod pmm;
pub mod paging;
pub mod heap;

/// Forwards to `printkln!` on bare metal; a no-op everywhere else. The log
/// sink here is diagnostic-only (no machine-readable output), so dropping
/// it on host builds changes nothing observable about the algorithms.
#[macro_export]
macro_rules! klog {
    ($($arg:tt)*) => {
        #[cfg(target_os = "none")]
        $crate::printkln!($($arg)*);
    };
}

// ──────────────────────────────────────────────
//  Constants
// ──────────────────────────────────────────────

pub const PAGE_SIZE: u32 = 4096;

/// Identity-mapped at boot; holds the kernel image and the low 1 MiB.
pub const IDENTITY_MAP_END: u32 = 0x0040_0000;

pub const HEAP_START: u32 = 0x0040_0000;
pub const HEAP_MAX: u32 = 0x0100_0000;
pub const HEAP_INITIAL_PAGES: u32 = 16;

/// Page-directory slot that maps the directory to itself.
pub const RECURSIVE_PD_INDEX: usize = 1023;

// ──────────────────────────────────────────────
//  Linker-provided symbols
// ──────────────────────────────────────────────

#[cfg(target_os = "none")]
extern "C" {
    static __kernel_start: u8;
    static __kernel_end: u8;
}

/// Physical address where the kernel image begins.
#[cfg(target_os = "none")]
pub fn kernel_start() -> u32 {
    unsafe { &__kernel_start as *const u8 as u32 }
}

#[cfg(not(target_os = "none"))]
pub fn kernel_start() -> u32 {
    0
}

/// Physical address one byte past the end of the kernel image.
#[cfg(target_os = "none")]
pub fn kernel_end() -> u32 {
    unsafe { &__kernel_end as *const u8 as u32 }
}

#[cfg(not(target_os = "none"))]
pub fn kernel_end() -> u32 {
    0
}

// ──────────────────────────────────────────────
//  Multiboot 1 memory map → MemoryMapEntry
// ──────────────────────────────────────────────

#[cfg(target_os = "none")]
const MAX_MMAP_ENTRIES: usize = 32;

#[cfg(target_os = "none")]
#[repr(C, packed)]
struct MultibootInfo {
    flags: u32,
    mem_lower: u32,
    mem_upper: u32,
    boot_device: u32,
    cmdline: u32,
    mods_count: u32,
    mods_addr: u32,
    syms: [u32; 4],
    mmap_length: u32,
    mmap_addr: u32,
}

#[cfg(target_os = "none")]
#[repr(C, packed)]
struct MultibootMmapEntry {
    size: u32,
    base_addr_low: u32,
    base_addr_high: u32,
    length_low: u32,
    length_high: u32,
    entry_type: u32,
}

#[cfg(target_os = "none")]
fn region_type_of(raw: u32) -> pmm::RegionType {
    match raw {
        1 => pmm::RegionType::Available,
        3 => pmm::RegionType::AcpiReclaimable,
        4 => pmm::RegionType::AcpiNvs,
        5 => pmm::RegionType::Bad,
        _ => pmm::RegionType::Reserved,
    }
}

/// Walks the multiboot 1 memory map at `multiboot_info_addr`, filling `out`
/// with up to its length worth of entries. Returns the number written; 0
/// (an empty slice) tells `Pmm::init` to fall back to conservative defaults.
#[cfg(target_os = "none")]
fn build_memory_map(
    multiboot_info_addr: u32,
    out: &mut [pmm::MemoryMapEntry; MAX_MMAP_ENTRIES],
) -> usize {
    if multiboot_info_addr == 0 {
        return 0;
    }

    let info = multiboot_info_addr as *const MultibootInfo;
    let flags = unsafe { (*info).flags };
    if flags & (1 << 6) == 0 {
        return 0;
    }

    let mmap_addr = unsafe { (*info).mmap_addr };
    let mmap_length = unsafe { (*info).mmap_length };

    let mut offset: u32 = 0;
    let mut count = 0usize;
    while offset < mmap_length && count < MAX_MMAP_ENTRIES {
        let entry = (mmap_addr + offset) as *const MultibootMmapEntry;
        let size = unsafe { (*entry).size };
        let base_low = unsafe { (*entry).base_addr_low };
        let base_high = unsafe { (*entry).base_addr_high };
        let len_low = unsafe { (*entry).length_low };
        let len_high = unsafe { (*entry).length_high };
        let entry_type = unsafe { (*entry).entry_type };

        out[count] = pmm::MemoryMapEntry {
            base_addr: ((base_high as u64) << 32) | base_low as u64,
            length: ((len_high as u64) << 32) | len_low as u64,
            region_type: region_type_of(entry_type),
            acpi_attrs: 0,
        };
        count += 1;

        // Multiboot 1's `size` field excludes itself.
        offset += size + 4;
    }

    count
}

// ──────────────────────────────────────────────
//  Top-level aggregate
// ──────────────────────────────────────────────

/// Owns the three subsystems as a single value, per the design note that a
/// reimplementation should package them this way rather than scatter free
/// globals. There is exactly one instance on bare metal.
pub struct MemoryManager {
    pub pmm: pmm::Pmm,
    pub paging: paging::Paging,
    pub heap: heap::Heap,
}

impl MemoryManager {
    pub const fn empty() -> MemoryManager {
        MemoryManager {
            pmm: pmm::Pmm::empty(),
            paging: paging::Paging::empty(),
            heap: heap::Heap::empty(),
        }
    }
}

#[cfg(target_os = "none")]
static mut MEMORY_MANAGER: MemoryManager = MemoryManager::empty();

/// Initializes the physical allocator, paging, and the heap, in that order.
#[cfg(target_os = "none")]
pub fn init(multiboot_info_addr: u32) {
    klog!("=== Memory Subsystem Init ===");

    let mut entries = [pmm::MemoryMapEntry::EMPTY; MAX_MMAP_ENTRIES];
    let count = build_memory_map(multiboot_info_addr, &mut entries);
    let kend = kernel_end();

    let mut local_pmm = pmm::Pmm::empty();
    local_pmm.init(core::ptr::null_mut(), &entries[..count], kend);

    let mut local_paging = paging::Paging::empty();
    local_paging.init(core::ptr::null_mut(), &mut local_pmm);

    let mut local_heap = heap::Heap::empty();
    local_heap.init(core::ptr::null_mut(), &mut local_paging, &mut local_pmm);

    unsafe {
        MEMORY_MANAGER = MemoryManager {
            pmm: local_pmm,
            paging: local_paging,
            heap: local_heap,
        };
    }

    klog!("=== Memory Init Complete ===");
}

/// Allocates `size` bytes from the kernel heap. See [`heap::Heap::kmalloc`].
#[cfg(target_os = "none")]
pub fn kmalloc(size: u32) -> u32 {
    unsafe { MEMORY_MANAGER.heap.kmalloc(size, &mut MEMORY_MANAGER.paging, &mut MEMORY_MANAGER.pmm) }
}

/// Frees memory previously returned by [`kmalloc`].
#[cfg(target_os = "none")]
pub fn kfree(ptr: u32) {
    unsafe { MEMORY_MANAGER.heap.kfree(ptr) }
}

/// Prints PMM and heap statistics via the kernel log.
#[cfg(target_os = "none")]
pub fn print_stats() {
    unsafe {
        MEMORY_MANAGER.pmm.print_stats();
        MEMORY_MANAGER.heap.print_stats();
    }
}

// ──────────────────────────────────────────────
//  Alignment helpers
// ──────────────────────────────────────────────

pub fn align_up(addr: u32, align: u32) -> u32 {
    (addr + align - 1) & !(align - 1)
}

pub fn align_down(addr: u32, align: u32) -> u32 {
    addr & !(align - 1)
}
