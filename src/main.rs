#![no_std]
#![no_main]

#![allow(dead_code)]    // temporary solution to avoid warnings for unused functions

mod drivers;
mod memory;
mod panic;
mod io;
mod klib;

use core::panic::PanicInfo;

#[panic_handler]
fn rust_panic(info: &PanicInfo) -> ! {
    // Disable interrupts
    unsafe { core::arch::asm!("cli"); }

    io::display::set_color(0x4F); // White on Red

    printkln!();
    printkln!("!!! RUST PANIC !!!");
    if let Some(location) = info.location() {
        printkln!("  at {}:{}", location.file(), location.line());
    }

    klib::stack::print_stack();

    io::display::set_color(0x4F);
    printkln!();
    printkln!("System halted.");

    loop {
        unsafe { core::arch::asm!("cli; hlt"); }
    }
}

/// Boot order is `pmm::init -> paging::init -> heap::init` (folded into
/// `memory::init`), followed by a short self-test of the heap mirroring
/// the donor kernel's own boot-time smoke test before idling forever —
/// there is no scheduler yet, so there is nothing else for this core to
/// hand control to.
#[no_mangle]
pub extern "C" fn rust_main(multiboot_info_addr: u32) -> ! {
    memory::init(multiboot_info_addr);

    printkln!("=== Heap Self-Test ===");
    let a = memory::kmalloc(256);
    printkln!("kmalloc(256) -> {:#x}", a);
    let b = memory::kmalloc(1024);
    printkln!("kmalloc(1024) -> {:#x}", b);
    memory::kfree(a);
    printkln!("kfree({:#x})", a);
    let _ = b;
    memory::print_stats();

    loop {
        unsafe { core::arch::asm!("cli; hlt"); }
    }
}
