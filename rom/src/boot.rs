use core::{arch::global_asm, panic::PanicInfo};

use crate::main;

#[panic_handler]
fn panic(_panic: &PanicInfo<'_>) -> ! {
    loop {}
}

// The BIOS jumps to 0x0800_0000 in ARM state. The first word branches over the
// 192-byte cartridge header (logo, title and checksum are patched in by gbafix),
// then stacks are set up for IRQ and system mode before handing over to Rust.
global_asm! {
    ".section .text.header, \"ax\"",
    ".global __start",
    ".arm",
    "__start:",
    "    b 1f",
    "    .space 188",
    "1:",
    "    mov r0, #0x12",
    "    msr CPSR_c, r0",
    "    ldr sp, =0x03007FA0",
    "    mov r0, #0x1F",
    "    msr CPSR_c, r0",
    "    ldr sp, =0x03007F00",
    "    ldr r0, =__boot",
    "    bx r0",
    "    .ltorg",
    ".thumb",
}

unsafe extern "C" {
    unsafe static __data_load: u32;
    unsafe static mut __data_start: u32;
    unsafe static mut __data_end: u32;

    unsafe static mut __bss_start: u32;
    unsafe static mut __bss_end: u32;
}

#[inline(always)]
unsafe fn init_data_and_bss() {
    unsafe {
        // Copy .data from ROM to IWRAM
        let mut src = &raw const __data_load;
        let mut dst = &raw mut __data_start;
        let end = &raw mut __data_end;
        while dst < end {
            dst.write_volatile(src.read_volatile());
            src = src.add(1);
            dst = dst.add(1);
        }

        // Zero .bss
        let mut bss = &raw mut __bss_start;
        let bss_end = &raw mut __bss_end;
        while bss < bss_end {
            bss.write_volatile(0);
            bss = bss.add(1);
        }
    }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn __boot() -> ! {
    unsafe {
        init_data_and_bss();
    }
    main()
}
