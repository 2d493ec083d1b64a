use core::{fmt::Write, panic::PanicInfo, ptr};

use crate::{hw::JtagUart, logger};

unsafe extern "Rust" {
    unsafe fn main() -> !;
}

unsafe extern "C" {
    unsafe static mut __bss_start: u8;
    unsafe static mut __bss_end: u8;
}

// Exception vectors at 0x0. Only reset is live; everything else parks the core.
core::arch::global_asm!(
    r#"
    .section .vectors, "ax"
    .global _vectors
_vectors:
    ldr pc, =_start
    b .
    b .
    b .
    b .
    nop
    b .
    b .
    .ltorg

    .section .text._start, "ax"
    .global _start
_start:
    ldr sp, =__stack_top
    bl __boot
    b .
    .ltorg
"#
);

#[panic_handler]
fn panic(info: &PanicInfo<'_>) -> ! {
    let uart = unsafe { JtagUart::new() };
    let _ = writeln!(uart, "panic: {}", info);
    loop {
        core::hint::spin_loop();
    }
}

#[inline(always)]
unsafe fn zero_bss() {
    unsafe {
        let mut bss = &raw mut __bss_start;
        let bss_end = &raw mut __bss_end;
        while bss < bss_end {
            ptr::write_volatile(bss, 0);
            bss = bss.add(1);
        }
    }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn __boot() -> ! {
    unsafe {
        zero_bss();
        logger::init();
        main()
    }
}
