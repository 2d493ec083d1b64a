use std::{env, fs::File, io::Write, path::Path};

fn main() {
    // Only run for the correct target
    let target = env::var("TARGET").unwrap();
    if target != "armv7a-none-eabi" {
        println!(
            "cargo:warning=Not targeting armv7a-none-eabi; skipping linker script generation."
        );
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let link_path = Path::new(&out_dir).join("linker.ld");
    let mut f = File::create(&link_path).expect("failed to create linker.ld");

    // The board's DDR starts at 0 and the loader drops the ELF straight into it,
    // so .data needs no copy; only .bss is cleared at boot.
    writeln!(f, "ENTRY(_start)").unwrap();
    writeln!(f, "MEMORY {{").unwrap();
    writeln!(f, "  DDR (rwx) : ORIGIN = 0x00000000, LENGTH = 0x3FF00000").unwrap();
    writeln!(f, "}}").unwrap();

    writeln!(f, "SECTIONS {{").unwrap();
    writeln!(f, "  .vectors 0x0 : {{ KEEP(*(.vectors)) }} > DDR").unwrap();
    writeln!(f, "  .text : {{ *(.text._start) *(.text*) }} > DDR").unwrap();
    writeln!(f, "  .rodata : {{ *(.rodata*) }} > DDR").unwrap();
    writeln!(f, "  .data : {{ *(.data*) }} > DDR").unwrap();
    writeln!(
        f,
        "  .bss (NOLOAD) : {{ . = ALIGN(4); __bss_start = .; *(.bss*) *(COMMON) . = ALIGN(4); __bss_end = .; }} > DDR"
    )
    .unwrap();
    writeln!(f, "  /DISCARD/ : {{ *(.ARM.exidx*) }}").unwrap();
    writeln!(f, "}}").unwrap();

    // Stack grows down from the end of the DDR region.
    writeln!(f, "__stack_top = 0x3FF00000;").unwrap();

    // Hook up the linker script
    println!("cargo:rustc-link-arg=-T{}", link_path.display());
    println!("cargo:rerun-if-changed=build.rs");
}
