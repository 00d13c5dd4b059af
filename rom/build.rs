use std::{env, fs::File, io::Write, path::Path};

fn main() {
    // Only run for the correct target
    let target = env::var("TARGET").unwrap();
    if target != "thumbv4t-none-eabi" {
        println!("cargo:warning=Not targeting thumbv4t-none-eabi; skipping linker script generation.");
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let link_path = Path::new(&out_dir).join("linker.ld");
    let mut f = File::create(&link_path).expect("failed to create linker.ld");

    writeln!(f, "ENTRY(__start)").unwrap();

    writeln!(f, "MEMORY {{").unwrap();
    writeln!(f, "  EWRAM (rwx) : ORIGIN = 0x02000000, LENGTH = 256K").unwrap();
    // the top 256 bytes of IWRAM belong to the BIOS
    writeln!(f, "  IWRAM (rwx) : ORIGIN = 0x03000000, LENGTH = 32K - 256").unwrap();
    writeln!(f, "  ROM (rx)    : ORIGIN = 0x08000000, LENGTH = 32M").unwrap();
    writeln!(f, "}}").unwrap();

    writeln!(f, "SECTIONS {{").unwrap();
    // the cartridge header must be the first thing in ROM
    writeln!(f, "  .text : {{ KEEP(*(.text.header)) *(.text .text.*) }} > ROM").unwrap();
    writeln!(f, "  .rodata : {{ *(.rodata .rodata.*) }} > ROM").unwrap();
    writeln!(
        f,
        "  .data : {{ . = ALIGN(4); __data_start = .; *(.data .data.*) . = ALIGN(4); __data_end = .; }} > IWRAM AT > ROM"
    )
    .unwrap();
    writeln!(
        f,
        "  .bss (NOLOAD) : {{ . = ALIGN(4); __bss_start = .; *(.bss .bss.*) . = ALIGN(4); __bss_end = .; }} > IWRAM"
    )
    .unwrap();
    writeln!(f, "  PROVIDE(__data_load = LOADADDR(.data));").unwrap();
    writeln!(f, "  /DISCARD/ : {{ *(.ARM.exidx*) *(.ARM.extab*) }}").unwrap();
    writeln!(f, "}}").unwrap();

    // Hook up the linker script
    println!("cargo:rustc-link-arg=-T{}", link_path.display());
    println!("cargo:rerun-if-changed=build.rs");
}
