#![no_std]
#![no_main]

use turnip_engine::{
    FieldConfig,
    field::{self, Field},
};

use crate::{
    display::Mode4Display,
    pad::{HardwarePad, HardwareScan},
};

mod boot;
mod display;
mod pad;

fn main() -> ! {
    let mut display = unsafe { Mode4Display::new() };
    let mut pad = unsafe { HardwarePad::new() };
    let mut scan = unsafe { HardwareScan::new() };

    let mut field = Field::new(FieldConfig::default());
    field::run(&mut field, &mut display, &mut pad, &mut scan)
}
