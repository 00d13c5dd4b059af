//! # Static Assets
//!
//! Sprite pixel grids and the background palette. Sprites are written as rows
//! of palette digits so they can be read (and edited) in place:
//!
//! | Char      | Value  | Meaning                              |
//! |-----------|--------|--------------------------------------|
//! | `.`       | 0      | transparent, never drawn             |
//! | `1`-`9`   | 1-9    | palette entry                        |
//! | `a`-`f`   | 10-15  | palette entry                        |
//!
//! Rows are decoded at compile time by [`art`]; a row of the wrong width or an
//! unknown character is a build error, not a runtime one.
//!
//! The compositor writes `value + 1` into the frame, and the palette is uploaded
//! at slot `i + 1` for entry `i`, so sprite value `v` shows [`PALETTE`]`[v]`.

use crate::video::compositor::Sprite;

/// Pack 5-bit channels into a BGR555 color.
pub const fn rgb15(r: u16, g: u16, b: u16) -> u16 {
    (r & 31) | ((g & 31) << 5) | ((b & 31) << 10)
}

pub const PALETTE_SIZE: usize = 16;

pub static PALETTE: [u16; PALETTE_SIZE] = [
    rgb15(0, 0, 0),    // 0: never referenced by a sprite
    rgb15(8, 18, 6),   // 1: grass
    rgb15(12, 23, 8),  // 2: grass highlight
    rgb15(19, 12, 6),  // 3: dry soil
    rgb15(11, 6, 3),   // 4: wet soil
    rgb15(31, 24, 18), // 5: skin
    rgb15(14, 8, 3),   // 6: hair
    rgb15(6, 12, 26),  // 7: shirt
    rgb15(4, 5, 14),   // 8: trousers
    rgb15(3, 3, 4),    // 9: outline
    rgb15(30, 30, 28), // a: white
    rgb15(18, 20, 22), // b: watering can
    rgb15(10, 22, 31), // c: water
    rgb15(6, 24, 8),   // d: leaf
    rgb15(22, 8, 20),  // e: turnip skin
    rgb15(9, 5, 3),    // f: boots
];

/// Decode sprite rows into palette values.
pub const fn art<const N: usize>(width: usize, rows: &[&str]) -> [u8; N] {
    assert!(rows.len() * width == N, "sprite row count does not match its size");
    let mut out = [0u8; N];
    let mut y = 0;
    while y < rows.len() {
        let row = rows[y].as_bytes();
        assert!(row.len() == width, "sprite row has the wrong width");
        let mut x = 0;
        while x < width {
            out[y * width + x] = match row[x] {
                b'.' => 0,
                c @ b'1'..=b'9' => c - b'0',
                c @ b'a'..=b'f' => c - b'a' + 10,
                _ => panic!("unknown sprite pixel"),
            };
            x += 1;
        }
        y += 1;
    }
    out
}

macro_rules! sprite {
    ($name:ident, $w:expr, $h:expr, [$($row:literal),* $(,)?]) => {
        pub static $name: Sprite = Sprite {
            width: $w,
            height: $h,
            pixels: &art::<{ $w * $h }>($w, &[$($row),*]),
        };
    };
}

sprite!(GROUND, 16, 16, [
    "1111111111111111",
    "1111211211112111",
    "1212111111111211",
    "1111112211111111",
    "1112111111111111",
    "1111111111111111",
    "1211111111111112",
    "1121111111111111",
    "1111111111111111",
    "1111121111111211",
    "1111211111111111",
    "1212111111111111",
    "1211111111111111",
    "1221111111211111",
    "1111111111111121",
    "1111111111111111",
]);

sprite!(SEED, 16, 16, [
    "................",
    "................",
    ".33333333333333.",
    ".33333333333333.",
    ".33333333333333.",
    ".34444444444443.",
    ".33333333333333.",
    ".3333a6333a6333.",
    ".33333333333333.",
    ".34444444444443.",
    ".33333333333333.",
    ".333333a6333333.",
    ".33333333333333.",
    ".34444444444443.",
    ".33333333333333.",
    "................",
]);

sprite!(SEED_WET, 16, 16, [
    "................",
    "................",
    ".44444444444444.",
    ".44444444444444.",
    ".44444444444444.",
    ".49999999999994.",
    ".44444444444444.",
    ".4444a6444a6444.",
    ".44444444444444.",
    ".49999999999994.",
    ".44444444444444.",
    ".444444a6444444.",
    ".44444444444444.",
    ".49999999999994.",
    ".44444444444444.",
    "................",
]);

sprite!(SPROUT, 16, 16, [
    "................",
    "................",
    ".33333333333333.",
    ".333333333d3333.",
    ".3333d333ddd333.",
    ".344ddd44ddd443.",
    ".333ddddd333333.",
    ".333333dd333333.",
    ".333333dd333333.",
    ".344444dd444443.",
    ".333333dd333333.",
    ".333333dd333333.",
    ".33333333333333.",
    ".34444444444443.",
    ".33333333333333.",
    "................",
]);

sprite!(SPROUT_WET, 16, 16, [
    "................",
    "................",
    ".44444444444444.",
    ".444444444d4444.",
    ".4444d444ddd444.",
    ".499ddd99ddd994.",
    ".444ddddd444444.",
    ".444444dd444444.",
    ".444444dd444444.",
    ".499999dd999994.",
    ".444444dd444444.",
    ".444444dd444444.",
    ".44444444444444.",
    ".49999999999994.",
    ".44444444444444.",
    "................",
]);

sprite!(TURNIP, 16, 16, [
    "................",
    ".........ddd....",
    ".333ddd33ddd333.",
    ".333dddddddd333.",
    ".333dddddddd333.",
    ".344dddddddd443.",
    ".333dddddddd333.",
    ".333dddddddd333.",
    ".3333aaaaaa3333.",
    ".3444aaaaaa4443.",
    ".3333aaaaaa3333.",
    ".3333eeeeee3333.",
    ".3333eeeeee3333.",
    ".344444ee444443.",
    ".33333333333333.",
    "................",
]);

sprite!(TURNIP_HELD, 13, 12, [
    ".9ddd999ddd9.",
    ".9ddddddddd9.",
    ".9ddddddddd9.",
    ".9ddddddddd9.",
    ".9ddddddddd9.",
    "..9aaaaaaa9..",
    "..9aaaaaaa9..",
    "..9aaaaaaa9..",
    "..9eeeeeee9..",
    "..9eeeeeee9..",
    "..9eeeeeee9..",
    "...999e999...",
]);

sprite!(STAND_DOWN, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...9559559559...",
    "...9555555559...",
    "...9555ee5559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WALK_DOWN_1, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...9559559559...",
    "...9555555559...",
    "...9555ee5559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "...9fff99889....",
    "...9fff99fff9...",
    "....999.9fff9...",
]);

sprite!(WALK_DOWN_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...9559559559...",
    "...9555555559...",
    "...9555ee5559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899fff9...",
    "...9fff99fff9...",
    "...9fff9.999....",
]);

sprite!(PICK_DOWN_1, 16, 22, [
    "................",
    "................",
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...9559559559...",
    "...9555555559...",
    "...9555ee5559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "..957777777759..",
    "..957777777759..",
    "..958888888859..",
    "..958888888859..",
    "..958888888859..",
    "...9988998899...",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(PICK_DOWN_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "..956666666659..",
    "..956666666659..",
    "..955555555559..",
    "..955595595559..",
    "..955555555559..",
    "..95555ee55559..",
    "..9577aaaa7759..",
    "..957777777759..",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WATER_DOWN_1, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...9559559559...",
    "...9555555559...",
    "...9555ee5559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...975bb55579...",
    "...97bbbbb579...",
    "...98bbbbbbb9...",
    "...98bbbbb889...",
    "...98bbbbb889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WATER_DOWN_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...9559559559...",
    "...9555555559...",
    "...9555ee5559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9755555579...",
    "...975bb55579...",
    "...98bbbbb889...",
    "...98bbbbbbb9...",
    "...98bbbbb88c9..",
    "....9bbbbb899...",
    "....98899889c9..",
    "...9fff99ffc9...",
    "...9fff99fff9...",
]);

sprite!(STAND_UP, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WALK_UP_1, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "...9fff99889....",
    "...9fff99fff9...",
    "....999.9fff9...",
]);

sprite!(WALK_UP_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899fff9...",
    "...9fff99fff9...",
    "...9fff9.999....",
]);

sprite!(PICK_UP_1, 16, 22, [
    "................",
    "................",
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "..957777777759..",
    "..957777777759..",
    "..958888888859..",
    "..958888888859..",
    "..958888888859..",
    "...9988998899...",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(PICK_UP_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "..956666666659..",
    "..956666666659..",
    "..956666666659..",
    "..956666666659..",
    "..956666666659..",
    "..955555555559..",
    "..9577aaaa7759..",
    "..957777777759..",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WATER_UP_1, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9755555579...",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WATER_UP_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555555559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9755555579...",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(STAND_LEFT, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555566669...",
    "...9555566669...",
    "..95595566669...",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WALK_LEFT_1, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555566669...",
    "...9555566669...",
    "..95595566669...",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899fff9...",
    "...9fff99fff9...",
    "...9fff9.999....",
]);

sprite!(WALK_LEFT_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555566669...",
    "...9555566669...",
    "..95595566669...",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "...9fff99889....",
    "...9fff99fff9...",
    "....999.9fff9...",
]);

sprite!(PICK_LEFT_1, 16, 22, [
    "................",
    "................",
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9555566669...",
    "...9555566669...",
    "..95595566669...",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "..957777777759..",
    "..957777777759..",
    "..958888888859..",
    "..958888888859..",
    "..958888888859..",
    "...9988998899...",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(PICK_LEFT_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "..956666666659..",
    "..955555666659..",
    "..955555666659..",
    "..955955666659..",
    "..955555555559..",
    "..955555555559..",
    "..9577aaaa7759..",
    "..957777777759..",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WATER_LEFT_1, 24, 22, [
    "............99999999....",
    "...........9666666669...",
    "...........9666666669...",
    "...........9666666669...",
    "...........9555566669...",
    "...........9555566669...",
    "..........95595566669...",
    "...........9555555559...",
    "...........9555555559...",
    ".......99..977aaaa779...",
    ".....99bb9.9777777779...",
    "...99bbbbb99777777779...",
    "..9bbbbbbb55777777779...",
    "...99bbbbb99755555579...",
    "....9bbbbb99755555579...",
    ".....99999.9888888889...",
    "...........9888888889...",
    "...........9888888889...",
    "............98899889....",
    "............98899889....",
    "...........9fff99fff9...",
    "...........9fff99fff9...",
]);

sprite!(WATER_LEFT_2, 24, 22, [
    "............99999999....",
    "...........9666666669...",
    "...........9666666669...",
    "...........9666666669...",
    "...........9555566669...",
    "...........9555566669...",
    "..........95595566669...",
    "...........9555555559...",
    "...........9555555559...",
    "...........977aaaa779...",
    ".......99..9777777779...",
    ".....99bb999777777779...",
    "...99bbbbb55777777779...",
    "..9bbbbbbb99755555579...",
    ".9c99bbbbb99755555579...",
    "..9.9bbbbb99888888889...",
    ".9c9.99999.9888888889...",
    "..9c9......9888888889...",
    "...9........98899889....",
    "............98899889....",
    "...........9fff99fff9...",
    "...........9fff99fff9...",
]);

sprite!(STAND_RIGHT, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666655559...",
    "...9666655559...",
    "...96666559559..",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WALK_RIGHT_1, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666655559...",
    "...9666655559...",
    "...96666559559..",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "...9fff99889....",
    "...9fff99fff9...",
    "....999.9fff9...",
]);

sprite!(WALK_RIGHT_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666655559...",
    "...9666655559...",
    "...96666559559..",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "..957777777759..",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899fff9...",
    "...9fff99fff9...",
    "...9fff9.999....",
]);

sprite!(PICK_RIGHT_1, 16, 22, [
    "................",
    "................",
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "...9666666669...",
    "...9666655559...",
    "...9666655559...",
    "...96666559559..",
    "...9555555559...",
    "...9555555559...",
    "...977aaaa779...",
    "...9777777779...",
    "...9777777779...",
    "..957777777759..",
    "..957777777759..",
    "..958888888859..",
    "..958888888859..",
    "..958888888859..",
    "...9988998899...",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(PICK_RIGHT_2, 16, 22, [
    "....99999999....",
    "...9666666669...",
    "...9666666669...",
    "..956666666659..",
    "..956666555559..",
    "..956666555559..",
    "..956666559559..",
    "..955555555559..",
    "..955555555559..",
    "..9577aaaa7759..",
    "..957777777759..",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9777777779...",
    "...9888888889...",
    "...9888888889...",
    "...9888888889...",
    "....98899889....",
    "....98899889....",
    "...9fff99fff9...",
    "...9fff99fff9...",
]);

sprite!(WATER_RIGHT_1, 24, 22, [
    "....99999999............",
    "...9666666669...........",
    "...9666666669...........",
    "...9666666669...........",
    "...9666655559...........",
    "...9666655559...........",
    "...96666559559..........",
    "...9555555559...........",
    "...9555555559...........",
    "...977aaaa779..99.......",
    "...9777777779.9bb99.....",
    "...97777777799bbbbb99...",
    "...97777777755bbbbbbb9..",
    "...97555555799bbbbb99...",
    "...97555555799bbbbb9....",
    "...9888888889.99999.....",
    "...9888888889...........",
    "...9888888889...........",
    "....98899889............",
    "....98899889............",
    "...9fff99fff9...........",
    "...9fff99fff9...........",
]);

sprite!(WATER_RIGHT_2, 24, 22, [
    "....99999999............",
    "...9666666669...........",
    "...9666666669...........",
    "...9666666669...........",
    "...9666655559...........",
    "...9666655559...........",
    "...96666559559..........",
    "...9555555559...........",
    "...9555555559...........",
    "...977aaaa779...........",
    "...9777777779..99.......",
    "...977777777999bb99.....",
    "...97777777755bbbbb99...",
    "...97555555799bbbbbbb9..",
    "...97555555799bbbbb99c9.",
    "...98888888899bbbbb9.9..",
    "...9888888889.99999.9c9.",
    "...9888888889......9c9..",
    "....98899889........9...",
    "....98899889............",
    "...9fff99fff9...........",
    "...9fff99fff9...........",
]);
