use kr_core::config::NATIVE_SIDE;
use kr_core::{ColorBuffer, ColorTable};

/// Image embarquée, 20×20, row-major. La ligne 0 est le bord nord du monde.
///
/// Codes : 0 white, 2 blue, 3 green, 5 cyan, 6 orange, 7 black, 8 gray,
/// 9 purple, 1 red. +16 = marqueur déposé en plus de la peinture.
#[rustfmt::skip]
const FRAME: [[u8; NATIVE_SIDE]; NATIVE_SIDE] = [
//   0   1   2   3   4   5   6   7   8   9  10  11  12  13  14  15  16  17  18  19
    [2,  2,  2,  2,  2,  2, 18,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 00
    [2,  2, 18,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2, 18,  2,  2,  2,  2], // 01
    [2,  2,  2,  2, 18,  2,  2,  2,  2,  2, 18,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 02
    [2,  2,  2,  2,  2,  2,  2, 18,  2,  2,  2,  2,  2,  2,  2, 18,  2,  2,  2,  2], // 03
    [2,  2, 18,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 04
    [2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 05
    [2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 06
    [2,  2,  0,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 07
    [2,  0,  8,  0,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 08
    [0,  8,  8,  8,  0,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2], // 09
    [0,  8,  8,  8,  8,  0,  2,  2,  2,  2,  2,  2,  2,  8,  2,  2,  2,  2,  2,  2], // 10
    [8,  8,  8,  8,  8,  0,  2,  2,  2,  2,  2,  2,  8,  8,  2,  2,  2,  2,  2,  2], // 11
    [8,  8,  7,  8,  8,  8,  8,  5,  2,  2,  8,  8,  8,  8,  8,  2,  2,  2,  2,  2], // 12
    [8,  7,  7,  8,  8,  8,  8,  8,  5,  8,  8,  8,  8,  8,  8,  8,  2,  3,  3,  3], // 13
    [8,  8,  8,  8,  3,  3,  3,  3,  5,  3,  3,  3,  3,  3,  3,  3,  3,  9,  3,  3], // 14
    [3,  3,  8,  3,  3,  3,  3,  3,  5,  5,  3,  3,  3,  3,  3,  3,  9,  9,  9,  3], // 15
    [3,  3,  3,  3,  3,  3,  3,  3,  3,  5,  5,  3,  3,  3,  3,  3,  9,  9,  9,  3], // 16
    [3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  5,  3,  3,  3,  3,  3,  3,  6,  3,  3], // 17
    [3, 19,  3,  3,  3,  3,  3,  3,  3,  3,  5,  5,  3,  3,  3,  1,  3,  6,  1,  3], // 18
    [3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  5,  5,  3,  3,  3,  3,  6,  3,  3], // 19
];

/// Charge l'image embarquée et la table de couleurs standard.
///
/// Aucune I/O : les données sont compilées dans le binaire.
///
/// # Example
/// ```
/// let (buffer, table) = kr_source::load();
/// assert_eq!(buffer.side(), 20);
/// assert_eq!(table.first_unmapped(buffer.data()), None);
/// ```
#[must_use]
pub fn load() -> (ColorBuffer, ColorTable) {
    let buffer = ColorBuffer::from_square(&FRAME);
    log::debug!(
        "Image embarquée chargée : {0}×{0}, {1} marqueurs",
        buffer.side(),
        buffer.marker_count()
    );
    (buffer, ColorTable::standard())
}
