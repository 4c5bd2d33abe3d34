use keymatrix::matrix::{MatrixWiring, Pin, ScanOrder};

pub const ROWS: usize = 8;
pub const COLS: usize = 16;

/// `ROW0..ROW7` and `COL0..COL15` of the PCB connector.
pub const WIRING: MatrixWiring<ROWS, COLS> = MatrixWiring::new(
    [
        Pin::a(0),
        Pin::a(1),
        Pin::a(2),
        Pin::a(3),
        Pin::a(4),
        Pin::a(5),
        Pin::a(6),
        Pin::a(7),
    ],
    [
        Pin::b(9),
        Pin::b(8),
        Pin::b(7),
        Pin::b(6),
        Pin::b(5),
        Pin::b(4),
        Pin::b(3),
        Pin::a(15),
        Pin::b(0),
        Pin::b(1),
        Pin::a(8),
        Pin::b(10),
        Pin::b(15),
        Pin::b(14),
        Pin::b(13),
        Pin::b(12),
    ],
);

/// Rows and columns in keymap order. Row 0 holds the function key row,
/// starting at S1.
pub const SCAN_ORDER: ScanOrder<ROWS, COLS> = ScanOrder::from_pins(
    &WIRING,
    [
        Pin::a(5),
        Pin::a(3),
        Pin::a(6),
        Pin::a(1),
        Pin::a(2),
        Pin::a(0),
        Pin::a(7),
        Pin::a(4),
    ],
    [
        Pin::b(13),
        Pin::b(14),
        Pin::b(12),
        Pin::b(15),
        Pin::b(10),
        Pin::a(8),
        Pin::b(1),
        Pin::b(0),
        Pin::a(15),
        Pin::b(3),
        Pin::b(4),
        Pin::b(5),
        Pin::b(6),
        Pin::b(7),
        Pin::b(8),
        Pin::b(9),
    ],
);
