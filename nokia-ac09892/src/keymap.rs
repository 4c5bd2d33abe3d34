use keymatrix::{
    keyboard::{Key, Keymap, LayerSet},
    keymap,
};

use crate::matrix::{COLS, ROWS};

/// Base layer, in keymap order. The comment above each row names the
/// switch under each column.
pub const BASE: Keymap<ROWS, COLS> = Keymap::new(KEYS);

pub const LAYERS: LayerSet<1, ROWS, COLS> = LayerSet::new([BASE]);

const KEYS: [[Key; COLS]; ROWS] = keymap!(
    r"
  //  S1      S2      S3      S4      S5      S6      S7      S8      S9      S10     S11     S12     S13     S14     S15     S16
    | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
  //  S23     S24     S25     S26     S27     S28     S29     S30     S31     S32     S33     S34     S35     S36     S37     S38
    | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
  //  S46     S47     S48     S49     S50     S51     S52     S53     S54     S55     S56     S57     S39     S40     S41     S42
    | KC_NO | KC_NO | KC_NO | KC_Q  | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
  //  S65     S66     S67     S68     S69     S70     S71     S72     S73     S74     S75     S76     S58     S59     S60     S61
    | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
  //  S84     S85     S86     S87     S88     S89     S90     S91     S92     S93     S94     S95     S77     S78     S79     S80
    | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
  //  S103    S104    S105    S106    S107    S108    S109    S110    S111    S112    S113    S114    S96     S97     S98     S99
    | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
  //  S21     S22     S45     S64     S121    S83     S122    S102    S123    S124    S125    S126    S115    S116    S117    S118
    | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
  //  S44     S20     S63     S82     S101    S120    S81     S100    S119    S130    S129    S128    S62     S43     S19     S17
    | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO | KC_NO |
"
);
