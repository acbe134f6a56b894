mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{BLACK, fill, hsv2rgb, rgb_from_hsv};

pub type Rgb = RGB8;
pub type Hsv = HSV;
