pub mod gray;
pub mod io;
pub mod rgb;

pub use self::gray::GrayImageU8;
pub use self::rgb::RgbImageU8;
