use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full intensity
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// One of the three independent output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ColorChannel {
    /// Channels in output order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Channel at `index`, wrapping after blue
    pub const fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Red,
            1 => Self::Green,
            _ => Self::Blue,
        }
    }

    /// Next channel in R -> G -> B order, wrapping to red
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Read this channel's intensity from a color
    pub const fn get(self, color: Rgb) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
        }
    }

    /// Write this channel's intensity into a color
    pub fn set(self, color: &mut Rgb, value: u8) {
        match self {
            Self::Red => color.r = value,
            Self::Green => color.g = value,
            Self::Blue => color.b = value,
        }
    }

    /// A color with only this channel lit at `value`
    pub const fn solo(self, value: u8) -> Rgb {
        match self {
            Self::Red => Rgb { r: value, g: 0, b: 0 },
            Self::Green => Rgb { r: 0, g: value, b: 0 },
            Self::Blue => Rgb { r: 0, g: 0, b: value },
        }
    }
}
