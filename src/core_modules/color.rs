// THEORY:
// The `Color` module is the most fundamental unit of the engine. It is a
// "dumb" value type, meaning its only responsibility is to represent the three
// 8-bit channels of a single opaque RGB pixel accurately and cheaply.
//
// Key architectural principles:
// 1.  **Data Purity**: It holds raw `u8` channel values without interpretation.
//     There is no alpha channel; every color in the engine is fully opaque.
// 2.  **Intrinsic Knowledge**: The only computation it owns (`invert`) depends
//     on nothing but its own channels. Anything that relates one color to
//     another (averaging, blending) lives in the transform catalog.
// 3.  **Efficiency**: It is `Copy`, so dense `Vec<Color>` stores and per-pixel
//     loops move plain bytes around with no allocation or reference counting.

pub mod color {
    pub type Byte = u8;
    pub type Channel = Byte;

    /// A "dumb" value type representing a single opaque RGB pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Color {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Color {
        pub const BLACK: Color = Color::new(0, 0, 0);

        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Self { red, green, blue }
        }

        /// Replaces every channel `c` with `255 - c`. Its own inverse under
        /// integer channel arithmetic.
        pub fn invert(self) -> Self {
            Self {
                red: Channel::MAX - self.red,
                green: Channel::MAX - self.green,
                blue: Channel::MAX - self.blue,
            }
        }

        /// The channels in red, green, blue order, as the codec layer expects
        /// them when packing an interleaved byte buffer.
        pub fn channels(self) -> [Byte; 3] {
            [self.red, self.green, self.blue]
        }
    }

    impl Default for Color {
        fn default() -> Self {
            Self::BLACK
        }
    }

    impl From<[Byte; 3]> for Color {
        fn from(rgb: [Byte; 3]) -> Self {
            Self::new(rgb[0], rgb[1], rgb[2])
        }
    }
}
